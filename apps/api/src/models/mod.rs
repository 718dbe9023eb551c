pub mod profile;
pub mod scholarship;
