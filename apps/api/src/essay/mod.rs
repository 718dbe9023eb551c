// Essay library: live statistics, tone classification and the quality rubric.
// Everything here is a pure function of the submitted text.

pub mod handlers;
pub mod quality;
pub mod text;
pub mod tone;
