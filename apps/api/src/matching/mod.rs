// Scholarship matching: the catalog, the eligibility gate, the match score
// heuristic and the views built from them.

pub mod catalog;
pub mod eligibility;
pub mod finder;
pub mod handlers;
pub mod match_score;
pub mod validation;
pub mod view;
