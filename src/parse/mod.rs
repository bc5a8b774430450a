//! Reading generated stylesheets back, for staleness checks and inspection.

mod diff;
mod stylesheet;

pub use diff::{RuleDiff, diff_rules};
pub use stylesheet::{ParsedRule, parse_uss};
