//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckResult, check_words};
pub use simple::{run_simple, run_simple_with};
pub use solutions::{SolutionsResult, find_solutions};
pub use survey::{SurveyEntry, SurveyStatistics, run_survey};
