pub mod config;
pub mod model;
pub mod output;
pub mod parser;
pub mod planner;
pub mod version;

pub use config::Config;
pub use model::{Mode, RawIssue, Remediation, RemediationPlan};
pub use parser::ReportParser;
pub use planner::build_plan;
pub use version::FixVersion;
