//! Core data types for reported issues and the remediation plan.
//!
//! This module contains the fundamental types used throughout fixplan:
//!
//! - [`RawIssue`] - One finding normalized from either report schema
//! - [`Mode`] - Which input schema a report uses (`api` or `cli`)
//! - [`Remediation`] - The upgrade recommendation for one package
//! - [`RemediationPlan`] - The complete plan, one entry per package
//!
//! # Example
//!
//! ```
//! use fixplan::model::{RawIssue, Remediation};
//!
//! let issue = RawIssue::new("V1", "lodash", "4.17.21");
//! assert!(issue.has_fix());
//!
//! let mut entry = Remediation::new(&issue.package_name, &issue.nearest_fixed_in, &issue.id);
//! entry.record_fix("V2");
//! assert_eq!(entry.fixes_vulns.len(), 2);
//! ```

mod issue;
mod remediation;

pub use issue::*;
pub use remediation::*;
