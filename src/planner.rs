//! The aggregation rule: fold reported issues into a remediation plan.
//!
//! One pass over the issue list builds at most one [`Remediation`] per
//! package. Issues without a fix version contribute nothing; repeated
//! findings for a package accumulate ids and push the farthest fix version
//! upward. Entries come out sorted by package name so identical inputs
//! always render identical reports.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{RawIssue, Remediation, RemediationPlan};
use crate::version::FixVersion;

/// Builds the remediation plan for a batch of issues.
///
/// For each issue, in input order:
/// - an empty fix version is skipped outright: no entry is created for its
///   package and its id is not recorded;
/// - the first fixable finding for a package creates its entry, keeping the
///   fix version string as given;
/// - later findings for the same package record their id (deduplicated) and
///   replace the farthest version only when both sides parse and the
///   candidate is strictly higher, stored in canonical form.
///
/// # Example
///
/// ```
/// use fixplan::model::RawIssue;
/// use fixplan::planner::build_plan;
///
/// let plan = build_plan(&[
///     RawIssue::new("V1", "lodash", "4.17.11"),
///     RawIssue::new("V2", "lodash", "4.17.21"),
/// ]);
///
/// assert_eq!(plan.upgrades[0].farthest_fixed_in_version, "4.17.21");
/// assert_eq!(plan.upgrades[0].fixes_vulns, vec!["V1", "V2"]);
/// ```
pub fn build_plan(issues: &[RawIssue]) -> RemediationPlan {
    let mut entries: HashMap<String, Remediation> = HashMap::new();

    for issue in issues {
        if !issue.has_fix() {
            debug!("{}: {} has no fix version, skipping", issue.package_name, issue.id);
            continue;
        }

        match entries.get_mut(&issue.package_name) {
            Some(entry) => {
                entry.record_fix(&issue.id);
                advance_version(entry, &issue.nearest_fixed_in);
            }
            None => {
                entries.insert(
                    issue.package_name.clone(),
                    Remediation::new(&issue.package_name, &issue.nearest_fixed_in, &issue.id),
                );
            }
        }
    }

    let mut plan = RemediationPlan {
        upgrades: entries.into_values().collect(),
    };
    plan.sort_by_package();
    plan
}

/// Replaces the entry's farthest version when the candidate parses and is
/// strictly higher. Either side failing to parse leaves the entry as is; a
/// malformed version must never win a comparison.
fn advance_version(entry: &mut Remediation, candidate: &str) {
    let current = match entry.farthest_fixed_in_version.parse::<FixVersion>() {
        Ok(version) => version,
        Err(e) => {
            warn!("{}: skipping version comparison, {}", entry.pkg_name, e);
            return;
        }
    };
    let parsed = match candidate.parse::<FixVersion>() {
        Ok(version) => version,
        Err(e) => {
            warn!("{}: skipping version comparison, {}", entry.pkg_name, e);
            return;
        }
    };

    if current < parsed {
        entry.farthest_fixed_in_version = parsed.to_string();
    }
}
