use serde::{Deserialize, Serialize};

/// The recommended upgrade for one package: the farthest version known to
/// contain fixes, and every vulnerability id that upgrade resolves.
///
/// The serialized field names (`PkgName`, `FarthestFixedInVersion`,
/// `FixesVulns`) are the report contract consumed by downstream tooling;
/// do not rename them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remediation {
    #[serde(rename = "PkgName")]
    pub pkg_name: String,
    #[serde(rename = "FarthestFixedInVersion")]
    pub farthest_fixed_in_version: String,
    #[serde(rename = "FixesVulns")]
    pub fixes_vulns: Vec<String>,
}

impl Remediation {
    /// Creates the entry for a package's first fixable finding. The fix
    /// version is kept exactly as the feed gave it; later advancements
    /// store the canonical form instead.
    pub fn new(
        pkg_name: impl Into<String>,
        fixed_in: impl Into<String>,
        first_vuln: impl Into<String>,
    ) -> Self {
        Self {
            pkg_name: pkg_name.into(),
            farthest_fixed_in_version: fixed_in.into(),
            fixes_vulns: vec![first_vuln.into()],
        }
    }

    /// Records a resolved vulnerability id, once. A linear scan keeps
    /// duplicates out while preserving first-occurrence order.
    pub fn record_fix(&mut self, id: &str) {
        if !self.fixes_vulns.iter().any(|existing| existing == id) {
            self.fixes_vulns.push(id.to_string());
        }
    }
}

/// The complete remediation plan: one entry per package with an available
/// fix. Serializes as `{"upgrades": [...]}`, the report's top-level shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemediationPlan {
    pub upgrades: Vec<Remediation>,
}

impl RemediationPlan {
    /// Number of packages with an available upgrade.
    pub fn package_count(&self) -> usize {
        self.upgrades.len()
    }

    /// Total distinct vulnerabilities resolved across all entries.
    pub fn total_fixes(&self) -> usize {
        self.upgrades.iter().map(|r| r.fixes_vulns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    /// Orders entries by package name so repeated runs over the same input
    /// render byte-identical reports.
    pub fn sort_by_package(&mut self) {
        self.upgrades.sort_by(|a, b| a.pkg_name.cmp(&b.pkg_name));
    }
}
