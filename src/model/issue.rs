/// Which report schema to parse from standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The remote service's issue list (`issues`, nested fix version).
    Api,
    /// The local scanner's flat vulnerability list (`vulnerabilities`).
    Cli,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Api => "api",
            Mode::Cli => "cli",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Api => "API",
            Mode::Cli => "CLI",
        }
    }

    /// Maps the two exclusive mode flags to a schema, `None` when neither
    /// is set. Flag exclusivity itself is enforced by the CLI layer.
    pub fn from_flags(api: bool, cli: bool) -> Option<Self> {
        match (api, cli) {
            (true, _) => Some(Mode::Api),
            (_, true) => Some(Mode::Cli),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One reported finding, normalized from either input schema.
///
/// An empty `nearest_fixed_in` means the feed knows no version that fixes
/// the finding; such issues never contribute to the plan.
#[derive(Debug, Clone)]
pub struct RawIssue {
    /// Vulnerability identifier (e.g. "SNYK-JS-LODASH-567746").
    pub id: String,
    /// Name of the affected package.
    pub package_name: String,
    /// Lowest version known to contain a fix, or empty when none exists.
    pub nearest_fixed_in: String,
}

impl RawIssue {
    pub fn new(
        id: impl Into<String>,
        package_name: impl Into<String>,
        nearest_fixed_in: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            package_name: package_name.into(),
            nearest_fixed_in: nearest_fixed_in.into(),
        }
    }

    /// True when the feed published a fix version for this finding.
    pub fn has_fix(&self) -> bool {
        !self.nearest_fixed_in.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(Mode::from_flags(true, false), Some(Mode::Api));
        assert_eq!(Mode::from_flags(false, true), Some(Mode::Cli));
        assert_eq!(Mode::from_flags(false, false), None);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Api.as_str(), "api");
        assert_eq!(Mode::Cli.as_str(), "cli");
        assert_eq!(Mode::Api.to_string(), "API");
    }

    #[test]
    fn test_has_fix() {
        assert!(RawIssue::new("V1", "lodash", "4.17.21").has_fix());
        assert!(!RawIssue::new("V2", "lodash", "").has_fix());
    }
}
