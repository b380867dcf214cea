use crate::model::{Mode, RawIssue};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Parser for the local scanner's vulnerability list.
///
/// Schema: `{"vulnerabilities": [{"id", "packageName", "nearestFixedInVersion"}]}`
/// with flat records and no sub-objects. Aggregation semantics are identical
/// to the API schema; only field extraction differs.
pub struct CliParser;

#[derive(Deserialize)]
struct CliReport {
    #[serde(default)]
    vulnerabilities: Vec<CliVulnerability>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliVulnerability {
    #[serde(default)]
    id: String,
    #[serde(default)]
    package_name: String,
    #[serde(default)]
    nearest_fixed_in_version: String,
}

impl super::ReportParser for CliParser {
    fn name(&self) -> &'static str {
        "CLI report"
    }

    fn mode(&self) -> Mode {
        Mode::Cli
    }

    fn parse(&self, input: &str) -> Result<Vec<RawIssue>> {
        let report: CliReport =
            serde_json::from_str(input).context("failed to parse CLI report JSON")?;

        Ok(report
            .vulnerabilities
            .into_iter()
            .map(|vuln| RawIssue {
                id: vuln.id,
                package_name: vuln.package_name,
                nearest_fixed_in: vuln.nearest_fixed_in_version,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ReportParser;

    #[test]
    fn test_parse_flat_document() {
        let input = r#"{
            "vulnerabilities": [
                {"id": "V3", "packageName": "axios", "nearestFixedInVersion": "0.21.1"}
            ]
        }"#;

        let issues = CliParser.parse(input).unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "V3");
        assert_eq!(issues[0].package_name, "axios");
        assert_eq!(issues[0].nearest_fixed_in, "0.21.1");
    }

    #[test]
    fn test_empty_vulnerabilities_array() {
        let issues = CliParser.parse(r#"{"vulnerabilities": []}"#).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_vulnerabilities_key_is_empty_report() {
        let issues = CliParser.parse("{}").unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_fix_version_defaults_to_empty() {
        let input = r#"{"vulnerabilities": [{"id": "V1", "packageName": "minimist"}]}"#;

        let issues = CliParser.parse(input).unwrap();

        assert_eq!(issues[0].nearest_fixed_in, "");
        assert!(!issues[0].has_fix());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = CliParser.parse("[]").unwrap_err();
        assert!(err.to_string().contains("CLI report"));
    }

    #[test]
    fn test_parser_identity() {
        assert_eq!(CliParser.name(), "CLI report");
        assert_eq!(CliParser.mode(), Mode::Cli);
    }
}
