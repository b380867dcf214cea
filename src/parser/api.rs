use crate::model::{Mode, RawIssue};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Parser for the remote service's issue list.
///
/// Schema: `{"issues": [{"id", "pkgName", "issueData": {"nearestFixedInVersion"},
/// "fixInfo": {"isUpgradable"}}]}`. The fix version sits in a nested
/// sub-object; `fixInfo.isUpgradable` is decoded but carries no weight in
/// the plan.
pub struct ApiParser;

#[derive(Deserialize)]
struct ApiReport {
    #[serde(default)]
    issues: Vec<ApiIssue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiIssue {
    #[serde(default)]
    id: String,
    #[serde(default)]
    pkg_name: String,
    #[serde(default)]
    issue_data: IssueData,
    #[serde(default)]
    #[allow(dead_code)]
    fix_info: FixInfo,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueData {
    #[serde(default)]
    nearest_fixed_in_version: String,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixInfo {
    #[serde(default)]
    #[allow(dead_code)]
    is_upgradable: bool,
}

impl super::ReportParser for ApiParser {
    fn name(&self) -> &'static str {
        "API report"
    }

    fn mode(&self) -> Mode {
        Mode::Api
    }

    fn parse(&self, input: &str) -> Result<Vec<RawIssue>> {
        let report: ApiReport =
            serde_json::from_str(input).context("failed to parse API report JSON")?;

        Ok(report
            .issues
            .into_iter()
            .map(|issue| RawIssue {
                id: issue.id,
                package_name: issue.pkg_name,
                nearest_fixed_in: issue.issue_data.nearest_fixed_in_version,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ReportParser;

    #[test]
    fn test_parse_full_document() {
        let input = r#"{
            "issues": [
                {
                    "id": "SNYK-JS-LODASH-567746",
                    "pkgName": "lodash",
                    "issueData": {"nearestFixedInVersion": "4.17.16"},
                    "fixInfo": {"isUpgradable": true}
                },
                {
                    "id": "SNYK-JS-AXIOS-1038255",
                    "pkgName": "axios",
                    "issueData": {"nearestFixedInVersion": "0.21.1"},
                    "fixInfo": {"isUpgradable": false}
                }
            ]
        }"#;

        let issues = ApiParser.parse(input).unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id, "SNYK-JS-LODASH-567746");
        assert_eq!(issues[0].package_name, "lodash");
        assert_eq!(issues[0].nearest_fixed_in, "4.17.16");
        assert_eq!(issues[1].package_name, "axios");
    }

    #[test]
    fn test_document_order_preserved() {
        let input = r#"{"issues": [
            {"id": "V2", "pkgName": "b", "issueData": {"nearestFixedInVersion": "1.0.0"}},
            {"id": "V1", "pkgName": "a", "issueData": {"nearestFixedInVersion": "1.0.0"}}
        ]}"#;

        let issues = ApiParser.parse(input).unwrap();

        assert_eq!(issues[0].id, "V2");
        assert_eq!(issues[1].id, "V1");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let input = r#"{"issues": [{"id": "V1"}]}"#;

        let issues = ApiParser.parse(input).unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].package_name, "");
        assert_eq!(issues[0].nearest_fixed_in, "");
        assert!(!issues[0].has_fix());
    }

    #[test]
    fn test_missing_issues_key_is_empty_report() {
        let issues = ApiParser.parse("{}").unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_issues_array() {
        let issues = ApiParser.parse(r#"{"issues": []}"#).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input = r#"{"issues": [{
            "id": "V1",
            "pkgName": "lodash",
            "severity": "high",
            "issueData": {"nearestFixedInVersion": "4.17.21", "title": "Prototype Pollution"}
        }]}"#;

        let issues = ApiParser.parse(input).unwrap();
        assert_eq!(issues[0].nearest_fixed_in, "4.17.21");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = ApiParser.parse("{not json").unwrap_err();
        assert!(err.to_string().contains("API report"));
    }

    #[test]
    fn test_parser_identity() {
        assert_eq!(ApiParser.name(), "API report");
        assert_eq!(ApiParser.mode(), Mode::Api);
    }
}
