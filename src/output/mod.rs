mod json;
mod table;

pub use json::print_json;
pub use table::print_table;

use crate::model::RemediationPlan;
use anyhow::Result;

/// Output format for the remediation plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON document for piping into other tools
    Json,
    /// Human-readable table format
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!("Unknown format: {}. Use 'json' or 'table'", s)),
        }
    }
}

pub fn print_plan(plan: &RemediationPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(plan),
        OutputFormat::Table => print_table(plan),
    }
}

/// Format the plan to a string for file output
pub fn format_plan_to_string(plan: &RemediationPlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        OutputFormat::Table => {
            // Table layout is for terminals; files always get JSON.
            Ok(serde_json::to_string_pretty(plan)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Remediation;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("Table").unwrap(), OutputFormat::Table);

        let err = OutputFormat::from_str("yaml").unwrap_err();
        assert!(err.contains("Unknown format"));
    }

    #[test]
    fn test_empty_plan_renders_empty_upgrades_array() {
        let plan = RemediationPlan::default();
        let out = format_plan_to_string(&plan, OutputFormat::Json).unwrap();
        assert_eq!(out, "{\n  \"upgrades\": []\n}");
    }

    #[test]
    fn test_table_format_writes_json_to_files() {
        let plan = RemediationPlan {
            upgrades: vec![Remediation::new("lodash", "4.17.21", "V1")],
        };

        let out = format_plan_to_string(&plan, OutputFormat::Table).unwrap();
        assert!(out.contains("\"PkgName\": \"lodash\""));
    }
}
