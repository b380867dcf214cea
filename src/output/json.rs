use crate::model::RemediationPlan;
use anyhow::Result;

pub fn print_json(plan: &RemediationPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    println!("{}", json);
    Ok(())
}
