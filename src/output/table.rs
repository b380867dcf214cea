use crate::model::RemediationPlan;
use anyhow::Result;
use chrono::Utc;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct UpgradeRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Upgrade To")]
    upgrade_to: String,
    #[tabled(rename = "Fixes")]
    fixes: String,
}

pub fn print_table(plan: &RemediationPlan) -> Result<()> {
    println!();
    println!(
        "Plan generated at: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    if plan.is_empty() {
        println!("No upgrades available.");
        return Ok(());
    }

    println!("Found {} packages to upgrade:", plan.package_count());
    println!();

    let rows: Vec<UpgradeRow> = plan
        .upgrades
        .iter()
        .map(|r| UpgradeRow {
            package: truncate(&r.pkg_name, 40),
            upgrade_to: r.farthest_fixed_in_version.clone(),
            fixes: truncate(&r.fixes_vulns.join(", "), 60),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    println!();
    print_summary(plan);

    Ok(())
}

fn print_summary(plan: &RemediationPlan) {
    println!("Summary:");
    println!("  Packages to upgrade: {}", plan.package_count());
    println!("  Vulnerabilities resolved: {}", plan.total_fixes());
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
