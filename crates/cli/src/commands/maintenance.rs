use super::{parse_date, print_json};
use crate::di::UseCases;
use chrono::{DateTime, Utc};
use clap::Args;
use motorpool_domain::config::MaintenanceConfig;
use tracing::info;

#[derive(Args, Debug)]
pub struct MaintenanceArgs {
    /// Reference instant for the age windows (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long, value_parser = parse_date)]
    pub reference_date: Option<DateTime<Utc>>,

    /// Discount percentage applied to cars in the window
    #[arg(long)]
    pub discount_percent: Option<u8>,

    /// Youngest age, in months, of a discounted car
    #[arg(long)]
    pub months_start: Option<u32>,

    /// Oldest age, in months, of a discounted car; older cars lose their owners
    #[arg(long)]
    pub months_end: Option<u32>,
}

pub async fn run(
    use_cases: &UseCases,
    defaults: &MaintenanceConfig,
    args: MaintenanceArgs,
) -> anyhow::Result<()> {
    let mut maintenance = defaults.clone();
    if let Some(percent) = args.discount_percent {
        maintenance.discount_percent = percent;
    }
    if let Some(start) = args.months_start {
        maintenance.months_start = start;
    }
    if let Some(end) = args.months_end {
        maintenance.months_end = end;
    }

    let settings = maintenance.settings_at(args.reference_date.unwrap_or_else(Utc::now));
    info!(
        reference_date = %settings.reference_date,
        discount_percent = settings.discount_percent,
        months_start = settings.months_start,
        months_end = settings.months_end,
        "Running discount and cleanup"
    );

    let summary = use_cases.discount_cleanup.execute(&settings).await?;
    print_json(&summary)
}
