use super::{parse_date, print_json};
use crate::di::UseCases;
use chrono::{DateTime, Utc};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum OwnerCommand {
    /// Register an owner
    Add {
        #[arg(long)]
        name: String,
        /// RFC 3339 or YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        purchase_date: DateTime<Utc>,
    },
    /// List owners
    List,
    /// Show one owner
    Show { id: i64 },
}

pub async fn run(use_cases: &UseCases, command: OwnerCommand) -> anyhow::Result<()> {
    match command {
        OwnerCommand::Add {
            name,
            purchase_date,
        } => print_json(&use_cases.create_owner.execute(name, purchase_date).await?),
        OwnerCommand::List => print_json(&use_cases.get_owners.get_all().await?),
        OwnerCommand::Show { id } => print_json(&use_cases.get_owners.get_by_id(id).await?),
    }
}
