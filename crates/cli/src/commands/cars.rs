use super::{parse_date, print_json};
use crate::di::UseCases;
use chrono::{DateTime, Utc};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CarCommand {
    /// Register a car
    Add {
        /// SIRET of an existing manufacturer
        #[arg(long)]
        manufacturer_siret: i64,
        #[arg(long)]
        price: f64,
        /// RFC 3339 or YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        registration_date: DateTime<Utc>,
        /// Owner id, repeatable; order is kept
        #[arg(long = "owner")]
        owners: Vec<i64>,
    },
    /// List cars
    List,
    /// Show one car with manufacturer and owners
    Show { id: i64 },
    /// Show the manufacturer of a car
    Manufacturer { id: i64 },
    /// Change some fields of a car
    Update {
        id: i64,
        #[arg(long)]
        manufacturer_siret: Option<i64>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long, value_parser = parse_date)]
        registration_date: Option<DateTime<Utc>>,
        /// Replaces the owner list; repeatable
        #[arg(long = "owner", conflicts_with = "clear_owners")]
        owners: Vec<i64>,
        /// Remove every owner
        #[arg(long)]
        clear_owners: bool,
    },
    /// Delete a car
    Delete { id: i64 },
}

pub async fn run(use_cases: &UseCases, command: CarCommand) -> anyhow::Result<()> {
    match command {
        CarCommand::Add {
            manufacturer_siret,
            price,
            registration_date,
            owners,
        } => {
            let car = use_cases
                .create_car
                .execute(manufacturer_siret, price, registration_date, owners)
                .await?;
            print_json(&car)
        }
        CarCommand::List => print_json(&use_cases.get_cars.get_all().await?),
        CarCommand::Show { id } => print_json(&use_cases.get_cars.get_by_id(id).await?),
        CarCommand::Manufacturer { id } => {
            print_json(&use_cases.get_cars.get_manufacturer(id).await?)
        }
        CarCommand::Update {
            id,
            manufacturer_siret,
            price,
            registration_date,
            owners,
            clear_owners,
        } => {
            let owner_ids = if clear_owners {
                Some(Vec::new())
            } else if owners.is_empty() {
                None
            } else {
                Some(owners)
            };

            let car = use_cases
                .update_car
                .execute(id, manufacturer_siret, price, registration_date, owner_ids)
                .await?;
            print_json(&car)
        }
        CarCommand::Delete { id } => print_json(&use_cases.delete_car.execute(id).await?),
    }
}
