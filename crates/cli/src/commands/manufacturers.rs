use super::print_json;
use crate::di::UseCases;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ManufacturerCommand {
    /// Register a manufacturer
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        siret: i64,
        #[arg(long)]
        phone: String,
    },
    /// List manufacturers
    List,
    /// Show the manufacturer with the given SIRET
    Show { siret: i64 },
}

pub async fn run(use_cases: &UseCases, command: ManufacturerCommand) -> anyhow::Result<()> {
    match command {
        ManufacturerCommand::Add { name, siret, phone } => {
            let manufacturer = use_cases
                .create_manufacturer
                .execute(name, siret, phone)
                .await?;
            print_json(&manufacturer)
        }
        ManufacturerCommand::List => print_json(&use_cases.get_manufacturers.get_all().await?),
        ManufacturerCommand::Show { siret } => {
            print_json(&use_cases.get_manufacturers.get_by_siret(siret).await?)
        }
    }
}
