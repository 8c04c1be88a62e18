use anyhow::bail;
use inventory_actor::adapter::{
    AddProductForm, AdjustQuantityForm, InventoryAdapter, ModifyResponse, SearchForm, SetPriceForm,
};
use inventory_actor::cli::{Cli, Command};
use inventory_actor::clients::{InventoryApi, InventoryClient};
use inventory_actor::config::InventoryConfig;
use inventory_actor::lifecycle::{setup_tracing, InventorySystem};
use inventory_actor::model::ProductRecord;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let cli = match Cli::import() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    let config = InventoryConfig::from_cli(&cli);
    info!(store = %config.store_path.display(), "Starting inventory");

    let system = InventorySystem::start(&config);
    let outcome = run(system.adapter(), cli.command).await;
    system.shutdown().await?;

    match outcome? {
        Some(response) if !response.success => bail!(response.message),
        Some(response) => println!("{}", response.message),
        None => {}
    }
    Ok(())
}

/// Executes one command. Returns the modify response for `adjust` / `set-price`.
async fn run(
    adapter: InventoryAdapter<InventoryClient>,
    command: Command,
) -> anyhow::Result<Option<ModifyResponse>> {
    match command {
        Command::List => print_records(&adapter.index().await?.products)?,
        Command::Show { code } => match adapter.client().get(&code).await? {
            Some(product) => println!("{product}"),
            None => bail!("Product not found: {code}"),
        },
        Command::Add {
            code,
            category,
            name,
            quantity,
            price,
        } => {
            let form = AddProductForm {
                code,
                category,
                name,
                quantity,
                price,
            };
            adapter.add(form).await?;
        }
        Command::Search { criterion } => {
            let listing = adapter.search(SearchForm { criterion }).await?;
            print_records(&listing.products)?;
        }
        Command::Delete { code } => {
            if let Some(message) = adapter.delete(&code).await?.message {
                println!("{message}");
            }
        }
        Command::Adjust { code, delta } => {
            return Ok(Some(
                adapter
                    .adjust_quantity(AdjustQuantityForm { code, delta })
                    .await,
            ))
        }
        Command::SetPrice { code, price } => {
            return Ok(Some(adapter.set_price(SetPriceForm { code, price }).await))
        }
    }
    Ok(None)
}

fn print_records(records: &[ProductRecord]) -> anyhow::Result<()> {
    for record in records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}
