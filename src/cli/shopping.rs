use anyhow::Result;
use clap::Subcommand;
use nutriplan::App;
use nutriplan_shared::parse_quantity_or_zero;
use nutriplan_shopping::ItemInput;

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Add an item to the list
    Add {
        name: String,
        #[arg(long, default_value = "1")]
        quantity: String,
        #[arg(long, default_value = "")]
        unit: String,
    },
    /// Show the list, unchecked items first
    List,
    Check { id: String },
    Uncheck { id: String },
    Toggle { id: String },
    Delete { id: String },
    /// Remove every checked item
    ClearChecked,
}

pub async fn run(app: &App, command: ShoppingCommand) -> Result<()> {
    let shopping = &app.shopping_command;

    match command {
        ShoppingCommand::Add {
            name,
            quantity,
            unit,
        } => {
            let id = shopping
                .add(ItemInput {
                    name,
                    quantity: parse_quantity_or_zero(&quantity),
                    unit,
                    checked: false,
                })
                .await?;
            println!("{id}");
        }
        ShoppingCommand::List => {
            for item in app.shopping_query.list().await? {
                let mark = if item.checked { "x" } else { " " };
                println!("[{mark}] {}  {} {}", item.id, item.name, item.amount());
            }
        }
        ShoppingCommand::Check { id } => shopping.set_checked(id, true).await?,
        ShoppingCommand::Uncheck { id } => shopping.set_checked(id, false).await?,
        ShoppingCommand::Toggle { id } => shopping.toggle(id).await?,
        ShoppingCommand::Delete { id } => shopping.delete(id).await?,
        ShoppingCommand::ClearChecked => {
            let removed = shopping.clear_checked().await?;
            println!("{removed} item(s) removed");
        }
    }

    Ok(())
}
