//! Cart CLI
//!
//! Command-line front end for the flower shop cart. Stands in for the
//! storefront UI: it renders what the state manager exposes and never
//! touches cart state directly.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cart_client::ShopClient;
use cart_core::CartManager;
use cart_store::FileStore;
use cart_types::{Notifier, ProductId};

#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about = "Flower shop cart", long_about = None)]
struct Cli {
    /// Base URL of the shop API
    #[arg(long, env = "FLOWER_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Directory the cart is persisted under
    #[arg(long, env = "CART_DATA_DIR", default_value = ".cart")]
    data_dir: PathBuf,

    /// Settings key holding the BCV exchange rate
    #[arg(long, env = "BCV_RATE_KEY", default_value = "tasa_bcv")]
    rate_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: i64,
        /// Units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: i64,
    },
    /// Set a product's quantity (0 or less removes it)
    SetQuantity {
        /// Product ID
        product_id: i64,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Show the cart with totals
    Show,
}

/// Toast surface for the terminal.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("✓ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let store = FileStore::new(&cli.data_dir)?;
    let client = ShopClient::new(&cli.api_url);

    let mut cart = CartManager::open(store, client.clone(), TermNotifier);
    let rate = cart.refresh_rate(&client, &cli.rate_key).await;
    tracing::debug!(%rate, "exchange rate resolved");

    // The badge a storefront would render in its header.
    cart.on_change(|items| {
        let units: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
        println!("Cart: {} unit(s) in {} line item(s)", units, items.len());
    });

    match cli.command {
        Commands::Add {
            product_id,
            quantity,
        } => {
            cart.add_item(ProductId::new(product_id), quantity).await?;
        }

        Commands::Remove { product_id } => {
            cart.remove_item(ProductId::new(product_id))?;
            println!("✓ Product {product_id} is no longer in the cart");
        }

        Commands::SetQuantity {
            product_id,
            quantity,
        } => {
            cart.update_quantity(ProductId::new(product_id), quantity)?;
            if quantity > 0 {
                println!("✓ Product {product_id} set to {quantity}");
            } else {
                println!("✓ Product {product_id} removed");
            }
        }

        Commands::Clear => {
            cart.clear()?;
            println!("✓ Cart cleared");
        }

        Commands::Show => render(&cart),
    }

    Ok(())
}

fn render<S, C, N>(cart: &CartManager<S, C, N>)
where
    S: cart_types::CartStore,
    C: cart_types::ProductCatalog,
    N: Notifier,
{
    if cart.is_empty() {
        println!("The cart is empty.");
        return;
    }

    for item in cart.items() {
        println!(
            "{:>4} × {:<32} {:>10} {:>12}",
            item.quantity,
            item.name,
            item.unit_price.to_string(),
            item.line_total().to_string(),
        );
    }

    println!();
    println!("Subtotal: {:>10}", cart.subtotal().to_string());
    println!("Shipping: {:>10}", cart_types::SHIPPING_FEE.to_string());
    println!("Total:    {:>10}", cart.final_total_usd().to_string());
    match cart.rate() {
        Some(rate) => println!(
            "          {:>10}  (at {} Bs./USD)",
            cart.final_total_ves().to_string(),
            rate
        ),
        None => println!("          (Bs. total unavailable)"),
    }
}
