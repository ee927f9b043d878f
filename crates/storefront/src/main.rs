//! # Storefront CLI
//!
//! Command-line front end for the catalog and the cash-on-delivery order flow.
//!
//! - `storefront products` lists the catalog
//! - `storefront show <id>` prints one product
//! - `storefront order <id> --quantity 2 --phone ... --address ...` places an order
//!
//! Endpoints and the delivery charge come from a JSON file (`--config`), flags or
//! `STOREFRONT_*` environment variables, read from `.env` when present.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use storefront::catalog_actor::CatalogStatus;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{OrderResult, Product};
use storefront::pricing::format_amount;
use storefront_actor::telemetry::setup_tracing;
use tabled::{Table, Tabled};
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Product catalog and cash-on-delivery orders", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct SettingsArgs {
    /// JSON config file; flags and environment variables override its values
    #[arg(long, env = "STOREFRONT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Catalog endpoint
    #[arg(long, env = "STOREFRONT_PRODUCTS_URL", global = true)]
    products_url: Option<String>,

    /// Order endpoint
    #[arg(long, env = "STOREFRONT_ORDER_URL", global = true)]
    order_url: Option<String>,

    /// Base URL product images are served from
    #[arg(long, env = "STOREFRONT_IMAGE_BASE_URL", global = true)]
    image_base_url: Option<String>,

    /// Flat delivery charge added to every order
    #[arg(long, env = "STOREFRONT_DELIVERY_CHARGE", global = true)]
    delivery_charge: Option<Decimal>,
}

impl SettingsArgs {
    fn load(self) -> Result<StorefrontConfig, String> {
        let mut config = match &self.config {
            Some(path) => StorefrontConfig::from_json_file(path)
                .map_err(|error| format!("failed to load {}: {error}", path.display()))?,
            None => StorefrontConfig::default(),
        };
        if let Some(url) = self.products_url {
            config.products_url = url;
        }
        if let Some(url) = self.order_url {
            config.order_url = url;
        }
        if let Some(url) = self.image_base_url {
            config.image_base_url = url;
        }
        if let Some(charge) = self.delivery_charge {
            config.delivery_charge = charge;
        }
        config.validate().map_err(|error| error.to_string())?;
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product in the catalog
    Products,
    /// Show the details of one product
    Show {
        /// Product id
        id: String,
    },
    /// Place a cash-on-delivery order
    Order(OrderArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    /// Product id
    id: String,

    /// Number of units, as typed
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    quantity: String,

    /// Contact phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Delivery address
    #[arg(long, default_value = "")]
    address: String,
}

#[derive(Tabled)]
struct ProductRow {
    id: String,
    name: String,
    price: String,
    category: String,
    stock: String,
}

impl ProductRow {
    fn new(product: &Product, low_stock_threshold: u32) -> Self {
        let stock = if product.is_low_stock(low_stock_threshold) {
            format!("{} (low)", product.stock)
        } else {
            product.stock.to_string()
        };
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_amount(product.price),
            category: product.category_name().unwrap_or("-").to_string(),
            stock,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _env = dotenvy::dotenv();
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.settings.load()?;

    let storefront = Storefront::from_config(config).map_err(|e| e.to_string())?;

    let outcome = match cli.command {
        Commands::Products => list_products(&storefront).await,
        Commands::Show { id } => show_product(&storefront, id).await,
        Commands::Order(args) => {
            let span = tracing::info_span!("order", product = %args.id);
            place_order(&storefront, args).instrument(span).await
        }
    };

    storefront.shutdown().await?;
    outcome
}

async fn ready_products(storefront: &Storefront) -> Result<Vec<Product>, String> {
    match storefront.catalog_client.settled().await.map_err(|e| e.to_string())? {
        CatalogStatus::Ready(products) => Ok(products.to_vec()),
        CatalogStatus::Failed(reason) => Err(format!("failed to load products: {reason}")),
        CatalogStatus::Loading => Err("catalog is still loading".to_string()),
    }
}

async fn list_products(storefront: &Storefront) -> Result<(), String> {
    let products = ready_products(storefront).await?;
    if products.is_empty() {
        println!("no products available");
        return Ok(());
    }

    let threshold = storefront.config().low_stock_threshold;
    let rows = products
        .iter()
        .map(|product| ProductRow::new(product, threshold));
    println!("{}", Table::new(rows));
    Ok(())
}

async fn show_product(storefront: &Storefront, id: String) -> Result<(), String> {
    ready_products(storefront).await?;
    let product = storefront
        .catalog_client
        .find(id.into())
        .await
        .map_err(|e| e.to_string())?;
    let config = storefront.config();

    println!("{}", product.name);
    println!("price: {}", format_amount(product.price));
    println!("category: {}", product.category_name().unwrap_or("-"));
    if product.is_low_stock(config.low_stock_threshold) {
        println!("stock: {} (only a few left)", product.stock);
    } else {
        println!("stock: {}", product.stock);
    }
    if let Some(discount) = product.discount_amount {
        println!("discount: {}", format_amount(discount));
    }
    for text in [&product.short_desc, &product.description, &product.additional_info]
        .into_iter()
        .flatten()
    {
        println!();
        println!("{text}");
    }
    if let Some(url) = product.image_url(&config.image_base_url) {
        println!();
        println!("image: {url}");
    }
    Ok(())
}

async fn place_order(storefront: &Storefront, args: OrderArgs) -> Result<(), String> {
    let orders = &storefront.order_client;

    let draft = storefront
        .select_product_by_id(args.id.into())
        .await
        .map_err(|e| e.to_string())?;
    info!(product = %draft.product.name, "Product selected");

    let filled = async {
        orders.open_order_form().await?;
        orders.set_quantity_text(&args.quantity).await?;
        orders.set_phone(args.phone).await?;
        orders.set_address(args.address).await?;
        orders.total().await
    };
    let total = filled.await.map_err(|e| e.to_string())?;

    println!(
        "{} - {}",
        draft.product.name,
        format_amount(draft.product.price)
    );
    match total {
        Some(total) => println!("Total Amount: {}", format_amount(total)),
        None => println!("Total Amount: -"),
    }
    println!(
        "Delivery Charge: {}",
        format_amount(storefront.config().delivery_charge)
    );

    match orders.submit().await.map_err(|e| e.to_string())? {
        OrderResult::Success { message } => {
            if !message.is_empty() {
                println!("{message}");
            }
            let snapshot = orders.snapshot().await.map_err(|e| e.to_string())?;
            if let Some(notice) = snapshot.notice {
                println!("{}", notice.message);
            }
            Ok(())
        }
        OrderResult::Failure { message } => Err(message),
    }
}
