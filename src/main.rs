use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use txledger::application::pay_config::PayConfigService;
use txledger::application::transactions::TransactionQueryEngine;
use txledger::domain::money::{validate_amount, validate_rates};
use txledger::domain::ports::{OrderStoreBox, PayConfigStoreBox};
use txledger::infrastructure::in_memory::{InMemoryOrderStore, InMemoryPayConfigStore};
use txledger::interfaces::api::TransactionListRequest;
use txledger::interfaces::csv::order_reader::OrderReader;
use txledger::interfaces::csv::pay_config_reader::PayConfigReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true, env = "TXLEDGER_DB_PATH")]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load orders and list the transactions visible to one user as JSON
    List {
        /// Orders CSV file to load before listing
        #[arg(long)]
        orders: PathBuf,
        /// Authenticated username the listing is scoped to
        #[arg(long)]
        user: String,
        /// Listing request as JSON
        #[arg(long, default_value = "{}")]
        request: String,
    },
    /// Validate one or more fee rates
    ValidateRates {
        #[arg(required = true, allow_negative_numbers = true, value_parser = Decimal::from_str_exact)]
        rates: Vec<Decimal>,
    },
    /// Validate a transaction amount
    ValidateAmount {
        #[arg(allow_negative_numbers = true, value_parser = Decimal::from_str_exact)]
        amount: Decimal,
    },
    /// Load pay configs and print the tier covering a score
    Tiers {
        /// Pay configs CSV file
        #[arg(long)]
        configs: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        score: i64,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("TXLEDGER_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn open_stores(db_path: Option<PathBuf>) -> Result<(OrderStoreBox, PayConfigStoreBox)> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = db_path {
        let store = txledger::infrastructure::rocksdb::RocksDBStore::open(db_path).into_diagnostic()?;
        let orders: OrderStoreBox = Box::new(store.clone());
        let configs: PayConfigStoreBox = Box::new(store);
        return Ok((orders, configs));
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }

    let orders: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let configs: PayConfigStoreBox = Box::new(InMemoryPayConfigStore::new());
    Ok((orders, configs))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::List {
            orders,
            user,
            request,
        } => {
            let request: TransactionListRequest = serde_json::from_str(&request).into_diagnostic()?;
            let (order_store, _) = open_stores(cli.db_path)?;

            let file = File::open(orders).into_diagnostic()?;
            let mut loaded = 0usize;
            for order in OrderReader::new(file).orders() {
                match order {
                    Ok(order) => {
                        order_store.insert(order).await.into_diagnostic()?;
                        loaded += 1;
                    }
                    Err(e) => warn!("Error reading order: {}", e),
                }
            }
            info!(loaded, "orders loaded");

            let engine = TransactionQueryEngine::new(order_store);
            let response = engine.list(Some(user.as_str()), request).await.into_diagnostic()?;
            serde_json::to_writer_pretty(io::stdout().lock(), &response).into_diagnostic()?;
            println!();
        }
        Command::ValidateRates { rates } => {
            validate_rates(rates).into_diagnostic()?;
            println!("ok");
        }
        Command::ValidateAmount { amount } => {
            validate_amount(amount).into_diagnostic()?;
            println!("ok");
        }
        Command::Tiers { configs, score } => {
            let (_, config_store) = open_stores(cli.db_path)?;
            let service = PayConfigService::new(config_store);

            let file = File::open(configs).into_diagnostic()?;
            for config in PayConfigReader::new(file).configs() {
                match config {
                    Ok(config) => service.save(config).await.into_diagnostic()?,
                    Err(e) => warn!("Error reading pay config: {}", e),
                }
            }

            match service.tier_for_score(score).await.into_diagnostic()? {
                Some(tier) => {
                    serde_json::to_writer_pretty(io::stdout().lock(), &tier).into_diagnostic()?;
                    println!();
                }
                None => miette::bail!("no tier covers score {score}"),
            }
        }
    }

    Ok(())
}
