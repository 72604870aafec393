use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use lino_sdk::config::loader::load_config;
use lino_sdk::config::ClientConfig;
use lino_sdk::crypto::keys::{gen_priv_key_hex, pub_key_from_private};
use lino_sdk::observability::init_logging;
use lino_sdk::LinoClient;

const PRIVATE_KEY_ENV: &str = "LINO_PRIVATE_KEY";

#[derive(Parser)]
#[command(name = "lino-cli")]
#[command(about = "Query and transact against a Lino node", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node RPC URL (overrides config)
    #[arg(short, long)]
    url: Option<String>,

    /// Chain ID (overrides config)
    #[arg(long)]
    chain_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new secp256k1 key pair
    Keygen,
    /// Show account info, bank and meta
    Account { username: String },
    /// Show the next sequence number
    Seq { username: String },
    /// Show balance history, newest first
    History {
        username: String,
        /// Only the newest N entries
        #[arg(long)]
        recent: Option<u64>,
    },
    /// Transfer LNO, signing with the key in LINO_PRIVATE_KEY
    Transfer {
        from: String,
        to: String,
        amount: String,
        #[arg(long, default_value = "")]
        memo: String,
    },
    /// Fetch a block
    Block { height: u64 },
    /// Node status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = cli.url {
        config.node.url = url;
    }
    if let Some(chain_id) = cli.chain_id {
        config.node.chain_id = chain_id;
    }
    init_logging(&config.observability);

    if let Commands::Keygen = cli.command {
        let priv_key = gen_priv_key_hex();
        let pub_key = pub_key_from_private(&priv_key)?;
        return print_json(&json!({ "private_key": priv_key, "public_key": pub_key }));
    }

    let client = LinoClient::new(&config.node)?;

    match cli.command {
        Commands::Keygen => {}
        Commands::Account { username } => {
            let (info, bank, meta) = tokio::try_join!(
                client.query.get_account_info(&username),
                client.query.get_account_bank(&username),
                client.query.get_account_meta(&username),
            )?;
            print_json(&json!({ "info": info, "bank": bank, "meta": meta }))?;
        }
        Commands::Seq { username } => {
            let seq = client.query.get_seq_number(&username).await?;
            print_json(&json!({ "username": username, "sequence": seq }))?;
        }
        Commands::History { username, recent } => {
            let history = match recent {
                Some(n) => client.query.get_recent_balance_history(&username, n).await?,
                None => client.query.get_all_balance_history(&username).await?,
            };
            print_json(&history)?;
        }
        Commands::Transfer {
            from,
            to,
            amount,
            memo,
        } => {
            let priv_key = std::env::var(PRIVATE_KEY_ENV)
                .map_err(|_| format!("{PRIVATE_KEY_ENV} is not set"))?;
            let seq = client.query.get_seq_number(&from).await?;
            let result = client
                .broadcast
                .transfer(&from, &to, &amount, &memo, &priv_key, seq)
                .await?;
            print_json(&result)?;
        }
        Commands::Block { height } => {
            print_json(&client.query.get_block(height).await?)?;
        }
        Commands::Status => {
            print_json(&client.query.get_status().await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
