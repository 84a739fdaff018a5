//! Converter CLI
//!
//! Runs the conversion engine locally against the official rates.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use converter_hex::ConverterService;
use rates_source::{DEFAULT_RATES_URL, NbrbRateSource, StaticRateSource};
use rates_types::{ConverterSettings, CurrencyCode, RateSource, format_amount};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Official exchange rate converter", long_about = None)]
struct Cli {
    /// Official rates endpoint
    #[arg(long, env = "RATES_URL", default_value = DEFAULT_RATES_URL)]
    rates_url: String,

    /// Currency the official rates are expressed in
    #[arg(long, env = "BASE_CURRENCY", default_value = "BYN")]
    base: String,

    /// Display name of the base currency
    #[arg(long, env = "BASE_CURRENCY_NAME", default_value = "Belarusian ruble")]
    base_name: String,

    /// Target of bare-amount requests
    #[arg(long, env = "SECONDARY_CURRENCY", default_value = "RUB")]
    secondary: String,

    /// Give up on the rates endpoint after this many seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    /// Use built-in sample rates instead of the network
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount, e.g. `fx convert 100 usd to eur` or `fx convert -- -50`
    Convert {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        request: Vec<String>,
    },
    /// List available currencies
    Currencies,
    /// Read chat messages from stdin and print the bot replies
    Chat,
}

impl Cli {
    fn settings(&self) -> Result<ConverterSettings> {
        Ok(ConverterSettings {
            base: CurrencyCode::new(&self.base)?,
            base_name: self.base_name.clone(),
            secondary: CurrencyCode::new(&self.secondary)?,
            fetch_timeout: Duration::from_secs(self.timeout_secs),
            ..ConverterSettings::default()
        })
    }

    fn source(&self) -> Result<Arc<dyn RateSource>> {
        if self.offline {
            return Ok(Arc::new(StaticRateSource::sample()?));
        }
        let timeout = Duration::from_secs(self.timeout_secs);
        Ok(Arc::new(NbrbRateSource::new(self.rates_url.clone(), timeout)?))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = ConverterService::new(cli.source()?, cli.settings()?);

    match cli.command {
        Commands::Convert { request } => {
            let result = service.convert_text(&request.join(" ")).await?;
            if result.from == result.to {
                println!("{} {}", format_amount(result.amount), result.to);
            } else {
                println!(
                    "{} {} = {} {}",
                    format_amount(result.amount),
                    result.from,
                    format_amount(result.converted),
                    result.to
                );
                println!(
                    "Rate: 1 {} = {} {}",
                    result.from,
                    format_amount(result.cross_rate),
                    result.to
                );
            }
        }
        Commands::Currencies => {
            let rates = service.rates().await?;
            for record in rates.entries() {
                println!("{:<4} {}", record.code(), record.name());
            }
        }
        Commands::Chat => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                for reply in service.handle_message(&line).await {
                    println!("{}\n", reply);
                }
            }
        }
    }

    Ok(())
}
