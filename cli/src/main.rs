//! payout-engine - command line front-end for the payout calculators.
//!
//! Prices purchases, computes creator payout deductions, and resolves
//! settlement dates from the terminal. Fee rates default to the platform
//! schedule and can be overridden with a JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;

use payout_engine_core::{
    calculate_creator_payout, calculate_early_transfer, calculate_purchase, calculate_transfer,
    format_jpy, validate_transfer_request, FeeRates, TURNAROUND_BUSINESS_DAYS,
};

#[derive(Parser)]
#[command(name = "payout-engine", version, about = "Fee and payout calculator")]
struct Cli {
    /// Path to a JSON fee-rate override file
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a content purchase
    Purchase {
        /// Creator-set base price (yen)
        amount: i64,
    },

    /// Creator payout deductions on gross sales
    Payout {
        /// Gross sales (yen)
        amount: i64,
    },

    /// Transfer on the regular settlement cycle
    Transfer {
        /// Gross sales (yen)
        amount: i64,

        /// Sale date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        sale_date: Option<NaiveDate>,
    },

    /// Expedited transfer on the three business day turnaround
    Early {
        /// Requested amount (yen)
        amount: i64,

        /// Request date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        requested_on: Option<NaiveDate>,
    },

    /// Validate a transfer request against an available balance
    Validate {
        /// Requested amount (yen)
        amount: i64,

        /// Available balance (yen)
        balance: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let rates = load_rates(cli.rates.as_deref())?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Purchase { amount } => {
            let breakdown = calculate_purchase(amount, &rates)?;
            println!("base        {}", format_jpy(breakdown.base_amount));
            println!("tax         {}", format_jpy(breakdown.tax));
            println!("fee         {}", format_jpy(breakdown.purchase_fee));
            println!("total       {}", format_jpy(breakdown.total_amount));
        }
        Command::Payout { amount } => {
            let breakdown = calculate_creator_payout(amount, &rates)?;
            println!("gross       {}", format_jpy(breakdown.gross_amount));
            println!("platform    {}", format_jpy(breakdown.platform_fee));
            println!("fee tax     {}", format_jpy(breakdown.fee_tax));
            println!("net         {}", format_jpy(breakdown.net_amount));
        }
        Command::Transfer { amount, sale_date } => {
            let breakdown = calculate_transfer(amount, sale_date.unwrap_or(today), &rates)?;
            println!("gross       {}", format_jpy(breakdown.gross_amount));
            println!("platform    {}", format_jpy(breakdown.platform_fee));
            println!("fee tax     {}", format_jpy(breakdown.fee_tax));
            println!("bank fee    {}", format_jpy(breakdown.transfer_fee));
            println!("net         {}", format_jpy(breakdown.net_amount));
            println!("wired on    {}", breakdown.scheduled_date);
        }
        Command::Early {
            amount,
            requested_on,
        } => {
            let breakdown =
                calculate_early_transfer(amount, requested_on.unwrap_or(today), &rates)?;
            println!("requested   {}", format_jpy(breakdown.requested_amount));
            println!("platform    {}", format_jpy(breakdown.platform_fee));
            println!("fee tax     {}", format_jpy(breakdown.platform_fee_tax));
            println!("early fee   {}", format_jpy(breakdown.early_payment_fee));
            println!("early tax   {}", format_jpy(breakdown.early_payment_fee_tax));
            println!("bank fee    {}", format_jpy(breakdown.transfer_fee));
            println!("net         {}", format_jpy(breakdown.net_amount));
            println!(
                "expected    {} ({} business days)",
                breakdown.expected_date, TURNAROUND_BUSINESS_DAYS
            );
        }
        Command::Validate { amount, balance } => {
            match validate_transfer_request(amount, balance, &rates) {
                Ok(()) => println!("ok"),
                Err(errors) => {
                    for error in &errors {
                        eprintln!("error: {}", error);
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn load_rates(path: Option<&Path>) -> Result<FeeRates> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading rates file {}", path.display()))?;
            let rates = serde_json::from_str(&raw)
                .with_context(|| format!("parsing rates file {}", path.display()))?;
            info!("loaded fee rates from {}", path.display());
            Ok(rates)
        }
        None => Ok(FeeRates::default()),
    }
}
