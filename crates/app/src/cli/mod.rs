use clap::{Parser, Subcommand};
use rust_decimal::{Decimal, prelude::ToPrimitive};

mod db;
mod product;
mod room;

#[derive(Debug, Parser)]
#[command(name = "stayshop-app", about = "Stayshop admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Room(room::RoomCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Room(command) => room::run(command).await,
            Commands::Product(command) => product::run(command).await,
        }
    }
}

/// Parse a decimal price such as `129.99` into minor units.
pub(crate) fn parse_price(value: &str) -> Result<u64, String> {
    let invalid = || format!("invalid price `{value}`, expected e.g. 129.99");

    let value = value.trim();

    if !value.starts_with(|c: char| c.is_ascii_digit()) || value.ends_with('.') {
        return Err(invalid());
    }

    let amount = value.parse::<Decimal>().map_err(|_ignored| invalid())?;

    if amount.is_sign_negative() || amount.scale() > 2 {
        return Err(invalid());
    }

    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|minor| minor.round_dp(0).to_u64())
        .ok_or_else(invalid)
}
