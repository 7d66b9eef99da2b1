mod command;
mod date;
mod load_state;
pub mod mealplan;
mod notify;

pub use command::*;
pub use date::*;
pub use load_state::*;
pub use notify::*;

use std::str::FromStr;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
    pub notifier: Notifier,
}

impl State {
    /// Same pool for reads and writes, used by tests and single-connection tools.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
            notifier: Notifier::default(),
        }
    }
}

/// Parses a free-form numeric field, falling back to zero.
pub fn parse_or_zero<T: FromStr + Default>(value: &str) -> T {
    value.trim().parse().unwrap_or_default()
}

/// Like [`parse_or_zero`] for amounts, also mapping `nan` and `inf` to zero.
pub fn parse_quantity_or_zero(value: &str) -> f64 {
    let quantity: f64 = parse_or_zero(value);

    if quantity.is_finite() { quantity } else { 0.0 }
}
