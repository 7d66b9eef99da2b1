mod aggregator;
mod command;
mod query;
mod week;

pub use aggregator::*;
pub use command::*;
pub use query::*;
pub use week::*;
