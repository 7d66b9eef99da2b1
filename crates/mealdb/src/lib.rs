//! Client for TheMealDB-compatible recipe lookup services.
//!
//! Results are never written locally by this crate; callers decide whether to
//! import a meal through [`RemoteMealDetails::to_create_input`].

mod client;
mod error;
mod model;

pub use client::*;
pub use error::*;
pub use model::*;
