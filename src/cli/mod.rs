pub mod plan;
pub mod recipe;
pub mod remote;
pub mod shopping;
