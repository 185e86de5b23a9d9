//! Shared CLI argument types
//!
//! Argument structs that are flattened into commands or shared by all of them.

mod common;
mod global;
mod input;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use input::FetchArgs;
