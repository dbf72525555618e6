//! User-facing message catalog and display macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
