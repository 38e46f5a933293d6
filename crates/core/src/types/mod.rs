//! Core types for Cartlab.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod money;

pub use id::ProductId;
pub use line_item::LineItem;
pub use money::format_currency;
