//! Cartlab Core - Shared types library.
//!
//! This crate provides the domain types used across the Cartlab components:
//! - `checkout` - Cart engine and payment simulation
//! - `cli` - Terminal driver for interactive sessions
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no runtime
//! concerns. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, line items, and currency formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
