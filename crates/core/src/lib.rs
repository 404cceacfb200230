//! `itemstore-core` — domain building blocks for the item store.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod item;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemName};
pub use value_object::ValueObject;
