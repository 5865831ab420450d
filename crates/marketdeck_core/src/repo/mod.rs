//! In-memory storage primitives.
//!
//! # Responsibility
//! - Provide the ordered, id-keyed collection every store field is built on.
//!
//! # Invariants
//! - Nothing here persists; contents live as long as the owning store.

pub mod collection;

pub use collection::EntityCollection;
