//! Application state store and its change feed.
//!
//! # Responsibility
//! - Own every entity collection and profile singleton for one session.
//! - Pair each mutation with its user-facing toast/notification side effect.
//!
//! # Invariants
//! - The store is constructed explicitly and passed by reference; there is
//!   no process-global instance.
//! - Operations never fail; unknown ids are silent no-ops.

pub mod app_store;
pub mod events;
