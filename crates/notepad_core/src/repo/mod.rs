//! Note store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented note access contract.
//! - Hold the authoritative ordered note collection.
//!
//! # Invariants
//! - The store is the only mutation path for note fields.
//! - `NotFound` is the only error raised by lookups and updates.

pub mod note_store;
