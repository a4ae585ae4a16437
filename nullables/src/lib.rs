//! Nullable infrastructure for deterministic testing.
//!
//! The storage boundary is abstracted behind a trait; this crate provides a
//! test-friendly implementation that:
//! - Never touches the filesystem
//! - Can be inspected directly
//! - Can inject a write failure on demand
//!
//! Usage: swap the real backend for the nullable in tests.

pub mod store;

pub use store::NullTallyStore;
