//! # docbot-search
//!
//! Content store and lookup service for the documentation bot. Loads the docs.json
//! corpus produced by the upstream docs generator into an immutable in-memory
//! [`DocStore`] and answers queries with weighted substring scoring.
//!
//! The store is read-only after [`DocStore::load`]; it is shared across request
//! handlers behind an `Arc` with no locking.

pub mod engine;
pub mod model;
pub mod store;

pub use engine::{Query, SearchHit};
pub use model::{Details, DocEntry, DocItem, EntryKind, Example, Library, Section};
pub use store::{DocStore, StoreError};
