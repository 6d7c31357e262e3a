//! Infrastructure adapters: the SQLite-backed schedule store.

pub mod persistence;
