//! Adapters that map domain entities onto forest indices.
pub mod grid;
pub mod keys;
pub mod complement;
