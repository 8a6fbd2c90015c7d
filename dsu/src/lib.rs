pub mod error;
pub mod forest;
pub mod encode;
pub mod mst;
pub mod graph;
#[cfg(feature = "serde")]
pub mod problem;

pub use error::DsuError;
pub use forest::{DisjointSets, UnionPolicy};
