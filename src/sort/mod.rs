pub mod counting;

pub use counting::{OpCounter, SortAlgorithm};
