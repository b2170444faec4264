//! Urban Development Index aggregation

pub mod aggregation;

pub use aggregation::*;
