//! Shared data models

pub mod city;

pub use city::{CityIndicators, SubIndices};
