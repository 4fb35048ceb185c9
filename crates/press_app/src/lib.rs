//! Generators for the Carver principles sheet and the roadmap planning tables.

pub mod carver;
pub mod plan;
pub mod principles;
pub mod roadmap;
