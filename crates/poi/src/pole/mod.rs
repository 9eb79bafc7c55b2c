//! Pole-of-inaccessibility search.
//!
//! Purpose
//! - Branch-and-bound over square cells. Every cell knows the signed
//!   boundary distance at its center and an upper bound on the distance
//!   anywhere inside it; a priority frontier expands the globally most
//!   promising cell first, so any region whose bound falls within the
//!   tolerance of the incumbent can be dropped without losing the optimum.
//!
//! Code cross-refs: `Cell`, `Frontier`, `find_pole`, `SearchCfg`

mod frontier;
mod search;
mod types;

pub use frontier::Frontier;
pub use search::{find_pole, pole_of_inaccessibility};
pub use types::{Cell, Pole, SearchCfg};

#[cfg(test)]
mod tests;
