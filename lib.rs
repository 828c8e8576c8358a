#![allow(non_snake_case,non_upper_case_globals,mixed_script_confusables)]
//! Adiabatic flame temperature and equilibrium composition of fuel/air mixtures over equivalence ratio sweeps
pub mod model;
mod error; pub use error::{Error, Result};
pub mod equilibrium; pub use equilibrium::{State, Equilibrium};
#[cfg(feature="cantera")] pub mod cantera;
pub mod mixture; pub use mixture::Mixture;
pub mod sweep;
pub mod rank; pub use rank::{Rank, rank};
pub mod label;
#[cfg(feature="plot")] pub mod figure;
