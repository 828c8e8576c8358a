//! Interface to the external chemical equilibrium solver
use {serde::{Serialize, Deserialize}, crate::{Error, Result, model::{Element, Condition}}};

/// Thermodynamic state of the gas phase
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub struct State {
	pub temperature: f64, // K
	pub pressure: f64, // Pa
	/// Per species, in solver order. Input proportions need not sum to 1
	pub mole_fractions: Box<[f64]>,
}

/// A solver loaded with a reaction mechanism
///
/// The gas state is an explicit input of [`Equilibrium::equilibrate`] rather than a property of the solver,
/// so the dependency of each sweep point on its own initial state shows in the signature.
pub trait Equilibrium {
	fn species_len(&self) -> usize;
	fn species_index(&self, name: &str) -> Result<usize>;
	fn species_name(&self, index: usize) -> Result<String>;
	/// Atoms of `element` in `species`, 0 when the mechanism has no such element
	fn atoms(&self, species: usize, element: Element) -> Result<f64>;
	/// Sets (T, P, X) from `state` then equilibrates holding `condition` fixed
	fn equilibrate(&mut self, state: &State, condition: Condition) -> Result<State>;

	fn species_names(&self) -> Result<Box<[String]>> { (0..self.species_len()).map(|k| self.species_name(k)).collect() }
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> { if index < len { Ok(index) } else { Err(Error::SpeciesIndex{index, len}) } }
