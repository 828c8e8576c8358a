use crate::{Error, Result, model::Element, equilibrium::Equilibrium};

/// Fuel/air mixture parametrized by equivalence ratio
#[derive(Debug, PartialEq, Clone)] pub struct Mixture {
	pub species_len: usize,
	pub fuel: usize,
	pub oxygen: usize,
	pub nitrogen: usize,
	/// O2 to fully oxidize one mole of fuel
	pub stoichiometric_oxygen: f64,
	pub nitrogen_oxygen_ratio: f64,
}

impl Mixture {
	/// Only hydrocarbon fuels are supported: fails before any equilibrium computation otherwise
	pub fn new(solver: &impl Equilibrium, fuel_name: &str, nitrogen_oxygen_ratio: f64) -> Result<Self> {
		let fuel = solver.species_index(fuel_name)?;
		let [oxygen, nitrogen] = [solver.species_index("O2")?, solver.species_index("N2")?];
		for element in [Element::O, Element::N] {
			if solver.atoms(fuel, element)? > 0. { return Err(Error::UnsupportedFuel{fuel: fuel_name.to_owned(), element}); }
		}
		let stoichiometric_oxygen = solver.atoms(fuel, Element::C)? + 1./4.*solver.atoms(fuel, Element::H)?;
		log::info!("{fuel_name}: {stoichiometric_oxygen} O2 at stoichiometry");
		Ok(Self{species_len: solver.species_len(), fuel, oxygen, nitrogen, stoichiometric_oxygen, nitrogen_oxygen_ratio})
	}

	/// Amount proportions: φ mol fuel for the stoichiometric amount of air
	pub fn mole_fractions(&self, equivalence_ratio: f64) -> Box<[f64]> {
		let mut X = vec![0.; self.species_len].into_boxed_slice();
		X[self.fuel] = equivalence_ratio;
		X[self.oxygen] = self.stoichiometric_oxygen;
		X[self.nitrogen] = self.stoichiometric_oxygen*self.nitrogen_oxygen_ratio;
		X
	}
}
