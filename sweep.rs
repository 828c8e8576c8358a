use {serde::{Serialize, Deserialize}, itertools::Itertools, log::{info, debug}};
use crate::{Error, Result, model::{Condition, Range, atm}, equilibrium::{State, Equilibrium}, mixture::Mixture};

/// Equilibrium reached from one point of the sweep
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub struct Sample {
	pub equivalence_ratio: f64,
	pub temperature: f64,
	pub pressure: f64,
	pub mole_fractions: Box<[f64]>,
}

/// Per species maximum mole fraction over a sweep, and where it occurred
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub struct Peaks {
	pub mole_fraction: Box<[f64]>,
	pub equivalence_ratio: Box<[f64]>,
}

impl Peaks {
	pub fn new(species_len: usize) -> Self { Self{mole_fraction: vec![0.; species_len].into(), equivalence_ratio: vec![0.; species_len].into()} }
	/// Keeps the first equivalence ratio reaching the maximum
	pub fn update(&mut self, equivalence_ratio: f64, mole_fractions: &[f64]) {
		assert!(mole_fractions.len() == self.mole_fraction.len());
		for (k, &x) in mole_fractions.iter().enumerate() {
			if x > self.mole_fraction[k] {
				self.mole_fraction[k] = x;
				self.equivalence_ratio[k] = equivalence_ratio;
			}
		}
	}
	pub fn len(&self) -> usize { self.mole_fraction.len() }
}

impl<'t> FromIterator<&'t Sample> for Peaks {
	fn from_iter<I: IntoIterator<Item=&'t Sample>>(samples: I) -> Self {
		let mut samples = samples.into_iter().peekable();
		let mut peaks = Peaks::new(samples.peek().map(|s| s.mole_fractions.len()).unwrap_or(0));
		for Sample{equivalence_ratio, mole_fractions, ..} in samples { peaks.update(*equivalence_ratio, mole_fractions); }
		peaks
	}
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub struct Isotherm {
	pub temperature: f64,
	pub pressure: f64,
	pub samples: Box<[Sample]>,
	pub peaks: Peaks,
}

/// Equilibrium composition at fixed temperature and pressure over the equivalence ratio range
pub fn isothermal(solver: &mut impl Equilibrium, mixture: &Mixture, temperature: f64, pressure: f64, range: &Range) -> Result<Isotherm> {
	info!("T={temperature}K P={:.1}atm φ=[{}, {}]", pressure/atm, range.min, range.max);
	let samples = range.values()?.iter().map(|&equivalence_ratio| {
		let equilibrium = solver.equilibrate(&State{temperature, pressure, mole_fractions: mixture.mole_fractions(equivalence_ratio)}, Condition::TP)?;
		debug!("φ={equivalence_ratio:.3}: T={:.0}K", equilibrium.temperature);
		let State{temperature, pressure, mole_fractions} = equilibrium;
		Ok(Sample{equivalence_ratio, temperature, pressure, mole_fractions})
	}).collect::<Result<Box<[Sample]>>>()?;
	let peaks = samples.iter().collect();
	Ok(Isotherm{temperature, pressure, samples, peaks})
}

/// Heywood Fig. 3.10
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub struct Isothermal {
	pub species: Box<[String]>,
	pub equivalence_ratio: Range,
	pub isotherms: Box<[Isotherm]>,
}

impl Isothermal {
	/// Samples and peaks hold one value per species
	pub fn check(&self) -> Result<()> {
		let expected = self.species.len();
		for Isotherm{samples, peaks, ..} in &*self.isotherms {
			for len in samples.iter().map(|s| s.mole_fractions.len()).chain([peaks.mole_fraction.len(), peaks.equivalence_ratio.len()]) {
				if len != expected { return Err(Error::Length{expected, len}); }
			}
		}
		Ok(())
	}
}

pub fn isothermal_figure(solver: &mut impl Equilibrium, mixture: &Mixture, temperatures: &[f64], pressure: f64, range: &Range) -> Result<Isothermal> {
	let species = solver.species_names()?;
	let isotherms = temperatures.iter().map(|&temperature| isothermal(&mut *solver, mixture, temperature, pressure, range)).collect::<Result<_>>()?;
	Ok(Isothermal{species, equivalence_ratio: *range, isotherms})
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)] pub struct AdiabaticSample {
	pub equivalence_ratio: f64,
	/// Adiabatic flame temperature at constant pressure (HP)
	pub constant_pressure_temperature: f64,
	/// Adiabatic flame temperature at constant volume (UV)
	pub constant_volume_temperature: f64,
	pub constant_volume_pressure: f64, // atm
}

/// Heywood Fig. 3.11
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub struct Adiabatic {
	pub temperature: f64,
	pub pressure: f64,
	pub equivalence_ratio: Range,
	pub samples: Box<[AdiabaticSample]>,
}

/// Equilibrates each mixture at constant enthalpy and pressure, then again from the same initial state at constant energy and volume
pub fn adiabatic(solver: &mut impl Equilibrium, mixture: &Mixture, temperature: f64, pressure: f64, range: &Range) -> Result<Adiabatic> {
	info!("Adiabatic from T={temperature}K P={:.2}atm", pressure/atm);
	let samples = range.values()?.iter().map(|&equivalence_ratio| {
		let ref initial = State{temperature, pressure, mole_fractions: mixture.mole_fractions(equivalence_ratio)};
		let constant_pressure = solver.equilibrate(initial, Condition::HP)?;
		let constant_volume = solver.equilibrate(initial, Condition::UV)?;
		debug!("φ={equivalence_ratio:.3}: Tp={:.0}K Tv={:.0}K Pv={:.1}atm", constant_pressure.temperature, constant_volume.temperature, constant_volume.pressure/atm);
		Ok(AdiabaticSample{
			equivalence_ratio,
			constant_pressure_temperature: constant_pressure.temperature,
			constant_volume_temperature: constant_volume.temperature,
			constant_volume_pressure: constant_volume.pressure/atm,
		})
	}).collect::<Result<Box<[AdiabaticSample]>>>()?;
	info!("Tp: {:.0}", samples.iter().map(|s| s.constant_pressure_temperature).format(" "));
	Ok(Adiabatic{temperature, pressure, equivalence_ratio: *range, samples})
}

/// Result file
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] pub enum Sweep {
	Isothermal(Isothermal),
	Adiabatic(Adiabatic),
}

impl Sweep {
	pub fn to_yaml(&self) -> serde_yaml::Result<String> { serde_yaml::to_string(self) }
	pub fn from_yaml(yaml: &str) -> Result<Self> {
		let sweep: Sweep = serde_yaml::from_str(yaml)?;
		if let Sweep::Isothermal(isothermal) = &sweep { isothermal.check()?; }
		Ok(sweep)
	}
}

#[cfg(test)] mod test {
	use super::*;
	fn sample(equivalence_ratio: f64, mole_fractions: &[f64]) -> Sample { Sample{equivalence_ratio, temperature: 2000., pressure: atm, mole_fractions: mole_fractions.into()} }
	#[test] fn peaks() {
		let samples = [sample(0.5, &[0.1, 0., 0.2]), sample(1.0, &[0.3, 0., 0.2]), sample(1.5, &[0.3, 0., 0.1])];
		let peaks: Peaks = samples.iter().collect();
		assert_eq!(&*peaks.mole_fraction, &[0.3, 0., 0.2]);
		assert_eq!(&*peaks.equivalence_ratio, &[1.0, 0., 0.5]); // First of equal maxima, untouched when never present
	}
	#[test] fn mismatched() {
		let isotherm = |mole_fractions: &[f64]| { let samples: Box<[Sample]> = [sample(0.5, mole_fractions)].into(); Isotherm{temperature: 2000., pressure: atm, peaks: samples.iter().collect(), samples} };
		let mut figure = Isothermal{species: ["N2", "CO2"].map(String::from).into(), equivalence_ratio: Range{min: 0.5, max: 1., points: 2}, isotherms: [isotherm(&[0.7, 0.1])].into()};
		assert!(Sweep::from_yaml(&Sweep::Isothermal(figure.clone()).to_yaml().unwrap()).is_ok());
		figure.isotherms = [isotherm(&[0.7, 0.1]), isotherm(&[0.7])].into();
		assert!(matches!(Sweep::from_yaml(&Sweep::Isothermal(figure).to_yaml().unwrap()), Err(Error::Length{expected: 2, len: 1})));
		assert!(matches!(Sweep::from_yaml("Isothermal: 1"), Err(Error::Yaml(_))));
	}
	#[test] fn empty() { assert_eq!(std::iter::empty::<&Sample>().collect::<Peaks>().len(), 0); }
}
