#![allow(non_upper_case_globals)]
use serde::{Serialize, Deserialize};
use strum_macros::{EnumString, IntoStaticStr, Display};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, EnumString, IntoStaticStr, Display, Clone, Copy)] pub enum Element { H, He, C, N, O, F, Cl, Ar }

/// Equilibrium condition: the pair of properties held fixed
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, EnumString, IntoStaticStr, Display, Clone, Copy)] pub enum Condition { TP, HP, UV }

pub const atm : f64 = 101325.; // Pa

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)] pub struct Range {
	pub min: f64,
	pub max: f64,
	pub points: usize,
}

impl Range {
	#[fehler::throws(crate::Error)] pub fn values(&self) -> Box<[f64]> {
		let Range{min, max, points} = *self;
		if points < 2 { fehler::throw!(crate::Error::Points(points)) }
		(0..points).map(|i| min + (max-min)*(i as f64)/((points-1) as f64)).collect()
	}
	pub fn midpoint(&self) -> f64 { (self.min+self.max)/2. }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] #[serde(default)] pub struct Isothermal {
	pub temperatures: Box<[f64]>, // K
	pub pressure: f64, // Pa
	pub equivalence_ratio: Range,
	pub labels: usize,
}
impl Default for Isothermal { fn default() -> Self { Self{temperatures: [1750., 2250., 2750.].into(), pressure: 30.*atm, equivalence_ratio: Range{min: 0.2, max: 1.4, points: 100}, labels: 16} } }

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] #[serde(default)] pub struct Adiabatic {
	pub temperature: f64, // K
	pub pressure: f64, // Pa
	pub equivalence_ratio: Range,
}
impl Default for Adiabatic { fn default() -> Self { Self{temperature: 700., pressure: 10.*101e3, equivalence_ratio: Range{min: 0., max: 1.4, points: 20}} } }

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)] #[serde(default)] pub struct Config {
	pub mechanism: String,
	pub phase: Option<String>,
	pub fuel: String,
	pub nitrogen_oxygen_ratio: f64,
	pub isothermal: Isothermal,
	pub adiabatic: Adiabatic,
}
impl Default for Config {
	fn default() -> Self { Self{
		mechanism: "Curran_GRI30_NO_LLNLC1C4NO".into(),
		phase: None,
		fuel: "IC8H18".into(),
		nitrogen_oxygen_ratio: 3.76,
		isothermal: Default::default(),
		adiabatic: Default::default(),
	}}
}

impl Config {
	pub fn from_yaml(yaml: &str) -> serde_yaml::Result<Self> { serde_yaml::from_str(yaml) }
}

#[cfg(test)] mod test {
	use super::*;
	#[test] fn range() {
		let values = Range{min: 0.2, max: 1.4, points: 100}.values().unwrap();
		assert_eq!(values.len(), 100);
		assert_eq!(values[0], 0.2);
		assert!(f64::abs(values[99]-1.4) < 1e-12);
		assert!(matches!(Range{min: 0., max: 1., points: 1}.values(), Err(crate::Error::Points(1))));
	}
	#[test] fn config() {
		let config = Config::from_yaml("fuel: C3H8\nadiabatic: {temperature: 350}\n").unwrap();
		assert_eq!(config.fuel, "C3H8");
		assert_eq!(config.adiabatic.temperature, 350.);
		assert_eq!(config.adiabatic.equivalence_ratio, Adiabatic::default().equivalence_ratio);
		assert_eq!(config.isothermal, Isothermal::default());
		assert_eq!(config.nitrogen_oxygen_ratio, 3.76);
	}
	#[test] fn names() {
		use std::str::FromStr;
		assert_eq!(Element::from_str("O").unwrap(), Element::O);
		assert_eq!(<&str>::from(Condition::UV), "UV");
	}
}
