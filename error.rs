use crate::model::Element;

#[derive(Debug, thiserror::Error)] pub enum Error {
	#[error("{fuel}: only hydrocarbon fuels are supported (contains {element})")] UnsupportedFuel { fuel: String, element: Element },
	#[error("unknown species {0}")] UnknownSpecies(String),
	#[error("species index {index} out of range ({len} species)")] SpeciesIndex { index: usize, len: usize },
	#[error("equilibrium solver: {0}")] Solver(String),
	#[error("a sweep needs at least 2 points, got {0}")] Points(usize),
	#[error("{len} values for {expected} species")] Length { expected: usize, len: usize },
	#[error(transparent)] Yaml(#[from] serde_yaml::Error),
	#[error(transparent)] Nul(#[from] std::ffi::NulError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
