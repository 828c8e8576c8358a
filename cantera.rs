use {std::{ffi::{CStr, CString}, os::raw::{c_char, c_int}}, crate::{Error, Result, model::{Element, Condition}, equilibrium::{State, Equilibrium, check_index}}};

#[link(name = "cantera")] extern "C" {
	fn thermo_newFromFile(file_name: *const c_char, phase_name: *const c_char) -> c_int;
	fn thermo_del(n: c_int) -> c_int;
	fn thermo_nSpecies(n: c_int) -> usize;
	fn thermo_speciesIndex(n: c_int, name: *const c_char) -> usize;
	fn thermo_elementIndex(n: c_int, name: *const c_char) -> usize;
	fn thermo_nElements(n: c_int) -> usize;
	fn thermo_nAtoms(n: c_int, k: usize, m: usize) -> f64;
	fn thermo_getSpeciesName(n: c_int, m: usize, len: usize, buffer: *mut c_char) -> c_int;
	fn thermo_setTemperature(n: c_int, t: f64) -> c_int;
	fn thermo_setPressure(n: c_int, p: f64) -> c_int;
	fn thermo_setMoleFractions(n: c_int, len: usize, x: *const f64, norm: c_int) -> c_int;
	fn thermo_temperature(n: c_int) -> f64;
	fn thermo_pressure(n: c_int) -> f64;
	fn thermo_getMoleFractions(n: c_int, len: usize, x: *mut f64) -> c_int;
	fn thermo_equilibrate(n: c_int, XY: *const c_char, solver: *const c_char, rtol: f64, max_steps: c_int, max_iterations: c_int, log_level: c_int) -> c_int;
	fn ct_getCanteraError(len: c_int, buffer: *mut c_char) -> c_int;
}

fn error() -> Error {
	let mut buffer = [0 as c_char; 1024];
	unsafe{ct_getCanteraError(buffer.len() as c_int, buffer.as_mut_ptr())};
	Error::Solver(unsafe{CStr::from_ptr(buffer.as_ptr())}.to_string_lossy().trim().to_owned())
}
fn check(status: c_int) -> Result<()> { if status < 0 { Err(error()) } else { Ok(()) } }

/// Ideal gas phase loaded from a Cantera mechanism file
pub struct Solution { phase: c_int, species_len: usize }

impl Solution {
	pub fn new(path: &str, phase: &str) -> Result<Self> {
		let (path, phase) = (CString::new(path)?, CString::new(phase)?);
		let phase = unsafe{thermo_newFromFile(path.as_ptr(), phase.as_ptr())};
		check(phase)?;
		let species_len = unsafe{thermo_nSpecies(phase)};
		log::debug!("{species_len} species");
		Ok(Self{phase, species_len})
	}
}

impl Drop for Solution { fn drop(&mut self) { unsafe{thermo_del(self.phase)}; } }

impl Equilibrium for Solution {
	fn species_len(&self) -> usize { self.species_len }
	fn species_index(&self, name: &str) -> Result<usize> {
		let specie = CString::new(name)?;
		let index = unsafe{thermo_speciesIndex(self.phase, specie.as_ptr())};
		if index < self.species_len { Ok(index) } else { Err(Error::UnknownSpecies(name.to_owned())) }
	}
	fn species_name(&self, index: usize) -> Result<String> {
		let index = check_index(index, self.species_len)?;
		let mut specie = [0 as c_char; 64];
		check(unsafe{thermo_getSpeciesName(self.phase, index, specie.len(), specie.as_mut_ptr())})?;
		Ok(unsafe{CStr::from_ptr(specie.as_ptr())}.to_string_lossy().into_owned())
	}
	fn atoms(&self, species: usize, element: Element) -> Result<f64> {
		let species = check_index(species, self.species_len)?;
		let name = CString::new(<&str>::from(element))?;
		let element = unsafe{thermo_elementIndex(self.phase, name.as_ptr())};
		if element >= unsafe{thermo_nElements(self.phase)} { return Ok(0.); }
		Ok(unsafe{thermo_nAtoms(self.phase, species, element)})
	}
	fn equilibrate(&mut self, State{temperature, pressure, mole_fractions}: &State, condition: Condition) -> Result<State> {
		assert!(mole_fractions.len() == self.species_len);
		let phase = self.phase;
		check(unsafe{thermo_setMoleFractions(phase, mole_fractions.len(), mole_fractions.as_ptr(), 1)})?; // /!\ Needs to be set before pressure
		check(unsafe{thermo_setTemperature(phase, *temperature)})?;
		check(unsafe{thermo_setPressure(phase, *pressure)})?; // /!\ Needs to be set after mole fractions
		let (XY, solver) = (CString::new(<&str>::from(condition))?, CString::new("auto")?);
		check(unsafe{thermo_equilibrate(phase, XY.as_ptr(), solver.as_ptr(), 1e-9, 50000, 100, 0)})?;
		let mut mole_fractions = vec![0.; self.species_len].into_boxed_slice();
		check(unsafe{thermo_getMoleFractions(phase, mole_fractions.len(), mole_fractions.as_mut_ptr())})?;
		Ok(State{temperature: unsafe{thermo_temperature(phase)}, pressure: unsafe{thermo_pressure(phase)}, mole_fractions})
	}
}
