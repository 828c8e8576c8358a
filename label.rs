use crate::{Result, model::Range, sweep::Peaks, rank::rank, equilibrium::check_index};

/// Species name anchored at its peak
#[derive(Debug, PartialEq, Clone)] pub struct Label {
	pub species: usize,
	pub name: String,
	pub equivalence_ratio: f64,
	pub mole_fraction: f64,
	/// Text offset from the anchor in points, y up
	pub offset: [i32; 2],
}

const offset: [i32; 2] = [20, 5];

/// Labels the `count` species with the largest peaks, without duplicates
///
/// Labels of species peaking in the rich half of the range are set left of their anchor so they stay inside the plot,
/// CO2 is set below its peak, away from the temperature curve.
pub fn labels(peaks: &Peaks, names: &[String], range: &Range, count: usize) -> Result<Box<[Label]>> {
	rank(&peaks.mole_fraction).top(count).iter().map(|&species| {
		let name = names[check_index(species, names.len())?].clone();
		let equivalence_ratio = peaks.equivalence_ratio[check_index(species, peaks.equivalence_ratio.len())?];
		let [mut x, mut y] = offset;
		if equivalence_ratio > range.midpoint() { x *= -2; }
		if name == "CO2" { y *= -8; }
		Ok(Label{species, name, equivalence_ratio, mole_fraction: peaks.mole_fraction[species], offset: [x, y]})
	}).collect()
}

#[cfg(test)] mod test {
	use super::*;
	fn names(names: &[&str]) -> Box<[String]> { names.iter().map(|&name| name.to_owned()).collect() }
	#[test] fn offsets() {
		let peaks = Peaks{mole_fraction: [0.7, 0.12, 0.05, 0.].into(), equivalence_ratio: [0.2, 0.6, 1.2, 0.].into()};
		let range = Range{min: 0.2, max: 1.4, points: 100};
		let labels = labels(&peaks, &names(&["N2", "CO2", "CO", "AR"]), &range, 16).unwrap();
		assert_eq!(labels.len(), 4);
		assert_eq!(labels.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(), ["N2", "CO2", "CO", "AR"]);
		assert_eq!(labels[0].offset, [20, 5]);
		assert_eq!(labels[1].offset, [20, -40]);
		assert_eq!(labels[2].offset, [-40, 5]); // 1.2 > 0.8
		assert_eq!((labels[2].equivalence_ratio, labels[2].mole_fraction), (1.2, 0.05));
	}
	#[test] fn count() {
		let peaks = Peaks{mole_fraction: [0.1, 0.3, 0.2].into(), equivalence_ratio: [0.3, 0.4, 0.5].into()};
		let labels = labels(&peaks, &names(&["A", "B", "C"]), &Range{min: 0., max: 1.4, points: 20}, 2).unwrap();
		assert_eq!(labels.iter().map(|l| l.species).collect::<Vec<_>>(), [1, 2]);
	}
	#[test] fn short_peaks() {
		let peaks = Peaks{mole_fraction: [0.1, 0.3].into(), equivalence_ratio: [0.3].into()};
		assert!(matches!(labels(&peaks, &names(&["A", "B"]), &Range{min: 0., max: 1., points: 2}, 16), Err(crate::Error::SpeciesIndex{index: 1, len: 1})));
	}
	#[test] fn missing_name() {
		let peaks = Peaks{mole_fraction: [0.1, 0.3].into(), equivalence_ratio: [0.3, 0.4].into()};
		assert!(matches!(labels(&peaks, &names(&["A"]), &Range{min: 0., max: 1., points: 2}, 16), Err(crate::Error::SpeciesIndex{index: 1, len: 1})));
	}
}
