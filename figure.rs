use {std::path::Path, plotters::prelude::*, float_pretty_print::PrettyPrintFloat};
use crate::{model::atm, sweep::{Isothermal, Isotherm, Adiabatic, Sweep}, label::{Label, labels}};

const minimum_mole_fraction : f64 = 1e-4;
const font : &str = "sans-serif";

/// Mole fractions at fixed temperature and pressure: one panel per isotherm
#[fehler::throws(anyhow::Error)] pub fn isothermal(path: &Path, isothermal: &Isothermal, label_count: usize) {
	isothermal.check()?;
	let Isothermal{species, equivalence_ratio: range, isotherms} = isothermal;
	let root = SVGBackend::new(path, (640*isotherms.len().max(1) as u32, 720)).into_drawing_area();
	root.fill(&WHITE)?;
	for (panel, Isotherm{temperature, pressure, samples, peaks}) in root.split_evenly((1, isotherms.len().max(1))).iter().zip(&**isotherms) {
		let mut chart = ChartBuilder::on(panel)
			.caption(format!("Pressure = {}atm, Temperature = {}K", PrettyPrintFloat(pressure/atm), PrettyPrintFloat(*temperature)), (font, 20))
			.margin(16).x_label_area_size(40).y_label_area_size(64).right_y_label_area_size(64)
			.build_cartesian_2d(range.min..range.max, (minimum_mole_fraction..1.).log_scale())?
			.set_secondary_coord(range.min..range.max, 0f64..3500.);
		chart.configure_mesh().bold_line_style(GREEN.mix(0.3)).light_line_style(GREEN.mix(0.1)).x_desc("Equivalence Ratio").y_desc("Mole Fraction").draw()?;
		chart.configure_secondary_axes().y_desc("Temperature [K]").draw()?;
		for k in 0..species.len() {
			chart.draw_series(LineSeries::new(samples.iter().map(|s| (s.equivalence_ratio, f64::max(minimum_mole_fraction, s.mole_fractions[k]))), Palette99::pick(k).stroke_width(1)))?;
		}
		chart.draw_secondary_series(LineSeries::new(samples.iter().map(|s| (s.equivalence_ratio, s.temperature)), BLACK.stroke_width(2)))?;
		let labels = labels(peaks, species, range, label_count)?;
		chart.draw_series(labels.iter().map(|Label{name, equivalence_ratio, mole_fraction, offset: [x, y], ..}|
			EmptyElement::at((*equivalence_ratio, f64::max(minimum_mole_fraction, *mole_fraction))) + Text::new(name.clone(), (*x, -*y), (font, 16))
		))?;
	}
	root.present()?;
	log::info!("{}", path.display());
}

/// Adiabatic flame temperatures at constant pressure and constant volume, and the constant volume pressure
#[fehler::throws(anyhow::Error)] pub fn adiabatic(path: &Path, Adiabatic{temperature, pressure, equivalence_ratio: range, samples}: &Adiabatic) {
	let root = SVGBackend::new(path, (1024, 768)).into_drawing_area();
	root.fill(&WHITE)?;
	let mut chart = ChartBuilder::on(&root)
		.caption(format!("Initial state: {}K, {:.2}atm", PrettyPrintFloat(*temperature), pressure/atm), (font, 20))
		.margin(16).x_label_area_size(40).y_label_area_size(64).right_y_label_area_size(64)
		.build_cartesian_2d(range.min..range.max, (0f64..3600.).with_key_points((0..9).map(|i| 400.*i as f64).collect()))?
		.set_secondary_coord(range.min..range.max, 0f64..80.);
	chart.configure_mesh().bold_line_style(GREEN.mix(0.3)).light_line_style(GREEN.mix(0.1)).x_desc("Equivalence Ratio").y_desc("Adiabatic Flame Temperature [K]").y_label_formatter(&|T| format!("{T:.0}")).draw()?;
	chart.configure_secondary_axes().y_desc("Pressure, atm").draw()?;
	chart.draw_series(LineSeries::new(samples.iter().map(|s| (s.equivalence_ratio, s.constant_volume_temperature)), RED.stroke_width(2)))?
		.label("T_v").legend(|(x, y)| PathElement::new(vec![(x, y), (x+20, y)], &RED));
	chart.draw_series(LineSeries::new(samples.iter().map(|s| (s.equivalence_ratio, s.constant_pressure_temperature)), GREEN.stroke_width(2)))?
		.label("T_p").legend(|(x, y)| PathElement::new(vec![(x, y), (x+20, y)], &GREEN));
	chart.draw_secondary_series(DashedLineSeries::new(samples.iter().map(|s| (s.equivalence_ratio, s.constant_volume_pressure)), 8, 4, BLUE.stroke_width(2)))?
		.label("P_v").legend(|(x, y)| PathElement::new(vec![(x, y), (x+20, y)], &BLUE));
	chart.configure_series_labels().position(SeriesLabelPosition::UpperLeft).background_style(WHITE.mix(0.8)).border_style(BLACK).draw()?;
	root.present()?;
	log::info!("{}", path.display());
}

#[fehler::throws(anyhow::Error)] pub fn plot(path: &Path, sweep: &Sweep, label_count: usize) {
	match sweep {
		Sweep::Isothermal(isothermal) => self::isothermal(path, isothermal, label_count)?,
		Sweep::Adiabatic(adiabatic) => self::adiabatic(path, adiabatic)?,
	}
}
