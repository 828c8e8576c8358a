use {std::path::{Path, PathBuf}, anyhow::{Context, Result}, clap::{Parser, Subcommand}, log::info};
use flame::{model::Config, cantera::Solution, Mixture, sweep::{self, Sweep}};

/// Equilibrium composition and adiabatic flame temperature of fuel/air mixtures over equivalence ratio
#[derive(Parser)] #[command(author, version, about)] struct Cli {
	/// Verbosity level (-v for info, -vv for debug)
	#[arg(short, long, action = clap::ArgAction::Count)] verbose: u8,
	/// YAML configuration (defaults reproduce Heywood Fig. 3.10 and 3.11 for iso-octane)
	#[arg(short, long)] config: Option<PathBuf>,
	/// Mechanism file, or name of a mechanism in the Cantera data directory
	#[arg(short, long)] mechanism: Option<String>,
	/// Directory receiving the result files and figures
	#[arg(short, long, default_value = ".")] output: PathBuf,
	#[command(subcommand)] command: Command,
}

#[derive(Subcommand)] enum Command {
	/// Equilibrium composition at fixed temperatures and pressure (Fig. 3.10)
	Isothermal,
	/// Adiabatic flame temperature at constant pressure and at constant volume (Fig. 3.11)
	Adiabatic,
}

fn mechanism(name: &str) -> String { if Path::new(name).exists() { name.to_owned() } else { format!("/usr/local/share/cantera/data/{name}.yaml") } }

fn main() -> Result<()> {
	color_backtrace::install();
	let Cli{verbose, config, mechanism: mechanism_override, output, command} = Cli::parse();
	env_logger::Builder::new().filter_level(match verbose { 0 => log::LevelFilter::Warn, 1 => log::LevelFilter::Info, _ => log::LevelFilter::Debug }).parse_default_env().init();
	let mut config = match config {
		Some(path) => Config::from_yaml(&std::fs::read_to_string(&path).with_context(|| path.display().to_string())?).with_context(|| path.display().to_string())?,
		None => Config::default(),
	};
	if let Some(mechanism) = mechanism_override { config.mechanism = mechanism; }
	let path = mechanism(&config.mechanism);
	let phase = config.phase.clone().unwrap_or_else(|| if path.contains("gri30.") { "gri30".into() } else { "gas".into() });
	let mut solver = Solution::new(&path, &phase).with_context(|| path.clone())?;
	let mixture = Mixture::new(&solver, &config.fuel, config.nitrogen_oxygen_ratio)?;
	eprintln!("Equilibrium of {} in air with {path}, this takes a while", config.fuel);
	let (name, figure) = match command {
		Command::Isothermal => {
			let flame::model::Isothermal{temperatures, pressure, equivalence_ratio, ..} = &config.isothermal;
			("isothermal", Sweep::Isothermal(sweep::isothermal_figure(&mut solver, &mixture, temperatures, *pressure, equivalence_ratio)?))
		}
		Command::Adiabatic => {
			let flame::model::Adiabatic{temperature, pressure, equivalence_ratio} = &config.adiabatic;
			("adiabatic", Sweep::Adiabatic(sweep::adiabatic(&mut solver, &mixture, *temperature, *pressure, equivalence_ratio)?))
		}
	};
	std::fs::create_dir_all(&output)?;
	let file = output.join(name).with_extension("yaml");
	std::fs::write(&file, figure.to_yaml()?).with_context(|| file.display().to_string())?;
	info!("{}", file.display());
	#[cfg(feature="plot")] flame::figure::plot(&output.join(name).with_extension("svg"), &figure, config.isothermal.labels)?;
	Ok(())
}
