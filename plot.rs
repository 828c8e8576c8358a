use {std::path::PathBuf, anyhow::{Context, Error}, clap::Parser, flame::{sweep::Sweep, figure}};

/// Renders a sweep result file
#[derive(Parser)] #[command(author, version, about)] struct Cli {
	/// Verbosity level (-v for info, -vv for debug)
	#[arg(short, long, action = clap::ArgAction::Count)] verbose: u8,
	/// Result file written by `flame`
	input: PathBuf,
	/// SVG output, defaults to the input path with an .svg extension
	#[arg(short, long)] output: Option<PathBuf>,
	/// Number of species labelled on composition plots
	#[arg(short, long, default_value = "16")] labels: usize,
}

#[fehler::throws] fn main() {
	color_backtrace::install();
	let Cli{verbose, input, output, labels} = Cli::parse();
	env_logger::Builder::new().filter_level(match verbose { 0 => log::LevelFilter::Warn, 1 => log::LevelFilter::Info, _ => log::LevelFilter::Debug }).parse_default_env().init();
	let sweep = Sweep::from_yaml(&std::fs::read_to_string(&input).with_context(|| input.display().to_string())?).with_context(|| input.display().to_string())?;
	figure::plot(&output.unwrap_or_else(|| input.with_extension("svg")), &sweep, labels)?;
}
