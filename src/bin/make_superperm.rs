use std::{fs, path::Path, process, time::Instant};

use log::info;
use superperm_core::{
    Result, decode_tour,
    cli::{self, CliArgs},
    logging,
};
use tsplib::tour::SolverTour;

const USAGE: &str = concat!(
    "Usage: make_superperm [options] <n> <solution-file>\n",
    "\n",
    "Decodes a solver tour for the minimal superpermutation instance on n\n",
    "symbols (Concorde .sol or TSPLIB tour file) and writes the resulting\n",
    "superpermutation to min_superperm_<n>.txt.\n",
    "\n",
    "Options:\n",
    "  --log-level <level>   error|warn|info|debug|trace|off (default: warn)\n",
    "  --log-format <fmt>    compact|pretty (default: compact)\n",
    "  --log-timestamp / --no-log-timestamp\n",
);

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let now = Instant::now();
    let args = CliArgs::from_env(USAGE)?;
    logging::init_logger(&args.log)?;
    let positionals = args.expect_positionals(2, USAGE)?;
    let n = cli::parse_symbol_count(&positionals[0])?;

    let tour = SolverTour::from_file(Path::new(&positionals[1]))?;
    let superperm = decode_tour(n, &tour.nodes)?;

    let path = format!("min_superperm_{n}.txt");
    fs::write(&path, format!("{superperm}\n"))?;

    println!("Superpermutation length: {}", superperm.len());
    info!(
        "make_superperm: n={n} length={} path={path} time={:.2}s",
        superperm.len(),
        now.elapsed().as_secs_f32()
    );
    Ok(())
}
