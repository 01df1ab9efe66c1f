use std::{path::Path, process, time::Instant};

use log::info;
use superperm_core::{
    Result, build_instance,
    cli::{self, CliArgs},
    logging,
};

const USAGE: &str = concat!(
    "Usage: make_tsp [options] <n>\n",
    "\n",
    "Writes the symmetric TSP instance encoding the minimal superpermutation\n",
    "problem on n symbols to <n>.tsp in TSPLIB format.\n",
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
    let positionals = args.expect_positionals(1, USAGE)?;
    let n = cli::parse_symbol_count(&positionals[0])?;

    let problem = build_instance(n)?;
    let path = format!("{n}.tsp");
    problem.write_to_file(Path::new(&path))?;

    info!(
        "make_tsp: n={n} dimension={} path={path} time={:.2}s",
        problem.dimension.unwrap_or_default(),
        now.elapsed().as_secs_f32()
    );
    Ok(())
}
