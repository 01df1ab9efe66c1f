use std::{fs, path::Path, process, time::Instant};

use log::info;
use superperm_core::{
    Result, Verification,
    cli::{self, CliArgs},
    logging, verify_superperm,
};

const USAGE: &str = concat!(
    "Usage: verify_superperm [options] <n> <superperm-file>\n",
    "\n",
    "Checks that the first line of the given file contains every permutation\n",
    "of 1..n as a contiguous substring. An incomplete superpermutation is\n",
    "reported along with the first missing permutation.\n",
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

    let text = fs::read_to_string(Path::new(&positionals[1]))?;
    let candidate = text.lines().next().unwrap_or_default();

    match verify_superperm(n, candidate)? {
        Verification::Complete => {
            println!("Superpermutation is complete for n={n}");
        }
        Verification::Missing(perm) => {
            println!("Superpermutation not complete. Missing permutation: {perm}");
        }
    }

    info!(
        "verify_superperm: n={n} length={} time={:.2}s",
        candidate.len(),
        now.elapsed().as_secs_f32()
    );
    Ok(())
}
