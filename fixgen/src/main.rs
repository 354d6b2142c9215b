use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use fixgen::{generate, GenParams, Manifest, DEFAULT_CASES, DEFAULT_SPAN_BOUND, DEFAULT_START_BOUND};

#[derive(Parser)]
#[command(
    name = "fixgen",
    version,
    about = "happy-number benchmark fixture generator"
)]
struct Cli {
    /// Number of benchmark cases to generate.
    #[arg(long, default_value_t = DEFAULT_CASES)]
    cases: u32,
    /// Upper bound (inclusive) for the range start draw.
    #[arg(long, default_value_t = DEFAULT_START_BOUND)]
    start_bound: u64,
    /// Upper bound (inclusive) for the range span draw.
    #[arg(long, default_value_t = DEFAULT_SPAN_BOUND)]
    span_bound: u64,
    /// RNG seed for reproducible fixtures; a fresh clock-derived seed is used
    /// when absent.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional path for a JSON manifest of the run.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Re-classify every emitted range and fail on any count mismatch.
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(clock_seed);
    let params = GenParams::new(cli.cases, cli.start_bound, cli.span_bound, seed)
        .context("invalid generation parameters")?;

    let fixtures = generate(&params);
    for case in &fixtures {
        println!("{case}");
    }

    if cli.verify {
        for case in &fixtures {
            if !case.verify() {
                anyhow::bail!(
                    "case {} count {} does not match a fresh count of [{}, {}]",
                    case.index,
                    case.happy_count,
                    case.start,
                    case.end
                );
            }
        }
    }

    if let Some(path) = &cli.json {
        write_manifest_json(path, &Manifest::new(&params, fixtures))?;
    }

    Ok(())
}

/// The reference generator is unseeded; a clock-derived seed preserves that
/// run-to-run behavior while keeping every run replayable via the manifest.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x5eed, |elapsed| elapsed.as_nanos() as u64)
}

fn write_manifest_json(path: &Path, manifest: &Manifest) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create manifest dir {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(manifest).context("serialize manifest")?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
