mod emit;
mod logging;
mod scripts_txt;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use argh::FromArgs;

#[derive(FromArgs)]
/// Unicode table maintenance for textrun.
struct Cli {
    /// print debug information
    #[argh(switch)]
    debug: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Gen(Gen),
}

/// Regenerate the script range table from UCD Scripts.txt.
#[derive(FromArgs)]
#[argh(subcommand, name = "gen")]
struct Gen {
    /// path to Scripts.txt
    #[argh(option)]
    scripts: PathBuf,

    /// file to write the generated module to
    #[argh(option, short = 'o')]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = argh::from_env();
    logging::setup(cli.debug);

    match cli.command {
        Command::Gen(opts) => generate(opts),
    }
}

fn generate(opts: Gen) -> anyhow::Result<()> {
    let text = fs::read_to_string(&opts.scripts)
        .with_context(|| format!("Failed to read {}", opts.scripts.display()))?;

    let version = scripts_txt::ucd_version(&text).unwrap_or("unknown");
    let ranges = scripts_txt::parse(&text)?;
    let ranges = scripts_txt::coalesce(ranges)?;
    log::info!("{} script ranges from UCD {}", ranges.len(), version);

    let module = emit::script_table(version, &ranges);
    fs::write(&opts.out, module)
        .with_context(|| format!("Failed to write {}", opts.out.display()))?;
    log::info!("Wrote {}", opts.out.display());

    Ok(())
}
