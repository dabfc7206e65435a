mod render;

use anyhow::Result;
use clap::Parser;
use mdindex_core::{Config, IndexBuilder};
use render::{ColorMode, Renderer};
use std::path::PathBuf;
use std::process::ExitCode;

/// mdindex — generate a markdown index page from a folder of write-ups
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory to scan. Defaults to the current directory.
    #[arg(default_value = ".")]
    root: PathBuf,
    /// Where to write the generated page, relative to the root.
    /// Overrides the `output` setting in mdindex.toml.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdindex: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let renderer = Renderer::new(cli.color.use_color());

    let mut config = Config::load(&cli.root)?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let builder = IndexBuilder::with_config(config);
    let report = builder.build()?;
    renderer.print_report(&report);

    Ok(())
}
