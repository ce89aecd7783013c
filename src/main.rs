use anyhow::Result;
use clap::Parser;
use glider_icons::icon_gen::{self, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "glider-icons",
    version,
    about = "Generate the glider toolbar icons (16, 48 and 128 px PNG)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args.output)?;
    Ok(())
}
