use anyhow::Result;
use clap::Parser;

use matbench_tools::generate::{self, GenerateArgs};

fn main() -> Result<()> {
    matbench_tools::init_tracing();
    let args = GenerateArgs::parse();
    generate::run(&args.into())?;
    Ok(())
}
