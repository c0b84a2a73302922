use anyhow::Result;
use clap::Parser;

use matbench_tools::export::{self, ExportArgs};

fn main() -> Result<()> {
    matbench_tools::init_tracing();
    let args = ExportArgs::parse();
    export::run(&args.into())?;
    Ok(())
}
