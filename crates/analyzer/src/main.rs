use analyzer::runtime::{boot, run, Cli};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    boot::init_logging();
    let (pipeline, config) = boot::boot(&cli)?;
    run::run(&cli.path, &config, &pipeline)?;
    Ok(())
}
