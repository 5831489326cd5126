use anyhow::{Context, Result};
use clap::Parser;
use depot_logger::Logger;
use depot_shell::{Cli, Command, script};
use std::io::{Read, Write};
use std::path::Path;
use std::{fs, io};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let _logger = Logger::from_config("depot", &config.logging)?;

    let mut warehouse = depot::init(&config);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Run { script: path } => {
            let raw = read_script(&path)?;
            let steps = script::parse(&raw)
                .with_context(|| format!("Script {} is malformed", path.display()))?;
            script::run(&mut warehouse, steps, &mut out)?;
        },
        Command::Layout {} => {
            writeln!(out, "{}", warehouse.occupancy_report_json()?)?;
        },
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).context("Failed to read script from stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read script {}", path.display()))
}
