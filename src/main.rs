#[macro_use]
extern crate log;

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use structopt::StructOpt;

use parkinglot::{config::load_config, logger::install_logger, Session};

#[derive(Debug, StructOpt)]
#[structopt(name = "parkinglot", about = "A command-driven parking lot.")]
struct Opt {
    /// The file to read commands from. Reads stdin if omitted.
    #[structopt(parse(from_os_str))]
    file: Option<PathBuf>,
    /// The config file.
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// The address of the parking lot. Overrides the config file.
    #[structopt(long)]
    address: Option<String>,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let mut config = load_config(opt.config.as_deref())?;
    if let Some(address) = opt.address {
        config.address = address;
    }

    if let Err(err) = install_logger("parkinglot", config.log_level_filter()) {
        eprintln!("failed to install the logger: {:?}", err);
    }

    trace!("starting parkinglot...");
    let mut session = Session::new(&config.address);
    let stdout = io::stdout();
    let mut output = stdout.lock();
    match &opt.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            session.run(BufReader::new(file), &mut output)?;
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut output)?;
        }
    }

    Ok(())
}
