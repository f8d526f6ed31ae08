use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;

pub fn init(verbose: bool, quiet: bool) -> Result<()> {
    init_with_level(level(verbose, quiet))?;

    Ok(())
}

fn level(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::Debug
    } else if quiet {
        Level::Warn
    } else {
        Level::Info
    }
}
