mod args;
mod casa;
mod error;
mod extract;
mod plot;
mod table;
mod utils;

use clap::Parser;
use log::{debug, info};

use args::Args;
use casa::CasaDataset;
use extract::extract_uv;
use plot::UvFigure;
use table::MAIN_TABLE;
use utils::DynError;

fn run(args: &Args) -> Result<(), DynError> {
    let dataset = CasaDataset::open(&args.input)?;
    info!("opened {}", dataset.path().display());

    let mut table = dataset.into_table(MAIN_TABLE)?;
    debug!("reading coordinates from {}", table.layout().describe());
    if args.summary {
        println!("{}", table.summary());
    }

    let coverage = extract_uv(&mut table)?;

    let figure = UvFigure::new(args.output_path(), args.figure_size())?;
    debug!("rendering {:?} figure", figure.format());
    let written = figure.present(&coverage)?;
    info!(
        "plotted {} uv points and their conjugates to {}",
        coverage.len(),
        written.display()
    );
    Ok(())
}

fn main() -> Result<(), DynError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("args:\n{:?}", &args);
    run(&args)
}
