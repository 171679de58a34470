use clap::Parser;
use std::path::PathBuf;

use crate::utils::default_output_path;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Plot the UV coverage of an interferometric MeasurementSet",
    long_about = None,
    after_help = "Examples:\n  uv_coverage WSRT_LFFE.ms\n  uv_coverage WSRT_LFFE.ms --output coverage.svg --width 1600 --height 1600\n  uv_coverage WSRT_LFFE.ms --summary\n"
)]
pub struct Args {
    /// Path to the data resource (casacore table or MeasurementSet)
    pub input: PathBuf,

    /// Output image; `.svg` writes a vector figure, anything else a bitmap
    /// (default: <input name>_uv.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Print row count, columns and coordinate layout of the MAIN table
    #[arg(long)]
    pub summary: bool,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    pub fn figure_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn single_positional_path_uses_defaults() {
        let args = Args::try_parse_from(["uv_coverage", "obs/WSRT_LFFE.ms"]).unwrap();
        assert_eq!(args.input, PathBuf::from("obs/WSRT_LFFE.ms"));
        assert_eq!(args.figure_size(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(args.output_path(), PathBuf::from("WSRT_LFFE.ms_uv.png"));
        assert!(!args.summary);
    }

    #[test]
    fn explicit_output_and_size_are_honoured() {
        let args = Args::try_parse_from([
            "uv_coverage",
            "obs.ms",
            "--output",
            "coverage.svg",
            "--width",
            "640",
            "--height",
            "480",
            "--summary",
        ])
        .unwrap();
        assert_eq!(args.output_path(), PathBuf::from("coverage.svg"));
        assert_eq!(args.figure_size(), (640, 480));
        assert!(args.summary);
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(Args::try_parse_from(["uv_coverage"]).is_err());
    }
}
