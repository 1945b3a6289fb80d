use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_lvimg::constants::DEFAULT_SOURCE_FILE;
use lib_lvimg::extract::{extract_file, raster_path_for};
use lvimg_cli::{report_diagnostics, report_error};

#[derive(Parser, Debug)]
#[command(name = "lvgl-to-png")]
#[command(about = "Convert an LVGL C image source into a PNG", long_about = None)]
struct Args {
    /// LVGL C source holding the image map
    #[arg(default_value = DEFAULT_SOURCE_FILE)]
    input: PathBuf,
}

fn main() -> ExitCode {
    lib_lvimg::init_logging();
    let args = Args::parse();

    let output = raster_path_for(&args.input);
    match extract_file(&args.input, &output) {
        Ok(extraction) => {
            println!("Image dimensions: {}", extraction.dimensions());
            report_diagnostics(&extraction.diagnostics);
            println!("Image saved as {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
