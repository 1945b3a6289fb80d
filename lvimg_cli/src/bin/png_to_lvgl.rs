use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_lvimg::emit::{emit_file, source_path_for};
use lvimg_cli::report_error;

#[derive(Parser, Debug)]
#[command(name = "png-to-lvgl")]
#[command(about = "Convert an image into an LVGL C image source", long_about = None)]
struct Args {
    /// Input image (PNG or any other format the image crate reads)
    input: PathBuf,

    /// Output C file (default: <input name>.c in the current directory)
    output: Option<PathBuf>,

    /// Image name in LVGL (default: base name of the input file)
    name: Option<String>,
}

fn main() -> ExitCode {
    lib_lvimg::init_logging();
    let args = Args::parse();

    let output = args
        .output
        .unwrap_or_else(|| source_path_for(&args.input));

    match emit_file(&args.input, &output, args.name.as_deref()) {
        Ok(emission) => {
            println!("C file generated: {}", output.display());
            println!("Image name: {}", emission.name);
            println!("Map name: {}", emission.map_name);
            println!("Dimensions: {}", emission.dimensions);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
