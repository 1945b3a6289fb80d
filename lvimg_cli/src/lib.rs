use std::error::Error;

use lib_lvimg::Diagnostics;

/// Prints `err` and every error in its source chain to stderr.
pub fn report_error(err: &dyn Error) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

pub fn report_diagnostics(diagnostics: &Diagnostics) {
    if !diagnostics.discarded_tokens.is_empty() {
        println!(
            "Skipped {} unrecognized tokens in pixel data",
            diagnostics.discarded_tokens.len()
        );
    }
    if !diagnostics.out_of_range_tokens.is_empty() {
        println!(
            "Replaced {} values above 255 in pixel data",
            diagnostics.out_of_range_tokens.len()
        );
    }
    if diagnostics.missing_bytes > 0 {
        println!(
            "Pixel data was {} bytes short; missing pixels are transparent",
            diagnostics.missing_bytes
        );
    }
    if diagnostics.surplus_bytes > 0 {
        println!("Ignored {} extra bytes of pixel data", diagnostics.surplus_bytes);
    }
}
