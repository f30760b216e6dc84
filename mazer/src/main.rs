//! Command-line maze solver.
//!
//! `mazer <maze.png> [output.png]` — loads a maze image, finds the
//! shortest path from the first to the last passable pixel, and writes a
//! copy of the image with the path painted in the default path color.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mazer_lib::{SolveConfig, solve_image};

fn output_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}_solved.png"))
}

fn run(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let img = image::open(input)?.to_rgb8();
    log::info!("loaded {} ({}x{})", input.display(), img.width(), img.height());

    let config = SolveConfig::default();
    let report = solve_image(&img, &config)?;

    match report.solved {
        Some(ref out) => {
            out.save(output)?;
            println!(
                "path found: {} steps from {} to {}, saved {}",
                report.steps().unwrap_or(0),
                report.start,
                report.goal,
                output.display()
            );
        }
        None => {
            println!(
                "no path exists between {} and {}",
                report.start, report.goal
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("usage: mazer <maze.png> [output.png]");
        return ExitCode::from(2);
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| output_name(&input));

    match run(&input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mazer: {err}");
            ExitCode::FAILURE
        }
    }
}
