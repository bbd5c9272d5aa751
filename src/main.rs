//! Entry point for the enrollment statistics application.
//! Handles CLI parsing, school selection, and prints the per-school and general reports.

use clap::Parser;
use enrollment_stats::cli::{Args, OutputFormat};
use enrollment_stats::dataset::load_cube;
use enrollment_stats::prompt::prompt_for_school;
use enrollment_stats::report::{render_shape, GeneralReport, SchoolReport};
use enrollment_stats::SchoolDirectory;
use std::io::{self, Write};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(error) = run(args) {
        log::error!("{error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("{args:?}");

    let directory = SchoolDirectory::calgary();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_schools {
        for school in directory.iter() {
            writeln!(out, "{:>6}  {}", school.code, school.name)?;
        }
        return Ok(());
    }

    let cube = load_cube()?;
    log::info!("Loaded enrollment data with shape {:?}", cube.shape());

    if args.format == OutputFormat::Text {
        writeln!(out, "High School Enrollment Statistics")?;
        render_shape(&cube, &mut out)?;
    }

    let index = match &args.school {
        Some(selection) => directory.resolve(selection)?,
        None => {
            let stdin = io::stdin();
            match prompt_for_school(&directory, &mut stdin.lock(), &mut out)? {
                Some(index) => index,
                None => {
                    log::info!("No school selected, exiting");
                    return Ok(());
                }
            }
        }
    };

    let school_report = SchoolReport::compute(&cube, &directory, index, args.threshold)?;
    let general_report = GeneralReport::compute(&cube)?;

    match args.format {
        OutputFormat::Text => {
            school_report.render_text(&mut out)?;
            general_report.render_text(&mut out)?;
        }
        OutputFormat::Json => {
            let (years, schools, grades) = cube.shape();
            let document = serde_json::json!({
                "shape": [years, schools, grades],
                "school": school_report.to_json(),
                "general": general_report.to_json(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
        }
    }

    Ok(())
}
