use std::io::{self, Write};

use clap::Parser;

use pairgen::cli::Args;
use pairgen::config::OutputFormat;
use pairgen::context::Context;
use pairgen::types::err::InitialSuiteError;
use pairgen::{absorber, builder, csv_io, reports, spec_io};

const LICENSE: &str = "MIT License. See the crate's Cargo.toml for details.";

fn main() {
    let args = Args::parse();

    if args.license {
        println!("{LICENSE}");
        std::process::exit(0);
    }

    let level = if args.debug {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(code) = run(&args) {
        std::process::exit(code);
    }
}

fn run(args: &Args) -> Result<(), i32> {
    let stdin = io::stdin();
    let raw = spec_io::read_spec(stdin.lock()).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let compiled = builder::compile(raw);
    let config = args.run_config();
    let mut context = Context::new(compiled.schema, &compiled.decls, config.clone());

    for path in &args.initial {
        absorb_initial_file(&mut context, path).map_err(|e| {
            eprintln!("error: {e}");
            1
        })?;
    }

    if args.pairs {
        let pairs: Vec<_> = context.outstanding_pairs().cloned().collect();
        println!("{}", reports::required_pairs(context.schema(), pairs.iter()));
    }

    context.run_pairs();
    context.run_singles();

    let pairs_columns: Vec<usize> = if config.varying_only {
        context.schema().multiple_columns().collect()
    } else {
        (0..context.schema().slot_count()).collect()
    };
    // The singles table always lists every column, even under --varying:
    // a singleton's whole point is the value it isolates, not just the
    // columns that happen to vary elsewhere in the suite.
    let singles_columns: Vec<usize> = (0..context.schema().slot_count()).collect();

    match config.output_format {
        OutputFormat::Csv => {
            if config.run_pairs {
                csv_io::write_suite(io::stdout(), context.schema(), &pairs_columns, context.suite_pairs())
                    .map_err(|e| {
                        eprintln!("error: {e}");
                        1
                    })?;
            }
            if config.run_singles {
                csv_io::write_suite(io::stdout(), context.schema(), &singles_columns, context.suite_singles())
                    .map_err(|e| {
                        eprintln!("error: {e}");
                        1
                    })?;
            }
        }
        OutputFormat::Plain => {
            if config.run_pairs {
                println!("Pairwise coverage: {} test vectors\n", context.suite_pairs().len());
                print!(
                    "{}",
                    reports::plain_table(context.schema(), &pairs_columns, context.suite_pairs())
                );
            }
            if config.run_singles {
                println!("\nSingle and error vectors: {} test vectors\n", context.suite_singles().len());
                print!(
                    "{}",
                    reports::plain_table(context.schema(), &singles_columns, context.suite_singles())
                );
            }
            io::stdout().flush().ok();
        }
    }

    Ok(())
}

fn absorb_initial_file(context: &mut Context, path: &std::path::Path) -> Result<(), InitialSuiteError> {
    let file = std::fs::File::open(path)?;
    let (header, rows) = csv_io::read_suite(file)?;
    absorber::absorb_all(context, &header, rows.into_iter());
    Ok(())
}
