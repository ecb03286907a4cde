extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;

pub mod translator;

use clap::{Arg, ArgMatches, App};

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use translator::listing;
use translator::tables::Tables;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    // Both have defaults or validators, so these are always present.
    let ifile = args.value_of("INPUT").unwrap_or("test_input.txt");
    let columns = args.value_of("columns")
        .and_then(|c| c.parse::<usize>().ok())
        .unwrap_or(4);

    debug!("Arguments:\n\tVerbosity: {}\n\tColumns: {}\n\tOutfile: {}\n\tInfile: {}",
        match args.occurrences_of("verbose") {
            0 => log::LevelFilter::Error.to_string(),
            1 => log::LevelFilter::Warn.to_string(),
            2 => log::LevelFilter::Info.to_string(),
            3 | _ => log::LevelFilter::Debug.to_string(),
        },
        columns,
        args.value_of("output").unwrap_or("None"),
        ifile
    );

    match std::env::current_dir() {
        Ok(dir) => debug!("Current working directory: {}", dir.display()),
        Err(err) => debug!("Current working directory unavailable: {}", err),
    }

    let ipath = Path::new(ifile);
    let src = match fs::read_to_string(&ipath) {
        Err(err) => {
            error!("fatal: unable to read input file `{}`: {}", ipath.display(), err);
            std::process::exit(1);
        },
        Ok(src) => src,
    };

    // Built once and lent to every stage that needs it.
    let tables = Tables::new();

    let translation = match translator::translate(&src, &tables) {
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(1);
        },
        Ok(t) => t,
    };

    println!("Tokens: [{}]", join(&translation.tokens));
    println!("AST: [{}]", join(&translation.ast));

    println!("\nAssembly Code:");
    for ins in translation.assembly.iter() {
        println!("{}", ins);
    }

    println!("\nMachine Code (16-bit x {} columns):", columns);
    print!("{}", listing::machine_code_columns(&translation.machine_code, columns));

    if args.is_present("print-debug") {
        match listing::debug_listing(&translation.assembly, &tables) {
            Ok(grid) => print!("\n{}", grid),
            Err(err) => {
                error!("fatal: {}", err);
                std::process::exit(1);
            },
        }
    }

    if let Some(filename) = args.value_of("output") {
        let opath = Path::new(filename);
        let mut ofile = match File::create(&opath) {
            Err(err) => {
                error!("fatal: unable to open output file `{}`: {}", opath.display(), err);
                std::process::exit(1);
            },
            Ok(file) => file,
        };

        for word in translation.machine_code.iter() {
            if let Err(err) = ofile.write_all(&word.to_u16().to_be_bytes()) {
                error!("fatal: unable to write to output file `{}`: {}", opath.display(), err);
                std::process::exit(1);
            }
        }
        info!("wrote {} word(s) to `{}`", translation.machine_code.len(), opath.display());
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(option_env!("CARGO_PKG_NAME").unwrap_or("minic"))
        .version(option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0"))
        .author(option_env!("CARGO_PKG_AUTHORS").unwrap_or(""))
        .about(option_env!("CARGO_PKG_DESCRIPTION").unwrap_or(""))
        .arg(Arg::with_name("INPUT")
            .help("Sets the source file to translate")
            .default_value("test_input.txt")
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("also write the machine words to an outfile as big-endian bytes"))
        .arg(Arg::with_name("columns")
            .short("c")
            .long("columns")
            .takes_value(true)
            .default_value("4")
            .validator(|v| match v.parse::<usize>() {
                Ok(n) if n > 0 => Ok(()),
                _ => Err(format!("columns must be a positive integer, got `{}`", v)),
            })
            .help("number of 16-bit columns per machine code row"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .alias("show")
            .takes_value(false)
            .help("prints an address/assembly/word listing alongside the output"))
        .get_matches()
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 | _ => log::LevelFilter::Debug,
        })
        .chain(std::io::stdout())
        .apply().ok();
}
