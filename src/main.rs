use std::{fs, path::PathBuf, process};

use clap::Parser;
use quill::{
    error::ConfigError,
    interpreter::memory::{GcMode, init_memory_manager},
    parse, run,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_PARSING_ERROR: i32 = 1;
// Codes 2 through 7 are reserved for subsystems that do not exist yet:
// static checking, dynamic type checking, nil-reference detection, heap
// exhaustion, data-race detection, and nondeterminism detection.
const EXIT_RUNTIME_FAULT: i32 = 8;
const EXIT_UNSUPPORTED_CONFIG: i32 = 9;
const EXIT_CONFIG_ERROR: i32 = 10;

/// quill interprets a program written in a small imperative toy language,
/// passing it a single integer argument and reporting the integer it
/// returns.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Memory management mode (NoGC|MarkSweep|RefCount|Explicit). Only NoGC
    /// is implemented.
    #[arg(long = "gc", default_value = "NoGC")]
    gc: String,

    /// Heap size in bytes; must be a positive multiple of the word size (8).
    #[arg(long = "heapsize", default_value_t = 1 << 14)]
    heapsize: u64,

    /// Path to the program file.
    file: PathBuf,

    /// Integer argument passed to the entry function.
    #[arg(allow_negative_numbers = true)]
    argument: i64,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EXIT_CONFIG_ERROR } else { EXIT_SUCCESS });
        },
    };

    let mode = args.gc.parse::<GcMode>().unwrap_or_else(|e| {
                                            eprintln!("{e}");
                                            process::exit(EXIT_CONFIG_ERROR);
                                        });

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the program file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        process::exit(EXIT_CONFIG_ERROR);
    });

    let program = parse(&source).unwrap_or_else(|e| {
                                    eprintln!("{e}");
                                    process::exit(EXIT_PARSING_ERROR);
                                });

    if let Err(e) = init_memory_manager(mode, args.heapsize) {
        eprintln!("{e}");
        process::exit(match e {
            ConfigError::UnsupportedGcMode { .. } => EXIT_UNSUPPORTED_CONFIG,
            _ => EXIT_CONFIG_ERROR,
        });
    }

    match run(&program, args.argument) {
        Ok(value) => println!("Interpreter returned {value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(EXIT_RUNTIME_FAULT);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_argument_is_accepted() {
        let args = Args::try_parse_from(["quill", "prog.quill", "-5"]).unwrap();
        assert_eq!(args.argument, -5);
    }

    #[test]
    fn defaults_apply_without_flags() {
        let args = Args::try_parse_from(["quill", "prog.quill", "3"]).unwrap();
        assert_eq!(args.gc, "NoGC");
        assert_eq!(args.heapsize, 1 << 14);
        assert_eq!(args.argument, 3);
    }
}
