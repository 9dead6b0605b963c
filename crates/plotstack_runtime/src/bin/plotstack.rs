//! plotstack CLI entry point.

use plotstack_runtime::{CliOptions, Repl, init_tracing};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = CliOptions::parse(env::args().skip(1))?;

    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.show_version {
        println!("plotstack {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new(options.config())?;

    for file in &options.files {
        let output = repl.eval_file(file)?;
        if options.is_batch() && !output.is_empty() {
            println!("{output}");
        }
    }

    for program in &options.programs {
        let output = repl.eval(program)?;
        if !output.is_empty() {
            println!("{output}");
        }
    }

    if options.is_batch() {
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mplotstack\x1b[0m - Stack language for metric expressions

\x1b[1mUSAGE:\x1b[0m
    plotstack [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Programs to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Run files and exit (no REPL)
    -e, --eval PROGRAM   Run PROGRAM, print the stack and exit
    --set KEY=VALUE      Bind a variable before running anything
    --unstable           Allow unstable words
    --features LEVEL     Feature level: stable or unstable
    --show-types         Print the type summary after each stack
    --debug              Print every step instead of only the result

\x1b[1mEXAMPLES:\x1b[0m
    plotstack                          Start interactive REPL
    plotstack -e 'a,b,:swap'           Print the stack after swapping
    plotstack --set step=60 query.ps   Run query.ps, then start REPL
    plotstack -b --debug query.ps      Trace query.ps and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    .stack  .vars  .words  .clear  .debug PROGRAM  .help
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input

Set RUST_LOG=plotstack_language=trace to log every dispatched word."
    );
}
