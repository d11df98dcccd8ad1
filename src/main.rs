use std::process::ExitCode;

use rangespec::Range;

// Normalizes the range specs given on the command line, e.g.
// `rangespec 1..3 5 4` prints `1..5`.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let specs: Vec<String> = std::env::args().skip(1).collect();
    if specs.is_empty() {
        eprintln!("usage: rangespec <spec>...");
        return ExitCode::from(2);
    }

    match Range::new(&specs) {
        Ok(range) => {
            println!("{}", range);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.pretty_print().is_err() {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
