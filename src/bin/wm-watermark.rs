use std::ffi::OsString;

use tracing_subscriber::EnvFilter;
use watermagick::{args, error::MarkError, help, Watermark};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    help::maybe_print_help_and_exit("wm-watermark");
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), MarkError> {
    let plan = args::parse_args(args)?;
    let command = Watermark::new(plan.source)
        .with_options(plan.options)
        .command(&plan.mark, &plan.output)?;
    println!("{command}");
    Ok(())
}
