use std::process::ExitCode;

use clap::Parser;

use triggermap::cli::{Args, init_tracing, print_summary, run};
use triggermap::colors::Painter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);
    let painter = Painter::new(args.color.into());

    match run(&args) {
        Ok(summary) => {
            print_summary(&summary, painter);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", painter.status_error(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}
