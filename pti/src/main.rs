mod commands;
mod logger;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    cli.run().await.or_exit_with_diagnostic()
}

/// Render pti's own diagnostics with miette; everything else goes to
/// color-eyre.
trait OrExitWithDiagnostic {
    fn or_exit_with_diagnostic(self) -> Result<()>;
}

impl OrExitWithDiagnostic for Result<()> {
    fn or_exit_with_diagnostic(self) -> Result<()> {
        let report = match self {
            Ok(()) => return Ok(()),
            Err(report) => report,
        };

        let report = match report.downcast::<pti_manifest::Error>() {
            Ok(error) => exit_with(miette::Report::new(error)),
            Err(report) => report,
        };
        match report.downcast::<pti_core::Error>() {
            Ok(error) => exit_with(miette::Report::new(error)),
            Err(report) => Err(report),
        }
    }
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{report:?}");
    std::process::exit(1);
}
