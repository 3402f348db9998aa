use accounting_report::app::App;
use accounting_report::cli::Cli;
use accounting_report::logging;
use accounting_report::prelude::*;

fn main() -> AppResult<()> {
    logging::init();

    let app = App::new(Cli::new());

    // miette prints the report on the way out, the log only keeps it for debugging.
    app.run().inspect_err(|e| debug!("{e}"))
}
