use miette::IntoDiagnostic;

use crate::cli::{Cli, Commands, ReportArgs, ReportConfig};
use crate::display::SpinnerContainer;
use crate::metadata;
use crate::prelude::*;
use crate::router;
use crate::session::{CfConfigSession, LayeredSession, StaticSession};

pub struct App {
    pub cli: Cli,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        App { cli }
    }

    pub fn run(&self) -> AppResult<()> {
        match &self.cli.command {
            Commands::AccountingReport(args) => self.report(args),

            // Discovery only. No session, no network.
            Commands::Metadata => {
                let json =
                    serde_json::to_string_pretty(&metadata::describe_commands()).into_diagnostic()?;

                println!("{}", json);

                Ok(())
            }
        }
    }

    fn report(&self, args: &ReportArgs) -> AppResult<()> {
        let config = ReportConfig::new(args, self.cli.timeout_secs);
        let session = self.session();

        let mut spinner = SpinnerContainer::unless_no_terminal_or(self.cli.no_animate);

        // Rendered into memory first, so a failure leaves stdout untouched.
        let mut buffer = Vec::new();
        router::execute(&config, &session, &mut buffer)?;

        let output = String::from_utf8(buffer).into_diagnostic()?;

        // println adds the final newline back.
        spinner.stop_with_message(output.strip_suffix('\n').unwrap_or(&output));

        Ok(())
    }

    fn session(&self) -> LayeredSession {
        let explicit = StaticSession {
            api_endpoint: self.cli.api_endpoint.clone(),
            access_token: self.cli.access_token.clone(),
        };

        LayeredSession::new(explicit, CfConfigSession::locate())
    }
}
