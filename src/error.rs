use miette::Diagnostic;
use thiserror::Error;

// accounting_report::session -> host session, endpoint and credential.
// accounting_report::api -> http transport and status.
// accounting_report::decode -> response body shape.
// accounting_report::render -> writing the report out.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("No {0} available from the host session.")]
    #[diagnostic(
        code(accounting_report::session::missing),
        help(
"Log in with `cf login` first, or pass both --api-endpoint and --access-token.\n\
They can also be set through CF_API_ENDPOINT and CF_ACCESS_TOKEN."
        )
    )]
    SessionMissing(&'static str),

    #[error("Could not read the host session file at '{path}': {reason}")]
    #[diagnostic(
        code(accounting_report::session::file),
        help("Point CF_HOME at the directory holding '.cf/config.json', or pass the values as flags.")
    )]
    SessionFile { path: String, reason: String },

    #[error("API endpoint is not a valid URL, got '{endpoint}'.")]
    #[diagnostic(
        code(accounting_report::session::endpoint),
        help("Expected an absolute URL, like 'https://api.sys.example.com'.")
    )]
    InvalidEndpoint {
        endpoint: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(code(accounting_report::api::transport))]
    Transport { url: String, reason: String },

    #[error("Unexpected HTTP status {status} from {url}.")]
    #[diagnostic(code(accounting_report::api::status))]
    UnexpectedStatus {
        status: u16,
        url: String,

        #[help]
        hint: Option<String>,
    },

    #[error("Could not decode the usage report.")]
    #[diagnostic(code(accounting_report::decode))]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write the report: {0}")]
    #[diagnostic(code(accounting_report::render))]
    Render(String),
}

impl Error {
    pub fn unexpected_status(status: u16, url: String) -> Self {
        let hint = match status {
            401 => Some("The access token was rejected, it has likely expired. Run `cf login` again.".to_owned()),
            403 => Some("The logged in user may lack the admin scope these reports need.".to_owned()),
            _ => None,
        };

        Error::UnexpectedStatus { status, url, hint }
    }
}
