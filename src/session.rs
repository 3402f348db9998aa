use std::cell::OnceCell;
use std::fs;
use std::path::PathBuf;

use url::Url;

use crate::error::Error;
use crate::prelude::*;

const API_LABEL: &str = "api";
const APP_USAGE_LABEL: &str = "app-usage";

/// The host collaborator: something that already knows who we are and where
/// the platform lives.
pub trait SessionProvider {
    fn access_token(&self) -> AppResult<String>;

    fn api_endpoint(&self) -> AppResult<String>;
}

/// Where to send requests for usage data, and what to authorize them with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    /// Accounting service root, for example "https://app-usage.sys.example.com".
    pub base_url: String,

    /// Authorization header value, for example "bearer eyXXXXX".
    pub authorization: String,
}

/// Turns whatever the host gave us into an accounting service target.
pub fn resolve(session: &dyn SessionProvider) -> AppResult<ApiTarget> {
    let api_endpoint = non_empty(session.api_endpoint()?, "API endpoint")?;
    let authorization = non_empty(session.access_token()?, "access token")?;

    let base_url = derive_base_url(&api_endpoint)?;

    debug!(%base_url, "resolved accounting service");

    Ok(ApiTarget {
        base_url,
        authorization,
    })
}

/// Derives the accounting service URL from the main API URL.
///
/// This is a blind replacement of the first "api" in the whole string, not a
/// host-aware rewrite, so "https://rapid.example.com" turns into
/// "https://rapp-usaged.example.com". The real naming rule belongs to the
/// platform, so it is kept as is.
pub fn derive_base_url(api_endpoint: &str) -> AppResult<String> {
    let api_endpoint = api_endpoint.trim();

    Url::parse(api_endpoint).map_err(|source| Error::InvalidEndpoint {
        endpoint: api_endpoint.to_owned(),
        source,
    })?;

    if !api_endpoint.contains(API_LABEL) {
        warn!(api_endpoint, "no '{API_LABEL}' label to replace, using the endpoint as is");
    }

    let derived = api_endpoint.replacen(API_LABEL, APP_USAGE_LABEL, 1);

    // Paths are appended with a leading slash.
    Ok(derived.trim_end_matches('/').to_owned())
}

fn non_empty(value: String, what: &'static str) -> AppResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(Error::SessionMissing(what).into());
    }

    Ok(trimmed.to_owned())
}

// Providers

/// Values handed over directly, through flags or environment variables.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub api_endpoint: Option<String>,
    pub access_token: Option<String>,
}

impl SessionProvider for StaticSession {
    fn access_token(&self) -> AppResult<String> {
        let token = self
            .access_token
            .clone()
            .ok_or(Error::SessionMissing("access token"))?;

        Ok(token)
    }

    fn api_endpoint(&self) -> AppResult<String> {
        let endpoint = self
            .api_endpoint
            .clone()
            .ok_or(Error::SessionMissing("API endpoint"))?;

        Ok(endpoint)
    }
}

/// The session the cf CLI keeps on disk after `cf login`.
#[derive(Debug, Clone)]
pub struct CfConfigSession {
    path: PathBuf,

    /// Read and parsed on first use. A failure is kept as its reason.
    loaded: OnceCell<Result<CfConfigFile, String>>,
}

/// The two keys we care about from '.cf/config.json'. The rest is ignored.
#[derive(Debug, Clone, Deserialize, Default)]
struct CfConfigFile {
    #[serde(rename = "Target", default)]
    target: String,

    #[serde(rename = "AccessToken", default)]
    access_token: String,
}

impl CfConfigSession {
    pub fn new(path: PathBuf) -> Self {
        CfConfigSession {
            path,
            loaded: OnceCell::new(),
        }
    }

    /// Finds the session file the same way the cf CLI does: `$CF_HOME` first,
    /// then the user's home directory.
    pub fn locate() -> Option<Self> {
        let cf_home = std::env::var_os("CF_HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)?;

        Some(Self::new(cf_home.join(".cf").join("config.json")))
    }

    fn read(&self) -> AppResult<&CfConfigFile> {
        let loaded = self.loaded.get_or_init(|| {
            let content = fs::read_to_string(&self.path).map_err(|e| e.to_string())?;

            serde_json::from_str(&content).map_err(|e| e.to_string())
        });

        let file = loaded.as_ref().map_err(|reason| Error::SessionFile {
            path: self.path.display().to_string(),
            reason: reason.clone(),
        })?;

        Ok(file)
    }
}

impl SessionProvider for CfConfigSession {
    fn access_token(&self) -> AppResult<String> {
        Ok(self.read()?.access_token.clone())
    }

    fn api_endpoint(&self) -> AppResult<String> {
        Ok(self.read()?.target.clone())
    }
}

/// Explicit values first, the on-disk session second, decided per field.
pub struct LayeredSession {
    explicit: StaticSession,
    fallback: Option<CfConfigSession>,
}

impl LayeredSession {
    pub fn new(explicit: StaticSession, fallback: Option<CfConfigSession>) -> Self {
        LayeredSession { explicit, fallback }
    }

    fn pick(
        &self,
        explicit: AppResult<String>,
        from_file: impl Fn(&CfConfigSession) -> AppResult<String>,
    ) -> AppResult<String> {
        match (explicit, &self.fallback) {
            (Ok(value), _) => Ok(value),
            (Err(_), Some(file)) => from_file(file),
            (Err(e), None) => Err(e),
        }
    }
}

impl SessionProvider for LayeredSession {
    fn access_token(&self) -> AppResult<String> {
        self.pick(self.explicit.access_token(), CfConfigSession::access_token)
    }

    fn api_endpoint(&self) -> AppResult<String> {
        self.pick(self.explicit.api_endpoint(), CfConfigSession::api_endpoint)
    }
}
