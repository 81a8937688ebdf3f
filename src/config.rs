use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const JOB_ID_PLACEHOLDER: &str = "{job_id}";

const DEFAULT_GUEST_API_URL: &str =
    "https://www.linkedin.com/jobs-guest/jobs/api/jobPosting/{job_id}";
const DEFAULT_FETCH_DELAY_SECS: f64 = 1.0;
const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 10.0;

/// The env vars read for description fetching. All of them are optional.
#[derive(Debug, Deserialize)]
pub struct EnrichEnv {
    #[serde(default = "default_guest_api_url")]
    linkedin_guest_api_url: String,
    #[serde(default = "default_fetch_delay")]
    linkedin_fetch_delay: f64,
    #[serde(default = "default_request_timeout")]
    linkedin_request_timeout: f64,
}

fn default_guest_api_url() -> String {
    DEFAULT_GUEST_API_URL.to_string()
}

fn default_fetch_delay() -> f64 {
    DEFAULT_FETCH_DELAY_SECS
}

fn default_request_timeout() -> f64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone)]
pub struct EnrichConfig {
    guest_api_url: String,
    fetch_delay: Duration,
    request_timeout: Duration,
}

impl EnrichConfig {
    pub fn new(
        guest_api_url: impl Into<String>,
        fetch_delay: Duration,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let guest_api_url = guest_api_url.into();
        if !guest_api_url.contains(JOB_ID_PLACEHOLDER) {
            return Err(anyhow::anyhow!(
                "guest api url must contain {}: {}",
                JOB_ID_PLACEHOLDER,
                guest_api_url
            ));
        }
        if request_timeout.is_zero() {
            return Err(anyhow::anyhow!("request timeout must be greater than zero"));
        }
        Ok(Self {
            guest_api_url,
            fetch_delay,
            request_timeout,
        })
    }

    /// Reads the config from the process env (and `.env` if present).
    pub fn from_env() -> anyhow::Result<Self> {
        EnrichEnv::load_from_env()?.try_into()
    }

    pub fn job_posting_url(&self, job_id: &str) -> String {
        self.guest_api_url.replace(JOB_ID_PLACEHOLDER, job_id)
    }

    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            guest_api_url: default_guest_api_url(),
            fetch_delay: Duration::from_secs_f64(DEFAULT_FETCH_DELAY_SECS),
            request_timeout: Duration::from_secs_f64(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl TryFrom<EnrichEnv> for EnrichConfig {
    type Error = anyhow::Error;

    fn try_from(env: EnrichEnv) -> anyhow::Result<Self> {
        let fetch_delay = Duration::try_from_secs_f64(env.linkedin_fetch_delay)
            .context("LINKEDIN_FETCH_DELAY must be a non-negative number of seconds")?;
        let request_timeout = Duration::try_from_secs_f64(env.linkedin_request_timeout)
            .context("LINKEDIN_REQUEST_TIMEOUT must be a non-negative number of seconds")?;
        Self::new(env.linkedin_guest_api_url, fetch_delay, request_timeout)
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
