/// Why a single description could not be fetched.
///
/// These never leave the fetcher, they only decide how loudly a miss is logged.
#[derive(Debug)]
pub enum FetchError {
    NotFound,
    RateLimited,
    HttpStatus(u16),
    NoDescription,
    Timeout,
    Transport(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "not found (may be expired or private)"),
            FetchError::RateLimited => write!(f, "rate limited by LinkedIn"),
            FetchError::HttpStatus(status) => write!(f, "HTTP {}", status),
            FetchError::NoDescription => write!(f, "no description found in response"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Transport(e) => write!(f, "request error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(e)
        }
    }
}
