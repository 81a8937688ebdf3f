use std::future::Future;

use log::{debug, error, warn};
use reqwest::StatusCode;
use scraper::{Html, Selector};

use crate::{
    config::EnrichConfig, fetch_error::FetchError, requests::RequestClient,
    text_manipulators::html_to_text,
};

// The guest endpoint puts the description here.
const DESCRIPTION_CONTAINER: &str = ".show-more-less-html__markup";
const FALLBACK_CONTAINERS: [&str; 3] = [".description__text", ".job-description", ".description"];

/// Something that can look up the description text of a posting by job id.
pub trait DescriptionSource {
    fn fetch_description(&self, job_id: &str) -> impl Future<Output = Option<String>>;
}

pub struct DescriptionFetcher {
    config: EnrichConfig,
    request_client: RequestClient,
    // Primary container first, then the fallbacks in order.
    container_selectors: Vec<Selector>,
}

impl DescriptionFetcher {
    pub fn new(config: &EnrichConfig) -> anyhow::Result<Self> {
        let request_client = RequestClient::new(config.request_timeout())?;
        let container_selectors = std::iter::once(DESCRIPTION_CONTAINER)
            .chain(FALLBACK_CONTAINERS)
            .map(|selector| {
                Selector::parse(selector)
                    .map_err(|e| anyhow::anyhow!("invalid selector {}: {:?}", selector, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            config: config.clone(),
            request_client,
            container_selectors,
        })
    }

    /// Pulls the description out of a job posting page, if there is one.
    pub fn extract_description(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let container = self
            .container_selectors
            .iter()
            .find_map(|selector| document.select(selector).next())?;
        let text = html_to_text(&container.html());
        if text.is_empty() { None } else { Some(text) }
    }

    async fn try_fetch_description(&self, job_id: &str) -> Result<String, FetchError> {
        let url = self.config.job_posting_url(job_id);
        let response = self.request_client.fetch_url_response(&url).await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(FetchError::RateLimited),
            StatusCode::NOT_FOUND => return Err(FetchError::NotFound),
            status if !status.is_success() => {
                return Err(FetchError::HttpStatus(status.as_u16()));
            }
            _ => {}
        }

        let body = response.text().await?;
        self.extract_description(&body)
            .ok_or(FetchError::NoDescription)
    }
}

impl DescriptionSource for DescriptionFetcher {
    async fn fetch_description(&self, job_id: &str) -> Option<String> {
        if job_id.is_empty() {
            return None;
        }

        match self.try_fetch_description(job_id).await {
            Ok(description) => Some(description),
            Err(e) => {
                match &e {
                    FetchError::NotFound | FetchError::NoDescription => {
                        debug!("Job {job_id}: {e}")
                    }
                    FetchError::RateLimited
                    | FetchError::HttpStatus(_)
                    | FetchError::Timeout => {
                        warn!("Failed to fetch description for job {job_id}: {e}")
                    }
                    FetchError::Transport(_) => {
                        error!("Failed to fetch description for job {job_id}: {e}")
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> DescriptionFetcher {
        DescriptionFetcher::new(&EnrichConfig::default()).unwrap()
    }

    #[test]
    fn test_extracts_primary_container() {
        let html = r#"
            <html><body>
                <h1 class="top-card-layout__title">Rust Developer</h1>
                <div class="description__text description__text--rich">
                    <section class="show-more-less-html">
                        <div class="show-more-less-html__markup">
                            <p>About the role</p>
                            <ul><li>Write Rust</li><li>Review code</li></ul>
                        </div>
                    </section>
                </div>
            </body></html>
        "#;
        assert_eq!(
            fetcher().extract_description(html).as_deref(),
            Some("About the role\n• Write Rust\n• Review code")
        );
    }

    #[test]
    fn test_falls_back_in_order() {
        let html = r#"
            <div class="description">Generic text</div>
            <div class="job-description">Job description text</div>
        "#;
        assert_eq!(
            fetcher().extract_description(html).as_deref(),
            Some("Job description text")
        );
    }

    #[test]
    fn test_no_container() {
        let html = "<html><body><div class=\"top-card\">Nothing here</div></body></html>";
        assert_eq!(fetcher().extract_description(html), None);
    }

    #[test]
    fn test_empty_container_is_a_miss() {
        let html = "<div class=\"show-more-less-html__markup\">  <br> </div>";
        assert_eq!(fetcher().extract_description(html), None);
    }

    #[tokio::test]
    async fn test_empty_job_id_skips_network() {
        // The default endpoint is never reached for an empty id.
        assert_eq!(fetcher().fetch_description("").await, None);
    }
}
