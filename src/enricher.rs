use std::panic::{self, AssertUnwindSafe};

use log::{debug, info};

use crate::{
    config::EnrichConfig,
    description_fetcher::{DescriptionFetcher, DescriptionSource},
    job_id::JobIdExtractor,
    posting::PostingRecord,
    ratelimit::{FixedDelay, PacingPolicy},
};

/// Called with the 1-based position and the number of postings being fetched.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(usize, usize) -> anyhow::Result<()>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub fetched: usize,
    pub failed: usize,
    pub total: usize,
}

pub struct Enricher<S, P> {
    job_id_extractor: JobIdExtractor,
    source: S,
    pacer: P,
}

impl Enricher<DescriptionFetcher, FixedDelay> {
    pub fn from_config(config: &EnrichConfig) -> anyhow::Result<Self> {
        let source = DescriptionFetcher::new(config)?;
        let pacer = FixedDelay::new(config.fetch_delay());
        Self::new(source, pacer)
    }
}

impl<S: DescriptionSource, P: PacingPolicy> Enricher<S, P> {
    pub fn new(source: S, pacer: P) -> anyhow::Result<Self> {
        Ok(Self {
            job_id_extractor: JobIdExtractor::new()?,
            source,
            pacer,
        })
    }

    /// Index and job id of every LinkedIn posting that still needs a description.
    pub fn select_targets(&self, records: &[PostingRecord]) -> Vec<(usize, String)> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_from_linkedin() && !record.has_description())
            .filter_map(|(index, record)| {
                self.job_id_extractor
                    .extract_id(record.posting_url())
                    .map(|job_id| (index, job_id))
            })
            .collect()
    }

    /// Fills in missing LinkedIn descriptions in place, one request at a time.
    ///
    /// Never fails: postings whose description could not be fetched are left
    /// as they were and counted in [`EnrichSummary::failed`].
    pub async fn enrich(
        &self,
        records: &mut [PostingRecord],
        mut progress: Option<ProgressCallback<'_>>,
    ) -> EnrichSummary {
        let targets = self.select_targets(records);
        if targets.is_empty() {
            info!("No LinkedIn jobs need description fetching");
            return EnrichSummary::default();
        }

        let total = targets.len();
        info!("Fetching descriptions for {total} LinkedIn jobs...");

        let mut summary = EnrichSummary {
            total,
            ..Default::default()
        };
        for (position, (index, job_id)) in targets.into_iter().enumerate() {
            if let Some(progress) = progress.as_mut() {
                match panic::catch_unwind(AssertUnwindSafe(|| progress(position + 1, total))) {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => debug!("Progress callback error: {e}"),
                    Err(_) => debug!("Progress callback panicked"),
                }
            }

            match self.source.fetch_description(&job_id).await {
                Some(description) => {
                    debug!(
                        "Fetched description for job {job_id} ({} chars)",
                        description.chars().count()
                    );
                    records[index].set_description(description);
                    summary.fetched += 1;
                }
                None => summary.failed += 1,
            }

            if position + 1 < total {
                self.pacer.pause().await;
            }
        }

        info!(
            "LinkedIn descriptions: {} fetched, {} failed out of {} total",
            summary.fetched, summary.failed, summary.total
        );
        summary
    }
}
