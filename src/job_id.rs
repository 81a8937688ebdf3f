use regex::Regex;

// Tried in order, the first pattern that matches wins.
const JOB_ID_PATTERNS: [&str; 4] = [
    r"/jobs/view/(\d+)",
    r"/jobs/(\d+)",
    r"currentJobId=(\d+)",
    r"jobId=(\d+)",
];

pub struct JobIdExtractor {
    // Regexes that can be used to extract the numeric job id from a LinkedIn posting url.
    job_id_regexes: Vec<Regex>,
}

impl JobIdExtractor {
    pub fn new() -> anyhow::Result<Self> {
        let job_id_regexes = JOB_ID_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { job_id_regexes })
    }

    pub fn extract_id(&self, job_url: &str) -> Option<String> {
        if job_url.is_empty() {
            return None;
        }
        self.job_id_regexes.iter().find_map(|regex| {
            regex
                .captures(job_url)
                .and_then(|caps| caps.get(1))
                .map(|match_| match_.as_str().to_string())
        })
    }
}
