use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only source whose postings arrive without a description.
pub const LINKEDIN_SITE: &str = "linkedin";

const SITE: &str = "site";
const DESCRIPTION: &str = "description";
const LINK: &str = "link";
const JOB_URL: &str = "job_url";

/// A job posting as produced by the upstream aggregator.
///
/// The record is kept as the raw JSON object so it is written back exactly as
/// it came in. Fields are read leniently: a value that is not a string is
/// treated like a missing one, and only `description` is ever written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingRecord {
    fields: Map<String, Value>,
}

impl PostingRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn site(&self) -> Option<&str> {
        self.get_str(SITE)
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str(DESCRIPTION)
    }

    pub fn set_description(&mut self, description: String) {
        self.fields
            .insert(DESCRIPTION.to_string(), Value::String(description));
    }

    pub fn is_from_linkedin(&self) -> bool {
        self.site()
            .is_some_and(|site| site.to_lowercase() == LINKEDIN_SITE)
    }

    /// Missing, `null` and blank strings count as no description. Any other
    /// value is left alone.
    pub fn has_description(&self) -> bool {
        match self.fields.get(DESCRIPTION) {
            None | Some(Value::Null) => false,
            Some(Value::String(description)) => !description.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// `link` wins over `job_url` unless it is empty.
    pub fn posting_url(&self) -> &str {
        match self.get_str(LINK) {
            Some(link) if !link.is_empty() => link,
            _ => self.get_str(JOB_URL).unwrap_or(""),
        }
    }
}

impl From<Map<String, Value>> for PostingRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
