use crate::listing::JobRecord;
use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

/// Everything found on one page: links to follow and the listings themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pages: Vec<String>,
    jobs: Vec<JobRecord>,
}

impl PageResult {
    pub fn builder() -> PageResultBuilder {
        PageResultBuilder::default()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Resolves page links against the URL the page was fetched from.
    pub fn resolve_pages(&self, base: &Url) -> Vec<Url> {
        self.pages
            .iter()
            .filter_map(|href| match base.join(href) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Skipping unresolvable page link `{}`: {}", href, e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct PageResultBuilder {
    pages: Vec<String>,
    jobs: Vec<JobRecord>,
}

impl PageResultBuilder {
    pub fn page(&mut self, href: impl Into<String>) -> &mut Self {
        self.pages.push(href.into());
        self
    }

    pub fn job(&mut self, job: JobRecord) -> &mut Self {
        self.jobs.push(job);
        self
    }

    pub fn build(self) -> PageResult {
        PageResult {
            pages: self.pages,
            jobs: self.jobs,
        }
    }
}
