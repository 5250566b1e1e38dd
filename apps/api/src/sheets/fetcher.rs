use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::sheets::rows::{parse_sheet, HeaderMode, SheetRow};

/// The export endpoint rejects requests without a browser-looking user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("export for gid {gid} returned status {status}")]
    Status { gid: u64, status: u16 },

    #[error("fetch task aborted: {0}")]
    Task(String),
}

/// One résumé section and the spreadsheet tab that backs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    BasicInfo,
    Experience,
    Skills,
    Qualifications,
    Education,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::BasicInfo,
        Section::Experience,
        Section::Skills,
        Section::Qualifications,
        Section::Education,
    ];

    pub fn gid(self) -> u64 {
        match self {
            Section::BasicInfo => 850438655,
            Section::Experience => 2122323165,
            Section::Skills => 1328404715,
            Section::Qualifications => 1822428943,
            Section::Education => 1075736249,
        }
    }

    /// The basic-info tab is a bare label/value list without a header row.
    pub fn header_mode(self) -> HeaderMode {
        match self {
            Section::BasicInfo => HeaderMode::Positional,
            _ => HeaderMode::Header,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::BasicInfo => "basic_info",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Qualifications => "qualifications",
            Section::Education => "education",
        }
    }

    /// Accepts both `basic_info` and the `basic-info` spelling used in page paths.
    pub fn from_slug(slug: &str) -> Option<Section> {
        let slug = slug.replace('-', "_");
        Section::ALL.into_iter().find(|s| s.as_str() == slug)
    }
}

/// Where raw export text comes from. Carried in `AppState` as `Arc<dyn SheetSource>`.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_csv(&self, gid: u64) -> Result<String, SheetError>;
}

/// Reads tabs from the spreadsheet's public CSV export.
#[derive(Clone)]
pub struct HttpSheetSource {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
}

impl HttpSheetSource {
    pub fn new(
        base_url: &str,
        spreadsheet_id: &str,
        timeout: Duration,
    ) -> Result<Self, SheetError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
        })
    }

    pub fn export_url(&self, gid: u64) -> String {
        format!(
            "{}/spreadsheets/d/{}/export?format=csv&gid={}",
            self.base_url, self.spreadsheet_id, gid
        )
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self, gid: u64) -> Result<String, SheetError> {
        debug!("Fetching CSV export for gid {gid}");

        let response = self
            .client
            .get(self.export_url(gid))
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status {
                gid,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Outcome of fetching one section. Callers that only want rows use
/// [`SectionFetch::into_rows`]; the variants stay visible for reporting.
#[derive(Debug)]
pub enum SectionFetch {
    Loaded(Vec<SheetRow>),
    Empty,
    Failed(SheetError),
}

impl SectionFetch {
    pub fn row_count(&self) -> usize {
        match self {
            SectionFetch::Loaded(rows) => rows.len(),
            _ => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionFetch::Failed(_))
    }

    pub fn into_rows(self) -> Vec<SheetRow> {
        match self {
            SectionFetch::Loaded(rows) => rows,
            SectionFetch::Empty | SectionFetch::Failed(_) => Vec::new(),
        }
    }
}

/// Fetches and parses one section. Never fails: errors come back as `Failed`.
pub async fn fetch_section(source: &dyn SheetSource, section: Section) -> SectionFetch {
    let gid = section.gid();
    match source.fetch_csv(gid).await {
        Ok(text) => {
            let rows = parse_sheet(&text, section.header_mode());
            debug!("Sheet {} (gid {gid}): {} rows", section.as_str(), rows.len());
            if rows.is_empty() {
                SectionFetch::Empty
            } else {
                SectionFetch::Loaded(rows)
            }
        }
        Err(e) => {
            warn!("CSV fetch failed for {} (gid {gid}): {e}", section.as_str());
            SectionFetch::Failed(e)
        }
    }
}
