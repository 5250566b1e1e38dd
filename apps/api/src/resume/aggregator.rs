//! Résumé aggregator — fetches all five sections concurrently and assembles
//! one `ResumeData`, falling back to the built-in sample if nothing could be
//! fetched at all.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::models::resume::ResumeData;
use crate::resume::extractors::{
    extract_basic_info, extract_basic_info_items, extract_education, extract_experiences,
    extract_qualifications, extract_skills,
};
use crate::resume::sample::sample_resume_data;
use crate::sheets::{fetch_section, Section, SectionFetch, SheetError, SheetSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// At least one section came from the spreadsheet.
    Live,
    /// Every section failed; `data` is the built-in sample.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Loaded,
    Empty,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub status: SectionStatus,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SectionReport {
    fn from_fetch(section: Section, fetched: &SectionFetch) -> Self {
        let (status, error) = match fetched {
            SectionFetch::Loaded(_) => (SectionStatus::Loaded, None),
            SectionFetch::Empty => (SectionStatus::Empty, None),
            SectionFetch::Failed(e) => (SectionStatus::Failed, Some(e.to_string())),
        };
        Self {
            section,
            status,
            rows: fetched.row_count(),
            error,
        }
    }
}

/// One fetch cycle's result as served to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    pub source: DataSource,
    pub fetched_at: DateTime<Utc>,
    pub sections: Vec<SectionReport>,
    pub data: ResumeData,
}

/// Runs one section fetch on its own task so a panic stays local to that section.
async fn fetch_isolated(source: Arc<dyn SheetSource>, section: Section) -> SectionFetch {
    let handle = tokio::spawn(async move { fetch_section(source.as_ref(), section).await });
    match handle.await {
        Ok(fetched) => fetched,
        Err(e) => {
            warn!("Fetch task for {} aborted: {e}", section.as_str());
            SectionFetch::Failed(SheetError::Task(e.to_string()))
        }
    }
}

/// Fetches every section concurrently and builds a fresh snapshot.
pub async fn fetch_resume_data(source: Arc<dyn SheetSource>) -> ResumeSnapshot {
    info!("Fetching resume data from spreadsheet");

    let (basic_info, experience, skills, qualifications, education) = tokio::join!(
        fetch_isolated(source.clone(), Section::BasicInfo),
        fetch_isolated(source.clone(), Section::Experience),
        fetch_isolated(source.clone(), Section::Skills),
        fetch_isolated(source.clone(), Section::Qualifications),
        fetch_isolated(source, Section::Education),
    );

    let fetched = [
        (Section::BasicInfo, basic_info),
        (Section::Experience, experience),
        (Section::Skills, skills),
        (Section::Qualifications, qualifications),
        (Section::Education, education),
    ];
    let sections: Vec<SectionReport> = fetched
        .iter()
        .map(|(section, f)| SectionReport::from_fetch(*section, f))
        .collect();

    if fetched.iter().all(|(_, f)| f.is_failed()) {
        warn!("Every section failed to load, serving sample resume data");
        return ResumeSnapshot {
            source: DataSource::Fallback,
            fetched_at: Utc::now(),
            sections,
            data: sample_resume_data(),
        };
    }

    let [basic_info, experience, skills, qualifications, education] =
        fetched.map(|(_, f)| f.into_rows());

    let basic_info_items = extract_basic_info_items(&basic_info);
    let data = ResumeData {
        basic_info: extract_basic_info(&basic_info_items),
        basic_info_items,
        experiences: extract_experiences(&experience),
        skills: extract_skills(&skills),
        qualifications: extract_qualifications(&qualifications),
        education: extract_education(&education),
    };

    info!(
        "Resume data fetched: {} experiences, {} skill groups, {} qualifications, {} education",
        data.experiences.len(),
        data.skills.len(),
        data.qualifications.len(),
        data.education.len()
    );

    ResumeSnapshot {
        source: DataSource::Live,
        fetched_at: Utc::now(),
        sections,
        data,
    }
}
