use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::resume::aggregator::{fetch_resume_data, DataSource, ResumeSnapshot};
use crate::sheets::Section;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub section: Section,
    pub source: DataSource,
    pub fetched_at: DateTime<Utc>,
    pub data: Value,
}

/// GET /api/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeSnapshot> {
    Json(fetch_resume_data(state.sheets.clone()).await)
}

/// GET /api/resume/:section
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = Section::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown resume section '{slug}'")))?;

    let snapshot = fetch_resume_data(state.sheets.clone()).await;
    let data = section_value(&snapshot, section)?;

    Ok(Json(SectionResponse {
        section,
        source: snapshot.source,
        fetched_at: snapshot.fetched_at,
        data,
    }))
}

fn section_value(snapshot: &ResumeSnapshot, section: Section) -> Result<Value, AppError> {
    let data = &snapshot.data;
    let value = match section {
        Section::BasicInfo => serde_json::json!({
            "basicInfo": data.basic_info,
            "basicInfoItems": data.basic_info_items,
        }),
        Section::Experience => serde_json::to_value(&data.experiences)?,
        Section::Skills => serde_json::to_value(&data.skills)?,
        Section::Qualifications => serde_json::to_value(&data.qualifications)?,
        Section::Education => serde_json::to_value(&data.education)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::resume::aggregator::tests::{full_source, FakeSource};
    use crate::routes::build_router;
    use crate::state::AppState;

    use super::*;

    fn state(sheets: std::sync::Arc<dyn crate::sheets::SheetSource>) -> AppState {
        AppState {
            sheets,
            config: Config::default(),
        }
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_resume_live() {
        let (status, body) = get_json(state(full_source()), "/api/resume").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "live");
        assert_eq!(body["data"]["basicInfo"]["name"], "Taro Yamada");
        assert_eq!(body["data"]["experiences"][0]["company"], "Acme");
        assert_eq!(body["sections"][0]["section"], "basic_info");
        assert!(body["fetchedAt"].is_string());
    }

    #[tokio::test]
    async fn test_get_resume_fallback_is_flagged() {
        let (status, body) = get_json(state(FakeSource::new(&[])), "/api/resume").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["data"]["basicInfo"]["nameJa"], "小林龍汰");
        assert_eq!(body["sections"][2]["status"], "failed");
    }

    #[tokio::test]
    async fn test_get_single_section() {
        let (status, body) = get_json(state(full_source()), "/api/resume/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["section"], "skills");
        assert_eq!(body["data"][0]["category"], "A");

        let (_, body) = get_json(state(full_source()), "/api/resume/basic-info").await;
        assert_eq!(body["data"]["basicInfo"]["title"], "Backend Engineer");
        assert_eq!(body["data"]["basicInfoItems"][0]["label"], "名前");
    }

    #[tokio::test]
    async fn test_unknown_section_is_structured_404() {
        let (status, body) = get_json(state(full_source()), "/api/resume/projects").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
