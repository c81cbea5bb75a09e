//! Axum route handlers exposing the catalog client.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::client::{encode_answers, CareerSort, IndustryCategory, IndustrySort};
use crate::catalog::fallback;
use crate::catalog::job_zones::{job_zone, JobZone};
use crate::catalog::models::{
    sort_by_score_desc, CareerFullReport, CareerListPage, IndustryList, InterestProfiler,
    InterestResult, JobZoneList,
};
use crate::catalog::pagination::{page_count, PageRange, ITEMS_PER_PAGE};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Whether a response came from the upstream service or the built-in fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    #[serde(flatten)]
    pub page: CareerListPage,
    pub page_count: u32,
}

impl CareerListResponse {
    fn new(page: CareerListPage, range: PageRange) -> Self {
        let page_count = page_count(page.total, range.size());
        Self { page, page_count }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfilerResponse {
    pub source: DataSource,
    #[serde(flatten)]
    pub profiler: InterestProfiler,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: BTreeMap<u32, i64>,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub source: DataSource,
    /// Highest score first.
    pub results: Vec<InterestResult>,
}

#[derive(Debug, Deserialize)]
pub struct AllCareersQuery {
    #[serde(default)]
    pub sort: CareerSort,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct IndustryCareersQuery {
    #[serde(default)]
    pub category: IndustryCategory,
    #[serde(default)]
    pub sort: IndustrySort,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MatchingCareersQuery {
    #[serde(default)]
    pub area: String,
    pub job_zone: Option<u8>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

fn range(start: Option<u32>, end: Option<u32>) -> Result<PageRange, AppError> {
    let start = start.unwrap_or(1);
    let end = end.unwrap_or_else(|| start.saturating_add(ITEMS_PER_PAGE - 1));
    PageRange::new(start, end)
}

fn required<'a>(value: &'a str, name: &str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{name} is required")));
    }
    Ok(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/careers
pub async fn handle_all_careers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AllCareersQuery>,
) -> Result<Json<CareerListResponse>, AppError> {
    let range = range(params.start, params.end)?;
    let page = state.catalog.fetch_all_careers(params.sort, range).await?;
    Ok(Json(CareerListResponse::new(page, range)))
}

/// GET /api/careers/search
pub async fn handle_search_careers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchQuery>,
) -> Result<Json<CareerListResponse>, AppError> {
    let keyword = required(&params.keyword, "keyword")?;
    let range = range(params.start, params.end)?;
    let page = state.catalog.search_careers_by_keyword(keyword, range).await?;
    Ok(Json(CareerListResponse::new(page, range)))
}

/// GET /api/careers/:code
pub async fn handle_career_detail(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<Json<CareerFullReport>, AppError> {
    Ok(Json(state.catalog.fetch_career_detail(&code).await?))
}

/// GET /api/industries
pub async fn handle_industries(
    State(state): State<AppState>,
) -> Result<Json<IndustryList>, AppError> {
    Ok(Json(state.catalog.fetch_industries().await?))
}

/// GET /api/industries/:code/careers
pub async fn handle_industry_careers(
    State(state): State<AppState>,
    AppPath(code): AppPath<u32>,
    AppQuery(params): AppQuery<IndustryCareersQuery>,
) -> Result<Json<CareerListResponse>, AppError> {
    let range = range(params.start, params.end)?;
    let page = state
        .catalog
        .fetch_careers_by_industry(code, params.category, params.sort, range)
        .await?;
    Ok(Json(CareerListResponse::new(page, range)))
}

/// GET /api/interest-profiler/questions
///
/// Falls back to the built-in question set when the upstream assessment is unavailable.
pub async fn handle_profiler_questions(State(state): State<AppState>) -> Json<ProfilerResponse> {
    let response = match state.catalog.fetch_interest_profiler_questions().await {
        Ok(profiler) => ProfilerResponse {
            source: DataSource::Live,
            profiler,
        },
        Err(e) => {
            warn!("Interest profiler questions unavailable, serving fallback set: {e}");
            ProfilerResponse {
                source: DataSource::Fallback,
                profiler: fallback::profiler(),
            }
        }
    };
    Json(response)
}

/// POST /api/interest-profiler/results
///
/// Malformed answers are rejected; any upstream failure yields the fallback scores.
pub async fn handle_profiler_results(
    State(state): State<AppState>,
    AppJson(request): AppJson<SubmitAnswersRequest>,
) -> Result<Json<ResultsResponse>, AppError> {
    encode_answers(&request.answers)?;

    let (source, mut results) = match state
        .catalog
        .submit_interest_profiler_answers(&request.answers)
        .await
    {
        Ok(results) => (DataSource::Live, results),
        Err(e) => {
            warn!("Interest profiler scoring failed, serving fallback results: {e}");
            (DataSource::Fallback, fallback::results())
        }
    };
    sort_by_score_desc(&mut results);

    Ok(Json(ResultsResponse { source, results }))
}

/// GET /api/interest-profiler/careers
pub async fn handle_matching_careers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MatchingCareersQuery>,
) -> Result<Json<CareerListResponse>, AppError> {
    let area = required(&params.area, "area")?;
    let range = range(params.start, params.end)?;
    let page = state
        .catalog
        .get_matching_careers(area, params.job_zone, range)
        .await?;
    Ok(Json(CareerListResponse::new(page, range)))
}

/// GET /api/job-zones
pub async fn handle_job_zones(State(state): State<AppState>) -> Result<Json<JobZoneList>, AppError> {
    Ok(Json(state.catalog.fetch_job_zones().await?))
}

/// GET /api/job-zones/:id
///
/// Anything other than a zone number 1-5 is a 404.
pub async fn handle_job_zone(
    AppPath(id): AppPath<String>,
) -> Result<Json<JobZone>, AppError> {
    id.trim()
        .parse::<u8>()
        .ok()
        .and_then(job_zone)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job zone {id} not found")))
}
