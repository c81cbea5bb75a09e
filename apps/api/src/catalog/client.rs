//! Catalog Client: typed access to the upstream career, industry and interest data.
//!
//! Every call goes through the [`CatalogGateway`]; nothing is cached and nothing is
//! retried. Upstream failures and errors embedded in an otherwise successful payload
//! both surface as `AppError::Upstream`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::models::{
    has_next_link, AnswerOption, CareerFullReport, CareerListPage, IndustryList,
    InterestProfiler, InterestResult, JobZoneList, QuestionPage,
};
use crate::catalog::pagination::PageRange;
use crate::errors::AppError;
use crate::gateway::CatalogGateway;

/// Questions are requested 12 at a time.
pub const QUESTION_PAGE_SIZE: u32 = 12;
/// Length of the interest-profiler answer string.
pub const QUESTION_COUNT: u32 = 60;
/// "Unsure", used for every unanswered question.
pub const NEUTRAL_ANSWER: u8 = 3;
/// Upper bound on question pages, in case the upstream keeps advertising a next page.
const MAX_QUESTION_PAGES: usize = 10;
/// Status reported for errors found inside a 200 payload.
const EMBEDDED_ERROR_STATUS: u16 = 502;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerSort {
    #[default]
    Name,
    BrightOutlook,
    Apprenticeship,
}

impl CareerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerSort::Name => "name",
            CareerSort::BrightOutlook => "bright_outlook",
            CareerSort::Apprenticeship => "apprenticeship",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustrySort {
    #[default]
    Category,
    Name,
    BrightOutlook,
    Apprenticeship,
    PercentEmployed,
}

impl IndustrySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustrySort::Category => "category",
            IndustrySort::Name => "name",
            IndustrySort::BrightOutlook => "bright_outlook",
            IndustrySort::Apprenticeship => "apprenticeship",
            IndustrySort::PercentEmployed => "percent_employed",
        }
    }
}

/// Which careers of an industry to include, by share of the industry's workforce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryCategory {
    #[default]
    #[serde(rename = "all")]
    All,
    Most,
    Some,
}

impl IndustryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryCategory::All => "all",
            IndustryCategory::Most => "Most",
            IndustryCategory::Some => "Some",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    result: Option<Vec<InterestResult>>,
}

#[derive(Clone)]
pub struct CatalogClient {
    gateway: Arc<dyn CatalogGateway>,
}

impl CatalogClient {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    /// Walks the question pages until the upstream stops advertising a next page or
    /// returns an empty batch, then fetches the shared answer scale.
    pub async fn fetch_interest_profiler_questions(&self) -> Result<InterestProfiler, AppError> {
        let mut questions = Vec::new();
        let mut range = PageRange::for_page(1, QUESTION_PAGE_SIZE);

        for _ in 0..MAX_QUESTION_PAGES {
            let page: QuestionPage = self.fetch_question_page(range).await?;
            let batch_len = page.question.len();
            questions.extend(page.question);
            debug!("Fetched {batch_len} profiler questions ({}-{})", range.start, range.end);

            if batch_len == 0 || !has_next_link(&page.link) {
                break;
            }
            range = range.next();
        }

        let answer_options = self.fetch_answer_options().await?;
        Ok(InterestProfiler {
            questions,
            answer_options,
        })
    }

    /// The five answer labels. They are identical for every question, so the first
    /// question page is enough.
    pub async fn fetch_answer_options(&self) -> Result<Vec<AnswerOption>, AppError> {
        let page = self
            .fetch_question_page(PageRange::for_page(1, QUESTION_PAGE_SIZE))
            .await?;
        Ok(page.answer_options.answer_option)
    }

    async fn fetch_question_page(&self, range: PageRange) -> Result<QuestionPage, AppError> {
        let value = self
            .get_json("mnm/interestprofiler/questions", range.query().to_vec())
            .await?;
        decode(value, "interest profiler questions")
    }

    /// Scores a sparse `{question index: answer}` map. Results come back in upstream
    /// order; sorting is up to the caller.
    pub async fn submit_interest_profiler_answers(
        &self,
        answers: &BTreeMap<u32, i64>,
    ) -> Result<Vec<InterestResult>, AppError> {
        let encoded = encode_answers(answers)?;
        let value = self
            .get_json(
                "mnm/interestprofiler/results",
                vec![("answers".to_string(), encoded)],
            )
            .await?;

        let envelope: ResultsEnvelope = decode(value, "interest profiler results")?;
        envelope.result.ok_or_else(|| AppError::Upstream {
            status: EMBEDDED_ERROR_STATUS,
            message: "Invalid response structure from upstream for interest profiler results"
                .to_string(),
        })
    }

    pub async fn get_matching_careers(
        &self,
        area: &str,
        job_zone: Option<u8>,
        range: PageRange,
    ) -> Result<CareerListPage, AppError> {
        let mut query = vec![("area".to_string(), area.to_string())];
        query.extend(range.query());
        if let Some(zone) = job_zone {
            query.push(("job_zone".to_string(), zone.to_string()));
        }
        let value = self.get_json("mnm/interestprofiler/careers", query).await?;
        decode(value, "matching careers")
    }

    pub async fn fetch_all_careers(
        &self,
        sort: CareerSort,
        range: PageRange,
    ) -> Result<CareerListPage, AppError> {
        let mut query = vec![("sort".to_string(), sort.as_str().to_string())];
        query.extend(range.query());
        let value = self.get_json("mnm/careers", query).await?;
        decode(value, "career list")
    }

    pub async fn fetch_careers_by_industry(
        &self,
        industry_code: u32,
        category: IndustryCategory,
        sort: IndustrySort,
        range: PageRange,
    ) -> Result<CareerListPage, AppError> {
        let mut query = vec![
            ("category".to_string(), category.as_str().to_string()),
            ("sort".to_string(), sort.as_str().to_string()),
        ];
        query.extend(range.query());
        let value = self
            .get_json(&format!("mnm/browse/{industry_code}"), query)
            .await?;
        decode(value, "industry careers")
    }

    pub async fn search_careers_by_keyword(
        &self,
        keyword: &str,
        range: PageRange,
    ) -> Result<CareerListPage, AppError> {
        let mut query = vec![("keyword".to_string(), keyword.to_string())];
        query.extend(range.query());
        let value = self.get_json("mnm/search", query).await?;
        decode(value, "keyword search")
    }

    pub async fn fetch_industries(&self) -> Result<IndustryList, AppError> {
        let value = self.get_json("mnm/browse", Vec::new()).await?;
        decode(value, "industry list")
    }

    pub async fn fetch_career_detail(&self, code: &str) -> Result<CareerFullReport, AppError> {
        validate_career_code(code)?;
        let value = self
            .get_json(&format!("mnm/careers/{code}/report"), Vec::new())
            .await?;
        decode(value, "career report")
    }

    pub async fn fetch_job_zones(&self) -> Result<JobZoneList, AppError> {
        let value = self
            .get_json("mnm/interestprofiler/job_zones", Vec::new())
            .await?;
        decode(value, "job zones")
    }

    async fn get_json(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, AppError> {
        let value = self.gateway.fetch(path, query).await?;
        reject_embedded_error(&value)?;
        Ok(value)
    }
}

/// Encodes answers as the fixed-length digit string the upstream expects. Position `i`
/// (1-based) holds the answer to question `i`, or [`NEUTRAL_ANSWER`] when unanswered.
pub fn encode_answers(answers: &BTreeMap<u32, i64>) -> Result<String, AppError> {
    for (&index, &value) in answers {
        if !(1..=QUESTION_COUNT).contains(&index) {
            return Err(AppError::Validation(format!(
                "question index {index} is outside 1-{QUESTION_COUNT}"
            )));
        }
        if !(1..=5).contains(&value) {
            return Err(AppError::Validation(format!(
                "answer {value} for question {index} is outside 1-5"
            )));
        }
    }

    Ok((1..=QUESTION_COUNT)
        .map(|i| {
            let value = answers
                .get(&i)
                .and_then(|&v| u8::try_from(v).ok())
                .unwrap_or(NEUTRAL_ANSWER);
            char::from(b'0' + value)
        })
        .collect())
}

/// Career codes look like `15-1252.00`.
fn validate_career_code(code: &str) -> Result<(), AppError> {
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        && !code.contains("..");
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid career code: {code}")))
    }
}

fn reject_embedded_error(value: &Value) -> Result<(), AppError> {
    match value.get("error") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(msg)) => Err(embedded(msg)),
        Some(other) => Err(embedded(&other.to_string())),
    }
}

fn embedded(msg: &str) -> AppError {
    AppError::Upstream {
        status: EMBEDDED_ERROR_STATUS,
        message: format!("Upstream API error: {msg}"),
    }
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Upstream {
        status: EMBEDDED_ERROR_STATUS,
        message: format!("Invalid response structure from upstream for {what}: {e}"),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::gateway::GatewayError;

    pub(crate) type Call = (String, Vec<(String, String)>);

    /// Replays queued responses in order and records every request.
    #[derive(Default)]
    pub(crate) struct FakeGateway {
        responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
        pub(crate) calls: Mutex<Vec<Call>>,
    }

    impl FakeGateway {
        pub(crate) fn with(responses: Vec<Result<Value, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogGateway for FakeGateway {
        async fn fetch(
            &self,
            path: &str,
            query: Vec<(String, String)>,
        ) -> Result<Value, GatewayError> {
            self.calls.lock().unwrap().push((path.to_string(), query));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(json!({})))
        }
    }

    fn param<'a>(call: &'a Call, key: &str) -> Option<&'a str> {
        call.1
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn question_page(first: u32, count: u32, next: bool) -> Value {
        let questions: Vec<Value> = (first..first + count)
            .map(|i| json!({"index": i, "area": "Realistic", "text": format!("Q{i}")}))
            .collect();
        let link = if next {
            json!([{"href": "next-page", "rel": "next"}])
        } else {
            json!([{"href": "prev-page", "rel": "prev"}])
        };
        json!({
            "start": first,
            "end": first + count - 1,
            "total": 60,
            "link": link,
            "question": questions,
            "answer_options": {"answer_option": [
                {"value": 1, "name": "Strongly Dislike"},
                {"value": 2, "name": "Dislike"},
                {"value": 3, "name": "Unsure"},
                {"value": 4, "name": "Like"},
                {"value": 5, "name": "Strongly Like"}
            ]}
        })
    }

    #[tokio::test]
    async fn test_questions_follow_next_links_in_order() {
        let gateway = FakeGateway::with(vec![
            Ok(question_page(1, 12, true)),
            Ok(question_page(13, 12, true)),
            Ok(question_page(25, 12, false)),
            Ok(question_page(1, 12, true)),
        ]);
        let client = CatalogClient::new(gateway.clone());

        let profiler = client.fetch_interest_profiler_questions().await.unwrap();

        assert_eq!(profiler.questions.len(), 36);
        let indices: Vec<u32> = profiler.questions.iter().map(|q| q.index).collect();
        assert_eq!(indices, (1..=36).collect::<Vec<_>>());
        assert_eq!(profiler.answer_options.len(), 5);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(param(&calls[1], "start"), Some("13"));
        assert_eq!(param(&calls[1], "end"), Some("24"));
        assert_eq!(param(&calls[3], "start"), Some("1"));
    }

    #[tokio::test]
    async fn test_empty_question_batch_ends_loop_despite_next_link() {
        let gateway = FakeGateway::with(vec![
            Ok(question_page(1, 12, true)),
            Ok(json!({"question": [], "link": [{"href": "n", "rel": "next"}]})),
            Ok(question_page(1, 12, true)),
        ]);
        let client = CatalogClient::new(gateway.clone());

        let profiler = client.fetch_interest_profiler_questions().await.unwrap();
        assert_eq!(profiler.questions.len(), 12);
        assert_eq!(gateway.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_question_error_propagates() {
        let gateway = FakeGateway::with(vec![
            Ok(question_page(1, 12, true)),
            Err(GatewayError::Upstream {
                status: 503,
                reason: "Service Unavailable".to_string(),
            }),
        ]);
        let client = CatalogClient::new(gateway);

        let err = client.fetch_interest_profiler_questions().await.unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_submit_defaults_unanswered_to_neutral() {
        let gateway = FakeGateway::with(vec![Ok(json!({"result": [
            {"area": "Realistic", "score": 10, "description": "hands-on"},
            {"area": "Social", "score": 25, "description": "people"}
        ]}))]);
        let client = CatalogClient::new(gateway.clone());

        let results = client
            .submit_interest_profiler_answers(&BTreeMap::from([(1, 5)]))
            .await
            .unwrap();
        // upstream order preserved
        assert_eq!(results[0].area, "Realistic");

        let calls = gateway.calls();
        assert_eq!(calls[0].0, "mnm/interestprofiler/results");
        let answers = param(&calls[0], "answers").unwrap();
        assert_eq!(answers.len(), 60);
        assert_eq!(&answers[..1], "5");
        assert!(answers[1..].chars().all(|c| c == '3'));
    }

    #[test]
    fn test_encode_answers_rejects_out_of_range() {
        assert!(encode_answers(&BTreeMap::from([(0, 3)])).is_err());
        assert!(encode_answers(&BTreeMap::from([(61, 3)])).is_err());
        assert!(encode_answers(&BTreeMap::from([(5, 0)])).is_err());
        assert!(encode_answers(&BTreeMap::from([(5, 6)])).is_err());
        assert!(encode_answers(&BTreeMap::from([(1, 300)])).is_err());
        assert!(encode_answers(&BTreeMap::from([(1, -2)])).is_err());
        assert_eq!(encode_answers(&BTreeMap::new()).unwrap(), "3".repeat(60));
    }

    #[tokio::test]
    async fn test_results_without_result_field_is_structural_error() {
        let gateway = FakeGateway::with(vec![Ok(json!({"something": "else"}))]);
        let client = CatalogClient::new(gateway);
        let err = client
            .submit_interest_profiler_answers(&BTreeMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_embedded_error_rejects() {
        let gateway = FakeGateway::with(vec![Ok(json!({"error": "Invalid answers"}))]);
        let client = CatalogClient::new(gateway);
        let err = client
            .submit_interest_profiler_answers(&BTreeMap::new())
            .await
            .unwrap_err();
        match err {
            AppError::Upstream { message, .. } => assert!(message.contains("Invalid answers")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_matching_careers_normalizes_null_and_sends_job_zone() {
        let gateway = FakeGateway::with(vec![Ok(
            json!({"start": 1, "end": 20, "total": 0, "career": null}),
        )]);
        let client = CatalogClient::new(gateway.clone());

        let page = client
            .get_matching_careers("Social", Some(3), PageRange::default())
            .await
            .unwrap();
        assert!(page.career.is_empty());

        let calls = gateway.calls();
        assert_eq!(calls[0].0, "mnm/interestprofiler/careers");
        assert_eq!(param(&calls[0], "area"), Some("Social"));
        assert_eq!(param(&calls[0], "job_zone"), Some("3"));
        assert_eq!(param(&calls[0], "end"), Some("20"));
    }

    #[tokio::test]
    async fn test_matching_careers_omits_job_zone_when_absent() {
        let gateway = FakeGateway::with(vec![Ok(json!({"total": 0}))]);
        let client = CatalogClient::new(gateway.clone());
        client
            .get_matching_careers("Artistic", None, PageRange::default())
            .await
            .unwrap();
        assert_eq!(param(&gateway.calls()[0], "job_zone"), None);
    }

    #[tokio::test]
    async fn test_every_list_fetcher_normalizes_null() {
        let null_page = || Ok(json!({"start": 1, "end": 20, "total": 0, "career": null}));
        let gateway = FakeGateway::with(vec![
            null_page(),
            null_page(),
            null_page(),
            Ok(json!({"industry": null})),
            Ok(json!({"job_zone": null})),
        ]);
        let client = CatalogClient::new(gateway.clone());
        let range = PageRange::default();

        assert!(client
            .fetch_all_careers(CareerSort::default(), range)
            .await
            .unwrap()
            .career
            .is_empty());
        assert!(client
            .fetch_careers_by_industry(
                62,
                IndustryCategory::default(),
                IndustrySort::default(),
                range
            )
            .await
            .unwrap()
            .career
            .is_empty());
        assert!(client
            .search_careers_by_keyword("astronaut", range)
            .await
            .unwrap()
            .career
            .is_empty());
        assert!(client.fetch_industries().await.unwrap().industry.is_empty());
        assert!(client.fetch_job_zones().await.unwrap().job_zone.is_empty());

        let calls = gateway.calls();
        assert_eq!(calls[0].0, "mnm/careers");
        assert_eq!(param(&calls[0], "sort"), Some("name"));
        assert_eq!(calls[1].0, "mnm/browse/62");
        assert_eq!(param(&calls[1], "category"), Some("all"));
        assert_eq!(param(&calls[1], "sort"), Some("category"));
        assert_eq!(calls[2].0, "mnm/search");
        assert_eq!(param(&calls[2], "keyword"), Some("astronaut"));
        assert_eq!(calls[3].0, "mnm/browse");
        assert_eq!(calls[4].0, "mnm/interestprofiler/job_zones");
    }

    #[tokio::test]
    async fn test_gateway_failure_carries_status() {
        let gateway = FakeGateway::with(vec![Err(GatewayError::Upstream {
            status: 401,
            reason: "Unauthorized".to_string(),
        })]);
        let client = CatalogClient::new(gateway);
        let err = client.fetch_industries().await.unwrap_err();
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("401"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_career_detail_path_and_validation() {
        let gateway = FakeGateway::with(vec![Ok(json!({
            "code": "15-1252.00",
            "career": {"code": "15-1252.00", "title": "Software Developers"}
        }))]);
        let client = CatalogClient::new(gateway.clone());

        let report = client.fetch_career_detail("15-1252.00").await.unwrap();
        assert_eq!(report.career.title, "Software Developers");
        assert_eq!(gateway.calls()[0].0, "mnm/careers/15-1252.00/report");

        let err = client.fetch_career_detail("../secret").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn test_last_page_request_returns_remainder() {
        use crate::catalog::pagination::{items_on_page, page_count, ITEMS_PER_PAGE};

        let total = 45;
        let last = page_count(total, ITEMS_PER_PAGE);
        let range = PageRange::for_page(last, ITEMS_PER_PAGE);
        assert_eq!((range.start, range.end), (41, 60));
        assert_eq!(items_on_page(total, last, ITEMS_PER_PAGE), 5);
    }
}
