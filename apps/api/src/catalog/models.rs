//! Typed shapes of the upstream catalog payloads.
//!
//! Normalization rule: every list field deserializes through [`null_as_default`], so an
//! absent or `null` list always comes back as `[]`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserializes `null` (or a missing field, combined with `#[serde(default)]`) as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// List endpoints
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerTags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bright_outlook: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub green: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apprenticeship: bool,
}

/// Interest-profiler match strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fit {
    Best,
    Great,
    Good,
    /// Any label the upstream adds later.
    #[serde(other)]
    Other,
}

/// One career row from any list endpoint.
///
/// The common fields (`code`, `title`, `tags`) are always present. The optional
/// fields depend on where the row came from:
/// - `fit`: interest-profiler matches (`mnm/interestprofiler/careers`)
/// - `category`, `percent_employed`: industry browsing (`mnm/browse/{code}`)
/// - keyword search and the full career list carry none of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub code: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: CareerTags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<Fit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_employed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

pub fn has_next_link(links: &[Link]) -> bool {
    links.iter().any(|l| l.rel == "next")
}

/// A page of careers. `start`/`end` are 1-based and inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerListPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: Vec<Link>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career: Vec<CareerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub code: u32,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: Vec<Industry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Interest profiler
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub index: u32,
    pub area: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: u8,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_option: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: Vec<Link>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: Vec<Question>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_options: AnswerOptions,
}

/// The full assessment: every question in order plus the shared answer scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestProfiler {
    pub questions: Vec<Question>,
    pub answer_options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub area: String,
    pub score: u32,
    pub description: String,
}

/// Orders results highest score first. The catalog client itself never sorts.
pub fn sort_by_score_desc(results: &mut [InterestResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

// ────────────────────────────────────────────────────────────────────────────
// Full career report (mnm/careers/{code}/report)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub href: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource: Vec<ResourceLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerOverview {
    pub code: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: CareerTags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub also_called: TitleList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_they_do: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_the_job: TaskList,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_video: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: ResourceList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdName {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataGroup {
    pub title: IdName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub element: Vec<IdName>,
}

/// Shared shape of the knowledge, skills and abilities sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group: Vec<DataGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopInterest {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkStyles {
    #[serde(default, deserialize_with = "null_as_default")]
    pub element: Vec<IdName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalityReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_interest: Option<TopInterest>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_styles: WorkStyles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyExample {
    pub name: String,
    /// Either a flag or an identifier upstream, so left untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_technology: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyTitle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_technology: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unspsc: Option<u64>,
    pub title: TechnologyTitle,
    #[serde(default, deserialize_with = "null_as_default")]
    pub example: Vec<TechnologyExample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologyReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Vec<TechnologyCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apprenticeship {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rapids_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_zone: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education_usually_needed: CategoryList,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apprenticeships: Vec<Apprenticeship>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlook {
    pub description: String,
    /// "Bright", "Average" or "Below Average".
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrightOutlook {
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_10th_percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_90th_percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_10th_percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_90th_percentile: Option<f64>,
    /// Set instead of `annual_median` when the value exceeds the published maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_median_over: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobOutlookReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlook: Option<Outlook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_outlook: Option<BrightOutlook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryShare {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub percent_employed: f64,
    pub code: u32,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedCareers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub career: Vec<CareerSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedIndustries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: Vec<IndustryShare>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreMoreReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub careers: RelatedCareers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industries: RelatedIndustries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhereDoTheyWorkReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: Vec<IndustryShare>,
}

/// Read-only aggregate for one career. Every section is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerFullReport {
    pub code: String,
    pub career: CareerOverview,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<GroupedReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<GroupedReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<GroupedReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<PersonalityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<TechnologyReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<EducationReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_outlook: Option<JobOutlookReport>,
    /// Passed through untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_my_state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explore_more: Option<ExploreMoreReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub where_do_they_work: Option<WhereDoTheyWorkReport>,
}

// ────────────────────────────────────────────────────────────────────────────
// Job zones
// ────────────────────────────────────────────────────────────────────────────

/// Job zone as described by the upstream service. Only `code` and `title` are relied on;
/// the remaining descriptive fields are carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamJobZone {
    pub code: u8,
    pub title: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobZoneList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_zone: Vec<UpstreamJobZone>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_null_career_list_normalizes_to_empty() {
        let page: CareerListPage =
            serde_json::from_value(json!({"start": 1, "end": 20, "total": 0, "career": null}))
                .unwrap();
        assert!(page.career.is_empty());
        assert!(page.link.is_empty());
    }

    #[test]
    fn test_missing_career_list_normalizes_to_empty() {
        let page: CareerListPage =
            serde_json::from_value(json!({"start": 1, "end": 20, "total": 0})).unwrap();
        assert_eq!(page.career, Vec::<CareerSummary>::new());
    }

    #[test]
    fn test_serialized_page_never_emits_null_list() {
        let page: CareerListPage = serde_json::from_value(json!({"career": null})).unwrap();
        let out = serde_json::to_value(&page).unwrap();
        assert_eq!(out["career"], json!([]));
    }

    #[test]
    fn test_career_summary_shapes_per_origin() {
        let matched: CareerSummary = serde_json::from_value(json!({
            "href": "https://x/mnm/careers/15-1252.00",
            "fit": "Best",
            "code": "15-1252.00",
            "title": "Software Developers",
            "tags": {"bright_outlook": true, "green": false}
        }))
        .unwrap();
        assert_eq!(matched.fit, Some(Fit::Best));
        assert!(matched.tags.bright_outlook);
        assert!(!matched.tags.apprenticeship);

        let browsed: CareerSummary = serde_json::from_value(json!({
            "code": "29-1141.00",
            "title": "Registered Nurses",
            "percent_employed": 61.0,
            "category": "Most",
            "tags": null
        }))
        .unwrap();
        assert_eq!(browsed.category.as_deref(), Some("Most"));
        assert_eq!(browsed.tags, CareerTags::default());
        assert!(browsed.fit.is_none());
    }

    #[test]
    fn test_unknown_fit_label_still_decodes_page() {
        let page: CareerListPage = serde_json::from_value(json!({
            "start": 1,
            "end": 2,
            "total": 2,
            "career": [
                {"code": "15-1252.00", "title": "Software Developers", "fit": "Great"},
                {"code": "29-1141.00", "title": "Registered Nurses", "fit": "Excellent"}
            ]
        }))
        .unwrap();
        assert_eq!(page.career[0].fit, Some(Fit::Great));
        assert_eq!(page.career[1].fit, Some(Fit::Other));
    }

    #[test]
    fn test_full_report_with_sparse_sections() {
        let report: CareerFullReport = serde_json::from_value(json!({
            "code": "15-1252.00",
            "career": {
                "code": "15-1252.00",
                "title": "Software Developers",
                "what_they_do": "Develop software.",
                "on_the_job": {"task": null}
            },
            "skills": {"group": null},
            "job_outlook": {
                "outlook": {"description": "Growing", "category": "Bright"},
                "salary": {"annual_median": 130160.0}
            },
            "explore_more": {"careers": {"career": null}}
        }))
        .unwrap();

        assert!(report.career.on_the_job.task.is_empty());
        assert!(report.career.also_called.title.is_empty());
        assert!(report.skills.unwrap().group.is_empty());
        assert!(report.knowledge.is_none());
        let outlook = report.job_outlook.unwrap();
        assert_eq!(outlook.salary.unwrap().annual_median, Some(130160.0));
        let explore = report.explore_more.unwrap();
        assert!(explore.careers.career.is_empty());
        assert!(explore.industries.industry.is_empty());
    }

    #[test]
    fn test_sort_by_score_desc() {
        let mut results = vec![
            InterestResult {
                area: "A".into(),
                score: 10,
                description: String::new(),
            },
            InterestResult {
                area: "B".into(),
                score: 25,
                description: String::new(),
            },
        ];
        sort_by_score_desc(&mut results);
        assert_eq!(results[0].area, "B");
        assert_eq!(results[1].area, "A");
    }

    #[test]
    fn test_has_next_link() {
        let links = vec![
            Link {
                href: "a".into(),
                rel: "prev".into(),
            },
            Link {
                href: "b".into(),
                rel: "next".into(),
            },
        ];
        assert!(has_next_link(&links));
        assert!(!has_next_link(&links[..1]));
    }

    #[test]
    fn test_upstream_job_zone_keeps_details() {
        let zones: JobZoneList = serde_json::from_value(json!({
            "job_zone": [{"code": 3, "title": "Medium Preparation Needed", "education": "Vocational"}]
        }))
        .unwrap();
        assert_eq!(zones.job_zone[0].code, 3);
        assert_eq!(zones.job_zone[0].details["education"], "Vocational");
    }
}
