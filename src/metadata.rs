//! Mapping from raw registry records onto scoring inputs.
//!
//! The records mirror what package and model registries return (snake_case,
//! most fields optional). Fetching them is the caller's concern.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;

use crate::library::{LibraryMetadata, VersionMetadata};
use crate::model::{Modalities, ModelMetadata};

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryVersion {
    pub number: String,
    pub published_at: DateTime<Utc>,
}

/// Package-registry project record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryProject {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub dependents_count: Option<u64>,
    #[serde(default)]
    pub versions: Option<Vec<RegistryVersion>>,
}

impl RegistryProject {
    fn versions(&self) -> &[RegistryVersion] {
        self.versions.as_deref().unwrap_or_default()
    }
}

/// Age runs from the earliest release to `now`, in 365-day years.
pub fn library_metadata_from_project(project: &RegistryProject, now: DateTime<Utc>) -> LibraryMetadata {
    let versions = project.versions();
    let age_in_years = versions
        .iter()
        .map(|v| v.published_at)
        .min()
        .map(|first| (now - first).num_seconds() as f64 / SECONDS_PER_YEAR)
        .unwrap_or(0.0);

    LibraryMetadata {
        name: project.name.clone(),
        language: project
            .language
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        age_in_years,
        release_count: versions.len() as u64,
        keywords: project.keywords.clone().unwrap_or_default(),
        stars: project.stars.unwrap_or(0),
        dependents_count: project.dependents_count.unwrap_or(0),
    }
}

/// Versions in registry order.
pub fn versions_from_project(project: &RegistryProject) -> Vec<VersionMetadata> {
    project
        .versions()
        .iter()
        .map(|v| VersionMetadata::new(v.number.clone(), v.published_at))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ModelLimits {
    #[serde(default)]
    pub context: u64,
    #[serde(default)]
    pub output: u64,
}

/// Model-registry entry (models.dev shape).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// "YYYY-MM"
    #[serde(default)]
    pub knowledge: Option<String>,
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub reasoning: Option<bool>,
    #[serde(default)]
    pub tool_call: Option<bool>,
    #[serde(default)]
    pub structured_output: Option<bool>,
    #[serde(default)]
    pub attachment: Option<bool>,
    #[serde(default)]
    pub modalities: Option<Modalities>,
    #[serde(default)]
    pub limit: Option<ModelLimits>,
    #[serde(default)]
    pub open_weights: Option<bool>,
}

/// `"YYYY-MM"` to the first of that month, midnight UTC.
pub fn parse_knowledge_cutoff(raw: &str) -> Option<DateTime<Utc>> {
    let (year, month) = raw.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

fn parse_day(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Build scoring input for a model. `None` when the record has no usable
/// knowledge cutoff, since library recency cannot be judged without one.
pub fn model_metadata_from_record(
    provider_id: &str,
    provider_npm: &str,
    record: &ModelRecord,
) -> Option<ModelMetadata> {
    let cutoff = record.knowledge.as_deref().and_then(parse_knowledge_cutoff)?;
    let limit = record.limit.unwrap_or_default();
    Some(ModelMetadata {
        id: format!("{provider_id}/{}", record.id),
        name: if record.name.is_empty() {
            record.id.clone()
        } else {
            record.name.clone()
        },
        cutoff_date: cutoff,
        reasoning: record.reasoning.unwrap_or(false),
        tool_call: record.tool_call.unwrap_or(false),
        structured_output: record.structured_output.unwrap_or(false),
        attachment: record.attachment.unwrap_or(false),
        modalities: record.modalities.clone().unwrap_or_default(),
        context_limit: limit.context,
        output_limit: limit.output,
        knowledge_cutoff: Some(cutoff),
        last_updated: record.last_updated.as_deref().and_then(parse_day),
        open_weights: record.open_weights.unwrap_or(false),
        api_compatibility: provider_npm.to_string(),
    })
}
