//! Knowledge freshness on a monthly scale between a fixed reference start and now.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::{ModelContext, RECENCY_ID};
use crate::aggregator::{Component, ScoreComponent};
use crate::normalize::{month_index, normalize, Range};

pub const DEFAULT_WEIGHT: f64 = 0.40;

/// Score used when a date is missing.
pub const MISSING_DATE_SCORE: f64 = 0.3;

const CUTOFF_SHARE: f64 = 0.7;
const UPDATED_SHARE: f64 = 0.3;

pub fn default_reference_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy)]
pub struct ModelRecencyScore {
    weight: f64,
    reference_month: i64,
}

impl ModelRecencyScore {
    pub fn new(weight: f64, reference_start: NaiveDate) -> Self {
        Self {
            weight,
            reference_month: i64::from(reference_start.year()) * 12
                + i64::from(reference_start.month0()),
        }
    }

    fn date_score(&self, date: Option<&DateTime<Utc>>, range: Range) -> f64 {
        match date {
            Some(d) => normalize(month_index(d) as f64, range),
            None => MISSING_DATE_SCORE,
        }
    }

    /// Months from the reference start up to `now`.
    fn range(&self, now: &DateTime<Utc>) -> Range {
        Range::new(self.reference_month as f64, month_index(now) as f64)
    }
}

impl Default for ModelRecencyScore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT, default_reference_start())
    }
}

impl Component for ModelRecencyScore {
    fn id(&self) -> &str {
        RECENCY_ID
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<'a> ScoreComponent<ModelContext<'a>> for ModelRecencyScore {
    fn calculate(&self, ctx: &ModelContext<'a>) -> f64 {
        let range = self.range(&ctx.now);
        let cutoff = self.date_score(ctx.model.knowledge_cutoff.as_ref(), range);
        let updated = self.date_score(ctx.model.last_updated.as_ref(), range);
        cutoff * CUTOFF_SHARE + updated * UPDATED_SHARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelMetadata;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn run(model: &ModelMetadata, now: DateTime<Utc>) -> f64 {
        ModelRecencyScore::default().calculate(&ModelContext { model, now })
    }

    #[test]
    fn missing_dates_fall_back_to_neutral() {
        let m = ModelMetadata::default();
        let s = run(&m, ymd(2025, 1, 1));
        assert!((s - 0.3).abs() < 1e-12);
    }

    #[test]
    fn dates_at_now_score_one() {
        let now = ymd(2025, 1, 20);
        let m = ModelMetadata {
            knowledge_cutoff: Some(ymd(2025, 1, 1)),
            last_updated: Some(ymd(2025, 1, 15)),
            ..Default::default()
        };
        assert!((run(&m, now) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uses_calendar_months() {
        // 2020-01 .. 2025-01 is 60 months; cutoff 2022-07 is month 30.
        let now = ymd(2025, 1, 31);
        let m = ModelMetadata {
            knowledge_cutoff: Some(ymd(2022, 7, 31)),
            last_updated: None,
            ..Default::default()
        };
        let expected = 0.5 * 0.7 + 0.3 * 0.3;
        assert!((run(&m, now) - expected).abs() < 1e-12);
    }

    #[test]
    fn dates_before_reference_start_clamp_to_zero() {
        let m = ModelMetadata {
            knowledge_cutoff: Some(ymd(2018, 3, 1)),
            last_updated: Some(ymd(2019, 12, 1)),
            ..Default::default()
        };
        assert_eq!(run(&m, ymd(2025, 1, 1)), 0.0);
    }

    #[test]
    fn custom_reference_start() {
        let score = ModelRecencyScore::new(0.4, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let m = ModelMetadata {
            knowledge_cutoff: Some(ymd(2024, 7, 1)),
            last_updated: Some(ymd(2024, 7, 1)),
            ..Default::default()
        };
        let s = score.calculate(&ModelContext {
            model: &m,
            now: ymd(2025, 1, 1),
        });
        assert!((s - 0.5).abs() < 1e-12);
    }
}
