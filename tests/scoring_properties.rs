// tests/scoring_properties.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use hallunot::aggregator::{Component, ScoreComponent, WeightedScoreAggregator};
use hallunot::breaking::detect_breaking_changes;
use hallunot::buckets::{group_versions_into_buckets, ScoredVersion};
use hallunot::final_score::combine;
use hallunot::library::{language::affinity_for, PopularityScore, RecencyRiskScore};
use hallunot::risk::{classify_risk, RiskLevel};
use hallunot::{
    LibraryCalculator, LibraryMetadata, ModelMetadata, ScoringError, VersionMetadata,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

struct Const {
    id: &'static str,
    weight: f64,
    value: f64,
}

impl Component for Const {
    fn id(&self) -> &str {
        self.id
    }
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl ScoreComponent<()> for Const {
    fn calculate(&self, _: &()) -> f64 {
        self.value
    }
}

fn agg(parts: &[(&'static str, f64, f64)]) -> Result<WeightedScoreAggregator<dyn ScoreComponent<()>>, ScoringError> {
    let comps: Vec<Box<dyn ScoreComponent<()>>> = parts
        .iter()
        .map(|&(id, weight, value)| Box::new(Const { id, weight, value }) as Box<dyn ScoreComponent<()>>)
        .collect();
    WeightedScoreAggregator::new("props", comps)
}

#[test]
fn weight_sums_are_checked_within_tolerance() {
    assert!(agg(&[("a", 0.5, 0.0), ("b", 0.5, 0.0)]).is_ok());
    assert!(agg(&[("a", 0.5, 0.0), ("b", 0.5005, 0.0)]).is_ok());
    assert!(matches!(
        agg(&[("a", 0.5, 0.0), ("b", 0.52, 0.0)]),
        Err(ScoringError::InvalidWeights { .. })
    ));
    assert!(agg(&[("a", 0.9, 0.0)]).is_err());
}

#[test]
fn out_of_range_components_are_clamped() {
    let a = agg(&[("hi", 0.5, 1.5), ("lo", 0.5, -0.5)]).unwrap();
    let r = a.calculate(&());
    assert_eq!(r.get("hi").unwrap().raw_value, 1.0);
    assert_eq!(r.get("lo").unwrap().raw_value, 0.0);
    assert_eq!(r.score, 0.5);
}

#[test]
fn random_component_sets_stay_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a: f64 = rng.random_range(-2.0..3.0);
        let b: f64 = rng.random_range(-2.0..3.0);
        let c: f64 = rng.random_range(-2.0..3.0);
        let r = agg(&[("a", 0.2, a), ("b", 0.3, b), ("c", 0.5, c)])
            .unwrap()
            .calculate(&());
        let sum: f64 = r.breakdown.iter().map(|x| x.contribution).sum();
        assert!((0.0..=1.0).contains(&r.score));
        assert!((r.score - sum.clamp(0.0, 1.0)).abs() < 1e-12);
    }
}

#[test]
fn recency_boundaries() {
    assert_eq!(RecencyRiskScore::score_for_months(0), 0.5);
    assert_eq!(RecencyRiskScore::score_for_months(-24), 1.0);
    assert_eq!(RecencyRiskScore::score_for_months(-40), 1.0);
    assert_eq!(RecencyRiskScore::score_for_months(12), 0.0);
    assert_eq!(RecencyRiskScore::score_for_months(30), 0.0);
}

#[test]
fn language_affinity_ignores_case() {
    assert_eq!(affinity_for("PYTHON"), affinity_for("python"));
    assert_eq!(affinity_for("python"), 1.0);
    assert_eq!(affinity_for("COBOL"), 0.5);
}

#[test]
fn popularity_is_monotone() {
    assert_eq!(PopularityScore::blend(0, 0), 0.0);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let stars: u64 = rng.random_range(0..300_000);
        let deps: u64 = rng.random_range(0..30_000);
        let extra_stars: u64 = rng.random_range(0..10_000);
        let extra_deps: u64 = rng.random_range(0..1_000);
        let base = PopularityScore::blend(stars, deps);
        assert!(PopularityScore::blend(stars + extra_stars, deps) >= base);
        assert!(PopularityScore::blend(stars, deps + extra_deps) >= base);
    }
}

#[test]
fn final_score_examples() {
    assert_eq!(combine(0.75, 0.8), 0.60);
    assert_eq!(combine(0.50, 1.0), 0.50);
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap()
}

#[test]
fn breaking_change_examples() {
    let out = detect_breaking_changes(&[
        VersionMetadata::new("2.0.0", t0() + Duration::days(90)),
        VersionMetadata::new("1.0.0", t0()),
    ]);
    let flags: Vec<_> = out.iter().map(|v| (v.version.as_str(), v.breaking)).collect();
    assert_eq!(flags, vec![("1.0.0", false), ("2.0.0", true)]);

    let same = detect_breaking_changes(&[
        VersionMetadata::new("1.0.0", t0()),
        VersionMetadata::new("1.1.0", t0() + Duration::days(1)),
        VersionMetadata::new("1.1.1", t0() + Duration::days(2)),
    ]);
    assert!(same.iter().all(|v| !v.breaking));
}

#[test]
fn bucketer_example() {
    let cutoff = t0() + Duration::days(365);
    let input: Vec<ScoredVersion> = ["1.0.0", "1.1.0", "2.0.0", "2.1.0"]
        .iter()
        .enumerate()
        .map(|(i, v)| {
            ScoredVersion::from_compatibility(*v, t0() + Duration::days(120 * i as i64), false, &cutoff)
        })
        .collect();
    let buckets = group_versions_into_buckets(input);
    assert_eq!(buckets.len(), 2);
    let mut majors: Vec<_> = buckets.iter().map(|b| b.major).collect();
    majors.sort();
    assert_eq!(majors, vec![1, 2]);

    let mut seen: Vec<_> = buckets
        .iter()
        .flat_map(|b| b.versions.iter().map(|v| v.version.clone()))
        .collect();
    seen.sort();
    assert_eq!(seen, vec!["1.0.0", "1.1.0", "2.0.0", "2.1.0"]);
}

#[test]
fn risk_tier_boundaries() {
    assert_eq!(classify_risk(70), RiskLevel::Low);
    assert_eq!(classify_risk(69), RiskLevel::Medium);
    assert_eq!(classify_risk(40), RiskLevel::Medium);
    assert_eq!(classify_risk(39), RiskLevel::High);
}

#[test]
fn stability_bypass_and_zero_age() {
    let calc = LibraryCalculator::new().unwrap();
    let cutoff = t0();
    let model = ModelMetadata::with_cutoff("m", cutoff);
    let fresh = LibraryMetadata {
        name: "brand-new".into(),
        language: "Rust".into(),
        age_in_years: 0.0,
        release_count: 3,
        ..Default::default()
    };

    let before = calc.score_version(&fresh, &VersionMetadata::new("0.1.0", cutoff), &model);
    assert_eq!(before.library_breakdown.stability.value, 1.0);

    let after = calc.score_version(
        &fresh,
        &VersionMetadata::new("0.2.0", cutoff + Duration::days(45)),
        &model,
    );
    assert_eq!(after.library_breakdown.stability.value, 0.5);
    assert!(after.score.is_finite());
}
