//! Weighted aggregation of independently scored signals.
//!
//! Each signal is a [`ScoreComponent`] with a fixed weight. The aggregator
//! checks once, at construction, that the weights sum to 1.0 and then
//! combines component outputs as:
//!
//! score = clamp(Σ clamp(value_i, 0, 1) * weight_i, 0, 1)
//!
//! The aggregator never interprets what a component measures; it only keeps
//! attribution (`breakdown`) so callers can explain the final number.

use serde::Serialize;

use crate::error::{Result, ScoringError};
use crate::normalize::clamp01;

/// Allowed drift of the weight sum from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

/// Identity and weight of a signal, independent of the context it reads.
pub trait Component: Send + Sync {
    fn id(&self) -> &str;
    fn weight(&self) -> f64;
}

/// A weighted signal computed from a shared context `C`.
///
/// `calculate` should return a value in `[0, 1]`, but the aggregator clamps
/// whatever comes back, so an edge case in one signal cannot poison the total.
pub trait ScoreComponent<C: ?Sized>: Component {
    fn calculate(&self, ctx: &C) -> f64;
}

/// Attribution for one component in an aggregated score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentBreakdown {
    pub id: String,
    /// Component output after clamping into [0,1].
    pub raw_value: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatorResult {
    pub score: f64,
    /// In component registration order.
    pub breakdown: Vec<ComponentBreakdown>,
}

impl AggregatorResult {
    /// Look up a component's attribution by id.
    pub fn get(&self, id: &str) -> Option<&ComponentBreakdown> {
        self.breakdown.iter().find(|b| b.id == id)
    }
}

/// `{id, weight}` pair for explanatory output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentInfo {
    pub id: String,
    pub weight: f64,
}

/// Owns an ordered, validated component set.
///
/// `K` is the component object type, usually a trait object such as
/// `dyn for<'a> ScoreComponent<MyContext<'a>>`, so contexts may borrow their
/// inputs instead of cloning them per call.
pub struct WeightedScoreAggregator<K: ?Sized + Component> {
    name: String,
    components: Vec<Box<K>>,
}

impl<K: ?Sized + Component> WeightedScoreAggregator<K> {
    /// Build an aggregator. Every weight must lie in (0, 1] and the set must
    /// sum to 1.0.
    pub fn new(name: impl Into<String>, components: Vec<Box<K>>) -> Result<Self> {
        let name = name.into();
        if let Some(bad) = components
            .iter()
            .find(|c| !(c.weight().is_finite() && c.weight() > 0.0 && c.weight() <= 1.0))
        {
            return Err(ScoringError::InvalidWeight {
                set: name,
                id: bad.id().to_string(),
                weight: bad.weight(),
            });
        }
        let total: f64 = components.iter().map(|c| c.weight()).sum();
        if !total.is_finite() || (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ScoringError::InvalidWeights { set: name, total });
        }
        Ok(Self { name, components })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run every component against `ctx` and combine the clamped results.
    pub fn calculate<C: ?Sized>(&self, ctx: &C) -> AggregatorResult
    where
        K: ScoreComponent<C>,
    {
        let mut breakdown = Vec::with_capacity(self.components.len());
        let mut score = 0.0;

        for component in &self.components {
            let raw_value = clamp01(component.calculate(ctx));
            let weight = component.weight();
            let contribution = raw_value * weight;

            breakdown.push(ComponentBreakdown {
                id: component.id().to_string(),
                raw_value,
                weight,
                contribution,
            });
            score += contribution;
        }

        AggregatorResult {
            score: clamp01(score),
            breakdown,
        }
    }

    /// Component ids and weights, in registration order.
    pub fn component_info(&self) -> Vec<ComponentInfo> {
        self.components
            .iter()
            .map(|c| ComponentInfo {
                id: c.id().to_string(),
                weight: c.weight(),
            })
            .collect()
    }
}

impl<K: ?Sized + Component> std::fmt::Debug for WeightedScoreAggregator<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedScoreAggregator")
            .field("name", &self.name)
            .field("components", &self.component_info())
            .finish()
    }
}
