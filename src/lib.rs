// src/lib.rs
// Confidence scoring for "does this model know this library version?".
//
// Layers, leaves first: normalize → aggregator → library/model components and
// calculators → final_score → buckets/breaking, with engine/report on top.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod normalize;

// Sub-scores
pub mod library;
pub mod model;

// Post-processing
pub mod breaking;
pub mod buckets;
pub mod compatibility;
pub mod final_score;
pub mod risk;
pub mod version;

// Inputs, outputs and the shared engine
pub mod engine;
pub mod metadata;
pub mod report;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::config::ScoringConfig;
pub use crate::engine::ScoringEngine;
pub use crate::error::{Result, ScoringError};
pub use crate::library::{LibraryCalculator, LibraryMetadata, VersionMetadata};
pub use crate::model::{ModelCalculator, ModelMetadata};
pub use crate::report::{ScoreReport, ScoreRequest};
