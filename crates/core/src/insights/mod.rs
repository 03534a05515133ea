//! Insights module - rule-based observations over transaction history.

mod insights_model;
mod insights_service;

pub use insights_model::{Insight, InsightType};
pub use insights_service::{generate_insights, InsightsService, InsightsServiceTrait};
