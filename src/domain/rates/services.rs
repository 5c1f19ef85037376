use std::sync::Arc;

use serde::Serialize;

use crate::domain::logging::LogComponent;
use crate::domain::rates::{ChangeAnnotation, RateRecord, format_percent};
use crate::log_trace;

/// Average, max and min over the records that pass the exclusion threshold
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// How many records contributed; zero means all values are the zero fallback
    pub included: usize,
}

/// One display unit of the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCard {
    pub country: String,
    pub flag: String,
    pub rate_text: String,
    pub date: String,
    pub change: ChangeAnnotation,
    pub currency: String,
}

impl From<&RateRecord> for RateCard {
    fn from(record: &RateRecord) -> Self {
        Self {
            country: record.country.clone(),
            flag: record.flag.clone(),
            rate_text: format_percent(record.rate.value()),
            date: record.date.clone(),
            change: ChangeAnnotation::from(record.change),
            currency: record.currency.clone(),
        }
    }
}

/// Everything the presentation layer needs to redraw the board
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderResult {
    pub cards: Vec<RateCard>,
    pub average: String,
    pub max: String,
    pub min: String,
    pub count: usize,
}

/// Holds the base record list and answers search requests against it.
/// The list is fixed at construction; every query returns fresh data.
#[derive(Debug, Clone)]
pub struct RateBoard {
    records: Arc<[RateRecord]>,
}

impl RateBoard {
    pub fn new(records: Vec<RateRecord>) -> Self {
        Self { records: records.into() }
    }

    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose country contains `search_term` ignoring case, or whose
    /// flag contains it verbatim. Original order is kept; empty term keeps all.
    pub fn filter(&self, search_term: &str) -> Vec<RateRecord> {
        let needle_lower = search_term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(search_term, &needle_lower))
            .cloned()
            .collect()
    }

    /// Filter, then render the matching records.
    pub fn search(&self, search_term: &str) -> RenderResult {
        let matching = self.filter(search_term);
        log_trace!(
            LogComponent::Domain("RateBoard"),
            "'{}' matched {}/{} records",
            search_term,
            matching.len(),
            self.len()
        );
        render(&matching)
    }
}

pub fn compute_stats(records: &[RateRecord]) -> DerivedStats {
    let included: Vec<f64> = records
        .iter()
        .filter(|record| record.rate.counts_toward_stats())
        .map(|record| record.rate.value())
        .collect();

    if included.is_empty() {
        return DerivedStats::default();
    }

    let max = included.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = included.iter().copied().fold(f64::INFINITY, f64::min);
    let sum: f64 = included.iter().sum();
    // summation error can nudge the mean of equal values past the extrema
    let average = (sum / included.len() as f64).clamp(min, max);

    DerivedStats { average, max, min, included: included.len() }
}

pub fn render(records: &[RateRecord]) -> RenderResult {
    let stats = compute_stats(records);
    RenderResult {
        cards: records.iter().map(RateCard::from).collect(),
        average: format_percent(stats.average),
        max: format_percent(stats.max),
        min: format_percent(stats.min),
        count: records.len(),
    }
}
