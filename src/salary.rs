//! # Salary Prediction
//! Pure rules that map a listing's raw salary bounds to a single estimate.
//! No I/O, shared by both source adapters and covered by unit tests.

/// Salary block of one vacancy as reported by a source, before estimation.
///
/// Sources disagree about field names and nesting; adapters normalize into
/// this shape. `currency` stays optional because hh.ru nests it inside a
/// nullable salary object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalarySpan {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

/// Estimate a single salary from optional lower/upper bounds.
///
/// Both bounds present → their midpoint. Only the lower → 20% above it.
/// Only the upper → 20% below it. All arithmetic truncates; bounds large
/// enough to overflow it yield `None`.
///
/// A bound of 0 counts as "not stated": superjob.ru sends 0 where the poster
/// left the field empty, so `Some(0)` and `None` behave identically here.
pub fn predict_salary(from: Option<u64>, to: Option<u64>) -> Option<u64> {
    let from = from.filter(|v| *v > 0);
    let to = to.filter(|v| *v > 0);

    match (from, to) {
        (Some(from), Some(to)) => from.checked_add(to).map(|sum| sum / 2),
        (Some(from), None) => from.checked_mul(12).map(|scaled| scaled / 10),
        (None, Some(to)) => to.checked_mul(8).map(|scaled| scaled / 10),
        (None, None) => None,
    }
}

/// Estimate a salary only when the span is quoted in `currency`.
///
/// Listings quoted in any other currency (or in none at all) yield `None`
/// and are skipped by the aggregation, same as listings without salary data.
pub fn predict_salary_for(span: &SalarySpan, currency: &str) -> Option<u64> {
    if span.currency.as_deref() != Some(currency) {
        return None;
    }
    predict_salary(span.from, span.to)
}
