//! # Per-Language Statistics
//! Consumes the page walk and folds listings into one summary row per
//! language: how many matches the source reports, how many listings carried
//! a usable salary, and the average prediction over those.

use anyhow::Result;
use tracing::info;

use crate::salary::predict_salary_for;
use crate::sources::{walk_pages, VacancySource};

/// Aggregate statistics for one language on one source. Built during the
/// walk, never mutated after it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: String,
    /// Source-reported match count as seen on the last yielded pair,
    /// 0 when the source yielded nothing at all.
    pub vacancies_found: u64,
    /// Listings that produced a salary prediction.
    pub vacancies_processed: u64,
    /// Truncated mean of the predictions; 0 when nothing was processed.
    pub average_salary: u64,
}

/// Running totals while a walk is in flight.
#[derive(Debug, Default)]
struct Tally {
    found: u64,
    processed: u64,
    salary_sum: u64,
}

impl Tally {
    fn record(&mut self, estimate: Option<u64>, total_found: u64) {
        self.found = total_found;
        if let Some(salary) = estimate {
            self.processed += 1;
            self.salary_sum += salary;
        }
    }

    fn into_summary(self, language: &str) -> LanguageSummary {
        let average = if self.processed > 0 {
            self.salary_sum / self.processed
        } else {
            0
        };
        LanguageSummary {
            language: language.to_string(),
            vacancies_found: self.found,
            vacancies_processed: self.processed,
            average_salary: average,
        }
    }
}

/// Sweep one language over one source and fold the walk into a summary row.
pub async fn summarize_language(
    source: &dyn VacancySource,
    language: &str,
) -> Result<LanguageSummary> {
    let mut tally = Tally::default();
    walk_pages(source, language, |span, total_found| {
        let estimate = span.and_then(|s| predict_salary_for(s, source.currency()));
        tally.record(estimate, total_found);
    })
    .await?;

    let summary = tally.into_summary(language);
    info!(
        source = source.name(),
        language,
        found = summary.vacancies_found,
        processed = summary.vacancies_processed,
        average = summary.average_salary,
        "language summarized"
    );
    Ok(summary)
}

/// Sweep every language in order, one summary per language. Rows keep the
/// input order; the first error aborts the whole sweep.
pub async fn summarize_languages(
    source: &dyn VacancySource,
    languages: &[String],
) -> Result<Vec<LanguageSummary>> {
    let mut rows = Vec::with_capacity(languages.len());
    for language in languages {
        rows.push(summarize_language(source, language).await?);
    }
    Ok(rows)
}
