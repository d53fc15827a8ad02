//! # Vacancy Sources
//! The paginated-fetch half of the pipeline: a small capability trait each
//! job board implements, plus the page loop that turns per-page requests into
//! a stream of (listing, total-found) pairs for the aggregation to consume.

pub mod headhunter;
pub mod superjob;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::salary::SalarySpan;

/// One parsed page of listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyPage {
    /// Salary block of each listing on the page, in page order. `None` marks
    /// a null listing or one without a salary block; both skip identically.
    pub salaries: Vec<Option<SalarySpan>>,
    /// Source-reported match count for the whole query. A snapshot taken per
    /// page, so it may drift while the walk is in flight.
    pub total_found: u64,
    /// Continuation signal, normalized from the source's own shape.
    pub has_more: bool,
}

/// What one job board must provide: a single page request plus the
/// source-specific constants the shared loop and the salary filter need.
#[async_trait]
pub trait VacancySource {
    /// Source name as shown in table titles, e.g. "HeadHunter".
    fn name(&self) -> &'static str;

    /// Currency code a listing must be quoted in to count toward statistics.
    fn currency(&self) -> &'static str;

    /// Hard stop: at most this many pages are requested per language.
    fn page_ceiling(&self) -> u32;

    /// Fetch and parse one page of vacancies matching `language`.
    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}

/// Walk all pages for one language, handing each `(listing, total_found)`
/// pair to `on_vacancy` as it arrives.
///
/// Page indices start at 0. The walk ends when the source reports no further
/// pages or after `page_ceiling` requests, whichever comes first; the ceiling
/// keeps a source that never signals completion from looping forever. Any
/// transport or parse error aborts the walk immediately, no retry.
pub async fn walk_pages(
    source: &dyn VacancySource,
    language: &str,
    mut on_vacancy: impl FnMut(Option<&SalarySpan>, u64),
) -> Result<()> {
    let mut page = 0u32;
    let mut has_more = true;

    while has_more && page < source.page_ceiling() {
        let chunk = source.fetch_page(language, page).await?;
        debug!(
            source = source.name(),
            language,
            page,
            listings = chunk.salaries.len(),
            found = chunk.total_found,
            "fetched vacancy page"
        );

        for span in &chunk.salaries {
            on_vacancy(span.as_ref(), chunk.total_found);
        }

        has_more = chunk.has_more;
        page += 1;
    }

    Ok(())
}
