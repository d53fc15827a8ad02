//! hh.ru adapter. One GET per page against the public vacancies endpoint,
//! Bearer authorization, query-parameter filters. Salary sits in a nullable
//! object with nullable bounds.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::HeadHunterConfig;
use crate::salary::SalarySpan;
use crate::sources::{VacancyPage, VacancySource};

const API_URL: &str = "https://api.hh.ru/vacancies";

#[derive(Debug, Deserialize)]
struct Page {
    items: Vec<Option<Vacancy>>,
    found: u64,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<u64>,
    to: Option<u64>,
    currency: Option<String>,
}

pub struct HeadHunter {
    client: reqwest::Client,
    token: String,
    cfg: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(token: String, cfg: HeadHunterConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            cfg,
        }
    }
}

/// Parse one response body. `page` is the index the body was fetched for;
/// the reported `pages` is taken as the last page index, so the walk
/// continues while the current index is below it.
pub fn parse_page(body: &str, page: u32) -> Result<VacancyPage> {
    let parsed: Page = serde_json::from_str(body).context("parsing headhunter page")?;

    let salaries = parsed
        .items
        .into_iter()
        .map(|item| {
            item.and_then(|v| v.salary).map(|s| SalarySpan {
                from: s.from,
                to: s.to,
                currency: s.currency,
            })
        })
        .collect();

    Ok(VacancyPage {
        salaries,
        total_found: parsed.found,
        has_more: page < parsed.pages,
    })
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn currency(&self) -> &'static str {
        "RUR"
    }

    fn page_ceiling(&self) -> u32 {
        self.cfg.page_ceiling
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let body = self
            .client
            .get(API_URL)
            .bearer_auth(&self.token)
            .query(&[
                ("period", self.cfg.period_days.to_string()),
                ("specialization", self.cfg.specialization_id.to_string()),
                ("area", self.cfg.area_id.to_string()),
                ("professional_role", self.cfg.professional_role_id.to_string()),
                ("per_page", self.cfg.per_page.to_string()),
                ("page", page.to_string()),
                ("text", language.to_string()),
            ])
            .send()
            .await
            .context("headhunter request")?
            .error_for_status()
            .context("headhunter non-2xx")?
            .text()
            .await
            .context("headhunter body")?;

        parse_page(&body, page)
    }
}
