//! superjob.ru adapter. One GET per page against the 2.0 vacancies endpoint,
//! app-id header authorization. Salary bounds are flat integers where 0
//! stands for "not stated"; the prediction rule treats 0 as absent. Listing
//! fields default when missing, so an empty listing object skips like a
//! null one instead of failing the page.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SuperJobConfig;
use crate::salary::SalarySpan;
use crate::sources::{VacancyPage, VacancySource};

const API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

#[derive(Debug, Deserialize)]
struct Page {
    objects: Vec<Option<Vacancy>>,
    total: u64,
    more: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Vacancy {
    payment_from: u64,
    payment_to: u64,
    currency: String,
}

pub struct SuperJob {
    client: reqwest::Client,
    token: String,
    cfg: SuperJobConfig,
}

impl SuperJob {
    pub fn new(token: String, cfg: SuperJobConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            cfg,
        }
    }
}

/// Parse one response body. Continuation comes straight from the `more` flag.
pub fn parse_page(body: &str) -> Result<VacancyPage> {
    let parsed: Page = serde_json::from_str(body).context("parsing superjob page")?;

    let salaries = parsed
        .objects
        .into_iter()
        .map(|object| {
            object.map(|v| SalarySpan {
                from: Some(v.payment_from),
                to: Some(v.payment_to),
                currency: Some(v.currency),
            })
        })
        .collect();

    Ok(VacancyPage {
        salaries,
        total_found: parsed.total,
        has_more: parsed.more,
    })
}

#[async_trait]
impl VacancySource for SuperJob {
    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn currency(&self) -> &'static str {
        "rub"
    }

    fn page_ceiling(&self) -> u32 {
        self.cfg.page_ceiling
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let body = self
            .client
            .get(API_URL)
            .header("X-Api-App-Id", &self.token)
            .query(&[
                ("town", self.cfg.town_id.to_string()),
                ("catalogues", self.cfg.catalogue_id.to_string()),
                ("count", self.cfg.per_page.to_string()),
                ("period", self.cfg.period_days.to_string()),
                ("page", page.to_string()),
                ("keyword", language.to_string()),
            ])
            .send()
            .await
            .context("superjob request")?
            .error_for_status()
            .context("superjob non-2xx")?
            .text()
            .await
            .context("superjob body")?;

        parse_page(&body)
    }
}
