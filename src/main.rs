//! Binary entrypoint. Sweeps hh.ru and superjob.ru for programming
//! vacancies and prints one average-salary table per source.
//!
//! See `README.md` for token setup and configuration.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vacancy_salary_analyzer::config::{self, ApiTokens};
use vacancy_salary_analyzer::{
    render_table, summarize_languages, HeadHunter, SuperJob, VacancySource,
};

/// Compact tracing output; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vacancy_salary_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so tokens and config path overrides are visible.
    let _ = dotenvy::dotenv();
    init_tracing();

    let tokens = ApiTokens::from_env()?;
    let cfg = config::load()?;
    info!(
        region = %cfg.region_label,
        languages = cfg.languages.len(),
        "starting vacancy sweep"
    );

    let sources: Vec<Box<dyn VacancySource>> = vec![
        Box::new(HeadHunter::new(tokens.headhunter, cfg.headhunter.clone())),
        Box::new(SuperJob::new(tokens.superjob, cfg.superjob.clone())),
    ];

    // Sweep every source to completion before printing anything, so a
    // mid-sweep failure never leaves a half-printed report.
    let mut tables = Vec::with_capacity(sources.len());
    for source in &sources {
        info!(source = source.name(), "sweeping source");
        let rows = summarize_languages(source.as_ref(), &cfg.languages).await?;
        info!(source = source.name(), rows = rows.len(), "sweep finished");

        let title = format!("{} {}", source.name(), cfg.region_label);
        tables.push(render_table(&title, &rows));
    }

    println!("{}", tables.join("\n"));
    Ok(())
}
