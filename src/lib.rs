// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod salary;
pub mod sources;
pub mod stats;
pub mod table;

// ---- Re-exports for stable public API ----
pub use crate::salary::{predict_salary, predict_salary_for, SalarySpan};
pub use crate::sources::headhunter::HeadHunter;
pub use crate::sources::superjob::SuperJob;
pub use crate::sources::{walk_pages, VacancyPage, VacancySource};
pub use crate::stats::{summarize_language, summarize_languages, LanguageSummary};
pub use crate::table::render_table;
