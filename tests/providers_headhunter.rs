use std::fs;
use vacancy_salary_analyzer::sources::headhunter::parse_page;
use vacancy_salary_analyzer::SalarySpan;

fn fixture() -> String {
    fs::read_to_string("tests/fixtures/hh_vacancies_page.json")
        .expect("missing tests/fixtures/hh_vacancies_page.json")
}

#[test]
fn fixture_page_parses_all_listings() {
    let page = parse_page(&fixture(), 0).expect("hh parse ok");

    assert_eq!(page.total_found, 2173);
    assert_eq!(page.salaries.len(), 5, "one slot per listing");

    assert_eq!(
        page.salaries[0],
        Some(SalarySpan {
            from: Some(150_000),
            to: Some(250_000),
            currency: Some("RUR".to_string()),
        })
    );
    // null salary block keeps its slot
    assert_eq!(page.salaries[1], None);
    assert_eq!(
        page.salaries[2],
        Some(SalarySpan {
            from: Some(80_000),
            to: None,
            currency: Some("RUR".to_string()),
        })
    );
    assert_eq!(
        page.salaries[3],
        Some(SalarySpan {
            from: None,
            to: Some(90_000),
            currency: Some("RUR".to_string()),
        })
    );
    // foreign currency survives parsing; filtering happens later
    assert_eq!(
        page.salaries[4].as_ref().and_then(|s| s.currency.as_deref()),
        Some("USD")
    );
}

#[test]
fn has_more_tracks_the_reported_page_count() {
    // fixture reports pages = 5, treated as the last page index
    assert!(parse_page(&fixture(), 0).unwrap().has_more);
    assert!(parse_page(&fixture(), 4).unwrap().has_more);
    assert!(!parse_page(&fixture(), 5).unwrap().has_more);
    assert!(!parse_page(&fixture(), 6).unwrap().has_more);
}

#[test]
fn single_page_response_stops_immediately() {
    let body = r#"{"items": [], "found": 0, "pages": 0}"#;
    let page = parse_page(body, 0).expect("empty page parses");

    assert_eq!(page.total_found, 0);
    assert!(page.salaries.is_empty());
    assert!(!page.has_more);
}

#[test]
fn null_listing_keeps_its_slot() {
    let body = r#"{
        "items": [null, {"salary": {"from": 100, "to": 200, "currency": "RUR"}}],
        "found": 2,
        "pages": 1
    }"#;
    let page = parse_page(body, 0).expect("nullable listing parses");

    assert_eq!(page.salaries.len(), 2);
    assert_eq!(page.salaries[0], None);
    assert!(page.salaries[1].is_some());
}

#[test]
fn malformed_body_is_an_error() {
    assert!(parse_page("<html>502 Bad Gateway</html>", 0).is_err());
}
