use crate::{
    format_failure, format_summary, load_all_fixtures, run_fixture, tally, ExpectedFailures,
    HarnessResult, ReferenceFixture, EXPECTED_FAILURES_FILE,
};
use std::path::{Path, PathBuf};
use verse_keys::ReferenceShape;
use verse_keys_books::BibleBooksCodes;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn fixture(name: &str) -> ReferenceFixture {
    load_all_fixtures(&fixtures_dir())
        .unwrap()
        .into_iter()
        .find(|(file, _)| file == name)
        .map(|(_, fixture)| fixture)
        .unwrap_or_else(|| panic!("missing fixture {}", name))
}

#[test]
fn test_all_fixtures_pass() {
    let dir = fixtures_dir();
    let expected = ExpectedFailures::load(&dir.join(EXPECTED_FAILURES_FILE)).unwrap();
    let books = BibleBooksCodes::standard();

    let mut total = HarnessResult::new();
    let mut report = String::new();
    for (name, fixture) in load_all_fixtures(&dir).unwrap() {
        let reports = run_fixture(&fixture, books);
        let result = tally(&name, &reports, &expected);
        for failed in reports.iter().filter(|r| !r.outcome.is_pass()) {
            let entry = expected.get_entry(&name, &failed.case.input);
            report.push_str(&format_failure(&name, failed, entry));
        }
        report.push_str(&format_summary(
            fixture.display_name(&name),
            result.passed,
            result.failed(),
            result.expected_failures,
            result.regressions,
        ));
        total.merge(&result);
    }

    assert!(total.total > 50, "{}", report);
    assert!(total.success(), "{}", report);
}

#[test]
fn test_single_fixture_covers_demo_strings() {
    let fixture = fixture("single.toml");
    let good: Vec<&str> = fixture.good_cases().map(|c| c.input.as_str()).collect();
    assert!(good.contains(&"SA2_19:12"));
    assert!(good.contains(&"REV_11:12!b"));
    assert!(fixture
        .good_cases()
        .all(|c| c.shape == Some(ReferenceShape::Single)));
    assert!(fixture.bad_cases().count() >= 10);
}

#[test]
fn test_compound_fixture_shapes() {
    let fixture = fixture("compound.toml");
    assert!(fixture
        .good_cases()
        .all(|c| c.shape == Some(ReferenceShape::Compound)));
}

#[test]
fn test_strict_fixture_config() {
    let fixture = fixture("strict.toml");
    assert!(fixture.config.strict_validation);
    assert!(fixture.bad_cases().any(|c| c.error.as_deref() == Some("InvalidBookCode")));
}
