//! Contract checks for the bundled tracked-time document.
//!
//! The accessor serves records by slot position, so these tests pin the
//! properties the dashboard depends on: the document parses, slot order is
//! stable, and an out-of-range slot fails without touching the others.

use futures::executor::block_on;

use ui::core::period::Period;
use ui::core::source::{fetch_record, fetch_records, record_count, SourceError};

const EXPECTED_TITLES: &[&str] = &["Work", "Play", "Study", "Exercise", "Social", "Self Care"];

#[test]
fn bundled_document_parses_with_canonical_titles() {
    let records = block_on(fetch_records()).expect("bundled document should parse");

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles, EXPECTED_TITLES,
        "record titles (and their order) drive slot assignment"
    );
}

#[test]
fn every_record_covers_all_three_periods() {
    let records = block_on(fetch_records()).expect("bundled document should parse");

    for record in &records {
        for period in Period::ALL {
            assert!(
                record.timeframes.get(period).is_some(),
                "record {:?} is missing {period} figures",
                record.title
            );
        }
    }
}

#[test]
fn per_slot_fetch_matches_slot_order() {
    let records = block_on(fetch_records()).expect("bundled document should parse");

    for (index, expected) in records.iter().enumerate() {
        let fetched = block_on(fetch_record(index)).expect("in-range slot should fetch");
        assert_eq!(
            &fetched, expected,
            "slot {index} must receive its own record, not a neighbour's"
        );
    }
}

#[test]
fn out_of_range_slot_is_unavailable() {
    let count = block_on(record_count()).expect("bundled document should parse");

    let err = block_on(fetch_record(count)).expect_err("index past the end should fail");
    assert!(
        matches!(err, SourceError::DataUnavailable(_)),
        "expected DataUnavailable, got {err:?}"
    );
}
