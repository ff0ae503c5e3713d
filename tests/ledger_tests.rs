use hourtally::core::aggregator::totals;
use hourtally::core::{EntryLedger, decimal_to_hours_minutes, total_decimal_hours};
use hourtally::models::Duration;
use hourtally::ui::render::{entry_lines, total_lines};

mod common;
use common::ledger_of;

#[test]
fn test_append_keeps_insertion_order() {
    let mut ledger = EntryLedger::new();
    ledger.append(Duration::new(5, 0));
    ledger.append(Duration::new(0, 80));
    ledger.append(Duration::new(2, 5));

    let shown: Vec<String> = ledger.list().iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["5:00", "1:20", "2:05"]);
    assert_eq!(ledger.len(), 3);
}

#[test]
fn test_clear_resets_and_is_idempotent() {
    let mut ledger = ledger_of(&["5:00", "1:20"]);
    ledger.clear();
    assert!(ledger.is_empty());

    ledger.clear();
    assert!(ledger.is_empty());

    let t = totals(&ledger);
    assert_eq!(total_lines(&t, 2), [
        "Total Hours: 0.00".to_string(),
        "Total Hours: 0 hours and 0 minutes".to_string(),
    ]);
}

#[test]
fn test_empty_ledger_sums_to_zero() {
    assert_eq!(total_decimal_hours(&EntryLedger::new()), 0.0);
}

#[test]
fn test_total_of_two_entries() {
    let ledger = ledger_of(&["5:00", "00:80"]);
    let t = totals(&ledger);

    assert_eq!(t.hours, 6);
    assert_eq!(t.minutes, 20);
    assert_eq!(
        total_lines(&t, 2),
        [
            "Total Hours: 6.33".to_string(),
            "Total Hours: 6 hours and 20 minutes".to_string(),
        ]
    );
}

#[test]
fn test_entry_lines_are_one_indexed() {
    let ledger = ledger_of(&["5:00", "00:80", "23:125"]);
    assert_eq!(
        entry_lines(ledger.list()),
        ["Entry 1: 5:00", "Entry 2: 1:20", "Entry 3: 25:05"]
    );
}

#[test]
fn test_total_is_recomputed_from_entries() {
    let mut ledger = EntryLedger::new();
    let mut expected = 0.0;

    for text in ["0:01", "0:59", "7:45", "12:01", "3:30", "0:80", "23:99"] {
        let d: Duration = text.parse().unwrap();
        ledger.append(d);
        expected += f64::from(d.hours()) + f64::from(d.minutes()) / 60.0;
        assert!((total_decimal_hours(&ledger) - expected).abs() < 1e-9);
    }
}

#[test]
fn test_hours_minutes_round_trip_matches_direct_sum() {
    let ledgers: [&[&str]; 4] = [
        &["7:45", "0:59", "12:01", "3:30"],
        &["0:01"; 37],
        &["0:20", "0:20", "0:20"],
        &["23:99", "23:99", "23:99", "23:99", "23:99"],
    ];

    for entries in ledgers {
        let ledger = ledger_of(entries);
        let minutes: u64 = ledger.iter().map(Duration::total_minutes).sum();
        let t = totals(&ledger);
        assert_eq!((t.hours, t.minutes), (minutes / 60, minutes % 60), "{entries:?}");
    }
}

#[test]
fn test_decimal_to_hours_minutes() {
    assert_eq!(decimal_to_hours_minutes(0.0), (0, 0));
    assert_eq!(decimal_to_hours_minutes(2.5), (2, 30));
    assert_eq!(decimal_to_hours_minutes(6.0 + 20.0 / 60.0), (6, 20));
}

#[test]
fn test_rounded_sixty_minutes_carry_into_hours() {
    assert_eq!(decimal_to_hours_minutes(1.9999), (2, 0));
    assert_eq!(decimal_to_hours_minutes(0.9995), (1, 0));
}
