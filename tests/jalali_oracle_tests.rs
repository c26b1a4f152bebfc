//! Jalali conversions checked against an oracle table.
//!
//! The table was generated with an independent break-table Jalali algorithm
//! and covers every 11th day from 1900 to 2199 plus the last days of Esfand
//! for Jalali years 1300 through 1499. Months in the file are 1-based.

use flate2::read::GzDecoder;
use std::io::Read;
use taqvim::day_count::gregorian_to_days;
use taqvim::jalali::{jalali_from_days, jalali_to_days};
use taqvim::{convert, CalendarSystem, CivilDate};

#[derive(Debug)]
struct OracleRow {
    gregorian: CivilDate,
    jalali: CivilDate,
    days: i64,
}

fn parse_date(text: &str) -> CivilDate {
    let parts: Vec<i32> = text.split('-').map(|p| p.parse().unwrap()).collect();
    CivilDate::new(parts[0], (parts[1] - 1) as u8, parts[2] as u8)
}

fn load_rows() -> Vec<OracleRow> {
    let compressed = include_bytes!("fixtures/jalali_gregorian.tsv.gz");
    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut tsv_data = String::new();
    decoder.read_to_string(&mut tsv_data).unwrap();

    tsv_data
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let parts: Vec<&str> = line.split('\t').collect();
            OracleRow {
                gregorian: parse_date(parts[0]),
                jalali: parse_date(parts[1]),
                days: parts[2].parse().unwrap(),
            }
        })
        .collect()
}

#[test]
fn test_oracle_table_loaded() {
    let rows = load_rows();
    assert!(rows.len() > 10_000, "only {} rows", rows.len());
}

#[test]
fn test_oracle_day_counts() {
    let mut failures = Vec::new();
    for row in load_rows() {
        if gregorian_to_days(row.gregorian) != row.days
            || jalali_to_days(row.jalali) != row.days
            || jalali_from_days(row.days) != row.jalali
        {
            failures.push(row);
        }
    }
    assert!(failures.is_empty(), "{} mismatches, first: {:?}", failures.len(), failures.first());
}

#[test]
fn test_oracle_conversions() {
    for row in load_rows().into_iter().step_by(5) {
        assert_eq!(
            convert(row.gregorian, CalendarSystem::Gregorian, CalendarSystem::Jalali),
            Ok(row.jalali)
        );
        assert_eq!(
            convert(row.jalali, CalendarSystem::Jalali, CalendarSystem::Gregorian),
            Ok(row.gregorian)
        );
    }
}

#[test]
fn test_oracle_esfand_lengths() {
    // last day of each Jalali year in the table is followed by Farvardin 1
    for row in load_rows() {
        if row.jalali.month == 11 && row.jalali.day >= 29 {
            let next = jalali_from_days(row.days + 1);
            let expected_last = CalendarSystem::Jalali.month_length(row.jalali.year, 11);
            if row.jalali.day == expected_last {
                assert_eq!(next, CivilDate::new(row.jalali.year + 1, 0, 1), "{row:?}");
            } else {
                assert_eq!(next, CivilDate::new(row.jalali.year, 11, 30), "{row:?}");
            }
        }
    }
}
