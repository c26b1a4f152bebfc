//! Installing a custom official Hijri table.
//!
//! The active table is process-wide and set once, so everything that depends
//! on the installed table lives in this single test.

use taqvim::hijri::{hijri_from_days_with_source, hijri_to_days};
use taqvim::official::{self, OfficialMonthTable};
use taqvim::{convert, CalendarSystem, CivilDate, DateError, HijriSource};

const TABLE_1445: &str = r#"{
    "first_year": 1445,
    "first_day": [2023, 7, 19],
    "months": [[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30]]
}"#;

#[cfg(feature = "serde")]
#[test]
fn test_install_custom_table() {
    let table = OfficialMonthTable::from_json(TABLE_1445).unwrap();
    assert_eq!((table.first_year(), table.last_year()), (1445, 1445));
    official::install(table).unwrap();

    // a second installation is refused and handed back
    let rejected = official::install(OfficialMonthTable::bundled()).unwrap_err();
    assert_eq!(rejected.first_year(), 1440);
    assert_eq!(official::active().first_year(), 1445);

    let muharram = CalendarSystem::Gregorian.to_days(CivilDate::new(2023, 6, 19)).unwrap();
    assert_eq!(
        hijri_from_days_with_source(muharram),
        (CivilDate::new(1445, 0, 1), HijriSource::Official)
    );
    assert_eq!(
        convert(CivilDate::new(1445, 8, 1), CalendarSystem::Hijri, CalendarSystem::Gregorian),
        Ok(CivilDate::new(2024, 2, 11))
    );

    // 1440 is now outside the table and resolved arithmetically
    let (_, source) = hijri_from_days_with_source(muharram - 2000);
    assert_eq!(source, HijriSource::Tabular);

    // the combined calendar has no gaps around the window
    for days in (muharram - 400)..(muharram + 800) {
        let (date, _) = hijri_from_days_with_source(days);
        assert_eq!(hijri_to_days(date), days, "{date:?}");
    }
}

#[test]
fn test_rejects_malformed_tables() {
    assert!(matches!(
        OfficialMonthTable::new(1445, 0, Vec::new()),
        Err(DateError::InvalidTable { .. })
    ));
    assert!(OfficialMonthTable::new(0, 0, vec![[30; 12]]).is_err());
    assert!(OfficialMonthTable::new(1445, 0, vec![[31; 12]]).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_rejects_malformed_json() {
    assert!(matches!(
        OfficialMonthTable::from_json("{\"first_year\": 1445}"),
        Err(DateError::InvalidTable { .. })
    ));
}
