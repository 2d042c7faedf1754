//! Shared constructors for unit tests.

use std::collections::BTreeSet;

use crate::{AscentDate, Day, ListVariant, Month, PeakList, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn full_date(y: u16, m: u8, d: u8) -> AscentDate {
    AscentDate::Day {
        year:  year(y),
        month: month(m),
        day:   Day::new(d, year(y), month(m)).unwrap(),
    }
}

pub fn month_date(y: u16, m: u8) -> AscentDate {
    AscentDate::Month {
        year:  year(y),
        month: month(m),
    }
}

pub fn year_date(y: u16) -> AscentDate {
    AscentDate::Year { year: year(y) }
}

/// Parses a set of raw ascent keys
pub fn dates(raw: &[&str]) -> BTreeSet<AscentDate> {
    raw.iter().map(|r| AscentDate::parse(r)).collect()
}

pub fn peak_list(id: &str, variant: ListVariant, mountain_ids: &[&str]) -> PeakList {
    PeakList::new(id, variant, mountain_ids.iter().map(|m| (*m).to_owned()).collect())
}
