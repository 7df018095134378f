use chrono::{Datelike, NaiveDate};

use crate::models::season::{Hemisphere, Season};

struct Boundary {
    season: Season,
    start: (u32, u32),
    end: (u32, u32),
    // Winter closes in the following calendar year.
    end_year_offset: i32,
}

const NORTHERN_BOUNDARIES: [Boundary; 4] = [
    Boundary {
        season: Season::Spring,
        start: (3, 20),
        end: (6, 20),
        end_year_offset: 0,
    },
    Boundary {
        season: Season::Summer,
        start: (6, 21),
        end: (9, 22),
        end_year_offset: 0,
    },
    Boundary {
        season: Season::Autumn,
        start: (9, 23),
        end: (12, 20),
        end_year_offset: 0,
    },
    Boundary {
        season: Season::Winter,
        start: (12, 21),
        end: (3, 19),
        end_year_offset: 1,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonInterval {
    pub season: Season,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonInterval {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn days_elapsed(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    pub fn start_label(&self) -> String {
        month_day(self.start)
    }

    pub fn end_label(&self) -> String {
        month_day(self.end)
    }
}

pub fn month_day(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}

/// The four intervals starting in `year`, labelled for `hemisphere`.
///
/// Dates chrono cannot represent are skipped, so the result is shorter than four
/// entries only at the very edges of the supported calendar range.
pub fn intervals_for_year(year: i32, hemisphere: Hemisphere) -> Vec<SeasonInterval> {
    NORTHERN_BOUNDARIES
        .iter()
        .filter_map(|b| {
            let start = NaiveDate::from_ymd_opt(year, b.start.0, b.start.1)?;
            let end_year = year.checked_add(b.end_year_offset)?;
            let end = NaiveDate::from_ymd_opt(end_year, b.end.0, b.end.1)?;
            Some(SeasonInterval {
                season: hemisphere.localize(b.season),
                start,
                end,
            })
        })
        .collect()
}

/// Winter that began on December 21 of the previous year and ends March 19 of `year`.
pub fn wraparound_winter(year: i32, hemisphere: Hemisphere) -> Option<SeasonInterval> {
    let start = NaiveDate::from_ymd_opt(year.checked_sub(1)?, 12, 21)?;
    let end = NaiveDate::from_ymd_opt(year, 3, 19)?;
    Some(SeasonInterval {
        season: hemisphere.localize(Season::Winter),
        start,
        end,
    })
}

/// Finds the interval holding `date`, checking the wraparound winter when the
/// date sits before the spring equinox.
pub fn locate(date: NaiveDate, hemisphere: Hemisphere) -> Option<SeasonInterval> {
    let year = date.year();
    intervals_for_year(year, hemisphere)
        .into_iter()
        .find(|interval| interval.contains(date))
        .or_else(|| wraparound_winter(year, hemisphere).filter(|w| w.contains(date)))
}
