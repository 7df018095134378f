use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::{
    models::season::{Hemisphere, Season, SeasonDescriptor, SeasonSummary},
    seasons::{
        affirmations::{AffirmationPicker, FALLBACK_AFFIRMATION},
        calendar::{SeasonInterval, intervals_for_year, locate},
    },
};

#[derive(Clone, Default)]
pub struct SeasonResolver {
    picker: AffirmationPicker,
}

impl SeasonResolver {
    pub fn new(picker: AffirmationPicker) -> Self {
        Self { picker }
    }

    pub fn picker(&self) -> &AffirmationPicker {
        &self.picker
    }

    pub fn resolve_now(&self, hemisphere: Hemisphere) -> SeasonDescriptor {
        self.resolve(Utc::now(), hemisphere)
    }

    /// Describes the season containing `now`. Time of day is ignored.
    pub fn resolve(&self, now: DateTime<Utc>, hemisphere: Hemisphere) -> SeasonDescriptor {
        let date = now.date_naive();

        match locate(date, hemisphere) {
            Some(interval) => self.describe(&interval, date, hemisphere),
            None => {
                tracing::warn!("No season interval matched {} ({})", date, hemisphere);
                self.fallback(hemisphere)
            }
        }
    }

    /// The four seasons that start in `year`, in calendar order from March.
    pub fn overview(&self, year: i32, hemisphere: Hemisphere) -> Vec<SeasonSummary> {
        intervals_for_year(year, hemisphere)
            .into_iter()
            .map(|interval| SeasonSummary {
                season: interval.season,
                start_date: interval.start_label(),
                end_date: interval.end_label(),
                total_days: interval.total_days(),
            })
            .collect()
    }

    pub fn overview_now(&self, hemisphere: Hemisphere) -> Vec<SeasonSummary> {
        self.overview(Utc::now().year(), hemisphere)
    }

    fn describe(
        &self,
        interval: &SeasonInterval,
        date: NaiveDate,
        hemisphere: Hemisphere,
    ) -> SeasonDescriptor {
        let total_days = interval.total_days();
        let days_elapsed = interval.days_elapsed(date);

        SeasonDescriptor {
            season: interval.season,
            hemisphere,
            percentage_complete: percentage(days_elapsed, total_days),
            days_elapsed,
            days_remaining: total_days - days_elapsed,
            total_days,
            start_date: interval.start_label(),
            end_date: interval.end_label(),
            affirmation: self.picker.pick_for(interval.season).to_string(),
            next_season: interval.season.next(),
        }
    }

    fn fallback(&self, hemisphere: Hemisphere) -> SeasonDescriptor {
        let season = hemisphere.localize(Season::Spring);
        SeasonDescriptor {
            season,
            hemisphere,
            percentage_complete: 0.0,
            days_elapsed: 0,
            days_remaining: 0,
            total_days: 0,
            start_date: String::new(),
            end_date: String::new(),
            affirmation: FALLBACK_AFFIRMATION.to_string(),
            next_season: season.next(),
        }
    }
}

/// Share of `total` covered by `elapsed`, rounded to one decimal place.
pub fn percentage(elapsed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let raw = elapsed as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
