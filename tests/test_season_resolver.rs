use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use season_tracker_be::{
    models::season::{Hemisphere, Season},
    seasons::{
        AffirmationChooser, AffirmationPicker, SeasonResolver,
        affirmations::{FALLBACK_AFFIRMATION, affirmations_for},
        resolver::percentage,
    },
};
use std::sync::Arc;

struct FirstChooser;

impl AffirmationChooser for FirstChooser {
    fn choose(&self, options: &[&'static str]) -> Option<&'static str> {
        options.first().copied()
    }
}

fn resolver() -> SeasonResolver {
    SeasonResolver::new(AffirmationPicker::new(Arc::new(FirstChooser)))
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

#[test]
fn test_spring_equinox_starts_spring() {
    let d = resolver().resolve(at(2025, 3, 20), Hemisphere::North);

    assert_eq!(d.season, Season::Spring);
    assert_eq!(d.hemisphere, Hemisphere::North);
    assert_eq!(d.days_elapsed, 0);
    assert_eq!(d.days_remaining, 92);
    assert_eq!(d.total_days, 92);
    assert_eq!(d.percentage_complete, 0.0);
    assert_eq!(d.start_date, "March 20");
    assert_eq!(d.end_date, "June 20");
    assert_eq!(d.next_season, Season::Summer);
}

#[test]
fn test_last_day_of_spring_is_complete() {
    let d = resolver().resolve(at(2025, 6, 20), Hemisphere::North);

    assert_eq!(d.season, Season::Spring);
    assert_eq!(d.days_elapsed, 92);
    assert_eq!(d.total_days, 92);
    assert_eq!(d.days_remaining, 0);
    assert_eq!(d.percentage_complete, 100.0);
}

#[test]
fn test_interval_lengths() {
    let r = resolver();

    assert_eq!(r.resolve(at(2025, 7, 1), Hemisphere::North).total_days, 93);
    assert_eq!(r.resolve(at(2025, 10, 1), Hemisphere::North).total_days, 88);
    assert_eq!(r.resolve(at(2025, 6, 21), Hemisphere::North).season, Season::Summer);
    assert_eq!(r.resolve(at(2025, 9, 23), Hemisphere::North).season, Season::Autumn);
    assert_eq!(r.resolve(at(2025, 12, 20), Hemisphere::North).season, Season::Autumn);
    assert_eq!(r.resolve(at(2025, 12, 21), Hemisphere::North).season, Season::Winter);
}

#[test]
fn test_january_uses_wraparound_winter() {
    let d = resolver().resolve(at(2025, 1, 15), Hemisphere::North);

    assert_eq!(d.season, Season::Winter);
    assert_eq!(d.start_date, "December 21");
    assert_eq!(d.end_date, "March 19");
    assert_eq!(d.total_days, 88);
    assert_eq!(d.days_elapsed, 25);
    assert_eq!(d.days_remaining, 63);
    assert_eq!(d.percentage_complete, 28.4);
    assert_eq!(d.next_season, Season::Spring);
}

#[test]
fn test_leap_year_lengthens_winter() {
    let r = resolver();

    // December 21, 2023 through March 19, 2024 includes February 29.
    let january = r.resolve(at(2024, 1, 15), Hemisphere::North);
    assert_eq!(january.total_days, 89);
    assert_eq!(january.days_elapsed, 25);

    let december = r.resolve(at(2023, 12, 25), Hemisphere::North);
    assert_eq!(december.total_days, 89);
    assert_eq!(december.days_elapsed, 4);
}

#[test]
fn test_winter_is_continuous_across_new_year() {
    let r = resolver();

    let dec_31 = r.resolve(at(2024, 12, 31), Hemisphere::North);
    let jan_1 = r.resolve(at(2025, 1, 1), Hemisphere::North);

    assert_eq!(dec_31.season, Season::Winter);
    assert_eq!(jan_1.season, Season::Winter);
    assert_eq!(dec_31.total_days, jan_1.total_days);
    assert_eq!(dec_31.days_elapsed, 10);
    assert_eq!(jan_1.days_elapsed, 11);
}

#[test]
fn test_last_day_of_winter() {
    let d = resolver().resolve(at(2025, 3, 19), Hemisphere::North);

    assert_eq!(d.season, Season::Winter);
    assert_eq!(d.days_elapsed, 88);
    assert_eq!(d.days_remaining, 0);
    assert_eq!(d.percentage_complete, 100.0);
}

#[test]
fn test_southern_hemisphere_flips_labels() {
    let r = resolver();

    let january = r.resolve(at(2025, 1, 15), Hemisphere::South);
    assert_eq!(january.season, Season::Summer);
    assert_eq!(january.hemisphere, Hemisphere::South);
    assert_eq!(january.total_days, 88);
    assert_eq!(january.next_season, Season::Autumn);

    let july = r.resolve(at(2025, 7, 4), Hemisphere::South);
    assert_eq!(july.season, Season::Winter);
    assert_eq!(july.days_elapsed, 13);
    assert_eq!(july.start_date, "June 21");

    assert_eq!(r.resolve(at(2025, 4, 1), Hemisphere::South).season, Season::Autumn);
    assert_eq!(r.resolve(at(2025, 10, 1), Hemisphere::South).season, Season::Spring);
}

#[test]
fn test_time_of_day_is_ignored() {
    let r = resolver();
    let late = Utc.with_ymd_and_hms(2025, 3, 20, 23, 59, 59).unwrap();
    let early = Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap();

    assert_eq!(r.resolve(late, Hemisphere::North).days_elapsed, 0);
    assert_eq!(r.resolve(early, Hemisphere::North).days_elapsed, 0);
}

#[test]
fn test_every_day_satisfies_invariants() {
    let r = resolver();
    let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    while date <= end {
        let now = date.and_hms_opt(6, 30, 0).unwrap().and_utc();
        let north = r.resolve(now, Hemisphere::North);
        let south = r.resolve(now, Hemisphere::South);

        for d in [&north, &south] {
            assert!(d.total_days > 0, "no interval matched {date}");
            assert_eq!(d.days_elapsed + d.days_remaining, d.total_days, "on {date}");
            assert!(d.days_elapsed >= 0 && d.days_remaining >= 0, "on {date}");
            assert!(
                (0.0..=100.0).contains(&d.percentage_complete),
                "percentage {} on {date}",
                d.percentage_complete
            );
        }

        assert_ne!(north.season, south.season, "on {date}");
        assert_eq!(north.season.opposite(), south.season, "on {date}");
        assert_eq!(north.total_days, south.total_days, "on {date}");
        assert_eq!(north.days_elapsed, south.days_elapsed, "on {date}");

        date += Duration::days(1);
    }
}

#[test]
fn test_resolve_is_repeatable() {
    let r = SeasonResolver::default();
    let now = at(2025, 8, 9);

    let first = r.resolve(now, Hemisphere::North);
    let second = r.resolve(now, Hemisphere::North);

    assert_eq!(first.season, second.season);
    assert_eq!(first.days_elapsed, second.days_elapsed);
    assert_eq!(first.days_remaining, second.days_remaining);
    assert_eq!(first.total_days, second.total_days);
    assert_eq!(first.percentage_complete, second.percentage_complete);
}

#[test]
fn test_affirmation_comes_from_season_list() {
    let stubbed = resolver().resolve(at(2025, 8, 9), Hemisphere::North);
    assert_eq!(stubbed.affirmation, affirmations_for(Season::Summer)[0]);

    let random = SeasonResolver::default().resolve(at(2025, 8, 9), Hemisphere::South);
    assert!(affirmations_for(Season::Winter).contains(&random.affirmation.as_str()));
}

#[test]
fn test_unrepresentable_winter_falls_back() {
    // The winter starting in the last supported year cannot end, so nothing matches.
    let last_day = NaiveDate::MAX;
    assert_eq!((last_day.month(), last_day.day()), (12, 31));
    let now = last_day.and_hms_opt(0, 0, 0).unwrap().and_utc();

    let north = resolver().resolve(now, Hemisphere::North);
    assert_eq!(north.season, Season::Spring);
    assert_eq!(north.total_days, 0);
    assert_eq!(north.days_elapsed, 0);
    assert_eq!(north.days_remaining, 0);
    assert_eq!(north.percentage_complete, 0.0);
    assert_eq!(north.start_date, "");
    assert_eq!(north.end_date, "");
    assert_eq!(north.affirmation, FALLBACK_AFFIRMATION);

    let south = resolver().resolve(now, Hemisphere::South);
    assert_eq!(south.season, Season::Autumn);
    assert_eq!(south.affirmation, FALLBACK_AFFIRMATION);
}

#[test]
fn test_overview_lists_four_seasons() {
    let r = resolver();

    let north = r.overview(2025, Hemisphere::North);
    let labels: Vec<Season> = north.iter().map(|s| s.season).collect();
    assert_eq!(
        labels,
        vec![Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    );
    assert_eq!(north[0].start_date, "March 20");
    assert_eq!(north[3].end_date, "March 19");
    assert_eq!(north[3].total_days, 88);

    let south = r.overview(2023, Hemisphere::South);
    let labels: Vec<Season> = south.iter().map(|s| s.season).collect();
    assert_eq!(
        labels,
        vec![Season::Autumn, Season::Winter, Season::Spring, Season::Summer]
    );
    assert_eq!(south[3].total_days, 89);
}

#[test]
fn test_percentage_rounding() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(5, 0), 0.0);
    assert_eq!(percentage(1, 3), 33.3);
    assert_eq!(percentage(2, 3), 66.7);
    assert_eq!(percentage(46, 92), 50.0);
    assert_eq!(percentage(92, 92), 100.0);
}
