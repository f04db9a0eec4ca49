#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use harvest_cli::libs::period::{
        resolve_day, resolve_month, resolve_week, resolve_year, Direction, PeriodError, PeriodKind, PeriodResolver, YearStart,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_day() {
        let range = resolve_day(date(2024, 3, 4));
        assert_eq!(range.start, date(2024, 3, 4));
        assert_eq!(range.end, date(2024, 3, 4));
        assert_eq!(range.label, "2024-03-04");
    }

    #[test]
    fn test_resolve_week_from_midweek() {
        // Wednesday
        let range = resolve_week(date(2024, 3, 6));
        assert_eq!(range.start, date(2024, 3, 4));
        assert_eq!(range.end, date(2024, 3, 10));
        assert_eq!(range.label, "Mar 4 to Mar 10, 2024");
    }

    #[test]
    fn test_resolve_week_from_sunday_goes_back_to_monday() {
        let range = resolve_week(date(2024, 3, 10));
        assert_eq!(range.start, date(2024, 3, 4));
        assert_eq!(range.end, date(2024, 3, 10));
    }

    #[test]
    fn test_resolve_week_across_year_boundary() {
        let range = resolve_week(date(2025, 1, 1));
        assert_eq!(range.start, date(2024, 12, 30));
        assert_eq!(range.end, date(2025, 1, 5));
    }

    #[test]
    fn test_resolve_week_is_monday_to_sunday_for_every_day() {
        let mut day = date(2023, 12, 1);
        while day <= date(2025, 1, 31) {
            let range = resolve_week(day);
            assert_eq!(range.start.weekday(), Weekday::Mon, "week of {}", day);
            assert_eq!(range.end, range.start + Duration::days(6), "week of {}", day);
            assert!(range.start <= day && day <= range.end, "week of {}", day);
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_resolve_month_leap_february() {
        let range = resolve_month(date(2024, 2, 15));
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
        assert_eq!(range.label, "February 2024");
    }

    #[test]
    fn test_resolve_month_common_february_and_december() {
        let february = resolve_month(date(2023, 2, 28));
        assert_eq!(february.end, date(2023, 2, 28));

        let december = resolve_month(date(2023, 12, 31));
        assert_eq!(december.start, date(2023, 12, 1));
        assert_eq!(december.end, date(2023, 12, 31));
    }

    #[test]
    fn test_resolve_year_fiscal_before_anchor() {
        let start = YearStart::new(4, 1).unwrap();
        let range = resolve_year(date(2024, 2, 15), start, date(2030, 1, 1));
        assert_eq!(range.start, date(2023, 4, 1));
        assert_eq!(range.end, date(2024, 3, 31));
        assert_eq!(range.label, "2023/2024");
    }

    #[test]
    fn test_resolve_year_fiscal_on_anchor() {
        let start = YearStart::new(4, 1).unwrap();
        let range = resolve_year(date(2024, 4, 1), start, date(2030, 1, 1));
        assert_eq!(range.start, date(2024, 4, 1));
        assert_eq!(range.end, date(2025, 3, 31));
        assert_eq!(range.label, "2024/2025");
    }

    #[test]
    fn test_resolve_year_calendar_label() {
        let range = resolve_year(date(2023, 7, 9), YearStart::default(), date(2030, 1, 1));
        assert_eq!(range.start, date(2023, 1, 1));
        assert_eq!(range.end, date(2023, 12, 31));
        assert_eq!(range.label, "2023");
    }

    #[test]
    fn test_resolve_year_is_clipped_to_today() {
        let today = date(2024, 6, 15);
        let range = resolve_year(date(2024, 5, 1), YearStart::default(), today);
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, today);
    }

    #[test]
    fn test_resolve_year_keeps_start_not_after_end() {
        // Reference in a fiscal year that has not started yet relative to "today".
        let today = date(2024, 3, 1);
        let start = YearStart::new(4, 1).unwrap();
        let range = resolve_year(date(2024, 5, 1), start, today);
        assert_eq!(range.start, date(2024, 4, 1));
        assert!(range.start <= range.end);
    }

    #[test]
    fn test_year_start_validation() {
        assert!(YearStart::new(2, 29).is_ok());
        assert!(YearStart::new(12, 31).is_ok());
        assert!(matches!(YearStart::new(0, 1), Err(PeriodError::InvalidPeriodConfiguration(_))));
        assert!(matches!(YearStart::new(13, 1), Err(PeriodError::InvalidPeriodConfiguration(_))));
        assert!(matches!(YearStart::new(1, 0), Err(PeriodError::InvalidPeriodConfiguration(_))));
        assert!(matches!(YearStart::new(1, 32), Err(PeriodError::InvalidPeriodConfiguration(_))));
        assert!(matches!(YearStart::new(2, 30), Err(PeriodError::InvalidPeriodConfiguration(_))));
        assert!(matches!(YearStart::new(4, 31), Err(PeriodError::InvalidPeriodConfiguration(_))));
    }

    #[test]
    fn test_year_start_parse() {
        let start = YearStart::parse("04-01").unwrap();
        assert_eq!((start.month(), start.day()), (4, 1));
        assert!(!start.is_calendar_year());
        assert!(YearStart::parse("0401").is_err());
        assert!(YearStart::parse("xx-01").is_err());
        assert!(YearStart::parse("02-30").is_err());
    }

    #[test]
    fn test_step_day_and_week() {
        let resolver = PeriodResolver::with_today(YearStart::default(), date(2030, 1, 1));

        let day = resolver.resolve(PeriodKind::Day, date(2024, 3, 1));
        assert_eq!(resolver.step(&day, Direction::Previous).start, date(2024, 2, 29));
        assert_eq!(resolver.step(&day, Direction::Next).start, date(2024, 3, 2));

        let week = resolver.resolve(PeriodKind::Week, date(2024, 3, 6));
        let next = resolver.step(&week, Direction::Next);
        assert_eq!(next.start, date(2024, 3, 11));
        assert_eq!(next.end, date(2024, 3, 17));
        let previous = resolver.step(&week, Direction::Previous);
        assert_eq!(previous.start, date(2024, 2, 26));
    }

    #[test]
    fn test_step_month_from_the_first() {
        let resolver = PeriodResolver::with_today(YearStart::default(), date(2030, 1, 1));
        let january = resolver.resolve(PeriodKind::Month, date(2024, 1, 31));

        let february = resolver.step(&january, Direction::Next);
        assert_eq!(february.start, date(2024, 2, 1));
        assert_eq!(february.end, date(2024, 2, 29));

        let december = resolver.step(&january, Direction::Previous);
        assert_eq!(december.start, date(2023, 12, 1));
        assert_eq!(december.end, date(2023, 12, 31));
    }

    #[test]
    fn test_step_year_by_anchor() {
        let resolver = PeriodResolver::with_today(YearStart::new(4, 1).unwrap(), date(2030, 1, 1));
        let year = resolver.resolve(PeriodKind::Year, date(2024, 2, 15));

        let previous = resolver.step(&year, Direction::Previous);
        assert_eq!(previous.start, date(2022, 4, 1));
        assert_eq!(previous.label, "2022/2023");

        let next = resolver.step(&year, Direction::Next);
        assert_eq!(next.start, date(2024, 4, 1));
    }

    #[test]
    fn test_query_bounds() {
        let range = resolve_month(date(2024, 2, 15));
        assert_eq!(range.query_bounds(), ("2024-02-01".to_string(), "2024-02-29".to_string()));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = PeriodResolver::with_today(YearStart::new(7, 15).unwrap(), date(2025, 1, 1));
        for kind in [PeriodKind::Day, PeriodKind::Week, PeriodKind::Month, PeriodKind::Year] {
            let first = resolver.resolve(kind, date(2024, 8, 20));
            let second = resolver.resolve(kind, date(2024, 8, 20));
            assert_eq!(first, second);
            assert!(first.start <= first.end);
        }
    }
}
