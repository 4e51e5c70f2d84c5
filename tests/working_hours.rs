#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use workhours::libs::error::WorkingHoursError;
    use workhours::libs::working_hours::{
        calculate_working_hours, WorkingHours, WorkingHoursConfig, MAX_SPAN_DAYS,
    };

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_same_day_clipping() {
        // 2024-01-08 is a Monday
        let hours = calculate_working_hours("2024-01-08T10:00:00", "2024-01-08T15:00:00", None);
        assert_eq!(hours, 5.0);
    }

    #[test]
    fn test_clips_to_window_on_both_ends() {
        let hours = calculate_working_hours("2024-01-08T06:00:00", "2024-01-08T20:00:00", None);
        assert_eq!(hours, 8.0);
    }

    #[test]
    fn test_off_hours_overnight_is_zero() {
        let hours = calculate_working_hours("2024-01-08T20:00:00", "2024-01-09T07:00:00", None);
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn test_cross_weekend_span() {
        // Friday 16:00 -> Monday 10:00: 1h Friday + 1h Monday
        let hours = calculate_working_hours("2024-01-05T16:00:00", "2024-01-08T10:00:00", None);
        assert_eq!(hours, 2.0);
    }

    #[test]
    fn test_full_week() {
        let calc = WorkingHours::default();
        assert_eq!(calc.hours("2024-01-08T09:00:00", "2024-01-12T17:00:00"), 40.0);
        assert_eq!(calc.hours("2024-01-06T00:00:00", "2024-01-14T00:00:00"), 40.0);
    }

    #[test]
    fn test_zero_on_equal_or_inverted_range() {
        let calc = WorkingHours::default();
        assert_eq!(calc.hours("2024-01-08T10:00:00", "2024-01-08T10:00:00"), 0.0);
        assert_eq!(calc.hours("2024-01-08T15:00:00", "2024-01-08T10:00:00"), 0.0);
        assert_eq!(calc.hours("2024-01-12T15:00:00", "2024-01-08T10:00:00"), 0.0);
        assert_eq!(calc.try_hours("2024-01-09T00:00:00", "2024-01-08T00:00:00"), Ok(0.0));
    }

    #[test]
    fn test_weekend_only_span_is_zero() {
        let calc = WorkingHours::default();
        // Saturday and Sunday, any time of day
        assert_eq!(calc.hours("2024-01-06T09:00:00", "2024-01-06T17:00:00"), 0.0);
        assert_eq!(calc.hours("2024-01-06T00:00:00", "2024-01-06T23:59:59"), 0.0);
        assert_eq!(calc.hours("2024-01-07T10:30:00", "2024-01-07T16:45:00"), 0.0);
        assert_eq!(calc.hours("2024-01-06T08:00:00", "2024-01-07T20:00:00"), 0.0);
    }

    #[test]
    fn test_fractional_hours() {
        let hours = calculate_working_hours("2024-01-08T09:15:00", "2024-01-08T10:45:00", None);
        assert!(close(hours, 1.5));

        let hours = calculate_working_hours("2024-01-08T16:59:30", "2024-01-09T09:00:30", None);
        assert!(close(hours, 1.0 / 60.0));
    }

    #[test]
    fn test_custom_window() {
        let config = WorkingHoursConfig::new(7, 19, 12.0).unwrap();
        let calc = WorkingHours::new(config);
        assert_eq!(calc.hours("2024-01-08T06:00:00", "2024-01-08T20:00:00"), 12.0);
        assert_eq!(calc.hours("2024-01-08T18:00:00", "2024-01-09T08:00:00"), 2.0);
    }

    #[test]
    fn test_per_day_cap_binds_when_window_is_wider() {
        // 8-18 window, but only 6 productive hours counted per day
        let config = WorkingHoursConfig::new(8, 18, 6.0).unwrap();
        let calc = WorkingHours::new(config);
        assert_eq!(calc.hours("2024-01-08T08:00:00", "2024-01-08T18:00:00"), 6.0);
        assert_eq!(calc.hours("2024-01-08T08:00:00", "2024-01-10T18:00:00"), 18.0);
        // Partial days below the cap are untouched
        assert_eq!(calc.hours("2024-01-08T15:00:00", "2024-01-08T18:00:00"), 3.0);
    }

    #[test]
    fn test_per_day_contribution_never_exceeds_cap() {
        let config = WorkingHoursConfig::new(6, 22, 7.5).unwrap();
        let calc = WorkingHours::new(config);
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        for offset in 0..14 {
            let day = monday + Duration::days(offset);
            let start = day.and_hms_opt(0, 0, 0).unwrap();
            let end = start + Duration::days(1);
            let hours = calc.hours(&start, &end);
            assert!(hours <= config.hours_per_work_day(), "{} contributed {}", day, hours);
        }
    }

    #[test]
    fn test_never_exceeds_elapsed_time() {
        let calc = WorkingHours::default();
        let start = at(2024, 1, 3, 11, 20);
        for minutes in (0..60 * 24 * 10).step_by(37) {
            let end = start + Duration::minutes(minutes);
            let hours = calc.hours(&start, &end);
            let elapsed = minutes as f64 / 60.0;
            assert!(hours >= 0.0);
            assert!(hours <= elapsed + 1e-9, "{} hours over {} elapsed", hours, elapsed);
        }
    }

    #[test]
    fn test_monotonic_in_end() {
        let calc = WorkingHours::default();
        let start = at(2024, 1, 4, 14, 5);
        let mut previous = 0.0;
        for minutes in (0..60 * 24 * 12).step_by(23) {
            let end = start + Duration::minutes(minutes);
            let hours = calc.hours(&start, &end);
            assert!(hours + 1e-9 >= previous, "dropped from {} to {} at +{}m", previous, hours, minutes);
            previous = hours;
        }
    }

    #[test]
    fn test_accepts_native_values() {
        let calc = WorkingHours::default();
        let start = at(2024, 1, 8, 10, 0);
        let end = at(2024, 1, 8, 15, 0);
        assert_eq!(calc.hours(&start, &end), 5.0);
        assert_eq!(calc.hours(&start, "2024-01-08 15:00:00"), 5.0);

        let owned = String::from("2024-01-08T15:00:00");
        assert_eq!(calc.hours(&start, &owned), 5.0);

        let day = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(calc.hours(&start, &day), 7.0);
    }

    #[test]
    fn test_invalid_input_is_zero_when_lenient() {
        let calc = WorkingHours::default();
        assert_eq!(calc.hours("not a date", "2024-01-08T15:00:00"), 0.0);
        assert_eq!(calc.hours("2024-01-08T10:00:00", ""), 0.0);
        assert_eq!(calc.hours("2024-13-45T10:00:00", "2024-01-08T15:00:00"), 0.0);
    }

    #[test]
    fn test_invalid_input_is_an_error_when_strict() {
        let calc = WorkingHours::default();
        assert_eq!(
            calc.try_hours("garbage", "2024-01-08T15:00:00"),
            Err(WorkingHoursError::InvalidTimestamp("garbage".to_string()))
        );
        // A genuine zero stays distinguishable from bad input
        assert_eq!(calc.try_hours("2024-01-06T10:00:00", "2024-01-06T15:00:00"), Ok(0.0));
    }

    #[test]
    fn test_span_ceiling() {
        let calc = WorkingHours::default();
        let start = at(1900, 1, 1, 9, 0);
        let end = start + Duration::days(MAX_SPAN_DAYS + 1);
        assert!(matches!(calc.try_hours(&start, &end), Err(WorkingHoursError::SpanTooLong { .. })));
        assert!(matches!(calc.try_days(&start, &end), Err(WorkingHoursError::SpanTooLong { .. })));
    }

    #[test]
    fn test_lenient_results_stay_monotonic_past_span_ceiling() {
        let calc = WorkingHours::default();
        let start = at(1900, 1, 1, 9, 0);
        let inside = start + Duration::days(MAX_SPAN_DAYS);
        let past = start + Duration::days(MAX_SPAN_DAYS + 1);
        let far_past = start + Duration::days(MAX_SPAN_DAYS + 1000);

        let hours_inside = calc.try_hours(&start, &inside).unwrap();
        assert!(hours_inside > 0.0);
        assert!(calc.hours(&start, &past) >= hours_inside);
        assert_eq!(calc.hours(&start, &far_past), calc.hours(&start, &past));

        let days_inside = calc.try_days(&start, &inside).unwrap();
        assert!(days_inside > 0);
        assert!(calc.days(&start, &past) >= days_inside);
        assert_eq!(calc.days(&start, &far_past), calc.days(&start, &past));
    }

    #[test]
    fn test_config_validation() {
        assert!(WorkingHoursConfig::new(9, 17, 8.0).is_ok());
        assert!(WorkingHoursConfig::new(17, 9, 8.0).is_err());
        assert!(WorkingHoursConfig::new(9, 9, 8.0).is_err());
        assert!(WorkingHoursConfig::new(9, 24, 8.0).is_err());
        assert!(WorkingHoursConfig::new(9, 17, 0.0).is_err());
        assert!(WorkingHoursConfig::new(9, 17, -1.0).is_err());
        assert!(WorkingHoursConfig::new(9, 17, f64::NAN).is_err());
        assert!(WorkingHoursConfig::new(9, 17, 25.0).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = WorkingHoursConfig::default();
        assert_eq!(config.work_day_start_hour(), 9);
        assert_eq!(config.work_day_end_hour(), 17);
        assert_eq!(config.hours_per_work_day(), 8.0);
    }
}
