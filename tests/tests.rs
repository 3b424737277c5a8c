#[cfg(test)]
mod tests {
    use inflation_dashboard::hooks::fetch_state::FetchState;
    use inflation_dashboard::models::error::AppError;
    use inflation_dashboard::models::market::{PriceHistory, PricePoint, chart_series};
    use inflation_dashboard::models::prediction::CommodityPrediction;
    use inflation_dashboard::models::time_range::TimeRange;

    // Helper to build a series point
    fn point(date: &str, price: f64) -> PricePoint {
        PricePoint {
            date: date.to_string(),
            price,
        }
    }

    fn create_test_prediction() -> CommodityPrediction {
        CommodityPrediction {
            commodity_name: "Rice".to_string(),
            province_name: "East Java".to_string(),
            description: "Medium-grain rice, retail".to_string(),
            predictions: vec![
                point("2024-01-01", 100.0),
                point("2024-01-20", 104.0),
                point("2024-02-01", 110.0),
                point("2024-04-15", 118.0),
                point("2024-08-01", 125.0),
                point("2025-02-01", 140.0),
            ],
        }
    }

    fn create_test_history() -> PriceHistory {
        PriceHistory {
            description: "Retail price, city markets".to_string(),
            prices: vec![point("2024-01-01", 100.0), point("2024-02-01", 110.0)],
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_rate_limited_display() {
        assert_eq!(AppError::RateLimited.to_string(), "Rate limited");
    }

    #[test]
    fn test_app_error_not_found_display() {
        let error = AppError::NotFound("no such province".to_string());
        assert_eq!(error.to_string(), "Not found: no such province");
    }

    // ===== Chart Series Tests =====

    #[test]
    fn test_chart_series_two_points() {
        let points = vec![point("2024-01-01", 100.0), point("2024-02-01", 110.0)];

        let (labels, values) = chart_series(&points);

        assert_eq!(labels, vec!["2024-01-01", "2024-02-01"]);
        assert_eq!(values, vec![100.0, 110.0]);
    }

    #[test]
    fn test_chart_series_keeps_response_order() {
        // The x index of a point is its position in the response, so an
        // unsorted series must not be reordered.
        let points = vec![
            point("2024-03-01", 120.0),
            point("2024-01-01", 100.0),
            point("2024-02-01", 110.0),
        ];

        let (labels, values) = chart_series(&points);

        assert_eq!(labels[0], "2024-03-01");
        assert_eq!(values, vec![120.0, 100.0, 110.0]);
    }

    #[test]
    fn test_chart_series_empty() {
        let (labels, values) = chart_series(&[]);
        assert!(labels.is_empty());
        assert!(values.is_empty());
    }

    // ===== Time Range Tests =====

    #[test]
    fn test_forecast_codes() {
        assert_eq!(TimeRange::OneMonth.forecast_code(), 1);
        assert_eq!(TimeRange::ThreeMonths.forecast_code(), 2);
        assert_eq!(TimeRange::SixMonths.forecast_code(), 3);
        assert_eq!(TimeRange::NineMonths.forecast_code(), 4);
        assert_eq!(TimeRange::OneYear.forecast_code(), 5);
    }

    #[test]
    fn test_bookmark_codes() {
        assert_eq!(TimeRange::OneMonth.bookmark_code(), 11);
        assert_eq!(TimeRange::ThreeMonths.bookmark_code(), 23);
        assert_eq!(TimeRange::SixMonths.bookmark_code(), 35);
        assert_eq!(TimeRange::NineMonths.bookmark_code(), 47);
        assert_eq!(TimeRange::OneYear.bookmark_code(), 59);
    }

    #[test]
    fn test_code_round_trips() {
        for range in TimeRange::all() {
            assert_eq!(
                TimeRange::from_forecast_code(range.forecast_code()),
                Some(*range)
            );
            assert_eq!(
                TimeRange::from_bookmark_code(range.bookmark_code()),
                Some(*range)
            );
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(TimeRange::from_forecast_code(0), None);
        assert_eq!(TimeRange::from_forecast_code(6), None);
        assert_eq!(TimeRange::from_bookmark_code(12), None);
        assert_eq!(TimeRange::from_bookmark_code(1), None);
    }

    #[test]
    fn test_default_range_is_one_month() {
        assert_eq!(TimeRange::default(), TimeRange::OneMonth);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = TimeRange::all().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["1m", "3m", "6m", "9m", "1y"]);
    }

    // ===== Windowing Tests =====

    #[test]
    fn test_window_one_month() {
        let record = create_test_prediction();
        let windowed = record.windowed(TimeRange::OneMonth);

        // Cutoff is 2024-02-01 exclusive.
        assert_eq!(windowed.predictions.len(), 2);
        assert_eq!(windowed.predictions[1].date, "2024-01-20");
    }

    #[test]
    fn test_window_widths_nest() {
        let record = create_test_prediction();

        assert_eq!(record.windowed(TimeRange::ThreeMonths).predictions.len(), 3);
        assert_eq!(record.windowed(TimeRange::SixMonths).predictions.len(), 4);
        assert_eq!(record.windowed(TimeRange::NineMonths).predictions.len(), 5);
        // The point thirteen months out stays excluded even at one year.
        assert_eq!(record.windowed(TimeRange::OneYear).predictions.len(), 5);
    }

    #[test]
    fn test_window_keeps_identity_fields() {
        let record = create_test_prediction();
        let windowed = record.windowed(TimeRange::OneMonth);

        assert_eq!(windowed.commodity_name, record.commodity_name);
        assert_eq!(windowed.province_name, record.province_name);
        assert_eq!(windowed.description, record.description);
    }

    #[test]
    fn test_window_empty_series() {
        let record = CommodityPrediction {
            predictions: Vec::new(),
            ..create_test_prediction()
        };

        assert!(record.windowed(TimeRange::OneYear).predictions.is_empty());
    }

    #[test]
    fn test_window_unparsable_first_date_keeps_series() {
        let record = CommodityPrediction {
            predictions: vec![point("soon", 100.0), point("2024-02-01", 110.0)],
            ..create_test_prediction()
        };

        let windowed = record.windowed(TimeRange::OneMonth);
        assert_eq!(windowed.predictions.len(), 2);
    }

    #[test]
    fn test_window_drops_unparsable_point() {
        let record = CommodityPrediction {
            predictions: vec![
                point("2024-01-01", 100.0),
                point("not-a-date", 104.0),
                point("2024-01-10", 106.0),
            ],
            ..create_test_prediction()
        };

        let windowed = record.windowed(TimeRange::OneMonth);
        assert_eq!(windowed.predictions.len(), 2);
        assert_eq!(windowed.predictions[1].date, "2024-01-10");
    }

    // ===== Fetch State Tests =====

    #[test]
    fn test_idle_state() {
        let state: FetchState<PriceHistory> = FetchState::idle();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_begin_sets_loading() {
        let state: FetchState<PriceHistory> = FetchState::idle().begin();
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resolve_success_publishes_data() {
        let state = FetchState::idle()
            .begin()
            .resolve(Ok(create_test_history()));

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.data().unwrap().prices.len(), 2);
    }

    #[test]
    fn test_failure_keeps_last_good_data() {
        let loaded = FetchState::idle()
            .begin()
            .resolve(Ok(create_test_history()));
        let displayed = loaded.data().cloned();

        let failed = loaded
            .begin()
            .resolve(Err(AppError::ApiError("boom".to_string())));

        assert!(!failed.is_loading());
        assert_eq!(failed.error(), Some("API error: boom"));
        // Previously rendered content stays available untouched.
        assert_eq!(failed.data().cloned(), displayed);
    }

    #[test]
    fn test_error_raised_once_per_attempt() {
        let failed: FetchState<PriceHistory> = FetchState::idle()
            .begin()
            .resolve(Err(AppError::ApiError("first".to_string())));
        assert_eq!(failed.error(), Some("API error: first"));

        // A new attempt clears the flag for its own outcome.
        let retrying = failed.begin();
        assert!(retrying.error().is_none());
        assert!(retrying.is_loading());

        let failed_again = retrying.resolve(Err(AppError::ApiError("second".to_string())));
        assert_eq!(failed_again.error(), Some("API error: second"));
    }

    #[test]
    fn test_loading_spans_exactly_the_flight() {
        let state: FetchState<PriceHistory> = FetchState::idle();
        assert!(!state.is_loading());

        let in_flight = state.begin();
        assert!(in_flight.is_loading());

        let settled = in_flight.resolve(Err(AppError::RateLimited));
        assert!(!settled.is_loading());
    }

    // ===== Stored Record Shape Tests =====

    #[test]
    fn test_stored_record_without_series_reads_empty() {
        // A record persisted without a series must read back as "absent
        // series", which the saved screen treats as no chart update.
        let json = r#"{
            "commodity_name": "Rice",
            "province_name": "East Java",
            "description": "Medium-grain rice, retail"
        }"#;

        let record: CommodityPrediction = serde_json::from_str(json).unwrap();
        assert!(record.predictions.is_empty());
    }

    #[test]
    fn test_stored_record_round_trip() {
        let record = create_test_prediction();
        let json = serde_json::to_string(&record).unwrap();
        let read_back: CommodityPrediction = serde_json::from_str(&json).unwrap();
        assert_eq!(read_back, record);
    }
}
