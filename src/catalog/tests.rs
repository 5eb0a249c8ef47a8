//! Catalog Module Tests
//!
//! ## Test Scopes
//! - **Records**: Release-date parsing, tick encoding and genre tag splitting.
//! - **Genre universe**: Distinct tags and case-insensitive genre matching.
//! - **Loader**: Reading JSON datasets from disk, including the original column names.

#[cfg(test)]
mod tests {
    use crate::catalog::loader::{load_catalog, parse_movies};
    use crate::catalog::store::{InMemoryCatalog, MovieSource, genre_universe, matching_genre};
    use crate::catalog::types::{Movie, release_date};
    use chrono::NaiveDate;
    use std::io::Write;

    fn movie(title: Option<&str>, genre: Option<&str>, (y, m, d): (i32, u32, u32)) -> Movie {
        Movie {
            release_date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            title: title.map(str::to_string),
            overview: None,
            popularity: None,
            vote_count: None,
            vote_average: None,
            original_language: None,
            genre: genre.map(str::to_string),
            poster_url: None,
        }
    }

    // ============================================================
    // RECORD TESTS
    // ============================================================

    #[test]
    fn test_release_ticks_known_values() {
        let first_day = movie(None, None, (1, 1, 1));
        assert_eq!(first_day.release_ticks(), 0);

        let recent = movie(None, None, (2024, 3, 20));
        assert_eq!(recent.release_ticks(), 638_464_896_000_000_000);
    }

    #[test]
    fn test_release_ticks_are_chronological() {
        let dates = [(1, 1, 1), (999, 12, 31), (1000, 1, 1), (1999, 11, 2), (9999, 12, 31)];
        let ticks: Vec<i128> = dates
            .iter()
            .map(|date| movie(None, None, *date).release_ticks())
            .collect();

        assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_release_ticks_far_future_does_not_overflow() {
        let near = movie(None, None, (2000, 1, 1));
        let far = movie(None, None, (30000, 1, 1));
        let last = movie(None, None, (262_142, 12, 31));

        assert!(near.release_ticks() < far.release_ticks());
        assert!(far.release_ticks() < last.release_ticks());
        assert!(far.release_ticks() > i128::from(i64::MAX));
    }

    #[test]
    fn test_release_ticks_include_sub_second() {
        let mut precise = movie(None, None, (2000, 1, 1));
        let whole = precise.release_ticks();
        precise.release_date = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_nano_opt(0, 0, 0, 1_500)
            .unwrap();

        assert_eq!(precise.release_ticks(), whole + 15);
    }

    #[test]
    fn test_genre_tags_trim_and_drop_empty() {
        let m = movie(None, Some(" Action, ,Drama ,, Science Fiction"), (2020, 1, 1));
        let tags: Vec<&str> = m.genre_tags().collect();

        assert_eq!(tags, vec!["Action", "Drama", "Science Fiction"]);
    }

    #[test]
    fn test_genre_tags_absent_genre() {
        let m = movie(Some("Untagged"), None, (2020, 1, 1));
        assert_eq!(m.genre_tags().count(), 0);
    }

    #[test]
    fn test_release_date_parse_formats() {
        let expected = NaiveDate::from_ymd_opt(2022, 12, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(release_date::parse("2022-12-15"), Some(expected));
        assert_eq!(release_date::parse("2022-12-15T00:00:00"), Some(expected));
        assert_eq!(release_date::parse("2022-12-15 00:00:00"), Some(expected));
        assert_eq!(release_date::parse("2022-12-15T00:00:00.000"), Some(expected));
        assert_eq!(release_date::parse("15/12/2022"), None);
    }

    #[test]
    fn test_movie_serialization_format() {
        let m = movie(Some("Test"), Some("Action"), (2024, 3, 20));
        let json = serde_json::to_value(&m).unwrap();

        assert_eq!(json["release_date"], "2024-03-20T00:00:00");
        assert_eq!(json["title"], "Test");
        assert!(json["vote_count"].is_null());
    }

    // ============================================================
    // GENRE UNIVERSE TESTS
    // ============================================================

    #[test]
    fn test_genre_universe_distinct_in_first_seen_order() {
        let movies = vec![
            movie(Some("a"), Some("Drama, Action"), (2020, 1, 1)),
            movie(Some("b"), Some("Action,Comedy"), (2020, 1, 1)),
            movie(Some("c"), None, (2020, 1, 1)),
            movie(Some("d"), Some("Comedy , Drama"), (2020, 1, 1)),
        ];

        assert_eq!(genre_universe(&movies), vec!["Drama", "Action", "Comedy"]);
    }

    #[test]
    fn test_genre_universe_empty_catalog() {
        assert!(genre_universe(&[]).is_empty());
    }

    #[test]
    fn test_matching_genre_case_insensitive_substring() {
        let movies = vec![movie(Some("a"), Some("Science Fiction, Action"), (2020, 1, 1))];

        assert!(matching_genre(&movies, "action"));
        assert!(matching_genre(&movies, "SCIENCE"));
        assert!(matching_genre(&movies, "fict"));
        assert!(!matching_genre(&movies, "genre"));
    }

    #[test]
    fn test_matching_genre_does_not_span_tags() {
        // "Drama,Action" is two tags; the separator is not part of either
        let movies = vec![movie(Some("a"), Some("Drama,Action"), (2020, 1, 1))];
        assert!(!matching_genre(&movies, "drama,action"));
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_in_memory_catalog_returns_snapshot() {
        let catalog = InMemoryCatalog::new(vec![
            movie(Some("Test"), Some("Action"), (2024, 3, 20)),
            movie(Some("A Test"), Some("Action"), (2023, 3, 20)),
        ]);

        let first = catalog.all_movies().unwrap();
        let second = catalog.all_movies().unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title.as_deref(), Some("Test"));
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_in_memory_catalog_default_is_empty() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.all_movies().unwrap().is_empty());
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_parse_movies_snake_case() {
        let raw = r#"[{
            "release_date": "2024-03-20",
            "title": "Test",
            "overview": "Test movie",
            "popularity": 100.0,
            "vote_count": 1111,
            "vote_average": 7.545,
            "original_language": "en",
            "genre": "Action",
            "poster_url": "Test.png"
        }]"#;

        let movies = parse_movies(raw).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].vote_count, Some(1111));
        assert_eq!(movies[0].poster_url.as_deref(), Some("Test.png"));
    }

    #[test]
    fn test_parse_movies_original_column_names() {
        let raw = r#"[{
            "Release_Date": "1999-11-02 00:00:00",
            "Title": "A Test Movie",
            "Vote_Count": 12,
            "Genre": "Action, Drama"
        }]"#;

        let movies = parse_movies(raw).unwrap();
        assert_eq!(movies[0].title.as_deref(), Some("A Test Movie"));
        assert_eq!(movies[0].vote_count, Some(12));
        assert_eq!(movies[0].genre.as_deref(), Some("Action, Drama"));
        assert!(movies[0].overview.is_none());
    }

    #[test]
    fn test_parse_movies_signed_year() {
        let raw = r#"[{ "release_date": "+30000-01-01", "title": "Far Future" }]"#;
        let movies = parse_movies(raw).unwrap();

        assert_eq!(movies.len(), 1);
        assert!(movies[0].release_ticks() > movie(None, None, (2000, 1, 1)).release_ticks());
    }

    #[test]
    fn test_parse_movies_rejects_bad_date() {
        let raw = r#"[{ "release_date": "yesterday", "title": "x" }]"#;
        assert!(parse_movies(raw).is_err());
    }

    #[test]
    fn test_parse_movies_rejects_vote_count_overflow() {
        let raw = r#"[{ "release_date": "2020-01-01", "vote_count": 40000 }]"#;
        assert!(parse_movies(raw).is_err());
    }

    #[test]
    fn test_sample_dataset_parses() {
        let movies = parse_movies(include_str!("../../data/movies.sample.json")).unwrap();

        assert_eq!(movies.len(), 5);
        assert!(matching_genre(&movies, "thriller"));
        assert!(!matching_genre(&movies, "western"));
    }

    #[tokio::test]
    async fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"release_date":"2024-03-20","title":"Test","genre":"Action"}},
               {{"release_date":"2023-03-20","title":"A Test","genre":"Action"}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("movies.json");

        let err = load_catalog(&missing).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }
}
