#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsurf::db::days::Days;
    use tsurf::libs::config::{StorageBackend, StorageConfig};
    use tsurf::libs::day::Day;
    use tsurf::libs::store::{self, DayStore, JsonDayStore};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StorageTestContext {
        fn json_path(&self) -> PathBuf {
            self.temp_dir.path().join("nested").join("data.json")
        }

        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("nested").join("tsurf.db")
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        date(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn worked_day(d: u32) -> Day {
        let mut day = Day::begin(at(d, 9, 0));
        day.open_span("coding", at(d, 9, 0));
        day.open_span("meetings", at(d, 10, 0));
        day
    }

    fn stopped_day(d: u32) -> Day {
        let mut day = worked_day(d);
        day.close_open_span(at(d, 10, 30));
        day.end_time = Some(at(d, 10, 30));
        day
    }

    fn assert_round_trip(store: &dyn DayStore) {
        let running = worked_day(30);
        store.save(&running).unwrap();
        assert_eq!(store.load(date(30)), Some(running));

        let stopped = stopped_day(30);
        store.save(&stopped).unwrap();
        assert_eq!(store.load(date(30)), Some(stopped));

        let bare = Day::begin(at(29, 8, 0));
        store.save(&bare).unwrap();
        let loaded = store.load(date(29)).unwrap();
        assert!(loaded.end_time.is_none());
        assert!(loaded.current_task.is_none());
        assert!(loaded.spans.is_empty());

        assert!(store.load(date(28)).is_none());
        assert_eq!(store.load(date(30)).unwrap().spans.len(), 2);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_round_trip(ctx: &mut StorageTestContext) {
        assert_round_trip(&JsonDayStore::new(ctx.json_path()));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_sqlite_round_trip(ctx: &mut StorageTestContext) {
        assert_round_trip(&Days::open(&ctx.db_path()).unwrap());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_sqlite_keeps_span_order(ctx: &mut StorageTestContext) {
        let days = Days::open(&ctx.db_path()).unwrap();
        let mut day = Day::begin(at(30, 9, 0));
        for (i, task) in ["z", "a", "m", "a"].iter().enumerate() {
            day.open_span(task, at(30, 9, 10 * i as u32));
        }
        days.insert(&day).unwrap();

        let tasks: Vec<String> = days.fetch(date(30)).unwrap().unwrap().spans.into_iter().map(|s| s.task).collect();
        assert_eq!(tasks, vec!["z", "a", "m", "a"]);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_sqlite_reopen_persists(ctx: &mut StorageTestContext) {
        Days::open(&ctx.db_path()).unwrap().insert(&stopped_day(30)).unwrap();
        let reopened = Days::open(&ctx.db_path()).unwrap();
        assert_eq!(reopened.fetch(date(30)).unwrap(), Some(stopped_day(30)));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_file_layout(ctx: &mut StorageTestContext) {
        let store = JsonDayStore::new(ctx.json_path());
        store.save(&stopped_day(30)).unwrap();
        store.save(&worked_day(29)).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(ctx.json_path()).unwrap()).unwrap();
        let records = raw.as_object().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.contains_key("2026-01-30"));
        assert!(records.contains_key("2026-01-29"));
        assert_eq!(records["2026-01-30"]["current_task"], "meetings");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_missing_file_is_empty(ctx: &mut StorageTestContext) {
        let store = JsonDayStore::new(ctx.json_path());
        assert!(store.load(date(30)).is_none());
        assert!(!ctx.json_path().exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_empty_or_corrupt_file_is_empty(ctx: &mut StorageTestContext) {
        let store = JsonDayStore::new(ctx.json_path());
        std::fs::create_dir_all(ctx.json_path().parent().unwrap()).unwrap();

        for content in ["", "   \n", "{ broken", "[1, 2, 3]"] {
            std::fs::write(ctx.json_path(), content).unwrap();
            assert!(store.load(date(30)).is_none(), "content: {:?}", content);
        }

        // the next save replaces the unreadable file
        store.save(&worked_day(30)).unwrap();
        assert_eq!(store.load(date(30)), Some(worked_day(30)));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_malformed_record_is_absent(ctx: &mut StorageTestContext) {
        let store = JsonDayStore::new(ctx.json_path());
        store.save(&worked_day(29)).unwrap();

        let mut raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(ctx.json_path()).unwrap()).unwrap();
        raw["2026-01-30"] = serde_json::json!({ "date": "not a date" });
        std::fs::write(ctx.json_path(), raw.to_string()).unwrap();

        assert!(store.load(date(30)).is_none());
        assert!(store.load(date(29)).is_some());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_default_json_path(_ctx: &mut StorageTestContext) {
        let path = JsonDayStore::default_path();
        assert!(path.ends_with("tsurf/data.json"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_open_selects_backend(ctx: &mut StorageTestContext) {
        let json = store::open(&StorageConfig {
            backend: StorageBackend::Json,
            data_file: Some(ctx.json_path()),
        })
        .unwrap();
        json.save(&worked_day(30)).unwrap();
        assert!(ctx.json_path().exists());
        assert!(!ctx.db_path().exists());

        let sqlite = store::open(&StorageConfig {
            backend: StorageBackend::Sqlite,
            data_file: Some(ctx.db_path()),
        })
        .unwrap();
        assert!(sqlite.load(date(30)).is_none());
        sqlite.save(&worked_day(30)).unwrap();
        assert_eq!(sqlite.load(date(30)), Some(worked_day(30)));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_unreadable_database_behaves_as_empty(ctx: &mut StorageTestContext) {
        std::fs::create_dir_all(ctx.db_path().parent().unwrap()).unwrap();
        std::fs::write(ctx.db_path(), "this is not a database, just some text padding it out past a header").unwrap();

        let sqlite = store::open(&StorageConfig {
            backend: StorageBackend::Sqlite,
            data_file: Some(ctx.db_path()),
        })
        .unwrap();

        assert!(sqlite.load(date(30)).is_none());
        assert!(sqlite.save(&worked_day(30)).is_err());
        // the file is left as it was
        let content = std::fs::read_to_string(ctx.db_path()).unwrap();
        assert!(content.starts_with("this is not a database"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_default_database_path(_ctx: &mut StorageTestContext) {
        assert!(Days::default_path().ends_with("tsurf/tsurf.db"));
    }
}
