//! The `Record` trait for storable types

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Current time as Unix milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A type that can be persisted in a [`crate::Store`]
///
/// Records are stored one-per-file under `base_dir/{collection_name}/{id}.json`.
/// The id doubles as the file name, so it must be a plain token (no path
/// separators); UUIDs satisfy this.
pub trait Record: Serialize + DeserializeOwned {
    /// Unique identifier for this record
    fn id(&self) -> &str;

    /// Last update timestamp (Unix milliseconds), used for ordering listings
    fn updated_at(&self) -> i64;

    /// Collection this record type belongs to (directory name)
    fn collection_name() -> &'static str;
}

/// Order records newest-first by `updated_at`
pub fn sort_newest_first<T: Record>(records: &mut [T]) {
    records.sort_by_key(|r| std::cmp::Reverse(r.updated_at()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Fixture {
        id: String,
        updated_at: i64,
    }

    impl Record for Fixture {
        fn id(&self) -> &str {
            &self.id
        }

        fn updated_at(&self) -> i64 {
            self.updated_at
        }

        fn collection_name() -> &'static str {
            "fixtures"
        }
    }

    #[test]
    fn test_now_ms_monotonic_enough() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
        // Sanity: after 2020-01-01
        assert!(a > 1_577_836_800_000);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut records = vec![
            Fixture {
                id: "old".to_string(),
                updated_at: 100,
            },
            Fixture {
                id: "new".to_string(),
                updated_at: 300,
            },
            Fixture {
                id: "mid".to_string(),
                updated_at: 200,
            },
        ];
        sort_newest_first(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

}
