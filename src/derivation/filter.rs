// src/derivation/filter.rs
use chrono::{DateTime, TimeZone, Utc};

use super::date_range::{matches_date_range, DateRange};

/// Accessors the list engine needs from a record kind.
pub trait Record {
    type Status: PartialEq;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn status(&self) -> Self::Status;

    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn price(&self) -> Option<f64> {
        None
    }
}

/// User-selected predicates narrowing a record list. Empty values are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams<S> {
    pub category: Option<String>,
    pub status: Option<S>,
    pub date_range: DateRange,
    pub search: String,
    pub max_price: Option<f64>,
}

impl<S> Default for FilterParams<S> {
    fn default() -> Self {
        Self {
            category: None,
            status: None,
            date_range: DateRange::All,
            search: String::new(),
            max_price: None,
        }
    }
}

impl<S: PartialEq> FilterParams<S> {
    pub fn matches<R, Tz>(&self, record: &R, now: &DateTime<Tz>) -> bool
    where
        R: Record<Status = S>,
        Tz: TimeZone,
    {
        self.matches_category(record)
            && self.matches_status(record)
            && matches_date_range(record.created_at(), self.date_range, now)
            && self.matches_search(record)
            && self.matches_price(record)
    }

    fn matches_category<R: Record>(&self, record: &R) -> bool {
        let Some(wanted) = self.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
            return true;
        };
        record
            .category()
            .is_some_and(|c| c.to_lowercase().contains(&wanted.to_lowercase()))
    }

    fn matches_status<R: Record<Status = S>>(&self, record: &R) -> bool {
        match &self.status {
            Some(wanted) => record.status() == *wanted,
            None => true,
        }
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_price<R: Record>(&self, record: &R) -> bool {
        match self.max_price {
            Some(max) => record.price().is_some_and(|price| price <= max),
            None => true,
        }
    }
}

/// Keeps the records satisfying every predicate in `params`, preserving order.
pub fn apply_filters<R, I, Tz>(records: I, params: &FilterParams<R::Status>, now: &DateTime<Tz>) -> Vec<R>
where
    R: Record,
    I: IntoIterator<Item = R>,
    Tz: TimeZone,
{
    records
        .into_iter()
        .filter(|record| params.matches(record, now))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::derivation::status::{classify_stock_status, StockStatus};
    use chrono::Duration;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Item {
        pub name: String,
        pub category: String,
        pub stock: i32,
        pub price: f64,
        pub created_at: Option<DateTime<Utc>>,
    }

    impl Record for Item {
        type Status = StockStatus;

        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }

        fn status(&self) -> StockStatus {
            classify_stock_status(self.stock)
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }

        fn category(&self) -> Option<&str> {
            Some(&self.category)
        }

        fn price(&self) -> Option<f64> {
            Some(self.price)
        }
    }

    pub(crate) fn item(name: &str, category: &str, stock: i32, created_at: Option<DateTime<Utc>>) -> Item {
        Item {
            name: name.to_string(),
            category: category.to_string(),
            stock,
            price: 20.0,
            created_at,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn catalogue() -> Vec<Item> {
        let now = now();
        vec![
            item("Classic Tee", "tshirt", 12, Some(now)),
            item("Graphic Tee", "tshirt", 2, Some(now - Duration::days(3))),
            item("Slim Jeans", "jeans", 0, Some(now - Duration::days(40))),
            item("Zip Hoodie", "hoodie", 7, None),
        ]
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn default_params_keep_everything() {
        let filtered = apply_filters(catalogue(), &FilterParams::default(), &now());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn category_is_a_case_insensitive_substring() {
        let params = FilterParams {
            category: Some("SHIRT".into()),
            ..FilterParams::default()
        };
        assert_eq!(names(&apply_filters(catalogue(), &params, &now())), vec!["Classic Tee", "Graphic Tee"]);
    }

    #[test]
    fn blank_category_is_ignored() {
        let params = FilterParams {
            category: Some("  ".into()),
            ..FilterParams::default()
        };
        assert_eq!(apply_filters(catalogue(), &params, &now()).len(), 4);
    }

    #[test]
    fn status_filter_uses_derived_stock_status() {
        let params = FilterParams {
            status: Some(StockStatus::LowStock),
            ..FilterParams::default()
        };
        assert_eq!(names(&apply_filters(catalogue(), &params, &now())), vec!["Graphic Tee"]);
    }

    #[test]
    fn search_matches_any_part_of_the_name() {
        let params = FilterParams {
            search: "tee".into(),
            ..FilterParams::default()
        };
        assert_eq!(names(&apply_filters(catalogue(), &params, &now())), vec!["Classic Tee", "Graphic Tee"]);
    }

    #[test]
    fn date_range_drops_records_without_timestamps() {
        let params = FilterParams {
            date_range: DateRange::ThisYear,
            ..FilterParams::default()
        };
        let filtered = apply_filters(catalogue(), &params, &now());
        assert_eq!(names(&filtered), vec!["Classic Tee", "Graphic Tee", "Slim Jeans"]);
    }

    #[test]
    fn predicates_are_combined_with_and() {
        let params = FilterParams {
            category: Some("tshirt".into()),
            status: Some(StockStatus::Published),
            date_range: DateRange::Last7Days,
            search: "classic".into(),
            max_price: Some(25.0),
        };
        assert_eq!(names(&apply_filters(catalogue(), &params, &now())), vec!["Classic Tee"]);

        let too_cheap = FilterParams {
            max_price: Some(10.0),
            ..params
        };
        assert!(apply_filters(catalogue(), &too_cheap, &now()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let params = FilterParams {
            category: Some("t".into()),
            date_range: DateRange::ThisMonth,
            ..FilterParams::default()
        };
        let once = apply_filters(catalogue(), &params, &now());
        let twice = apply_filters(once.clone(), &params, &now());
        assert_eq!(once, twice);
    }
}
