use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::derivation::{classify_customer_status, CustomerStatus, Record};

/// A storefront customer joined with the number of orders placed under
/// the same email address.
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub image_url: Option<String>,
    pub banned: bool,
    pub locked: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub order_count: i64,
}

impl Customer {
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

impl Record for Customer {
    type Status = CustomerStatus;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn status(&self) -> CustomerStatus {
        classify_customer_status(self.banned, self.locked)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.first_name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::apply_filters;
    use crate::derivation::filter::FilterParams;

    fn customer(id: i64, first_name: &str, banned: bool, locked: bool) -> Customer {
        Customer {
            id,
            first_name: first_name.to_string(),
            last_name: None,
            email: format!("{}@example.com", first_name.to_lowercase()),
            image_url: None,
            banned,
            locked,
            created_at: None,
            order_count: 0,
        }
    }

    #[test]
    fn blocked_filter_keeps_banned_and_locked_customers() {
        let customers = vec![
            customer(1, "Ana", false, false),
            customer(2, "Ben", true, false),
            customer(3, "Cy", false, true),
        ];
        let params = FilterParams {
            status: Some(CustomerStatus::Blocked),
            ..FilterParams::default()
        };
        let blocked = apply_filters(customers, &params, &Utc::now());
        assert_eq!(blocked.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn search_is_on_first_name() {
        let customers = vec![customer(1, "Ana", false, false), customer(2, "Ben", false, false)];
        let params = FilterParams {
            search: "BE".into(),
            ..FilterParams::default()
        };
        let found = apply_filters(customers, &params, &Utc::now());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Ben");
    }

    #[test]
    fn display_name_skips_missing_last_name() {
        let mut c = customer(1, "Ana", false, false);
        assert_eq!(c.display_name(), "Ana");
        c.last_name = Some("Lee".into());
        assert_eq!(c.display_name(), "Ana Lee");
    }
}
