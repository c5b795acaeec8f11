//! Client-side list derivation: filtering, date bucketing, pagination and
//! derived statuses over records already fetched into memory.
//!
//! Everything here is pure and synchronous. Handlers fetch, then call
//! [`derive`] with the caller's [`ViewState`].

pub mod aggregate;
pub mod date_range;
pub mod filter;
pub mod pagination;
pub mod status;
pub mod view_state;

pub use aggregate::{aggregate_total, Amount};
pub use date_range::{matches_date_range, DateRange};
pub use filter::{apply_filters, Record};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use status::{classify_customer_status, classify_stock_status, CustomerStatus, StockStatus};
pub use view_state::{ViewAction, ViewState};

use chrono::{DateTime, TimeZone};

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<R> {
    pub items: Vec<R>,
    pub page: Page,
}

/// Filters first, then paginates.
pub fn derive<R, I, Tz>(records: I, view: &ViewState<R::Status>, now: &DateTime<Tz>) -> DerivedView<R>
where
    R: Record,
    I: IntoIterator<Item = R>,
    Tz: TimeZone,
{
    let filtered = apply_filters(records, &view.params, now);
    let (items, page) = paginate(filtered, view.page.page_number, view.page.page_size);
    DerivedView { items, page }
}
