// src/dtos/list.rs
use serde::{Deserialize, Serialize};

use crate::derivation::{DateRange, DerivedView, Page, ViewAction, ViewState};
use crate::error::AppError;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Query string accepted by every list endpoint. `S` is the status type of
/// the record kind being listed.
#[derive(Debug, Deserialize)]
pub struct ListQuery<S> {
    pub category: Option<String>,
    pub status: Option<S>,
    pub date_range: Option<DateRange>,
    pub search: Option<String>,
    pub max_price: Option<f64>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl<S> ListQuery<S> {
    pub fn into_view_state(self, default_page_size: usize) -> Result<ViewState<S>, AppError> {
        if self.max_price.is_some_and(|max| !max.is_finite()) {
            return Err(AppError::validation("max_price must be a finite number"));
        }
        let page_size = self.page_size.unwrap_or(default_page_size).clamp(1, MAX_PAGE_SIZE);
        Ok(ViewState::default().reduce_all([
            ViewAction::SetPageSize(page_size),
            ViewAction::SetCategory(self.category),
            ViewAction::SetStatus(self.status),
            ViewAction::SetDateRange(self.date_range.unwrap_or_default()),
            ViewAction::SetSearch(self.search.unwrap_or_default()),
            ViewAction::SetMaxPrice(self.max_price),
            ViewAction::GoToPage(self.page.unwrap_or(1)),
        ]))
    }
}

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Page,
    pub next_page: Option<usize>,
    pub previous_page: Option<usize>,
}

impl<T> PaginatedResponse<T> {
    pub fn from_view<R>(view: DerivedView<R>) -> Self
    where
        T: From<R>,
    {
        let (next_page, previous_page) = neighbours(&view.page);
        Self {
            data: view.items.into_iter().map(T::from).collect(),
            pagination: view.page,
            next_page,
            previous_page,
        }
    }
}

/// Page numbers the next/previous buttons lead to, if they move at all.
fn neighbours(page: &Page) -> (Option<usize>, Option<usize>) {
    let here = ViewState::<()>::default().reduce(ViewAction::GoToPage(page.page_number));
    let step = |action| {
        let moved = here.clone().reduce(action).page.page_number;
        (moved != page.page_number).then_some(moved)
    };
    (
        step(ViewAction::NextPage { total_pages: page.total_pages }),
        step(ViewAction::PreviousPage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::StockStatus;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &str) -> ListQuery<StockStatus> {
        let uri: Uri = uri.parse().unwrap();
        Query::<ListQuery<StockStatus>>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn empty_query_is_the_default_view() {
        let state = parse("/products").into_view_state(10).unwrap();
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn query_fields_land_in_the_view_state() {
        let state = parse(
            "/products?category=tshirt&status=Low%20Stock&date_range=this_month&search=tee&max_price=30&page=2&page_size=5",
        )
        .into_view_state(10)
        .unwrap();

        assert_eq!(state.params.category.as_deref(), Some("tshirt"));
        assert_eq!(state.params.status, Some(StockStatus::LowStock));
        assert_eq!(state.params.date_range, DateRange::ThisMonth);
        assert_eq!(state.params.search, "tee");
        assert_eq!(state.params.max_price, Some(30.0));
        assert_eq!(state.page.page_number, 2);
        assert_eq!(state.page.page_size, 5);
    }

    #[test]
    fn page_size_is_capped() {
        let state = parse("/products?page_size=5000").into_view_state(10).unwrap();
        assert_eq!(state.page.page_size, MAX_PAGE_SIZE);
        let state = parse("/products?page_size=0").into_view_state(10).unwrap();
        assert_eq!(state.page.page_size, 1);
    }

    #[test]
    fn non_finite_max_price_is_rejected() {
        for uri in ["/products?max_price=NaN", "/products?max_price=inf"] {
            let err = parse(uri).into_view_state(10).unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)), "{uri}");
        }
    }

    fn page(page_number: usize, total_pages: usize) -> Page {
        Page { page_number, page_size: 10, total_pages, total_items: total_pages * 10 }
    }

    #[test]
    fn navigation_links_stay_inside_the_page_range() {
        assert_eq!(neighbours(&page(1, 3)), (Some(2), None));
        assert_eq!(neighbours(&page(2, 3)), (Some(3), Some(1)));
        assert_eq!(neighbours(&page(3, 3)), (None, Some(2)));
        assert_eq!(neighbours(&page(1, 1)), (None, None));
    }
}
