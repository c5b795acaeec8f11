// src/derivation/view_state.rs
use super::date_range::DateRange;
use super::filter::FilterParams;
use super::pagination::PageRequest;

/// Everything a list view needs to rebuild itself: filters plus the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<S> {
    pub params: FilterParams<S>,
    pub page: PageRequest,
}

impl<S> Default for ViewState<S> {
    fn default() -> Self {
        Self {
            params: FilterParams::default(),
            page: PageRequest::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction<S> {
    SetCategory(Option<String>),
    SetStatus(Option<S>),
    SetDateRange(DateRange),
    SetSearch(String),
    SetMaxPrice(Option<f64>),
    SetPageSize(usize),
    GoToPage(usize),
    NextPage { total_pages: usize },
    PreviousPage,
    #[allow(dead_code)]
    ResetFilters,
}

impl<S> ViewState<S> {
    /// Applies one UI action. Any change to the filter set sends the view back to page 1.
    pub fn reduce(mut self, action: ViewAction<S>) -> Self {
        match action {
            ViewAction::SetCategory(category) => {
                self.params.category = category;
                self.page.page_number = 1;
            }
            ViewAction::SetStatus(status) => {
                self.params.status = status;
                self.page.page_number = 1;
            }
            ViewAction::SetDateRange(range) => {
                self.params.date_range = range;
                self.page.page_number = 1;
            }
            ViewAction::SetSearch(search) => {
                self.params.search = search;
                self.page.page_number = 1;
            }
            ViewAction::SetMaxPrice(max_price) => {
                self.params.max_price = max_price;
                self.page.page_number = 1;
            }
            ViewAction::SetPageSize(page_size) => {
                self.page.page_size = page_size.max(1);
                self.page.page_number = 1;
            }
            ViewAction::GoToPage(page_number) => {
                self.page.page_number = page_number.max(1);
            }
            ViewAction::NextPage { total_pages } => {
                if self.page.page_number < total_pages {
                    self.page.page_number += 1;
                }
            }
            ViewAction::PreviousPage => {
                self.page.page_number = self.page.page_number.saturating_sub(1).max(1);
            }
            ViewAction::ResetFilters => {
                self.params = FilterParams::default();
                self.page.page_number = 1;
            }
        }
        self
    }

    pub fn reduce_all(self, actions: impl IntoIterator<Item = ViewAction<S>>) -> Self {
        actions.into_iter().fold(self, Self::reduce)
    }
}
