//! Dashboard view state and its reducer.
//!
//! `ViewState` is a plain value; every user action becomes a
//! [`DashboardEvent`] and [`ViewState::reduce`] returns the next value.

use serde::{Deserialize, Serialize};

use crate::models::{DateRange, QueryParams, SeverityFilter, SortOrder};
use crate::query::paginate;
use crate::stats::StatKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    SeverityChanged(SeverityFilter),
    SearchChanged(String),
    DateRangeChanged(DateRange),
    SortChanged(SortOrder),
    PageRequested(usize),
    PreviousPage,
    NextPage,
    /// Expand an incident card, or collapse it if it is already expanded
    DetailsToggled(String),
    /// Select a stat card for the chart, or clear the selection if it is already selected
    StatToggled(StatKind),
    FormOpened,
    FormCancelled,
    SubmitSucceeded,
}

impl DashboardEvent {
    fn changes_query(&self) -> bool {
        matches!(
            self,
            DashboardEvent::SeverityChanged(_)
                | DashboardEvent::SearchChanged(_)
                | DashboardEvent::DateRangeChanged(_)
                | DashboardEvent::SortChanged(_)
        )
    }
}

/// Derived facts the reducer needs but does not own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReduceContext {
    /// Page count of the list as derived under the current query
    pub total_pages: usize,
    pub reset_page_on_query_change: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub query: QueryParams,
    /// 1-indexed
    pub page: usize,
    pub expanded: Option<String>,
    pub selected_stat: Option<StatKind>,
    pub mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: QueryParams::default(),
            page: 1,
            expanded: None,
            selected_stat: None,
            mode: ViewMode::List,
        }
    }
}

impl ViewState {
    pub fn reduce(&self, event: &DashboardEvent, ctx: &ReduceContext) -> ViewState {
        let mut next = self.clone();

        match event {
            DashboardEvent::SeverityChanged(severity) => next.query.severity = *severity,
            DashboardEvent::SearchChanged(search) => next.query.search = search.clone(),
            DashboardEvent::DateRangeChanged(range) => next.query.date_range = *range,
            DashboardEvent::SortChanged(order) => next.query.sort = *order,
            DashboardEvent::PageRequested(page) => next.page = requested_page(self.page, *page, ctx),
            DashboardEvent::PreviousPage => {
                next.page = requested_page(self.page, self.page.saturating_sub(1), ctx)
            }
            DashboardEvent::NextPage => {
                next.page = requested_page(self.page, self.page.saturating_add(1), ctx)
            }
            DashboardEvent::DetailsToggled(id) => {
                next.expanded = match &self.expanded {
                    Some(current) if current == id => None,
                    _ => Some(id.clone()),
                };
            }
            DashboardEvent::StatToggled(kind) => {
                next.selected_stat = match self.selected_stat {
                    Some(current) if current == *kind => None,
                    _ => Some(*kind),
                };
            }
            DashboardEvent::FormOpened => next.mode = ViewMode::Form,
            DashboardEvent::FormCancelled | DashboardEvent::SubmitSucceeded => {
                next.mode = ViewMode::List
            }
        }

        if ctx.reset_page_on_query_change && event.changes_query() {
            next.page = 1;
        }

        next
    }
}

fn requested_page(current: usize, requested: usize, ctx: &ReduceContext) -> usize {
    if paginate::accepts(requested, ctx.total_pages) {
        requested
    } else {
        current
    }
}
