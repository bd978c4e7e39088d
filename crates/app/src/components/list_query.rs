use dioxus::prelude::*;
use shared_types::{
    normalize_pagination, AppError, ClientConfig, PageQuery, PaginatedResponse, PaginationMeta,
};
use shared_ui::{PaginationState, TablePagination};

use crate::api::ApiClient;

/// Page and page-size signals backing a server-paginated table.
#[derive(Clone, Copy, PartialEq)]
pub struct ListQuery {
    pub page: Signal<u64>,
    pub limit: Signal<u64>,
}

/// Pagination state starting at page 1 with the configured page size.
pub fn use_list_query() -> ListQuery {
    let api = use_context::<ApiClient>();
    let limit = default_limit(api.config());
    ListQuery {
        page: use_signal(|| 1),
        limit: use_signal(move || limit),
    }
}

fn default_limit(config: &ClientConfig) -> u64 {
    normalize_pagination(None, Some(config.default_page_size)).1
}

impl ListQuery {
    /// Current query. Reading subscribes, so resources built on it refetch
    /// when the page or size changes.
    pub fn query(&self) -> PageQuery {
        PageQuery::new(Some((self.page)()), Some((self.limit)()))
    }

    /// Back to the first page, e.g. after a filter change.
    pub fn reset(&mut self) {
        self.page.set(1);
    }

    /// Table pagination wired to these signals. A new page size restarts at
    /// page 1.
    pub fn table_pagination(&self, meta: &PaginationMeta) -> TablePagination {
        let mut page = self.page;
        let mut limit = self.limit;
        TablePagination {
            state: PaginationState::new(meta.page, meta.limit, meta.total),
            on_page_change: EventHandler::new(move |p: u64| page.set(p)),
            on_limit_change: Some(EventHandler::new(move |l: u64| {
                limit.set(l);
                page.set(1);
            })),
        }
    }
}

/// What a list page renders for one state of its resource.
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub pagination: Option<TablePagination>,
    pub error: Option<AppError>,
    pub loading: bool,
}

impl ListQuery {
    pub fn view<T: Clone>(
        &self,
        state: Option<&Result<PaginatedResponse<T>, AppError>>,
    ) -> ListView<T> {
        match state {
            None => ListView {
                rows: Vec::new(),
                pagination: None,
                error: None,
                loading: true,
            },
            Some(Ok(response)) => ListView {
                rows: response.data.clone(),
                pagination: Some(self.table_pagination(&response.meta)),
                error: None,
                loading: false,
            },
            Some(Err(e)) => ListView {
                rows: Vec::new(),
                pagination: None,
                error: Some(e.clone()),
                loading: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_clamped() {
        let config = ClientConfig {
            default_page_size: 500,
            ..ClientConfig::default()
        };
        assert_eq!(default_limit(&config), 100);
    }
}
