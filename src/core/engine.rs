use crate::core::catalog::Catalog;
use crate::core::filter::ItemFilter;
use crate::core::paginate::{paginate, PageRequest};
use crate::core::sort::sort_items;
use crate::core::FashionItem;
use crate::domain::model::{PageResult, SortBy};
use crate::utils::error::{CatalogError, Result};

/// 每個請求的查詢管線：篩選 → 排序 → 分頁。不持有可變狀態。
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    catalog: Catalog,
}

impl CatalogEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn list_items(
        &self,
        filter: &ItemFilter,
        sort_by: Option<SortBy>,
        request: PageRequest,
    ) -> Result<PageResult<FashionItem>> {
        let mut matched = filter.apply(self.catalog.items());
        tracing::debug!(
            "🔍 Filter {:?} matched {} of {} items",
            filter,
            matched.len(),
            self.catalog.len()
        );

        sort_items(&mut matched, sort_by);
        Self::page_of(matched, request)
    }

    /// 只篩選、不排序，供 categories / sizes / colors / designers 端點使用
    pub fn browse(
        &self,
        filter: &ItemFilter,
        request: PageRequest,
    ) -> Result<PageResult<FashionItem>> {
        self.list_items(filter, None, request)
    }

    pub fn get_item(&self, id: &str) -> Result<FashionItem> {
        self.catalog
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| CatalogError::ItemNotFound { id: id.to_string() })
    }

    fn page_of(
        matched: Vec<&FashionItem>,
        request: PageRequest,
    ) -> Result<PageResult<FashionItem>> {
        tracing::debug!(
            "📄 Page {} (size {}) of {} matched items",
            request.page(),
            request.page_size(),
            matched.len()
        );
        let page = paginate(matched, request)?;
        Ok(PageResult {
            items: page.items.into_iter().cloned().collect(),
            total: page.total,
            page: page.page,
            size: page.size,
            total_pages: page.total_pages,
        })
    }
}
