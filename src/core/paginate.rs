use crate::domain::model::PageResult;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::require_in_range;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const MAX_PAGE_SIZE: usize = 100;

/// 已驗證的分頁參數：`page >= 1`，`1 <= page_size <= 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        if page == 0 {
            return Err(CatalogError::validation(
                "page",
                page,
                "must be greater than 0",
            ));
        }
        require_in_range("page_size", page_size, 1, MAX_PAGE_SIZE)?;
        Ok(Self { page, page_size })
    }

    /// 未提供的參數套用預設值後再驗證
    pub fn from_query(
        page: Option<usize>,
        page_size: Option<usize>,
        default_page_size: usize,
    ) -> Result<Self> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(default_page_size),
        )
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        (self.page() - 1).saturating_mul(self.page_size())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// 切出單一頁面。
///
/// 結果非空且 `page > total_pages` 時回傳 `PageNotFound`；
/// 結果為空時任何頁碼都成功並回傳空頁，`total_pages = 0`。
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Result<PageResult<T>> {
    let (page, page_size) = (request.page(), request.page_size());
    let total = items.len();
    let total_pages = total_pages(total, page_size);

    if total > 0 && page > total_pages {
        return Err(CatalogError::PageNotFound { page, total_pages });
    }

    let start = request.offset().min(total);
    let end = start.saturating_add(page_size).min(total);
    let page_items = items.into_iter().skip(start).take(end - start).collect();

    Ok(PageResult {
        items: page_items,
        total,
        page,
        size: page_size,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_validation() {
        assert!(PageRequest::new(1, 12).is_ok());
        assert!(PageRequest::new(1, 100).is_ok());

        let err = PageRequest::new(0, 12).unwrap_err();
        assert!(err.is_client_error());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
    }

    #[test]
    fn test_defaults() {
        let request = PageRequest::from_query(None, None, DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 12);

        let request = PageRequest::from_query(Some(2), None, 20).unwrap();
        assert_eq!(request.offset(), 20);

        let request = PageRequest::from_query(Some(usize::MAX), Some(12), 20).unwrap();
        assert_eq!(request.offset(), usize::MAX);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_twenty_five_items_by_ten() {
        let items: Vec<u32> = (0..25).collect();

        let first = paginate(items.clone(), PageRequest::new(1, 10).unwrap()).unwrap();
        assert_eq!(first.items, (0..10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);

        let last = paginate(items.clone(), PageRequest::new(3, 10).unwrap()).unwrap();
        assert_eq!(last.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(last.total, 25);
        assert_eq!(last.size, 10);

        let err = paginate(items, PageRequest::new(4, 10).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PageNotFound {
                page: 4,
                total_pages: 3
            }
        ));
    }

    #[test]
    fn test_empty_result_never_fails() {
        for page in [1, 2, 1000, usize::MAX] {
            let result = paginate(Vec::<u32>::new(), PageRequest::new(page, 12).unwrap()).unwrap();
            assert!(result.items.is_empty());
            assert_eq!(result.total, 0);
            assert_eq!(result.page, page);
            assert_eq!(result.size, 12);
            assert_eq!(result.total_pages, 0);
        }
    }
}
