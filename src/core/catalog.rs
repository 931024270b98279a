use crate::core::{CatalogSource, FashionItem, RawItem};
use crate::domain::model::{Category, Color, Size, UnknownVariant};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// 全域唯讀商品目錄；建立後不再變動，clone 只複製 Arc
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<[FashionItem]>,
}

impl Catalog {
    pub fn from_items(items: Vec<FashionItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// 從資料來源載入並驗證整份目錄，任何一筆失敗即整體失敗
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        tracing::info!("📂 Loading catalog from {}", source.describe());
        let bytes = source.read_all().await?;
        let catalog = Self::from_json_slice(&bytes)?;
        tracing::info!("✅ Catalog loaded: {} items", catalog.len());
        Ok(catalog)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: Vec<RawItem> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::MalformedSource {
                message: e.to_string(),
            })?;

        let items = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| validate_record(index, record))
            .collect::<Result<Vec<_>>>()?;

        warn_on_duplicate_ids(&items);
        Ok(Self::from_items(items))
    }

    pub fn items(&self) -> &[FashionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 依載入順序回傳第一個符合的項目
    pub fn find_by_id(&self, id: &str) -> Option<&FashionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|category| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.category == *category)
                    .count();
                (*category, count)
            })
            .collect()
    }
}

fn validate_record(index: usize, record: RawItem) -> Result<FashionItem> {
    let invalid = |field: &str, value: String, reason: String| CatalogError::InvalidRecord {
        index,
        field: field.to_string(),
        value,
        reason,
    };

    let category: Category = record
        .category
        .parse()
        .map_err(|e: UnknownVariant| {
            invalid("category", record.category.clone(), e.to_string())
        })?;

    let size = record
        .size
        .iter()
        .map(|s| s.parse::<Size>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid("size", e.value.clone(), e.to_string()))?;

    let color = record
        .color
        .iter()
        .map(|c| c.parse::<Color>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid("color", e.value.clone(), e.to_string()))?;

    if !(record.price.is_finite() && record.price > 0.0) {
        return Err(invalid(
            "price",
            record.price.to_string(),
            "must be greater than 0".to_string(),
        ));
    }

    if !(0.0..=5.0).contains(&record.rating) {
        return Err(invalid(
            "rating",
            record.rating.to_string(),
            "must be between 0 and 5".to_string(),
        ));
    }

    Ok(FashionItem {
        id: record.id,
        name: record.name,
        category,
        price: record.price,
        size,
        color,
        designer: record.designer,
        rating: record.rating,
    })
}

fn warn_on_duplicate_ids(items: &[FashionItem]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            tracing::warn!("⚠️ Duplicate item id '{}' in catalog; lookups return the first", item.id);
        }
    }
}
