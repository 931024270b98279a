use crate::core::FashionItem;
use crate::domain::model::{Category, Color, Size};

/// 一組可選的篩選條件，全部以 AND 組合；未設定的條件視為全部符合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub category: Option<Category>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub size: Option<Size>,
    pub color: Option<Color>,
    pub designer: Option<String>,
    pub min_rating: Option<f64>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = Some(designer.into());
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// 單次線性掃描，保留目錄原始順序
    pub fn apply<'a>(&self, items: &'a [FashionItem]) -> Vec<&'a FashionItem> {
        let needle = self.designer_needle();
        items
            .iter()
            .filter(|item| self.matches_with(item, needle.as_deref()))
            .collect()
    }

    // 空字串視為未設定
    fn designer_needle(&self) -> Option<String> {
        self.designer
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_with(&self, item: &FashionItem, designer_needle: Option<&str>) -> bool {
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if item.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if item.price > max {
                return false;
            }
        }

        if let Some(size) = self.size {
            if !item.size.contains(&size) {
                return false;
            }
        }

        if let Some(color) = self.color {
            if !item.color.contains(&color) {
                return false;
            }
        }

        if let Some(needle) = designer_needle {
            if !item.designer.to_lowercase().contains(needle) {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if item.rating < min {
                return false;
            }
        }

        true
    }
}
