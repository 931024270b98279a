use crate::core::FashionItem;
use crate::domain::model::SortBy;

/// 穩定排序：鍵值相同的項目維持篩選後的相對順序
pub fn sort_items(items: &mut [&FashionItem], sort_by: Option<SortBy>) {
    let Some(sort_by) = sort_by else {
        return;
    };

    // slice::sort_by 為穩定排序；降冪時反轉比較方向而非反轉結果，以保持相等鍵的順序
    match sort_by {
        SortBy::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::RatingDesc => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
