use crate::core::filter::ItemFilter;
use crate::core::paginate::PageRequest;
use crate::domain::model::{Category, Color, Size, SortBy};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{require_finite, require_in_range};
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use std::num::IntErrorKind;

/// Query string extractor whose failures surface as request-validation errors (422).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        decode_query(&parts.uri).map(Self)
    }
}

/// 解析查詢字串；同一個參數出現多次時以最後一個值為準
pub fn decode_query<T: DeserializeOwned>(uri: &Uri) -> Result<T> {
    let rejected = |message: String| CatalogError::QueryRejected { message };

    let deduped: Uri = match uri.query() {
        Some(query) => format!("/?{}", last_value_wins(query))
            .parse()
            .map_err(|e: axum::http::uri::InvalidUri| rejected(e.to_string()))?,
        None => Uri::from_static("/"),
    };

    Query::<T>::try_from_uri(&deduped)
        .map(|Query(value)| value)
        .map_err(|rejection| rejected(rejection.body_text()))
}

fn last_value_wins(query: &str) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let key = pair.split_once('=').map_or(pair, |(key, _)| key);
        pairs.retain(|(seen, _)| *seen != key);
        pairs.push((key, pair));
    }
    pairs
        .into_iter()
        .map(|(_, pair)| pair)
        .collect::<Vec<_>>()
        .join("&")
}

/// 超過 usize 的頁碼視為 usize::MAX，交由分頁邏輯回傳 404 或空頁
fn saturating_usize<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.parse::<usize>() {
        Ok(value) => Ok(Some(value)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(usize::MAX)),
        Err(e) => Err(de::Error::custom(format!("invalid integer '{}': {}", raw, e))),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "saturating_usize")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "saturating_usize")]
    pub page_size: Option<usize>,
}

impl PageParams {
    pub fn to_request(&self, default_page_size: usize) -> Result<PageRequest> {
        PageRequest::from_query(self.page, self.page_size, default_page_size)
    }
}

/// `/api/items` 的篩選與排序參數
#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    pub category: Option<Category>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub size: Option<Size>,
    pub color: Option<Color>,
    pub designer: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<SortBy>,
}

impl ItemsQuery {
    pub fn to_filter(&self) -> Result<ItemFilter> {
        let min_price = self
            .min_price
            .map(|p| require_finite("min_price", p))
            .transpose()?;
        let max_price = self
            .max_price
            .map(|p| require_finite("max_price", p))
            .transpose()?;
        let min_rating = self
            .min_rating
            .map(|r| {
                require_finite("min_rating", r)
                    .and_then(|r| require_in_range("min_rating", r, 0.0, 5.0))
            })
            .transpose()?;

        Ok(ItemFilter {
            category: self.category,
            min_price,
            max_price,
            size: self.size,
            color: self.color,
            designer: self.designer.clone(),
            min_rating,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SizeParams {
    pub size: Option<Size>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ColorParams {
    pub color: Option<Color>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DesignerParams {
    pub designer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: DeserializeOwned>(uri: &str) -> Result<T> {
        let uri: Uri = uri.parse().unwrap();
        decode_query(&uri)
    }

    #[test]
    fn test_items_query_parses_enums() {
        let query: ItemsQuery = parse(
            "/api/items?category=shoes&size=XL&color=navy&sort_by=price_desc&designer=Nike",
        )
        .unwrap();

        let filter = query.to_filter().unwrap();
        assert_eq!(filter.category, Some(Category::Shoes));
        assert_eq!(filter.size, Some(Size::XL));
        assert_eq!(filter.color, Some(Color::Navy));
        assert_eq!(filter.designer.as_deref(), Some("Nike"));
        assert_eq!(query.sort_by, Some(SortBy::PriceDesc));
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        assert!(parse::<ItemsQuery>("/api/items?category=hats").is_err());
        assert!(parse::<ItemsQuery>("/api/items?sort_by=name").is_err());
        assert!(parse::<SizeParams>("/api/sizes?size=xxl").is_err());
    }

    #[test]
    fn test_min_rating_range() {
        let query: ItemsQuery = parse("/api/items?min_rating=5").unwrap();
        assert_eq!(query.to_filter().unwrap().min_rating, Some(5.0));

        let query: ItemsQuery = parse("/api/items?min_rating=5.5").unwrap();
        assert!(query.to_filter().unwrap_err().is_client_error());

        let query: ItemsQuery = parse("/api/items?min_rating=-1").unwrap();
        assert!(query.to_filter().is_err());
    }

    #[test]
    fn test_page_params_defaults_and_limits() {
        let params: PageParams = parse("/api/items").unwrap();
        let request = params.to_request(12).unwrap();
        assert_eq!((request.page(), request.page_size()), (1, 12));

        let params: PageParams = parse("/api/items?page=0").unwrap();
        assert!(params.to_request(12).is_err());

        let params: PageParams = parse("/api/items?page_size=101").unwrap();
        assert!(params.to_request(12).is_err());

        assert!(parse::<PageParams>("/api/items?page=-1").is_err());
    }

    #[test]
    fn test_page_beyond_usize_saturates() {
        let params: PageParams = parse("/api/items?page=99999999999999999999999").unwrap();
        assert_eq!(params.page, Some(usize::MAX));
        assert_eq!(params.to_request(12).unwrap().page(), usize::MAX);

        // 溢位的 page_size 仍然超出上限
        let params: PageParams = parse("/api/items?page_size=99999999999999999999999").unwrap();
        assert!(params.to_request(12).unwrap_err().is_client_error());

        assert!(parse::<PageParams>("/api/items?page=two").is_err());
        assert!(parse::<PageParams>("/api/items?page=").is_err());
    }

    #[test]
    fn test_repeated_parameter_keeps_last_value() {
        let query: ItemsQuery = parse("/api/items?category=shoes&category=bags").unwrap();
        assert_eq!(query.category, Some(Category::Bags));

        let params: PageParams = parse("/api/items?page=3&page_size=5&page=1").unwrap();
        assert_eq!((params.page, params.page_size), (Some(1), Some(5)));

        // 只有最後一個值會被驗證
        assert!(parse::<ItemsQuery>("/api/items?category=hats&category=shoes").is_ok());
        assert!(parse::<ItemsQuery>("/api/items?category=shoes&category=hats").is_err());
    }

    #[test]
    fn test_last_value_wins() {
        assert_eq!(last_value_wins("a=1&b=2&a=3"), "b=2&a=3");
        assert_eq!(last_value_wins("a=1&&b"), "a=1&b");
        assert_eq!(last_value_wins(""), "");
    }
}
