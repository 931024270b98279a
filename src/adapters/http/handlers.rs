use crate::adapters::http::query::{
    CategoryParams, ColorParams, DesignerParams, ItemsQuery, PageParams, SizeParams,
    ValidatedQuery,
};
use crate::adapters::http::AppState;
use crate::core::filter::ItemFilter;
use crate::core::FashionItem;
use crate::domain::model::PageResult;
use crate::utils::error::Result;
use axum::extract::{Path, State};
use axum::Json;

type PageJson = Json<PageResult<FashionItem>>;

pub async fn list_items(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ItemsQuery>,
    ValidatedQuery(paging): ValidatedQuery<PageParams>,
) -> Result<PageJson> {
    let filter = query.to_filter()?;
    let request = paging.to_request(state.default_page_size)?;
    let page = state.engine.list_items(&filter, query.sort_by, request)?;
    Ok(Json(page))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<FashionItem>> {
    state.engine.get_item(&item_id).map(Json)
}

pub async fn list_by_category(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CategoryParams>,
    ValidatedQuery(paging): ValidatedQuery<PageParams>,
) -> Result<PageJson> {
    let filter = ItemFilter {
        category: params.category,
        ..ItemFilter::default()
    };
    browse(&state, &filter, &paging)
}

pub async fn list_by_size(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SizeParams>,
    ValidatedQuery(paging): ValidatedQuery<PageParams>,
) -> Result<PageJson> {
    let filter = ItemFilter {
        size: params.size,
        ..ItemFilter::default()
    };
    browse(&state, &filter, &paging)
}

pub async fn list_by_color(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ColorParams>,
    ValidatedQuery(paging): ValidatedQuery<PageParams>,
) -> Result<PageJson> {
    let filter = ItemFilter {
        color: params.color,
        ..ItemFilter::default()
    };
    browse(&state, &filter, &paging)
}

pub async fn list_by_designer(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<DesignerParams>,
    ValidatedQuery(paging): ValidatedQuery<PageParams>,
) -> Result<PageJson> {
    let filter = ItemFilter {
        designer: params.designer,
        ..ItemFilter::default()
    };
    browse(&state, &filter, &paging)
}

fn browse(state: &AppState, filter: &ItemFilter, paging: &PageParams) -> Result<PageJson> {
    let request = paging.to_request(state.default_page_size)?;
    state.engine.browse(filter, request).map(Json)
}
