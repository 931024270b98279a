pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalFileSource;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    catalog::Catalog, engine::CatalogEngine, filter::ItemFilter, paginate::PageRequest,
};
pub use crate::domain::model::{Category, Color, FashionItem, PageResult, Size, SortBy};
pub use crate::utils::error::{CatalogError, Result};
