pub mod catalog;
pub mod engine;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use crate::domain::model::{FashionItem, PageResult, RawItem};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
