use crate::utils::error::Result;
use async_trait::async_trait;

/// 目錄資料來源，啟動時讀取一次
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn read_all(&self) -> Result<Vec<u8>>;

    /// Human readable location, used in startup logs.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn service_name(&self) -> &str;
    fn bind_address(&self) -> String;
    fn data_path(&self) -> &str;
    fn default_page_size(&self) -> usize;
    fn allowed_origins(&self) -> &[String];
}
