// Adapters layer: concrete implementations for external systems (data file, http).

pub mod http;
pub mod storage;
