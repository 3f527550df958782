mod http;
mod local;

pub use http::HttpByteSource;
pub use local::LocalFileSource;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for acquiring the raw archive bytes behind a locator
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Fetch the complete archive contents
    async fn collect(&self) -> Result<Vec<u8>>;

    /// Locator string used in diagnostics
    fn locator(&self) -> &str;
}
