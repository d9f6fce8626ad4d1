pub mod encoder;
pub mod pollinations_client;

use crate::error::Result;
use async_trait::async_trait;

pub use encoder::{encode_data_uri, DATA_URI_PREFIX};
pub use pollinations_client::PollinationsClient;

/// An upstream text-to-image service.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Performs a single generation attempt and returns the raw image bytes.
    async fn fetch(&self, prompt: &str) -> Result<Vec<u8>>;

    /// Display name reported by the health endpoint.
    fn name(&self) -> &str;
}
