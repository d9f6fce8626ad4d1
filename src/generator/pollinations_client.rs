use crate::{
    config::GeneratorConfig,
    error::{ArtivoraError, Result},
    generator::ImageGenerator,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub const POLLINATIONS_NAME: &str = "Pollinations.ai (Free & No API Key)";

/// Client for the Pollinations.ai prompt endpoint. No API key is needed.
#[derive(Clone)]
pub struct PollinationsClient {
    client: Client,
    config: GeneratorConfig,
}

impl PollinationsClient {
    /// Validates `config` and builds an HTTP client whose total request time is capped
    /// at the configured timeout.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ArtivoraError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds `{base}/prompt/{prompt}?width=..&height=..&nologo=true`, with the prompt
    /// percent-encoded as a single path segment.
    pub fn build_url(&self, prompt: &str) -> String {
        let mut url = format!(
            "{}/prompt/{}?width={}&height={}&nologo=true",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt),
            self.config.width,
            self.config.height
        );
        if let Some(model) = &self.config.model {
            url.push_str("&model=");
            url.push_str(&urlencoding::encode(model));
        }
        url
    }
}

fn classify(err: reqwest::Error) -> ArtivoraError {
    if err.is_timeout() {
        ArtivoraError::Timeout
    } else {
        ArtivoraError::Transport(err.to_string())
    }
}

#[async_trait]
impl ImageGenerator for PollinationsClient {
    /// Single GET, no retries. Only status 200 counts as success.
    async fn fetch(&self, prompt: &str) -> Result<Vec<u8>> {
        let url = self.build_url(prompt);
        log::debug!("Requesting image from {}", url);

        let response = self.client.get(&url).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Image generator responded with status {}", status);
            return Err(ArtivoraError::UpstreamStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(classify)?;
        log::info!("Received {} bytes from image generator", bytes.len());

        Ok(bytes.to_vec())
    }

    fn name(&self) -> &str {
        POLLINATIONS_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_prompt() {
        let client = PollinationsClient::new(GeneratorConfig::default()).unwrap();
        assert_eq!(
            client.build_url("a cat & dog/50%"),
            "https://image.pollinations.ai/prompt/a%20cat%20%26%20dog%2F50%25?width=768&height=768&nologo=true"
        );
    }

    #[test]
    fn test_url_with_model_and_custom_host() {
        let config = GeneratorConfig::new()
            .with_base_url("http://127.0.0.1:9000/")
            .with_size(512, 640)
            .with_model("flux");
        let client = PollinationsClient::new(config).unwrap();
        assert_eq!(
            client.build_url("sky"),
            "http://127.0.0.1:9000/prompt/sky?width=512&height=640&nologo=true&model=flux"
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(PollinationsClient::new(GeneratorConfig::new().with_timeout(0)).is_err());
    }

    #[test]
    fn test_name() {
        let client = PollinationsClient::new(GeneratorConfig::default()).unwrap();
        assert_eq!(client.name(), POLLINATIONS_NAME);
    }
}
