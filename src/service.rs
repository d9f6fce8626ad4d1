use crate::{
    config::Config,
    error::Result,
    generator::{encode_data_uri, ImageGenerator, PollinationsClient},
    logger,
    models::{GeneratedImage, GenerationRequest},
    styles::StyleTable,
};
use std::sync::Arc;
use uuid::Uuid;

/// Enhance, fetch, encode. One attempt per request, no shared mutable state.
#[derive(Clone)]
pub struct ImageService {
    styles: Arc<StyleTable>,
    generator: Arc<dyn ImageGenerator>,
}

impl ImageService {
    /// Creates a service over an existing style table and generator.
    pub fn new(styles: Arc<StyleTable>, generator: Arc<dyn ImageGenerator>) -> Self {
        Self { styles, generator }
    }

    /// Default style table plus a `PollinationsClient` built from `config.generator`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let generator = PollinationsClient::new(config.generator.clone())?;
        Ok(Self::new(
            Arc::new(StyleTable::default()),
            Arc::new(generator),
        ))
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Enhances the prompt with the resolved style, fetches the image and returns it
    /// as a PNG data URI. Fails on the first error without retrying.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let request_id = Uuid::new_v4().to_string();
        let style = self.styles.resolve_key(request.style.as_deref()).to_string();
        let enhanced_prompt = self.styles.enhance(&request.prompt, Some(&style));

        log::info!("[req:{}] Generating image with style '{}'", request_id, style);
        log::debug!("[req:{}] Enhanced prompt: {}", request_id, enhanced_prompt);

        let _timer = logger::timer(&format!("generate {}", request_id));

        let bytes = match self.generator.fetch(&enhanced_prompt).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!(
                    "[req:{}] Image generation failed ({:?}): {}",
                    request_id,
                    e.cause(),
                    e
                );
                return Err(e);
            }
        };

        let image = encode_data_uri(&bytes).map_err(|e| {
            log::error!("[req:{}] Upstream returned undecodable data: {}", request_id, e);
            e
        })?;

        Ok(GeneratedImage {
            image,
            enhanced_prompt,
            style,
        })
    }
}
