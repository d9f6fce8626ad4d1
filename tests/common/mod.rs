#![allow(dead_code)]

use artivora::{ArtivoraError, ImageGenerator, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::Mutex;

/// What the stub generator should do on every call.
#[derive(Clone)]
pub enum StubBehavior {
    Image(Vec<u8>),
    Status(u16),
    Timeout,
    Transport(String),
}

pub struct StubGenerator {
    behavior: StubBehavior,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for StubGenerator {
    async fn fetch(&self, prompt: &str) -> Result<Vec<u8>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behavior {
            StubBehavior::Image(bytes) => Ok(bytes.clone()),
            StubBehavior::Status(code) => Err(ArtivoraError::UpstreamStatus(*code)),
            StubBehavior::Timeout => Err(ArtivoraError::Timeout),
            StubBehavior::Transport(detail) => Err(ArtivoraError::Transport(detail.clone())),
        }
    }

    fn name(&self) -> &str {
        "stub generator"
    }
}

pub fn sample_image(format: ImageFormat) -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, Rgba([10, 120, 250, 255]));
    let img = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8()),
        _ => DynamicImage::ImageRgba8(img),
    };
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}
