pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod server;
pub mod service;
pub mod styles;

pub use config::{Config, GeneratorConfig};
pub use error::{ArtivoraError, FailureCause, Result};
pub use generator::{encode_data_uri, ImageGenerator, PollinationsClient};
pub use models::*;
pub use service::ImageService;
pub use styles::{StylePreset, StyleTable};
