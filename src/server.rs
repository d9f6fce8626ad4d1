use crate::{
    config::Config,
    error::ArtivoraError,
    logger,
    models::{GenerateResponse, GenerationRequest, HealthResponse},
    service::ImageService,
};
use actix_web::{
    dev::ServiceResponse,
    get,
    http::{header, Method, StatusCode},
    middleware::{DefaultHeaders, ErrorHandlerResponse, ErrorHandlers, Logger},
    post, web, App, HttpRequest, HttpResponse, HttpServer, ResponseError,
};
use std::path::PathBuf;

/// Largest accepted `POST /generate` body.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Paths served by this app and the method each one accepts.
const ROUTES: [(&str, &str); 3] = [("/", "GET"), ("/generate", "POST"), ("/health", "GET")];

pub struct AppState {
    pub service: ImageService,
    pub index_path: PathBuf,
}

impl AppState {
    pub fn new(service: ImageService, index_path: impl Into<PathBuf>) -> Self {
        Self {
            service,
            index_path: index_path.into(),
        }
    }
}

impl ResponseError for ArtivoraError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(ArtivoraError::status_code(self))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self))
            .json(GenerateResponse::failure(self.user_message()))
    }
}

#[get("/")]
pub async fn index(app_state: web::Data<AppState>) -> HttpResponse {
    match tokio::fs::read_to_string(&app_state.index_path).await {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::warn!(
                "Front-end document {} unavailable: {}",
                app_state.index_path.display(),
                e
            );
            HttpResponse::NotFound().json(GenerateResponse::failure("Front-end not found"))
        }
    }
}

#[post("/generate")]
pub async fn generate(
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ArtivoraError> {
    let request = GenerationRequest::from_json_bytes(&body).map_err(|e| {
        log::warn!("Rejected generate request: {}", e);
        e
    })?;

    let generated = app_state.service.generate(&request).await?;
    Ok(HttpResponse::Ok().json(GenerateResponse::success(generated.image)))
}

#[get("/health")]
pub async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(app_state.service.generator_name()))
}

/// Answers CORS preflight on any path. A known path hit with the wrong method
/// is a 405; anything else is a 404.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::NoContent().finish();
    }

    match ROUTES.iter().find(|(path, _)| *path == req.path()) {
        Some((_, allowed)) => HttpResponse::MethodNotAllowed()
            .insert_header((header::ALLOW, *allowed))
            .json(GenerateResponse::failure("Method not allowed")),
        None => HttpResponse::NotFound().json(GenerateResponse::failure("Not found")),
    }
}

fn payload_too_large<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();
    let res = HttpResponse::PayloadTooLarge()
        .json(GenerateResponse::failure("Request body too large"));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}

/// Rewrites framework-generated error bodies into the JSON failure shape.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::PAYLOAD_TOO_LARGE, payload_too_large)
}

pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

/// Registers every route on `cfg`; shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(index)
        .service(generate)
        .service(health)
        .default_service(web::to(fallback));
}

pub async fn startup(config: Config) -> std::io::Result<()> {
    let service = ImageService::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.host,
        config.port,
    );
    logger::log_config_info(&config, service.styles());

    let app_state = web::Data::new(AppState::new(service, config.index_path()));

    HttpServer::new(move || {
        App::new()
            .wrap(error_handlers())
            .wrap(cors_headers())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
