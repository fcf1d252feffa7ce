use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use garden_sim::{
    api::{openapi::ApiDoc, state::AppState},
    config::AppConfig,
    logic::clock::SystemClock,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    garden_sim::config::init_logging();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(&config, Arc::new(SystemClock)));

    log::info!("🌱 Garden Simulator started at http://{bind_addr}");
    log::info!("   GET  /api/plants");
    log::info!("   POST /api/plants");
    log::info!("   GET  /api/plants/{{index}}/sprite");
    log::info!("   POST /api/garden/water");
    log::info!("   POST /api/garden/grow");
    log::info!("   Sprites from {}", config.images_dir.display());
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");

    let openapi = ApiDoc::openapi();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(garden_sim::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
