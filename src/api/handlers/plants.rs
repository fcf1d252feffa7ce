use std::io::ErrorKind;

use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    api::{handlers::error_response, state::AppState},
    error::GardenError,
    logic::commands::{Command, CommandOutcome},
    models::request::{
        garden_links, plant_links, ApiResponse, ErrorResponse, PlantApiResponse,
        PlantListApiResponse, PlantRequest, PlantView,
    },
};

/// GET /api/plants
/// Lists every plant in insertion order.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses(
        (status = 200, description = "All plants with their current state", body = PlantListApiResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants(state: web::Data<AppState>) -> impl Responder {
    let listed = state.run(Command::List, |outcome, garden| match outcome {
        CommandOutcome::Listed(_) => Some(PlantView::list(garden.plants())),
        _ => None,
    });

    match listed {
        Ok(Some(plants)) => HttpResponse::Ok().json(ApiResponse::new(plants, garden_links())),
        Ok(None) => HttpResponse::InternalServerError().finish(),
        Err(e) => error_response(&e),
    }
}

/// POST /api/plants
/// Plants a new seed ("Plant a Seed").
#[utoipa::path(
    post,
    path = "/api/plants",
    tag = "plants",
    request_body = PlantRequest,
    responses(
        (status = 201, description = "Seed planted", body = PlantApiResponse),
        (status = 400, description = "Blank name or category", body = ErrorResponse),
    )
)]
#[post("/plants")]
pub async fn create_plant(
    state: web::Data<AppState>,
    body: web::Json<PlantRequest>,
) -> impl Responder {
    let PlantRequest { name, category } = body.into_inner();
    let planted = state.run(Command::PlantSeed { name, category }, |outcome, garden| {
        match outcome {
            CommandOutcome::Planted { index, .. } => {
                garden.get(index).map(|plant| PlantView::new(index, plant))
            }
            _ => None,
        }
    });

    match planted {
        Ok(Some(view)) => {
            let links = plant_links(view.index);
            HttpResponse::Created().json(ApiResponse::new(view, links))
        }
        Ok(None) => HttpResponse::InternalServerError().finish(),
        Err(e) => error_response(&e),
    }
}

/// GET /api/plants/{index}
/// Returns a single plant by its zero-based index.
#[utoipa::path(
    get,
    path = "/api/plants/{index}",
    tag = "plants",
    params(("index" = usize, Path, description = "Zero-based plant index")),
    responses(
        (status = 200, description = "The plant", body = PlantApiResponse),
        (status = 404, description = "No plant at this index", body = ErrorResponse),
    )
)]
#[get("/plants/{index}")]
pub async fn get_plant(state: web::Data<AppState>, path: web::Path<usize>) -> impl Responder {
    let index = path.into_inner();
    match state.with_garden(|garden| garden.get(index).map(|p| PlantView::new(index, p))) {
        Some(view) => HttpResponse::Ok().json(ApiResponse::new(view, plant_links(index))),
        None => error_response(&GardenError::PlantNotFound(index)),
    }
}

/// GET /api/plants/{index}/sprite
/// Serves the image for the plant's current category and stage.
/// A missing asset is reported but leaves the plant untouched.
#[utoipa::path(
    get,
    path = "/api/plants/{index}/sprite",
    tag = "plants",
    params(("index" = usize, Path, description = "Zero-based plant index")),
    responses(
        (status = 200, description = "PNG image of the plant (`image/png`)"),
        (status = 404, description = "Unknown plant or missing image asset", body = ErrorResponse),
    )
)]
#[get("/plants/{index}/sprite")]
pub async fn get_sprite(state: web::Data<AppState>, path: web::Path<usize>) -> impl Responder {
    let index = path.into_inner();
    let file = match state.sprite_file(index) {
        Ok(file) => file,
        Err(e) => return error_response(&e),
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => HttpResponse::Ok().content_type("image/png").body(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Missing sprite {}", file.display());
            error_response(&GardenError::AssetNotFound { path: file })
        }
        Err(e) => {
            log::error!("Failed to read sprite {}: {e}", file.display());
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Could not read image asset: {e}"),
            })
        }
    }
}
