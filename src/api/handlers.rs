use actix_web::HttpResponse;

use crate::{error::GardenError, models::request::ErrorResponse};

pub mod garden;
pub mod plants;

/// Maps a domain error to its JSON error response.
pub fn error_response(err: &GardenError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
    };
    match err {
        GardenError::EmptyName | GardenError::EmptyCategory => {
            HttpResponse::BadRequest().json(body)
        }
        GardenError::PlantNotFound(_) | GardenError::AssetNotFound { .. } => {
            HttpResponse::NotFound().json(body)
        }
    }
}
