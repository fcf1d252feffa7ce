use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::{handlers::error_response, state::AppState},
    logic::commands::{Command, CommandOutcome},
    models::request::{
        garden_links, AdvanceApiResponse, AdvanceResponse, ApiResponse, PlantView,
        WaterApiResponse, WaterResponse,
    },
};

/// POST /api/garden/water
/// Waters every plant at the same instant ("Water Plants").
#[utoipa::path(
    post,
    path = "/api/garden/water",
    tag = "garden",
    responses(
        (status = 200, description = "All plants watered", body = WaterApiResponse),
    )
)]
#[post("/garden/water")]
pub async fn water_plants(state: web::Data<AppState>) -> impl Responder {
    let watered = state.run(Command::WaterAll, |outcome, garden| match outcome {
        CommandOutcome::Watered { count, at } => Some(WaterResponse {
            watered: count,
            watered_at: at,
            plants: PlantView::list(garden.plants()),
        }),
        _ => None,
    });

    match watered {
        Ok(Some(payload)) => HttpResponse::Ok().json(ApiResponse::new(payload, garden_links())),
        Ok(None) => HttpResponse::InternalServerError().finish(),
        Err(e) => error_response(&e),
    }
}

/// POST /api/garden/grow
/// Applies one growth step to every plant ("Advance Time").
#[utoipa::path(
    post,
    path = "/api/garden/grow",
    tag = "garden",
    responses(
        (status = 200, description = "Per-plant growth outcomes", body = AdvanceApiResponse),
    )
)]
#[post("/garden/grow")]
pub async fn advance_time(state: web::Data<AppState>) -> impl Responder {
    let advanced = state.run(Command::AdvanceTime, |outcome, garden| match outcome {
        CommandOutcome::Advanced(reports) => Some(AdvanceResponse {
            plants: reports
                .iter()
                .filter_map(|report| {
                    garden
                        .get(report.index)
                        .map(|plant| PlantView::new(report.index, plant).with_report(report))
                })
                .collect(),
        }),
        _ => None,
    });

    match advanced {
        Ok(Some(payload)) => HttpResponse::Ok().json(ApiResponse::new(payload, garden_links())),
        Ok(None) => HttpResponse::InternalServerError().finish(),
        Err(e) => error_response(&e),
    }
}
