use utoipa::OpenApi;

use crate::models::{
    plant::{Category, Stage},
    request::{
        AdvanceApiResponse, AdvanceResponse, ErrorResponse, Link, PlantApiResponse,
        PlantListApiResponse, PlantRequest, PlantView, WaterApiResponse, WaterResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Simulator API",
        description = "Plant seeds, water them and advance time: each plant grows from seed to sprout to mature as long as it is watered within its category's threshold, and withers for good once neglected for twice that long.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::create_plant,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::get_sprite,
        crate::api::handlers::garden::water_plants,
        crate::api::handlers::garden::advance_time,
    ),
    components(
        schemas(
            // Enums
            Category, Stage,
            // Plants
            PlantRequest, PlantView,
            // Garden actions
            WaterResponse, AdvanceResponse,
            // Shared
            Link, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            PlantApiResponse,
            PlantListApiResponse,
            WaterApiResponse,
            AdvanceApiResponse,
        )
    ),
    tags(
        (name = "plants", description = "Plants: list, detail, planting, sprite lookup"),
        (name = "garden", description = "Garden-wide actions: water all, advance time"),
    )
)]
pub struct ApiDoc;
