use actix_web::web;

use crate::api::handlers::{
    garden::{advance_time, water_plants},
    plants::{create_plant, get_plant, get_sprite, list_plants},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_plants)
            .service(create_plant)
            .service(get_plant)
            .service(get_sprite)
            .service(water_plants)
            .service(advance_time),
    );
}
