use std::collections::HashMap;

use actix_web::http::Method;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::{
    logic::commands::GrowthReport,
    models::plant::{Category, Plant, Stage},
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Links shared by every response that returns the whole garden.
pub fn garden_links() -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link("/api/plants", Method::GET));
    links.insert("plant".into(), link("/api/plants", Method::POST));
    links.insert("water".into(), link("/api/garden/water", Method::POST));
    links.insert("grow".into(), link("/api/garden/grow", Method::POST));
    links
}

pub fn plant_links(index: usize) -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link(format!("/api/plants/{index}"), Method::GET));
    links.insert(
        "sprite".into(),
        link(format!("/api/plants/{index}/sprite"), Method::GET),
    );
    links.insert("collection".into(), link("/api/plants", Method::GET));
    links
}

/// Generic response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    PlantApiResponse = ApiResponse<PlantView>,
    PlantListApiResponse = ApiResponse<Vec<PlantView>>,
    WaterApiResponse = ApiResponse<WaterResponse>,
    AdvanceApiResponse = ApiResponse<AdvanceResponse>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /api/plants`. Both fields are free text and must not be blank.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantRequest {
    #[schema(example = "Sunflower")]
    pub name: String,
    /// `Flower`, `Tree` or `Vegetable` (case-insensitive); anything else is `Other`.
    #[schema(example = "flower")]
    pub category: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantView {
    pub index: usize,
    pub name: String,
    pub category: Category,
    pub stage: Stage,
    pub stage_index: u8,
    pub stage_label: String,
    pub alive: bool,
    /// Human-readable status line.
    pub status: String,
    /// Asset path of the image representing the current state.
    pub sprite: String,
    pub last_watered: DateTime<Utc>,
    pub threshold_secs: i64,
    /// Set only in "advance time" responses: one of `grew`, `fullyGrown`,
    /// `needsWater`, `withered`, `alreadyWithered`.
    pub outcome: Option<String>,
    pub message: Option<String>,
}

impl PlantView {
    pub fn new(index: usize, plant: &Plant) -> Self {
        let status = plant.status();
        Self {
            index,
            name: status.name.clone(),
            category: status.category,
            stage: status.stage,
            stage_index: status.stage.index(),
            stage_label: status.stage_label.clone(),
            alive: status.alive,
            status: status.to_string(),
            sprite: plant.appearance().sprite_path(),
            last_watered: plant.last_watered(),
            threshold_secs: plant.threshold().num_seconds(),
            outcome: None,
            message: None,
        }
    }

    pub fn with_report(mut self, report: &GrowthReport) -> Self {
        self.outcome = Some(report.outcome.kind().into());
        self.message = Some(report.message());
        self
    }

    pub fn list(plants: &[Plant]) -> Vec<PlantView> {
        plants
            .iter()
            .enumerate()
            .map(|(index, plant)| PlantView::new(index, plant))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaterResponse {
    pub watered: usize,
    pub watered_at: DateTime<Utc>,
    pub plants: Vec<PlantView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    pub plants: Vec<PlantView>,
}
