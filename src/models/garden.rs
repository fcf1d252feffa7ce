use chrono::{DateTime, Utc};

use crate::models::plant::{GrowthOutcome, Plant, PlantStatus};

/// Ordered, append-only collection of plants. Plants are addressed by insertion index.
#[derive(Debug, Clone, Default)]
pub struct Garden {
    plants: Vec<Plant>,
}

impl Garden {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plant and returns its index. Duplicate names are allowed.
    pub fn add(&mut self, plant: Plant) -> usize {
        self.plants.push(plant);
        self.plants.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Plant> {
        self.plants.get(index)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Waters every plant with the same instant, in insertion order.
    pub fn water_all(&mut self, now: DateTime<Utc>) {
        for plant in &mut self.plants {
            plant.water(now);
        }
    }

    /// Grows every plant with the same instant, in insertion order.
    pub fn grow_all(&mut self, now: DateTime<Utc>) -> Vec<GrowthOutcome> {
        self.plants.iter_mut().map(|p| p.grow(now)).collect()
    }

    /// Current status of every plant. Calling again reflects later changes.
    pub fn list(&self) -> impl Iterator<Item = PlantStatus> + '_ {
        self.plants.iter().map(Plant::status)
    }
}
