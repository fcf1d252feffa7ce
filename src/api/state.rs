use std::{
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use crate::{
    config::AppConfig,
    error::GardenError,
    logic::{
        clock::Clock,
        commands::{self, Command, CommandOutcome},
        growth::GrowthConfig,
    },
    models::garden::Garden,
};

/// Shared server state. One garden per process, guarded for the length of a single command.
pub struct AppState {
    garden: Mutex<Garden>,
    growth: GrowthConfig,
    clock: Arc<dyn Clock>,
    images_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            garden: Mutex::new(Garden::new()),
            growth: config.growth.clone(),
            clock,
            images_dir: config.images_dir.clone(),
        }
    }

    /// Executes `command` and renders the result with `view` under the same lock.
    pub fn run<T>(
        &self,
        command: Command,
        view: impl FnOnce(CommandOutcome, &Garden) -> T,
    ) -> Result<T, GardenError> {
        let mut garden = self.garden.lock().unwrap_or_else(PoisonError::into_inner);
        let outcome = commands::execute(&mut garden, &self.growth, self.clock.as_ref(), command)?;
        Ok(view(outcome, &garden))
    }

    pub fn with_garden<T>(&self, f: impl FnOnce(&Garden) -> T) -> T {
        let garden = self.garden.lock().unwrap_or_else(PoisonError::into_inner);
        f(&garden)
    }

    /// On-disk location of the sprite for the plant at `index`.
    pub fn sprite_file(&self, index: usize) -> Result<PathBuf, GardenError> {
        self.with_garden(|garden| {
            garden
                .get(index)
                .map(|plant| self.images_dir.join(plant.appearance().sprite_file_name()))
                .ok_or(GardenError::PlantNotFound(index))
        })
    }
}
