use chrono::{DateTime, Utc};

use crate::{
    error::GardenError,
    logic::{clock::Clock, growth::GrowthConfig},
    models::{
        garden::Garden,
        plant::{Category, GrowthOutcome, Plant, PlantStatus},
    },
};

/// The actions a front-end can ask of a garden.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PlantSeed { name: String, category: String },
    WaterAll,
    AdvanceTime,
    List,
}

/// Per-plant result of an `AdvanceTime` command.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthReport {
    pub index: usize,
    pub name: String,
    pub outcome: GrowthOutcome,
}

impl GrowthReport {
    pub fn message(&self) -> String {
        self.outcome.message(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Planted { index: usize, status: PlantStatus },
    Watered { count: usize, at: DateTime<Utc> },
    Advanced(Vec<GrowthReport>),
    Listed(Vec<PlantStatus>),
}

/// Runs one command against the garden. The clock is read at most once.
pub fn execute(
    garden: &mut Garden,
    config: &GrowthConfig,
    clock: &dyn Clock,
    command: Command,
) -> Result<CommandOutcome, GardenError> {
    match command {
        Command::PlantSeed { name, category } => {
            let name = name.trim();
            let category = category.trim();
            if name.is_empty() {
                log::warn!("Rejected plant with an empty name");
                return Err(GardenError::EmptyName);
            }
            if category.is_empty() {
                log::warn!("Rejected plant '{name}' with an empty category");
                return Err(GardenError::EmptyCategory);
            }

            let plant = Plant::new(name, Category::parse(category), config, clock.now());
            let status = plant.status();
            let index = garden.add(plant);
            log::info!("Planted {} ({:?}) at #{index}", status.name, status.category);
            Ok(CommandOutcome::Planted { index, status })
        }
        Command::WaterAll => {
            let at = clock.now();
            garden.water_all(at);
            log::debug!("Watered {} plant(s)", garden.len());
            Ok(CommandOutcome::Watered {
                count: garden.len(),
                at,
            })
        }
        Command::AdvanceTime => {
            let outcomes = garden.grow_all(clock.now());
            let reports = garden
                .plants()
                .iter()
                .zip(outcomes)
                .enumerate()
                .map(|(index, (plant, outcome))| GrowthReport {
                    index,
                    name: plant.name().to_string(),
                    outcome,
                })
                .collect();
            Ok(CommandOutcome::Advanced(reports))
        }
        Command::List => Ok(CommandOutcome::Listed(garden.list().collect())),
    }
}
