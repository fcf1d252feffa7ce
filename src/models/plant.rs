use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::logic::growth::{GrowthConfig, Hydration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Category {
    Flower,
    Tree,
    Vegetable,
    /// Catch-all for any category text that is not recognised.
    Other,
}

impl Category {
    /// Parses free-text category input. Unknown text falls back to `Other`.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "flower" => Category::Flower,
            "tree" => Category::Tree,
            "vegetable" => Category::Vegetable,
            _ => Category::Other,
        }
    }

    /// Lowercase key used in asset file names.
    pub fn key(self) -> &'static str {
        match self {
            Category::Flower => "flower",
            Category::Tree => "tree",
            Category::Vegetable => "vegetable",
            Category::Other => "other",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "PascalCase")]
pub enum Stage {
    Seed,
    Sprout,
    Mature,
}

impl Stage {
    pub fn index(self) -> u8 {
        match self {
            Stage::Seed => 0,
            Stage::Sprout => 1,
            Stage::Mature => 2,
        }
    }

    /// The following stage, or `None` once mature.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Seed => Some(Stage::Sprout),
            Stage::Sprout => Some(Stage::Mature),
            Stage::Mature => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Seed => "Seed",
            Stage::Sprout => "Sprout",
            Stage::Mature => "Mature Plant",
        }
    }

    fn asset_key(self) -> &'static str {
        match self {
            Stage::Seed => "seed",
            Stage::Sprout => "sprout",
            Stage::Mature => "mature",
        }
    }
}

/// Result of a single `grow` call. Exactly one applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOutcome {
    Grew(Stage),
    FullyGrown,
    NeedsWater,
    Withered,
    AlreadyWithered,
}

impl GrowthOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            GrowthOutcome::Grew(_) => "grew",
            GrowthOutcome::FullyGrown => "fullyGrown",
            GrowthOutcome::NeedsWater => "needsWater",
            GrowthOutcome::Withered => "withered",
            GrowthOutcome::AlreadyWithered => "alreadyWithered",
        }
    }

    pub fn message(&self, name: &str) -> String {
        match self {
            GrowthOutcome::Grew(stage) => {
                format!("Your {name} has grown to stage {}!", stage.index())
            }
            GrowthOutcome::FullyGrown => format!("Your {name} is fully grown."),
            GrowthOutcome::NeedsWater => format!("Your {name} needs water!"),
            GrowthOutcome::Withered => {
                format!("Oh no! Your {name} has withered due to the lack of water")
            }
            GrowthOutcome::AlreadyWithered => format!("{name} is no longer alive."),
        }
    }
}

/// What a front-end needs to draw a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub category: Category,
    pub stage: Stage,
    pub alive: bool,
}

impl Appearance {
    /// `<category>_<stage>.png`. Dead plants use `withered` as the stage.
    pub fn sprite_file_name(&self) -> String {
        let stage = if self.alive {
            self.stage.asset_key()
        } else {
            "withered"
        };
        format!("{}_{}.png", self.category.key(), stage)
    }

    /// Asset path relative to the working directory, `images/<category>_<stage>.png`.
    pub fn sprite_path(&self) -> String {
        format!("images/{}", self.sprite_file_name())
    }
}

/// Read-only projection of a plant's current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantStatus {
    pub name: String,
    pub category: Category,
    pub stage: Stage,
    pub stage_label: String,
    pub alive: bool,
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alive {
            write!(f, "{} is at stage: {}", self.name, self.stage_label)
        } else {
            write!(f, "{} is no longer alive.", self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    name: String,
    category: Category,
    threshold: Duration,
    stage: Stage,
    last_watered: DateTime<Utc>,
    alive: bool,
}

impl Plant {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        config: &GrowthConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            threshold: config.threshold_for(category),
            stage: Stage::Seed,
            last_watered: now,
            alive: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn last_watered(&self) -> DateTime<Utc> {
        self.last_watered
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Records a watering. A withered plant keeps the timestamp but stays dead.
    pub fn water(&mut self, now: DateTime<Utc>) {
        self.last_watered = now;
    }

    /// Advances the plant based on the time since it was last watered.
    pub fn grow(&mut self, now: DateTime<Utc>) -> GrowthOutcome {
        if !self.alive {
            return GrowthOutcome::AlreadyWithered;
        }

        match Hydration::assess(now - self.last_watered, self.threshold) {
            Hydration::Parched => {
                self.alive = false;
                log::warn!("{} withered after going unwatered", self.name);
                GrowthOutcome::Withered
            }
            Hydration::Thirsty => {
                log::info!("{} needs water", self.name);
                GrowthOutcome::NeedsWater
            }
            Hydration::Watered => match self.stage.next() {
                Some(next) => {
                    self.stage = next;
                    GrowthOutcome::Grew(next)
                }
                None => GrowthOutcome::FullyGrown,
            },
        }
    }

    pub fn status(&self) -> PlantStatus {
        PlantStatus {
            name: self.name.clone(),
            category: self.category,
            stage: self.stage,
            stage_label: self.stage.label().into(),
            alive: self.alive,
        }
    }

    pub fn appearance(&self) -> Appearance {
        Appearance {
            category: self.category,
            stage: self.stage,
            alive: self.alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::clock::{Clock, ManualClock};

    fn fresh(category: Category) -> (Plant, ManualClock) {
        let clock = ManualClock::default();
        let plant = Plant::new("Rose", category, &GrowthConfig::default(), clock.now());
        (plant, clock)
    }

    #[test]
    fn test_new_plant_is_alive_seed() {
        let (plant, clock) = fresh(Category::Flower);
        assert_eq!(plant.stage(), Stage::Seed);
        assert!(plant.is_alive());
        assert_eq!(plant.last_watered(), clock.now());
        assert_eq!(plant.threshold(), Duration::seconds(5));
    }

    #[test]
    fn test_threshold_follows_category() {
        assert_eq!(fresh(Category::Tree).0.threshold(), Duration::seconds(15));
        assert_eq!(fresh(Category::Vegetable).0.threshold(), Duration::seconds(10));
        assert_eq!(fresh(Category::Other).0.threshold(), Duration::seconds(10));
    }

    #[test]
    fn test_immediate_grow_moves_seed_to_sprout() {
        let (mut plant, clock) = fresh(Category::Tree);
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::Grew(Stage::Sprout));
        assert_eq!(plant.stage(), Stage::Sprout);
    }

    #[test]
    fn test_three_grows_reach_mature_then_steady() {
        let (mut plant, clock) = fresh(Category::Vegetable);
        let outcomes: Vec<_> = (0..3).map(|_| plant.grow(clock.now())).collect();
        assert_eq!(
            outcomes,
            vec![
                GrowthOutcome::Grew(Stage::Sprout),
                GrowthOutcome::Grew(Stage::Mature),
                GrowthOutcome::FullyGrown,
            ]
        );
        assert_eq!(plant.stage(), Stage::Mature);
    }

    #[test]
    fn test_neglected_plant_withers_and_stays_dead() {
        let (mut plant, clock) = fresh(Category::Flower);
        clock.advance(Duration::seconds(10) + Duration::milliseconds(1));
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::Withered);
        assert!(!plant.is_alive());

        plant.water(clock.now());
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::AlreadyWithered);
        assert!(!plant.is_alive());
        assert_eq!(plant.stage(), Stage::Seed);
    }

    #[test]
    fn test_thirsty_plant_needs_water_without_growing() {
        let (mut plant, clock) = fresh(Category::Tree);
        plant.grow(clock.now());
        clock.advance(Duration::seconds(16));
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::NeedsWater);
        assert_eq!(plant.stage(), Stage::Sprout);
        assert!(plant.is_alive());
    }

    #[test]
    fn test_exactly_at_threshold_still_grows() {
        let (mut plant, clock) = fresh(Category::Flower);
        clock.advance(Duration::seconds(5));
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::Grew(Stage::Sprout));
    }

    #[test]
    fn test_exactly_at_double_threshold_needs_water() {
        let (mut plant, clock) = fresh(Category::Flower);
        clock.advance(Duration::seconds(10));
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::NeedsWater);
        assert!(plant.is_alive());
    }

    #[test]
    fn test_watering_resets_the_clock() {
        let (mut plant, clock) = fresh(Category::Flower);
        clock.advance(Duration::seconds(8));
        plant.water(clock.now());
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::Grew(Stage::Sprout));
    }

    #[test]
    fn test_death_check_applies_to_mature_plants() {
        let (mut plant, clock) = fresh(Category::Flower);
        plant.grow(clock.now());
        plant.grow(clock.now());
        clock.advance(Duration::seconds(11));
        assert_eq!(plant.grow(clock.now()), GrowthOutcome::Withered);
        assert_eq!(plant.stage(), Stage::Mature);
    }

    #[test]
    fn test_stage_never_decreases_and_life_never_returns() {
        let (mut plant, clock) = fresh(Category::Flower);
        let steps = [0, 2, 7, 1, 0, 12, 0, 3];
        let mut prev_stage = plant.stage();
        let mut prev_alive = plant.is_alive();
        for (i, secs) in steps.iter().enumerate() {
            clock.advance(Duration::seconds(*secs));
            if i % 3 == 0 {
                plant.water(clock.now());
            }
            plant.grow(clock.now());
            assert!(plant.stage() >= prev_stage);
            assert!(prev_alive || !plant.is_alive());
            prev_stage = plant.stage();
            prev_alive = plant.is_alive();
        }
    }

    #[test]
    fn test_category_parse_is_lenient() {
        assert_eq!(Category::parse(" Flower "), Category::Flower);
        assert_eq!(Category::parse("TREE"), Category::Tree);
        assert_eq!(Category::parse("vegetable"), Category::Vegetable);
        assert_eq!(Category::parse("cactus"), Category::Other);
    }

    #[test]
    fn test_status_carries_stage_label() {
        let (mut plant, clock) = fresh(Category::Tree);
        assert_eq!(plant.status().stage_label, "Seed");
        plant.grow(clock.now());
        plant.grow(clock.now());
        let status = plant.status();
        assert_eq!(status.stage, Stage::Mature);
        assert_eq!(status.stage_label, "Mature Plant");
    }

    #[test]
    fn test_status_display() {
        let (mut plant, clock) = fresh(Category::Flower);
        assert_eq!(plant.status().to_string(), "Rose is at stage: Seed");
        plant.grow(clock.now());
        plant.grow(clock.now());
        assert_eq!(plant.status().to_string(), "Rose is at stage: Mature Plant");
        clock.advance(Duration::seconds(30));
        plant.grow(clock.now());
        assert_eq!(plant.status().to_string(), "Rose is no longer alive.");
    }

    #[test]
    fn test_sprite_path_tracks_stage_and_life() {
        let (mut plant, clock) = fresh(Category::Vegetable);
        assert_eq!(plant.appearance().sprite_path(), "images/vegetable_seed.png");
        plant.grow(clock.now());
        assert_eq!(plant.appearance().sprite_path(), "images/vegetable_sprout.png");
        clock.advance(Duration::seconds(21));
        plant.grow(clock.now());
        assert_eq!(plant.appearance().sprite_path(), "images/vegetable_withered.png");
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            GrowthOutcome::Grew(Stage::Sprout).message("Fern"),
            "Your Fern has grown to stage 1!"
        );
        assert_eq!(
            GrowthOutcome::Withered.message("Fern"),
            "Oh no! Your Fern has withered due to the lack of water"
        );
    }
}
