//! Single-plant console session: prompt for a name, then status, water,
//! grow and status again.

use std::io::{self, BufRead, Write};

use crate::{
    logic::{clock::Clock, growth::GrowthConfig},
    models::plant::{Category, Plant},
};

pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &GrowthConfig,
    clock: &dyn Clock,
) -> io::Result<()> {
    writeln!(output, "Welcome to the Garden Simulator!")?;
    write!(output, "Enter the name of your plant: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        log::warn!("No plant name entered");
        writeln!(output, "Please enter a name for your plant.")?;
        return Ok(());
    }

    let mut plant = Plant::new(name, Category::Other, config, clock.now());
    writeln!(output, "{}", plant.status())?;

    plant.water(clock.now());
    writeln!(output, "You watered the {}.", plant.name())?;

    let outcome = plant.grow(clock.now());
    writeln!(output, "{}", outcome.message(plant.name()))?;
    writeln!(output, "{}", plant.status())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::clock::ManualClock;

    fn session(input: &str) -> String {
        let clock = ManualClock::default();
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, &GrowthConfig::default(), &clock).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_session_transcript() {
        let out = session("Basil\n");
        assert_eq!(
            out,
            "Welcome to the Garden Simulator!\n\
             Enter the name of your plant: Basil is at stage: Seed\n\
             You watered the Basil.\n\
             Your Basil has grown to stage 1!\n\
             Basil is at stage: Sprout\n"
        );
    }

    #[test]
    fn test_empty_name_creates_nothing() {
        let out = session("   \n");
        assert!(out.ends_with("Please enter a name for your plant.\n"));
        assert!(!out.contains("watered"));
    }

    #[test]
    fn test_end_of_input_is_not_an_error() {
        let out = session("");
        assert!(out.contains("Please enter a name"));
    }
}
