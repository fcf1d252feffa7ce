use std::io;

use garden_sim::{
    config::{self, AppConfig},
    console,
    logic::clock::SystemClock,
};

fn main() -> io::Result<()> {
    config::init_logging();

    let growth = match AppConfig::from_env() {
        Ok(config) => config.growth,
        Err(e) => {
            log::warn!("Ignoring invalid configuration: {e}");
            Default::default()
        }
    };

    let stdin = io::stdin();
    console::run(stdin.lock(), io::stdout().lock(), &growth, &SystemClock)
}
