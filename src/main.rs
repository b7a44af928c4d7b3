use flexi_logger::Logger;

use war_sim::{deal_new_game, StdoutTrace, WarConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the game trace.
    let _logger = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let config = WarConfig::default();
    let mut game = deal_new_game(&config, StdoutTrace)?;
    let report = game.play()?;

    log::info!(
        "seed {} finished in {} rounds with {} wars",
        report.seed,
        report.rounds,
        report.wars
    );
    Ok(())
}
