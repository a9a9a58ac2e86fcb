use glyphclock::ClockConfig;
use glyphclock_engine::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let config = ClockConfig::from_env();
    init_logging(config.logging.clone());

    glyphclock::run(&config).inspect_err(|e| log::error!("{e:#}"))?;
    Ok(())
}
