use anyhow::Context;
use icon_generator::{generate_icons, IconConfig};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = IconConfig::default();
    generate_icons(&config.input, &config.output_dir)
        .with_context(|| format!("could not generate icons from {}", config.input.display()))?;
    Ok(())
}
