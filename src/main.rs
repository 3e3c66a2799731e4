use anyhow::Result;
use raw2coe::{config::Config, constants::USAGE, pipeline::Pipeline};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(config) = Config::from_cli() else {
        println!("{USAGE}");
        return Ok(());
    };

    // Read everything first so a bad input never touches the output path.
    let mut pipeline = Pipeline::new();
    pipeline.read_input(&config.input)?;
    println!("input length is {}", pipeline.input_len());

    pipeline.write_output(&config.output)?;
    Ok(())
}
