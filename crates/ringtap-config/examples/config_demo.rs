//! Configuration demo: parse a TOML document, build a delay line, and
//! simplify the delayed trace.
//!
//! Run with: RUST_LOG=debug cargo run -p ringtap-config --example config_demo

use ringtap_config::RingtapConfig;
use ringtap_core::{PathCommand, RecordedPath, SampleDelayLine};
use tracing_subscriber::EnvFilter;

const DOCUMENT: &str = r#"
[delay]
sample_rate = 8000
max_delay_ms = 10.0
delay_ms = 2.5

[simplifier]
tolerance_units = 5
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = RingtapConfig::from_toml_str(DOCUMENT)?;
    tracing::info!(
        delay_samples = config.delay.delay_samples(),
        max_delay_samples = config.delay.max_delay_samples(),
        "delay config"
    );

    let mut line: SampleDelayLine<f32> = config.delay.build()?;
    let input: Vec<f32> = (0..200)
        .map(|n| libm::sinf(core::f32::consts::TAU * 40.0 * n as f32 / 8000.0))
        .collect();
    let mut delayed = input.clone();
    line.process_block(&mut delayed);

    let mut path = RecordedPath::new();
    {
        let mut simplifier = config.simplifier.build(&mut path);
        simplifier.start_new_sub_path(0.0, delayed[0], true);
        for (i, &y) in delayed.iter().enumerate().skip(1) {
            simplifier.line_to(i as f32, y);
        }
        simplifier.finish();
    }

    println!(
        "{} samples delayed by {} -> {} path segments",
        delayed.len(),
        line.latency(),
        path.segment_count()
    );
    for command in path.commands().iter().take(8) {
        match command {
            PathCommand::MoveTo(x, y) => println!("  move {x:>6.1} {y:>7.3}"),
            PathCommand::LineTo(x, y) => println!("  line {x:>6.1} {y:>7.3}"),
        }
    }

    println!("\n{}", config.to_toml_string()?);
    Ok(())
}
