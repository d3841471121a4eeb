use clap::Parser;
use heatscan::image::io::{load_gray_image, save_gray_png, save_heatmap_png};
use heatscan::{
    draw_boxes, Heatmap, MeanLumaClassifier, ParameterStore, Scanner, Tier, TierRegistry,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Heatscan CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
struct TierConfig {
    min_y: usize,
    max_y: usize,
    size: usize,
    overlap: f32,
}

impl From<&TierConfig> for Tier {
    fn from(value: &TierConfig) -> Self {
        Tier::new(value.min_y, value.max_y, value.size, value.overlap)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    image_path: String,
    heatmap_path: Option<String>,
    boxes_path: Option<String>,
    luma_threshold: u8,
    parallel: bool,
    active_tier: Option<usize>,
    window_dim: Option<usize>,
    window_overlap: Option<f32>,
    tiers: Option<Vec<TierConfig>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            heatmap_path: None,
            boxes_path: None,
            luma_threshold: 128,
            parallel: false,
            active_tier: None,
            window_dim: None,
            window_overlap: None,
            tiers: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    windows: usize,
    hot_windows: usize,
    normalized: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("heatscan=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }

    let registry = match &config.tiers {
        Some(tiers) => TierRegistry::new(tiers.iter().map(Tier::from).collect()),
        None => TierRegistry::default(),
    };
    let mut store = ParameterStore::new(registry);
    if let Some(index) = config.active_tier {
        store.set_active_tier_index(index)?;
    }
    if let Some(dim) = config.window_dim {
        store.set_window_dim(dim);
    }
    if let Some(overlap) = config.window_overlap {
        store.set_window_overlap(overlap);
    }

    let image = load_gray_image(&config.image_path)?;
    let scanner = Scanner::new(MeanLumaClassifier {
        threshold: config.luma_threshold,
    })
    .with_parallel(config.parallel);

    let outcome = scanner.scan(image.view(), &store)?;

    let mut heatmap = Heatmap::zero_like(image.view());
    heatmap.add_heat(&outcome.hot_windows);
    let normalized = heatmap.normalize();

    if let Some(path) = &config.heatmap_path {
        save_heatmap_png(&heatmap, path)?;
    }
    if let Some(path) = &config.boxes_path {
        let rendered = draw_boxes(image.view(), &outcome.hot_windows, 255, 6)?;
        save_gray_png(&rendered, path)?;
    }

    let output = Output {
        windows: outcome.windows.len(),
        hot_windows: outcome.hot_windows.len(),
        normalized,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
