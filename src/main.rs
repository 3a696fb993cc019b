mod analysis;
mod data;
mod error;
mod render;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use error::AnalysisError;

use analysis::matcher::match_nearest;
use analysis::stats::summarize;
use data::geo::{self, BRITISH_NATIONAL_GRID};
use data::loader;
use data::partition::partition;
use render::chart::render_distance_chart;

/// Published tidytuesday dataset of Scottish mountain peaks.
const MUNROS_CSV_URL: &str =
    "https://raw.githubusercontent.com/rfordatascience/tidytuesday/main/data/2025/2025-08-19/scottish_munros.csv";

/// Where the rendered chart lands. Fixed on purpose: the analysis has
/// no flags and no configuration surface.
const OUTPUT_PATH: &str = "static/munro_top_distribution.png";

fn main() -> Result<()> {
    env_logger::init();
    run()
}

/// The whole analysis: load → project → partition → match → summarise
/// → render. Any stage failure aborts the run.
fn run() -> Result<()> {
    let rows = loader::load(MUNROS_CSV_URL).context("loading the Munro dataset")?;
    let set = geo::project(rows, BRITISH_NATIONAL_GRID);
    if set.is_empty() {
        return Err(AnalysisError::EmptyInput("dataset contains no peaks").into());
    }
    info!("projected {} peaks (EPSG:{})", set.len(), set.crs.0);

    let (munros, tops) = partition(&set, "Munro", "Munro Top");
    info!("{} Munros, {} Munro Tops", munros.len(), tops.len());

    let matches =
        match_nearest(&munros, &tops).context("pairing each Munro with its nearest Munro Top")?;
    let distances: Vec<f64> = matches.iter().map(|m| m.distance_km).collect();
    let summary = summarize(&distances).context("summarising match distances")?;
    info!(
        "nearest-Top distance: mean {:.2} km, median {:.2} km",
        summary.mean, summary.median
    );

    let output = Path::new(OUTPUT_PATH);
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    render_distance_chart(&matches, &summary, output).context("rendering the distance chart")?;
    info!("wrote {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Five peaks on the grid; hand-computed nearest-Top distances for
    // the two Munros are 1.0 km and √2 km.
    const SAMPLE: &str = "\
Name,Height_m,Height_ft,2021,xcoord,ycoord
Alpha,1345.0,4412.0,Munro,0,0
Beta,1200.0,3937.0,Munro,10000,0
Gamma,1100.0,3609.0,Munro Top,0,1000
Delta,1050.0,3444.0,Munro Top,9000,1000
Epsilon,900.0,2953.0,,5000,5000
";

    #[test]
    fn pipeline_from_csv_text_to_summary() {
        let rows = loader::parse(SAMPLE).unwrap();
        let set = geo::project(rows, BRITISH_NATIONAL_GRID);

        let (munros, tops) = partition(&set, "Munro", "Munro Top");
        assert_eq!(munros.len(), 2);
        assert_eq!(tops.len(), 2);

        let matches = match_nearest(&munros, &tops).unwrap();
        assert_eq!(matches[0].nearest.name, "Gamma");
        assert_eq!(matches[1].nearest.name, "Delta");

        let distances: Vec<f64> = matches.iter().map(|m| m.distance_km).collect();
        let summary = summarize(&distances).unwrap();

        let expected_mean = (1.0 + 2f64.sqrt()) / 2.0;
        assert!((summary.mean - expected_mean).abs() < 1e-6);
        assert!((summary.median - expected_mean).abs() < 1e-6);
    }

    #[test]
    fn pipeline_with_no_tops_fails_at_the_matcher() {
        let text = "\
Name,Height_m,Height_ft,2021,xcoord,ycoord
Alpha,1345.0,4412.0,Munro,0,0
";
        let rows = loader::parse(text).unwrap();
        let set = geo::project(rows, BRITISH_NATIONAL_GRID);
        let (munros, tops) = partition(&set, "Munro", "Munro Top");

        assert!(tops.is_empty());
        assert!(match_nearest(&munros, &tops).is_err());
    }
}
