use std::path::Path;

use plotters::prelude::*;

use crate::analysis::density::kernel_density;
use crate::analysis::matcher::NearestMatch;
use crate::analysis::stats::DistanceSummary;
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Chart geometry and series colors
// ---------------------------------------------------------------------------

const WIDTH: u32 = 700;
const HEIGHT: u32 = 500;

const HISTOGRAM_BLUE: RGBColor = RGBColor(0x34, 0xad, 0xfa);
const DENSITY_ORANGE: RGBColor = RGBColor(0xfa, 0x81, 0x34);

/// Grid resolution of the density curve across the x-domain.
const DENSITY_GRID_POINTS: usize = 200;

/// The x-axis runs from 0 to the maximum distance plus this margin.
const X_AXIS_MARGIN_KM: f64 = 5.0;

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One histogram bin over [lo, hi); the last bin also takes values
/// landing exactly on the upper edge.
struct Bin {
    lo: f64,
    hi: f64,
    count: usize,
}

/// Sturges' rule: ⌈log2 n⌉ + 1 bins.
fn sturges_bin_count(n: usize) -> usize {
    ((n as f64).log2().ceil() as usize + 1).max(1)
}

fn bin_distances(distances: &[f64], x_max: f64) -> Vec<Bin> {
    let bin_count = sturges_bin_count(distances.len());
    let width = x_max / bin_count as f64;

    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|i| Bin {
            lo: i as f64 * width,
            hi: (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &d in distances {
        let idx = ((d / width) as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    bins
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the distance distribution to `path` as a 700×500 PNG.
///
/// Count histogram on the primary y-axis, Gaussian density curve on a
/// secondary y-axis sharing the x-domain, dashed vertical line at the
/// mean and a finely-dashed one at the median, both legended. An
/// existing file at `path` is overwritten.
pub fn render_distance_chart(
    matches: &[NearestMatch],
    summary: &DistanceSummary,
    path: &Path,
) -> Result<(), AnalysisError> {
    if matches.is_empty() {
        return Err(AnalysisError::EmptyInput("no matches to plot"));
    }

    // The bitmap backend saves on drop and panics if that fails, so an
    // unwritable path has to be rejected before any drawing starts.
    std::fs::File::create(path).map_err(|e| write_error(path, e))?;

    let distances: Vec<f64> = matches.iter().map(|m| m.distance_km).collect();
    let x_max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max) + X_AXIS_MARGIN_KM;

    let bins = bin_distances(&distances, x_max);
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(1) as f64 * 1.05;

    let density = kernel_density(&distances, (0.0, x_max), DENSITY_GRID_POINTS)?;
    let density_max = density.iter().map(|&(_, d)| d).fold(0.0, f64::max) * 1.05;

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| write_error(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .right_y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| write_error(path, e))?
        .set_secondary_coord(0.0..x_max, 0.0..density_max);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Distance between Munro and Nearest Munro Top (km)")
        .y_desc("Count")
        .draw()
        .map_err(|e| write_error(path, e))?;

    chart
        .configure_secondary_axes()
        .y_desc("Density")
        .draw()
        .map_err(|e| write_error(path, e))?;

    // Histogram bars, 1px gap between neighbours.
    chart
        .draw_series(bins.iter().map(|bin| {
            let mut bar = Rectangle::new(
                [(bin.lo, 0.0), (bin.hi, bin.count as f64)],
                HISTOGRAM_BLUE.filled(),
            );
            bar.set_margin(0, 0, 1, 1);
            bar
        }))
        .map_err(|e| write_error(path, e))?;

    // Density curve on the secondary axis.
    chart
        .draw_secondary_series(LineSeries::new(density, DENSITY_ORANGE.stroke_width(2)))
        .map_err(|e| write_error(path, e))?;

    // Mean and median reference lines, distinguished by dash length.
    chart
        .draw_series(DashedLineSeries::new(
            vec![(summary.mean, 0.0), (summary.mean, y_max)],
            8,
            5,
            BLACK.stroke_width(1),
        ))
        .map_err(|e| write_error(path, e))?
        .label("Mean")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLACK.stroke_width(1)));

    chart
        .draw_series(DashedLineSeries::new(
            vec![(summary.median, 0.0), (summary.median, y_max)],
            2,
            4,
            BLACK.stroke_width(1),
        ))
        .map_err(|e| write_error(path, e))?
        .label("Median")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLACK.stroke_width(1)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| write_error(path, e))?;

    root.present().map_err(|e| write_error(path, e))?;
    Ok(())
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Write {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
