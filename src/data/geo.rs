use super::model::{Peak, PeakRow, PeakSet};

// ---------------------------------------------------------------------------
// Coordinate reference system
// ---------------------------------------------------------------------------

/// EPSG code identifying the planar projection of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crs(pub u32);

/// British National Grid (EPSG 27700); native unit is the metre.
pub const BRITISH_NATIONAL_GRID: Crs = Crs(27700);

// ---------------------------------------------------------------------------
// Point – planar geometry
// ---------------------------------------------------------------------------

/// A planar point in the native units of its set's CRS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point, in native CRS units.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Attach a point geometry to every row.
///
/// Coordinate pairs are consumed verbatim; no reprojection or range
/// validation happens here.
pub fn project(rows: Vec<PeakRow>, crs: Crs) -> PeakSet {
    let peaks = rows
        .into_iter()
        .map(|row| Peak {
            point: Point::new(row.xcoord, row.ycoord),
            name: row.name,
            height_m: row.height_m,
            height_ft: row.height_ft,
            classification: row.classification,
        })
        .collect();

    PeakSet { crs, peaks }
}
