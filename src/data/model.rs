use serde::Deserialize;

use super::geo::{Crs, Point};

// ---------------------------------------------------------------------------
// PeakRow – one raw CSV row
// ---------------------------------------------------------------------------

/// A single row of the source CSV, before any geometry is attached.
///
/// The published column headers are bound to named fields exactly once,
/// here; nothing downstream touches a column by string label.
#[derive(Debug, Clone, Deserialize)]
pub struct PeakRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Height_m")]
    pub height_m: f64,
    #[serde(rename = "Height_ft")]
    pub height_ft: f64,
    /// Classification per the 2021 revision of the list. Blank cells
    /// (peaks dropped from the 2021 revision) map to `None`.
    #[serde(rename = "2021")]
    pub classification: Option<String>,
    #[serde(rename = "xcoord")]
    pub xcoord: f64,
    #[serde(rename = "ycoord")]
    pub ycoord: f64,
}

// ---------------------------------------------------------------------------
// Peak / PeakSet – rows with geometry attached
// ---------------------------------------------------------------------------

/// A peak with its planar geometry. Each peak owns its own `Point`;
/// no geometry is shared between rows.
#[derive(Debug, Clone)]
pub struct Peak {
    pub name: String,
    pub height_m: f64,
    pub height_ft: f64,
    pub classification: Option<String>,
    pub point: Point,
}

/// Peaks sharing one coordinate reference system.
#[derive(Debug, Clone)]
pub struct PeakSet {
    pub crs: Crs,
    pub peaks: Vec<Peak>,
}

impl PeakSet {
    /// Number of peaks.
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}
