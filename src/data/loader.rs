use encoding_rs::WINDOWS_1252;
use log::{debug, info};

use super::model::PeakRow;
use crate::error::AnalysisError;

/// Columns the analysis requires. Checked against the header row
/// before any record is parsed, so a schema mismatch names the
/// offending column instead of failing deep inside deserialization.
const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "Height_m",
    "Height_ft",
    "2021",
    "xcoord",
    "ycoord",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch, decode, and parse the peak dataset in one step.
pub fn load(url: &str) -> Result<Vec<PeakRow>, AnalysisError> {
    info!("downloading {url}");
    let bytes = fetch(url)?;
    debug!("fetched {} bytes", bytes.len());

    let text = decode(&bytes);
    let rows = parse(&text)?;
    info!("parsed {} peak rows", rows.len());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Download the raw CSV bytes. Any transport or HTTP-status failure is
/// a retrieval error; there is no retry.
pub fn fetch(url: &str) -> Result<Vec<u8>, AnalysisError> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| retrieval_error(url, e))?;

    let bytes = response.bytes().map_err(|e| retrieval_error(url, e))?;
    Ok(bytes.to_vec())
}

fn retrieval_error(url: &str, err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Retrieval {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode bytes as UTF-8, falling back to Windows-1252.
///
/// The published file carries Latin-1 accented peak names (Sgùrr,
/// Carn a' Choire Bhòidheach, …), so a strict UTF-8 read can fail on
/// real data.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

/// Parse CSV text into typed peak rows, validating the schema once
/// against the header row.
pub fn parse(text: &str) -> Result<Vec<PeakRow>, AnalysisError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::Schema(format!("unreadable header row: {e}")))?;
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(AnalysisError::Schema(format!("missing column '{col}'")));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<PeakRow>().enumerate() {
        let row = result.map_err(|e| AnalysisError::Schema(format!("row {row_no}: {e}")))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Height_m,Height_ft,2021,xcoord,ycoord
Ben Nevis,1345.0,4412.0,Munro,216666,771288
Carn Dearg NW,1221.0,4006.0,Munro Top,215700,771900
Knight's Peak,914.0,2999.0,,216000,770000
";

    #[test]
    fn parses_typed_rows() {
        let rows = parse(SAMPLE).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].name, "Ben Nevis");
        assert_eq!(rows[0].height_m, 1345.0);
        assert_eq!(rows[0].height_ft, 4412.0);
        assert_eq!(rows[0].classification.as_deref(), Some("Munro"));
        assert_eq!(rows[0].xcoord, 216_666.0);
        assert_eq!(rows[0].ycoord, 771_288.0);
    }

    #[test]
    fn blank_classification_is_none() {
        let rows = parse(SAMPLE).unwrap();
        assert_eq!(rows[2].classification, None);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let text = "Name,Height_m,Height_ft,xcoord,ycoord\nBen Nevis,1345.0,4412.0,216666,771288\n";
        let err = parse(text).unwrap_err();
        match err {
            AnalysisError::Schema(msg) => assert!(msg.contains("2021"), "got: {msg}"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_cell_is_a_schema_error() {
        let text = "\
Name,Height_m,Height_ft,2021,xcoord,ycoord
Ben Nevis,not-a-number,4412.0,Munro,216666,771288
";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }

    #[test]
    fn windows_1252_bytes_decode_to_accented_names() {
        // "Sgùrr" with ù as the single Latin-1 byte 0xF9.
        let bytes = b"Sg\xf9rr";
        assert_eq!(decode(bytes), "Sgùrr");
    }

    #[test]
    fn utf8_bytes_pass_through_unchanged() {
        let text = "Sgùrr Dearg";
        assert_eq!(decode(text.as_bytes()), text);
    }
}
