use super::model::{Peak, PeakSet};

// ---------------------------------------------------------------------------
// Classification split
// ---------------------------------------------------------------------------

/// Split a peak set into two disjoint subsets by exact classification
/// match.
///
/// Rows whose classification matches neither label (including rows
/// with no classification at all) appear in neither output. A label
/// matching zero rows yields an empty subset; downstream stages treat
/// that as their own error condition.
pub fn partition(set: &PeakSet, label_a: &str, label_b: &str) -> (Vec<Peak>, Vec<Peak>) {
    let mut a = Vec::new();
    let mut b = Vec::new();

    for peak in &set.peaks {
        match peak.classification.as_deref() {
            Some(c) if c == label_a => a.push(peak.clone()),
            Some(c) if c == label_b => b.push(peak.clone()),
            _ => {}
        }
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geo::{Point, BRITISH_NATIONAL_GRID};

    fn peak(name: &str, class: Option<&str>) -> Peak {
        Peak {
            name: name.into(),
            height_m: 1000.0,
            height_ft: 3281.0,
            classification: class.map(str::to_string),
            point: Point::new(0.0, 0.0),
        }
    }

    fn set(peaks: Vec<Peak>) -> PeakSet {
        PeakSet {
            crs: BRITISH_NATIONAL_GRID,
            peaks,
        }
    }

    #[test]
    fn splits_by_exact_label() {
        let set = set(vec![
            peak("m1", Some("Munro")),
            peak("t1", Some("Munro Top")),
            peak("m2", Some("Munro")),
        ]);

        let (munros, tops) = partition(&set, "Munro", "Munro Top");

        assert_eq!(
            munros.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["m1", "m2"]
        );
        assert_eq!(tops.len(), 1);
        assert_eq!(tops[0].name, "t1");
    }

    #[test]
    fn rows_matching_neither_label_are_dropped() {
        let set = set(vec![
            peak("m1", Some("Munro")),
            peak("x1", Some("Deleted")),
            peak("x2", None),
        ]);

        let (munros, tops) = partition(&set, "Munro", "Munro Top");

        assert_eq!(munros.len(), 1);
        assert!(tops.is_empty());
    }

    #[test]
    fn match_is_exact_not_prefix() {
        // "Munro Top" must not land in the "Munro" subset.
        let set = set(vec![peak("t1", Some("Munro Top"))]);
        let (munros, tops) = partition(&set, "Munro", "Munro Top");
        assert!(munros.is_empty());
        assert_eq!(tops.len(), 1);
    }

    #[test]
    fn empty_set_yields_two_empty_subsets() {
        let (a, b) = partition(&set(Vec::new()), "Munro", "Munro Top");
        assert!(a.is_empty() && b.is_empty());
    }
}
