// ============================================================
// Layer 4 — Label Encoder
// ============================================================
// Maps suggestion strings to class indices and back.
//
//   fit            → sorted set of unique labels becomes the
//                    code → label table
//   transform      → label → code (unseen label is an error)
//   inverse_transform → code → label (out of range is an error)
//
// Codes follow the lexicographic order of the labels and are
// contiguous from 0, so the table is just a sorted Vec<String>
// and a label's code is its index.
//
// The model only ever predicts codes; this table is saved
// next to it so predictions can be turned back into text.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Sorted, unique. classes[code] == label
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build the table from every label observed.
    pub fn fit<S: AsRef<str>>(labels: &[S]) -> Self {
        let unique: BTreeSet<&str> = labels.iter().map(|l| l.as_ref()).collect();
        let classes = unique.into_iter().map(str::to_string).collect();
        Self { classes }
    }

    /// Fit on `labels` and encode the same sequence.
    pub fn fit_transform<S: AsRef<str>>(labels: &[S]) -> Result<(Self, Vec<usize>)> {
        let encoder = Self::fit(labels);
        let codes   = encoder.transform(labels)?;
        tracing::debug!(
            "Label encoder fitted: {} classes from {} labels",
            encoder.num_classes(),
            codes.len()
        );
        Ok((encoder, codes))
    }

    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels.iter().map(|l| self.encode(l.as_ref())).collect()
    }

    pub fn encode(&self, label: &str) -> Result<usize> {
        match self.classes.binary_search_by(|c| c.as_str().cmp(label)) {
            Ok(code) => Ok(code),
            Err(_)   => bail!("unseen label '{label}'"),
        }
    }

    pub fn inverse_transform(&self, codes: &[usize]) -> Result<Vec<String>> {
        codes.iter().map(|&c| self.decode(c).map(str::to_string)).collect()
    }

    pub fn decode(&self, code: usize) -> Result<&str> {
        match self.classes.get(code) {
            Some(label) => Ok(label.as_str()),
            None => bail!(
                "class code {code} out of range (encoder has {} classes)",
                self.classes.len()
            ),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sorted_label_order() {
        let labels = ["reduce lights", "bake shadows", "lod", "bake shadows"];
        let (enc, codes) = LabelEncoder::fit_transform(&labels).unwrap();

        assert_eq!(enc.classes(), &["bake shadows", "lod", "reduce lights"]);
        assert_eq!(codes, vec![2, 0, 1, 0]);
    }

    #[test]
    fn test_inverse_restores_original_labels() {
        let labels: Vec<String> = ["b", "a", "c", "a", "c", "c", "Z"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (enc, codes) = LabelEncoder::fit_transform(&labels).unwrap();
        assert_eq!(enc.inverse_transform(&codes).unwrap(), labels);
    }

    #[test]
    fn test_codes_are_contiguous_from_zero() {
        let labels = ["x", "y", "z", "y", "x"];
        let (enc, codes) = LabelEncoder::fit_transform(&labels).unwrap();
        assert_eq!(enc.num_classes(), 3);
        assert!(codes.iter().all(|&c| c < 3));
        for c in 0..3 {
            assert!(codes.contains(&c));
        }
    }

    #[test]
    fn test_unseen_label_is_rejected() {
        let enc = LabelEncoder::fit(&["a", "b"]);
        assert!(enc.transform(&["c"]).is_err());
    }

    #[test]
    fn test_out_of_range_code_is_rejected() {
        let enc = LabelEncoder::fit(&["a", "b"]);
        assert!(enc.inverse_transform(&[2]).is_err());
        assert_eq!(enc.decode(1).unwrap(), "b");
    }

    #[test]
    fn test_json_round_trip_keeps_table() {
        let enc  = LabelEncoder::fit(&["one", "two", "three"]);
        let json = serde_json::to_string(&enc).unwrap();
        let back: LabelEncoder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enc);
    }
}
