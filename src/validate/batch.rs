use std::fmt::{Display, Formatter};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::check;
use crate::common::error::{BulkError, BulkResult};
use crate::common::limits::Limits;
use crate::symbology::Symbology;

// Batch failure
//------------------------------------------------------------------------------

/// One rejected line of a batch, with its 1-based position in the input list.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub line_index: usize,
    pub value: String,
    pub error: String,
}

impl Display for BatchFailure {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Line {}: \"{}\" - {}", self.line_index, self.value, self.error)
    }
}

// Batch validator
//------------------------------------------------------------------------------

/// Validates every item against the symbology named by `symbology_id` and
/// returns all failures in input order.
///
/// Items are expected trimmed with blank lines already dropped, see [`split_lines`].
/// An empty result means the whole batch is valid. Identifiers without a rule
/// accept every item.
pub fn validate_batch<S: AsRef<str>>(items: &[S], symbology_id: &str) -> Vec<BatchFailure> {
    match symbology_id.parse::<Symbology>() {
        Ok(symbology) => validate_batch_symbology(items, symbology),
        Err(e) => {
            debug!("{e}, skipping validation of {} item(s)", items.len());
            Vec::new()
        }
    }
}

pub fn validate_batch_symbology<S: AsRef<str>>(
    items: &[S],
    symbology: Symbology,
) -> Vec<BatchFailure> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let value = item.as_ref();
            trace!("Validating line {} as {symbology:?}", i + 1);
            check(value, symbology).err().map(|e| BatchFailure {
                line_index: i + 1,
                value: value.to_string(),
                error: e.to_string(),
            })
        })
        .collect()
}

/// Splits a multi-line submission into trimmed, non-blank items.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
}

pub(crate) fn split_capped(text: &str, limits: &Limits) -> BulkResult<Vec<String>> {
    let items = split_lines(text);
    if items.is_empty() {
        return Err(BulkError::NoItems);
    }
    if items.len() > limits.max_bulk_items {
        warn!("Bulk submission of {} items exceeds cap of {}", items.len(), limits.max_bulk_items);
        return Err(BulkError::TooManyItems { max: limits.max_bulk_items, count: items.len() });
    }
    Ok(items)
}

/// Bulk generation entry point: splits `text`, enforces the item cap, then
/// validates every line against the symbology named by `symbology_id`.
///
/// Returns the cleaned items when all of them pass. Identifiers without a rule
/// still get the split and the cap, but no per-item checks.
pub fn validate_bulk(text: &str, symbology_id: &str, limits: &Limits) -> BulkResult<Vec<String>> {
    match symbology_id.parse::<Symbology>() {
        Ok(symbology) => validate_bulk_symbology(text, symbology, limits),
        Err(e) => {
            debug!("{e}, skipping per-item validation");
            split_capped(text, limits)
        }
    }
}

pub fn validate_bulk_symbology(
    text: &str,
    symbology: Symbology,
    limits: &Limits,
) -> BulkResult<Vec<String>> {
    let items = split_capped(text, limits)?;
    let failures = validate_batch_symbology(&items, symbology);
    if !failures.is_empty() {
        return Err(BulkError::InvalidItems(BatchReport {
            symbology,
            failures,
            preview: limits.report_preview,
        }));
    }
    Ok(items)
}

// Batch report
//------------------------------------------------------------------------------

/// All failures of a bulk submission.
///
/// `Display` spells out at most `preview` lines and counts the rest; `failures`
/// always holds every one of them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BatchReport {
    pub symbology: Symbology,
    pub failures: Vec<BatchFailure>,
    pub preview: usize,
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let total = self.failures.len();
        write!(f, "{total} item(s) have invalid format for {}", self.symbology.display_name())?;

        if total <= self.preview {
            f.write_str("\nInvalid items:")?;
        } else {
            write!(f, "\nFirst {} errors:", self.preview)?;
        }
        for failure in self.failures.iter().take(self.preview) {
            write!(f, "\n{failure}")?;
        }
        if total > self.preview {
            write!(f, "\n... and {} more", total - self.preview)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod batch_tests {
    use super::{
        split_lines, validate_batch, validate_batch_symbology, validate_bulk, validate_bulk_symbology,
        BatchFailure,
    };
    use crate::common::error::BulkError;
    use crate::common::limits::Limits;
    use crate::symbology::Symbology;

    #[test]
    fn test_single_failure() {
        let items = ["5901234123457", "bad", "1234567"];
        let failures = validate_batch_symbology(&items, Symbology::Ean13);
        assert_eq!(failures.len(), 2);
        assert_eq!(
            failures[0],
            BatchFailure {
                line_index: 2,
                value: "bad".to_string(),
                error: "Must be exactly 13 characters".to_string()
            }
        );
        assert_eq!(failures[1].line_index, 3);
    }

    #[test]
    fn test_all_valid() {
        let items = vec!["1234".to_string(), "00".to_string(), "123456".to_string()];
        assert!(validate_batch_symbology(&items, Symbology::Itf).is_empty());
    }

    #[test]
    fn test_returns_every_failure() {
        let items: Vec<String> = (0..10).map(|i| format!("{i}")).collect();
        let failures = validate_batch_symbology(&items, Symbology::Itf);
        assert_eq!(failures.len(), 10);
        assert!(failures.iter().enumerate().all(|(i, f)| f.line_index == i + 1));
    }

    #[test]
    fn test_split_lines() {
        let text = "  a \n\n\t\nb\r\n   \nc";
        assert_eq!(split_lines(text), vec!["a", "b", "c"]);
        assert!(split_lines(" \n \n").is_empty());
    }

    #[test]
    fn test_bulk_ok() {
        let items =
            validate_bulk_symbology("1234\n\n 5678 \n", Symbology::Itf, &Limits::default()).unwrap();
        assert_eq!(items, vec!["1234", "5678"]);
    }

    #[test]
    fn test_bulk_no_items() {
        let res = validate_bulk_symbology("\n  \n", Symbology::Itf, &Limits::default());
        assert_eq!(res, Err(BulkError::NoItems));
    }

    #[test]
    fn test_bulk_cap() {
        let text = vec!["1234"; 101].join("\n");
        let res = validate_bulk_symbology(&text, Symbology::Itf, &Limits::default());
        assert_eq!(res, Err(BulkError::TooManyItems { max: 100, count: 101 }));

        let text = vec!["1234"; 100].join("\n");
        assert!(validate_bulk_symbology(&text, Symbology::Itf, &Limits::default()).is_ok());
    }

    #[test]
    fn test_cap_checked_before_items() {
        let text = vec!["bad"; 3].join("\n");
        let limits = Limits::default().max_bulk_items(2);
        let res = validate_bulk_symbology(&text, Symbology::Ean13, &limits);
        assert_eq!(res, Err(BulkError::TooManyItems { max: 2, count: 3 }));
    }

    #[test]
    fn test_report_short() {
        let text = "5901234123457\nbad\n5901234123458";
        let Err(BulkError::InvalidItems(report)) =
            validate_bulk_symbology(text, Symbology::Ean13, &Limits::default())
        else {
            panic!("Expected invalid items");
        };
        assert_eq!(
            report.to_string(),
            "2 item(s) have invalid format for EAN-13\n\
             Invalid items:\n\
             Line 2: \"bad\" - Must be exactly 13 characters\n\
             Line 3: \"5901234123458\" - Invalid EAN-13 check digit"
        );
    }

    #[test]
    fn test_report_truncated() {
        let text = "1\n2\n3\n4\n5";
        let Err(BulkError::InvalidItems(report)) =
            validate_bulk_symbology(text, Symbology::Itf, &Limits::default())
        else {
            panic!("Expected invalid items");
        };
        assert_eq!(report.failures.len(), 5);
        assert_eq!(
            report.to_string(),
            "5 item(s) have invalid format for ITF\n\
             First 3 errors:\n\
             Line 1: \"1\" - Must be 2-255 characters\n\
             Line 2: \"2\" - Must be 2-255 characters\n\
             Line 3: \"3\" - Must be 2-255 characters\n\
             ... and 2 more"
        );
    }

    #[test]
    fn test_batch_by_id() {
        let items = ["5901234123457", "bad", "1234567"];
        let failures = validate_batch(&items, "EAN13");
        assert_eq!(failures, validate_batch_symbology(&items, Symbology::Ean13));
        assert_eq!(failures[0].line_index, 2);
        assert_eq!(failures[0].value, "bad");
    }

    #[test]
    fn test_batch_unknown_id() {
        assert!(validate_batch(&["x", "bad"], "DATAMATRIX").is_empty());
        assert!(validate_batch(&["bad"], "ean13").is_empty());
    }

    #[test]
    fn test_bulk_by_id() {
        let limits = Limits::default();
        assert_eq!(validate_bulk("1234\n5678", "ITF", &limits).unwrap(), vec!["1234", "5678"]);
        assert!(matches!(
            validate_bulk("123", "ITF", &limits),
            Err(BulkError::InvalidItems(report)) if report.symbology == Symbology::Itf
        ));
    }

    #[test]
    fn test_bulk_unknown_id() {
        let limits = Limits::default();
        assert_eq!(validate_bulk("x\n\n bad ", "DATAMATRIX", &limits).unwrap(), vec!["x", "bad"]);
        assert_eq!(validate_bulk(" \n", "DATAMATRIX", &limits), Err(BulkError::NoItems));

        let text = vec!["x"; 101].join("\n");
        assert_eq!(
            validate_bulk(&text, "DATAMATRIX", &limits),
            Err(BulkError::TooManyItems { max: 100, count: 101 })
        );
    }

    #[test]
    fn test_failure_serialized_shape() {
        let failures = validate_batch(&["bad"], "EAN13");
        let json = serde_json::to_string(&failures).unwrap();
        assert_eq!(
            json,
            r#"[{"line_index":1,"value":"bad","error":"Must be exactly 13 characters"}]"#
        );
    }
}
