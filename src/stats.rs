use crate::models::CensusRecord;
use serde::{Deserialize, Serialize};

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub column: String,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute summaries for both numeric columns (age, smokes).
///
/// Non-finite values count as missing.
pub fn column_summaries(records: &[CensusRecord]) -> Vec<Summary> {
    vec![
        summarize("age", records.iter().map(|r| r.age)),
        summarize("smokes", records.iter().map(|r| r.smokes)),
    ]
}

fn summarize(column: &str, values: impl Iterator<Item = f64>) -> Summary {
    let mut vals: Vec<f64> = Vec::new();
    let mut missing = 0usize;
    for v in values {
        if v.is_finite() {
            vals.push(v);
        } else {
            missing += 1;
        }
    }
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let count = vals.len();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Summary {
        column: column.to_string(),
        count,
        missing,
        min,
        max,
        mean,
        median,
    }
}
