//! Tooltip content for the record under the pointer.

use crate::models::CensusRecord;

/// The three tooltip lines: state name, age, smoking rate.
///
/// Values print without trailing `.0` so integral data reads as integers.
pub fn lines(record: &CensusRecord) -> [String; 3] {
    [
        record.state.clone(),
        format!("Age: {}", fmt_num(record.age)),
        format!("Smokes: {}%", fmt_num(record.smokes)),
    ]
}

fn fmt_num(v: f64) -> String {
    if v.is_finite() {
        // `Display` for f64 already drops trailing zeros (40.0 -> "40").
        format!("{}", v)
    } else {
        "NA".to_string()
    }
}
