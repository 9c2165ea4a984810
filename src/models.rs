use serde::{Deserialize, Serialize};

/// One CSV row exactly as read: every field still text.
///
/// Deserialized by header name, so column order and extra columns in the
/// source file do not matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub state: String,
    pub abbr: String,
    pub age: String,
    pub smokes: String,
}

/// Coerced row used by this crate (one row = one state).
///
/// `abbr` stays text: it is a postal abbreviation, never a number. `age` and
/// `smokes` coerce to `f64`; a malformed field becomes `NaN` and flows
/// through to a visibly broken marker position rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CensusRecord {
    /// Full state name, e.g. "Ohio".
    pub state: String,
    /// Postal abbreviation, e.g. "OH".
    pub abbr: String,
    /// Median age in years.
    pub age: f64,
    /// Share of smokers in percent.
    pub smokes: f64,
}

impl From<RawRecord> for CensusRecord {
    fn from(r: RawRecord) -> Self {
        let age = r.age.trim().parse::<f64>().unwrap_or(f64::NAN);
        let smokes = r.smokes.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self {
            state: r.state,
            abbr: r.abbr,
            age,
            smokes,
        }
    }
}

impl CensusRecord {
    /// True when both numeric fields parsed; records failing this still get
    /// drawn, just at non-finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.age.is_finite() && self.smokes.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(state: &str, abbr: &str, age: &str, smokes: &str) -> RawRecord {
        RawRecord {
            state: state.into(),
            abbr: abbr.into(),
            age: age.into(),
            smokes: smokes.into(),
        }
    }

    #[test]
    fn coerces_numeric_fields() {
        let rec: CensusRecord = raw("Ohio", "OH", "40", "20").into();
        assert_eq!(rec.state, "Ohio");
        assert_eq!(rec.abbr, "OH");
        assert_eq!(rec.age, 40.0);
        assert_eq!(rec.smokes, 20.0);
        assert!(rec.is_finite());
    }

    #[test]
    fn abbr_is_never_coerced() {
        // "OH" is not a number; it must survive untouched as text.
        let rec: CensusRecord = raw("Ohio", "OH", "38", "21").into();
        assert_eq!(rec.abbr, "OH");
    }

    #[test]
    fn malformed_numbers_become_nan() {
        let rec: CensusRecord = raw("Nowhere", "NW", "forty", "20").into();
        assert!(rec.age.is_nan());
        assert_eq!(rec.smokes, 20.0);
        assert!(!rec.is_finite());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let rec: CensusRecord = raw("Maine", "ME", " 44 ", " 19 ").into();
        assert_eq!(rec.age, 44.0);
        assert_eq!(rec.smokes, 19.0);
    }
}
