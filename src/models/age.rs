use serde::{Deserialize, Serialize};

/// A non-negative fraction in lowest terms.
///
/// `0/1` stands for "years exactly". The finder may also return `1/1` when
/// the elapsed part of the year is within rounding distance of a full year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Age computed for one birth date at one instant.
///
/// Built fresh per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgeResult {
    /// Completed years since birth.
    pub years: u32,
    /// Best small-fraction approximation of the elapsed part of the current year.
    pub fraction: Fraction,
    /// `years` plus the exact year fraction.
    pub decimal: f64,
    /// Whole days since the most recent birthday.
    pub days_since_birthday: u32,
}

impl AgeResult {
    /// Human-readable rendering, e.g. `"27 years"` or `"27 and 3/8 years"`.
    pub fn formatted(&self) -> String {
        if self.fraction.is_zero() {
            format!("{} years", self.years)
        } else {
            format!("{} and {} years", self.years, self.fraction)
        }
    }
}

/// Response body of `GET /api/{dob}`: the age plus its formatted string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAgeResult {
    #[serde(flatten)]
    pub age: AgeResult,
    pub formatted: String,
}

impl From<AgeResult> for FormattedAgeResult {
    fn from(age: AgeResult) -> Self {
        let formatted = age.formatted();
        FormattedAgeResult { age, formatted }
    }
}
