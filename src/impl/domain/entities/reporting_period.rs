use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

static QUARTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{4})\s*-?\s*Q([1-4])\s*$").expect("hardcoded regex should be valid")
});

/// The period a report covers. IFTA returns are filed quarterly, but the
/// period is informational only, so free-form labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportingPeriod {
    Quarter { year: i32, quarter: u32 },
    Other(String),
}

impl ReportingPeriod {
    pub fn parse(s: &str) -> Self {
        QUARTER_PATTERN
            .captures(s)
            .and_then(|caps| {
                let year = caps[1].parse::<i32>().ok()?;
                let quarter = caps[2].parse::<u32>().ok()?;
                Self::quarter(year, quarter)
            })
            .unwrap_or_else(|| ReportingPeriod::Other(s.trim().to_string()))
    }

    pub fn quarter(year: i32, quarter: u32) -> Option<Self> {
        (1..=4)
            .contains(&quarter)
            .then_some(ReportingPeriod::Quarter { year, quarter })
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        let (year, quarter) = self.valid_quarter()?;
        NaiveDate::from_ymd_opt(year, 3 * (quarter - 1) + 1, 1)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        let (year, quarter) = self.valid_quarter()?;
        first_of_month(year, 3 * quarter + 1)?.pred_opt()
    }

    /// Returns are due on the last day of the month following the quarter.
    pub fn filing_due_date(&self) -> Option<NaiveDate> {
        let (year, quarter) = self.valid_quarter()?;
        first_of_month(year, 3 * quarter + 2)?.pred_opt()
    }

    /// `Quarter` can be built directly with any number; only 1 to 4 have
    /// dates.
    fn valid_quarter(&self) -> Option<(i32, u32)> {
        match self {
            ReportingPeriod::Quarter { year, quarter } if (1..=4).contains(quarter) => {
                Some((*year, *quarter))
            }
            _ => None,
        }
    }
}

/// First day of the given month, where months past December roll into the
/// following year.
fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (year, month) = if month > 12 {
        (year.checked_add(1)?, month - 12)
    } else {
        (year, month)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportingPeriod::Quarter { year, quarter } => write!(f, "{}-Q{}", year, quarter),
            ReportingPeriod::Other(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for ReportingPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
