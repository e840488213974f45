//! Aggregation periods for tracked time.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Display order of the switcher controls.
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    /// Key used by the record document.
    pub fn key(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Caption shown on the switcher control.
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }

    /// Label prefixing the previous figures on each card.
    pub fn previous_label(self) -> &'static str {
        match self {
            Period::Daily => "Yesterday",
            Period::Weekly => "Last Week",
            Period::Monthly => "Last Month",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Weekly
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::Period;

    #[test]
    fn initial_period_is_weekly() {
        assert_eq!(Period::default(), Period::Weekly);
        assert_eq!(Period::default().previous_label(), "Last Week");
    }

    #[test]
    fn previous_label_is_yesterday_only_for_daily() {
        for period in Period::ALL {
            let label = period.previous_label();
            if period == Period::Daily {
                assert_eq!(label, "Yesterday");
            } else {
                assert!(
                    label.starts_with("Last "),
                    "non-daily label should start with `Last `, got `{label}`"
                );
                assert_ne!(label, "Yesterday");
            }
        }
    }

    #[test]
    fn keys_match_document_schema() {
        let keys: Vec<&str> = Period::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, ["daily", "weekly", "monthly"]);

        let parsed: Period = serde_json::from_str("\"monthly\"").expect("period key parses");
        assert_eq!(parsed, Period::Monthly);
    }
}
