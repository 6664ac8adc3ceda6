//! Badge classification for metric changes and risk tiers.

/// Visual tone of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeTone {
    /// Classify a metric-card change badge.
    ///
    /// `change` is a signed delta string ("+5.2%", "-12.3%"); `positive`
    /// marks metrics where a drop is an improvement (open alerts, average
    /// risk score). A rise on such a metric is still shown as success when
    /// `positive` is set; otherwise a rise warrants attention and a drop is
    /// a regression.
    pub fn for_change(change: &str, positive: bool) -> Self {
        match (change.starts_with('+'), positive) {
            (true, true) => Self::Success,
            (true, false) => Self::Warning,
            (false, true) => Self::Success,
            (false, false) => Self::Error,
        }
    }
}

/// Customer or alert risk tier shown in table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_classification() {
        assert_eq!(BadgeTone::for_change("+5.2%", false), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_change("+5.2%", true), BadgeTone::Success);
        assert_eq!(BadgeTone::for_change("-12.3%", true), BadgeTone::Success);
        assert_eq!(BadgeTone::for_change("-2.4%", false), BadgeTone::Error);
    }

    #[test]
    fn test_risk_tier_labels_are_distinct() {
        let labels = [
            RiskTier::Low.label(),
            RiskTier::Medium.label(),
            RiskTier::High.label(),
        ];
        assert_eq!(labels, ["Low", "Medium", "High"]);
    }
}
