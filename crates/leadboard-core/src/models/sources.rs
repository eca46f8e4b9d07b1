//! Lead source datasets behind the donut chart

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// Metric selector for the sources card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SourceMetric {
    #[serde(rename = "leadsCame")]
    LeadsCame,
    #[default]
    #[serde(rename = "leadsConverted")]
    LeadsConverted,
    #[serde(rename = "totalDeals")]
    TotalDeals,
}

impl SourceMetric {
    pub const ALL_METRICS: [SourceMetric; 3] = [
        SourceMetric::LeadsCame,
        SourceMetric::LeadsConverted,
        SourceMetric::TotalDeals,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            SourceMetric::LeadsCame => "leadsCame",
            SourceMetric::LeadsConverted => "leadsConverted",
            SourceMetric::TotalDeals => "totalDeals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceMetric::LeadsCame => "Leads Came",
            SourceMetric::LeadsConverted => "Leads Converted",
            SourceMetric::TotalDeals => "Total Deals Size",
        }
    }

    /// The UI only ever emits the three valid tags, so this is strict.
    pub fn from_tag(tag: &str) -> Option<SourceMetric> {
        match tag {
            "leadsCame" => Some(SourceMetric::LeadsCame),
            "leadsConverted" => Some(SourceMetric::LeadsConverted),
            "totalDeals" => Some(SourceMetric::TotalDeals),
            _ => None,
        }
    }
}

impl FromStr for SourceMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceMetric::from_tag(s).ok_or_else(|| CoreError::unknown_tag("source metric", s))
    }
}

/// One categorical share of a whole, rendered as a donut segment with a
/// legend entry. `percentage` is an authored constant; it is displayed
/// as-is and not validated to sum to 100 per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSlice {
    pub name: &'static str,
    pub value: u64,
    pub percentage: u8,
    pub color: &'static str,
}

const fn slice(name: &'static str, value: u64, percentage: u8, color: &'static str) -> SourceSlice {
    SourceSlice {
        name,
        value,
        percentage,
        color,
    }
}

pub static LEADS_CAME: [SourceSlice; 4] = [
    slice("Clutch", 3000, 50, "#F06548"),
    slice("Behance", 2400, 40, "#F7B84B"),
    slice("Instagram", 600, 10, "#0AB39C"),
    slice("Dribbble", 600, 10, "#299CDB"),
];

pub static LEADS_CONVERTED: [SourceSlice; 4] = [
    slice("Clutch", 1500, 45, "#F06548"),
    slice("Behance", 1000, 30, "#F7B84B"),
    slice("Instagram", 500, 15, "#0AB39C"),
    slice("Dribbble", 350, 10, "#299CDB"),
];

pub static TOTAL_DEALS: [SourceSlice; 4] = [
    slice("Clutch", 50000, 60, "#F06548"),
    slice("Behance", 20000, 25, "#F7B84B"),
    slice("Instagram", 8000, 10, "#0AB39C"),
    slice("Dribbble", 4000, 5, "#299CDB"),
];

/// Select the slice sequence for a metric. Returns the full sequence in
/// one call so consumers can never observe a mix of old and new slices;
/// the legend derives from the same return value.
pub fn source_data(metric: SourceMetric) -> &'static [SourceSlice] {
    match metric {
        SourceMetric::LeadsCame => &LEADS_CAME,
        SourceMetric::LeadsConverted => &LEADS_CONVERTED,
        SourceMetric::TotalDeals => &TOTAL_DEALS,
    }
}

/// Value share of one slice within its dataset, used for donut arc
/// geometry. Unlike the authored `percentage`, this always reflects the
/// actual values. Zero-total input yields 0.0 shares.
pub fn value_share(value: u64, slices: &[SourceSlice]) -> f64 {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metric_is_leads_converted() {
        assert_eq!(SourceMetric::default(), SourceMetric::LeadsConverted);
    }

    #[test]
    fn metric_selects_matching_slices() {
        assert_eq!(source_data(SourceMetric::LeadsCame), &LEADS_CAME);
        assert_eq!(source_data(SourceMetric::LeadsConverted), &LEADS_CONVERTED);
        assert_eq!(source_data(SourceMetric::TotalDeals), &TOTAL_DEALS);
    }

    #[test]
    fn every_dataset_has_four_slices() {
        for metric in SourceMetric::ALL_METRICS {
            assert_eq!(source_data(metric).len(), 4);
        }
    }

    #[test]
    fn legend_order_matches_dataset_order() {
        let slices = source_data(SourceMetric::TotalDeals);
        let names: Vec<_> = slices.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Clutch", "Behance", "Instagram", "Dribbble"]);
        let values: Vec<_> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, [50000, 20000, 8000, 4000]);
        let percentages: Vec<_> = slices.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, [60, 25, 10, 5]);
    }

    #[test]
    fn strict_tag_parsing() {
        assert_eq!(
            SourceMetric::from_tag("leadsCame"),
            Some(SourceMetric::LeadsCame)
        );
        assert_eq!(SourceMetric::from_tag("leads_came"), None);
        assert!("totalDeals".parse::<SourceMetric>().is_ok());
        assert!("deals".parse::<SourceMetric>().is_err());
    }

    #[test]
    fn value_shares_sum_to_one() {
        for metric in SourceMetric::ALL_METRICS {
            let slices = source_data(metric);
            let sum: f64 = slices.iter().map(|s| value_share(s.value, slices)).sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn value_share_guards_zero_total() {
        let empty: [SourceSlice; 0] = [];
        assert_eq!(value_share(10, &empty), 0.0);

        let zeroed = [slice("A", 0, 0, "#000"), slice("B", 0, 0, "#000")];
        assert_eq!(value_share(0, &zeroed), 0.0);
    }
}
