//! Inline stat-card datasets (reasons lost, other data)

use serde::Serialize;

/// Visual weight of a stat value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatEmphasis {
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub id: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub emphasis: StatEmphasis,
    /// Optional info tooltip; omitted from render when absent.
    pub info: Option<&'static str>,
}

const fn entry(
    id: &'static str,
    value: &'static str,
    description: &'static str,
    emphasis: StatEmphasis,
) -> StatEntry {
    StatEntry {
        id,
        value,
        description,
        emphasis,
        info: None,
    }
}

pub static REASONS_LOST: [StatEntry; 4] = [
    entry(
        "reason-1",
        "40%",
        "The proposal is unclear",
        StatEmphasis::Medium,
    ),
    entry(
        "reason-2",
        "20%",
        "However venture pursuit",
        StatEmphasis::Medium,
    ),
    entry("reason-3", "10%", "Other", StatEmphasis::Medium),
    entry(
        "reason-4",
        "30%",
        "The proposal is unclear",
        StatEmphasis::Medium,
    ),
];

pub static OTHER_DATA: [StatEntry; 3] = [
    entry("other-1", "900", "total leads count", StatEmphasis::Large),
    entry(
        "other-2",
        "12",
        "days in average to convert lead",
        StatEmphasis::Large,
    ),
    StatEntry {
        id: "other-3",
        value: "30",
        description: "inactive leads",
        emphasis: StatEmphasis::Large,
        info: Some("Information about inactive leads"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_sizes() {
        assert_eq!(REASONS_LOST.len(), 4);
        assert_eq!(OTHER_DATA.len(), 3);
    }

    #[test]
    fn only_inactive_leads_has_info() {
        assert!(REASONS_LOST.iter().all(|e| e.info.is_none()));
        let with_info: Vec<_> = OTHER_DATA.iter().filter(|e| e.info.is_some()).collect();
        assert_eq!(with_info.len(), 1);
        assert_eq!(with_info[0].id, "other-3");
    }
}
