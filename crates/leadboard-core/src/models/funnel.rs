//! Sales funnel stages and aggregation

use serde::Serialize;

/// One step in the sales pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunnelStage {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u64,
    pub value: u64,
    pub duration: &'static str,
    pub color: &'static str,
    /// Tooltip shown on the duration cell; only one stage defines it.
    pub duration_note: Option<&'static str>,
}

const fn stage(
    id: &'static str,
    name: &'static str,
    count: u64,
    value: u64,
    duration: &'static str,
    color: &'static str,
) -> FunnelStage {
    FunnelStage {
        id,
        name,
        count,
        value,
        duration,
        color,
        duration_note: None,
    }
}

/// Stages ordered by funnel position, never sorted by count or value.
pub static FUNNEL_STAGES: [FunnelStage; 5] = [
    stage("discovery", "Discovery", 200, 200, "2 days", "#F06548"),
    stage("qualified", "Qualified", 100, 100, "2 days", "#F7B84B"),
    FunnelStage {
        id: "in-conversation",
        name: "In conversation",
        count: 50,
        value: 100,
        duration: "average time on this stage",
        color: "#5156BE",
        duration_note: Some("Average time on this stage"),
    },
    stage("negotiations", "Negotiations", 20, 50, "8 days", "#0AB39C"),
    stage("closed-won", "Closed won", 20, 50, "10 days", "#6559CC"),
];

/// Headline shown above the proportional bar. Authored constant.
pub const ACTIVE_LEADS: u64 = 600;

/// Aggregate over an ordered stage sequence: the total is computed once,
/// per-stage shares size the proportional bar segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunnelSummary {
    pub total: u64,
}

impl FunnelSummary {
    pub fn from_stages(stages: &[FunnelStage]) -> Self {
        FunnelSummary {
            total: stages.iter().map(|s| s.count).sum(),
        }
    }

    /// Proportional share of one stage. Zero-total input yields 0.0 so
    /// degenerate data renders zero-width segments instead of failing.
    pub fn share(&self, stage: &FunnelStage) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            stage.count as f64 / self.total as f64
        }
    }

    /// Share as a CSS width percentage
    pub fn width_pct(&self, stage: &FunnelStage) -> f64 {
        self.share(stage) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_counts() {
        let summary = FunnelSummary::from_stages(&FUNNEL_STAGES);
        assert_eq!(summary.total, 390);
    }

    #[test]
    fn shares_equal_count_over_total() {
        let summary = FunnelSummary::from_stages(&FUNNEL_STAGES);
        for s in &FUNNEL_STAGES {
            let expected = s.count as f64 / 390.0;
            assert!((summary.share(s) - expected).abs() < 1e-12);
        }
        let sum: f64 = FUNNEL_STAGES.iter().map(|s| summary.share(s)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        let zeroed = [
            stage("a", "A", 0, 0, "", "#000"),
            stage("b", "B", 0, 0, "", "#000"),
        ];
        let summary = FunnelSummary::from_stages(&zeroed);
        assert_eq!(summary.total, 0);
        for s in &zeroed {
            assert_eq!(summary.share(s), 0.0);
            assert_eq!(summary.width_pct(s), 0.0);
        }
    }

    #[test]
    fn stage_order_is_funnel_position() {
        assert_eq!(FUNNEL_STAGES.first().map(|s| s.id), Some("discovery"));
        assert_eq!(FUNNEL_STAGES.last().map(|s| s.id), Some("closed-won"));
        // deliberately not sorted by count: two trailing stages tie at 20
        assert_eq!(FUNNEL_STAGES[3].count, FUNNEL_STAGES[4].count);
    }

    #[test]
    fn only_one_stage_carries_a_duration_note() {
        let noted: Vec<_> = FUNNEL_STAGES
            .iter()
            .filter(|s| s.duration_note.is_some())
            .collect();
        assert_eq!(noted.len(), 1);
        assert_eq!(noted[0].id, "in-conversation");
    }
}
