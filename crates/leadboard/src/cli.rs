//! Terminal tables and JSON output for the stats subcommand

use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde_json::json;

use leadboard_core::format::format_currency;
use leadboard_core::models::{
    source_data, tracking_data, FunnelSummary, SourceMetric, TimeRange, ACTIVE_LEADS,
    FUNNEL_STAGES,
};

fn base_table(header: Vec<&'static str>) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Funnel stages with computed shares
pub fn funnel_table(no_color: bool) -> Table {
    let summary = FunnelSummary::from_stages(&FUNNEL_STAGES);
    let mut table = base_table(vec!["Stage", "Leads", "Value", "Share", "Duration"]);

    for stage in &FUNNEL_STAGES {
        let share = format!("{:.1}%", summary.width_pct(stage));
        let count = Cell::new(stage.count.to_string());
        let count = if no_color {
            count
        } else {
            count.fg(Color::Cyan)
        };
        table.add_row(vec![
            Cell::new(stage.name),
            count,
            Cell::new(format_currency(stage.value)),
            Cell::new(share),
            Cell::new(stage.duration),
        ]);
    }

    table
}

/// Slice sequence for one source metric
pub fn sources_table(metric: SourceMetric, no_color: bool) -> Table {
    let mut table = base_table(vec!["Source", "Value", "Share"]);

    for slice in source_data(metric) {
        let value = Cell::new(format_currency(slice.value));
        let value = if no_color {
            value
        } else {
            value.fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(slice.name),
            value,
            Cell::new(format!("{}%", slice.percentage)),
        ]);
    }

    table
}

/// Tracking points for one time range
pub fn tracking_table(range: TimeRange) -> Table {
    let mut table = base_table(vec!["Month", "Closed won", "Closed lost"]);

    for point in tracking_data(range) {
        table.add_row(vec![
            Cell::new(point.month),
            Cell::new(point.closed_won.to_string()),
            Cell::new(point.closed_lost.to_string()),
        ]);
    }

    table
}

/// Machine-readable summary for `stats --json`
pub fn stats_json(range: TimeRange, metric: SourceMetric) -> serde_json::Value {
    let summary = FunnelSummary::from_stages(&FUNNEL_STAGES);
    json!({
        "funnel": {
            "activeLeads": ACTIVE_LEADS,
            "total": summary.total,
            "stages": FUNNEL_STAGES,
        },
        "sources": {
            "metric": metric.as_tag(),
            "slices": source_data(metric),
        },
        "tracking": {
            "range": range.as_tag(),
            "points": tracking_data(range),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_table_lists_every_stage_with_share() {
        let rendered = funnel_table(true).to_string();
        assert!(rendered.contains("Discovery"));
        assert!(rendered.contains("Closed won"));
        // 200 of 390
        assert!(rendered.contains("51.3%"));
    }

    #[test]
    fn sources_table_formats_currency() {
        let rendered = sources_table(SourceMetric::LeadsConverted, true).to_string();
        assert!(rendered.contains("Clutch"));
        assert!(rendered.contains("$1,500"));
        assert!(rendered.contains("45%"));
    }

    #[test]
    fn tracking_table_covers_selected_range() {
        let rendered = tracking_table(TimeRange::SixMonths).to_string();
        assert!(rendered.contains("Mar"));
        assert!(rendered.contains("Aug"));
        assert!(!rendered.contains("Jan"));
    }

    #[test]
    fn stats_json_shape() {
        let value = stats_json(TimeRange::OneYear, SourceMetric::TotalDeals);
        assert_eq!(value["funnel"]["total"], 390);
        assert_eq!(value["tracking"]["range"], "1y");
        assert_eq!(value["tracking"]["points"].as_array().unwrap().len(), 12);
        assert_eq!(value["sources"]["slices"].as_array().unwrap().len(), 4);
    }
}
