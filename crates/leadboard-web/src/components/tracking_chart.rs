//! Leads tracking chart: dual-series SVG line/area chart with a
//! time-range selector

use leptos::prelude::*;

use leadboard_core::models::{
    tracking_data, TimeRange, TrackingPoint, TOTAL_CLOSED, TOTAL_LOST,
};

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;

const WON_COLOR: &str = "#0AB39C";
const LOST_COLOR: &str = "#F06548";

fn inner_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn inner_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Highest count across both series, clamped to 1 so scaling never
/// divides by zero.
fn max_count(data: &[TrackingPoint]) -> u32 {
    data.iter()
        .map(|p| p.closed_won.max(p.closed_lost))
        .max()
        .unwrap_or(1)
        .max(1)
}

fn x_scale(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return MARGIN_LEFT;
    }
    MARGIN_LEFT + (index as f64 / (len - 1) as f64) * inner_width()
}

fn y_scale(value: u32, max: u32) -> f64 {
    MARGIN_TOP + inner_height() - (value as f64 / max as f64) * inner_height()
}

/// Polyline path through one series
fn series_path(values: &[u32], max: u32) -> String {
    let mut path = String::new();
    for (i, &value) in values.iter().enumerate() {
        let x = x_scale(i, values.len());
        let y = y_scale(value, max);
        if i == 0 {
            path.push_str(&format!("M {x:.2} {y:.2}"));
        } else {
            path.push_str(&format!(" L {x:.2} {y:.2}"));
        }
    }
    path
}

/// Series path closed down to the baseline for the area fill
fn area_path(values: &[u32], max: u32) -> String {
    if values.is_empty() {
        return String::new();
    }
    let baseline = MARGIN_TOP + inner_height();
    let first_x = x_scale(0, values.len());
    let last_x = x_scale(values.len() - 1, values.len());
    format!(
        "{} L {last_x:.2} {baseline:.2} L {first_x:.2} {baseline:.2} Z",
        series_path(values, max)
    )
}

/// Leads tracking card: selecting a range swaps the whole dataset and
/// re-renders the chart. An unrecognized tag from the control falls back
/// to the all-time dataset.
#[component]
pub fn TrackingChart() -> impl IntoView {
    let (range, set_range) = signal(TimeRange::default());

    view! {
        <div class="card tracking-card">
            <div class="card-header">
                <div>
                    <h3 class="card-title">"Leads tracking"</h3>
                    <div class="tracking-totals">
                        <span class="tracking-total">{TOTAL_CLOSED.to_string()}</span>
                        <span class="tracking-total-label">"total closed"</span>
                        <span class="tracking-total">{TOTAL_LOST.to_string()}</span>
                        <span class="tracking-total-label">"total lost"</span>
                    </div>
                </div>
                <select
                    class="range-select"
                    aria-label="Select period"
                    prop:value=move || range.get().as_tag()
                    on:change=move |ev| set_range.set(TimeRange::from_tag(&event_target_value(&ev)))
                >
                    {TimeRange::ALL_RANGES
                        .iter()
                        .map(|r| view! { <option value=r.as_tag()>{r.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="card-body">
                {move || {
                    let data = tracking_data(range.get());
                    let max = max_count(data);
                    let won: Vec<u32> = data.iter().map(|p| p.closed_won).collect();
                    let lost: Vec<u32> = data.iter().map(|p| p.closed_lost).collect();
                    let len = data.len();

                    let y_ticks: Vec<_> = (0..=3)
                        .map(|i| {
                            let value = max * i / 3;
                            (y_scale(value, max), value.to_string())
                        })
                        .collect();

                    let x_ticks: Vec<_> = data
                        .iter()
                        .enumerate()
                        .map(|(i, p)| (x_scale(i, len), p.month))
                        .collect();

                    view! {
                        <svg
                            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                            class="tracking-chart"
                            style="width: 100%; height: auto;"
                        >
                            // Axes
                            <line
                                x1=MARGIN_LEFT.to_string()
                                y1=MARGIN_TOP.to_string()
                                x2=MARGIN_LEFT.to_string()
                                y2=(CHART_HEIGHT - MARGIN_BOTTOM).to_string()
                                stroke="var(--border-color)"
                                stroke-width="1"
                            />
                            <line
                                x1=MARGIN_LEFT.to_string()
                                y1=(CHART_HEIGHT - MARGIN_BOTTOM).to_string()
                                x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                                y2=(CHART_HEIGHT - MARGIN_BOTTOM).to_string()
                                stroke="var(--border-color)"
                                stroke-width="1"
                            />

                            // Y-axis ticks and grid lines
                            {y_ticks.into_iter().map(|(y, label)| view! {
                                <>
                                <line
                                    x1=MARGIN_LEFT.to_string()
                                    y1=y.to_string()
                                    x2=(CHART_WIDTH - MARGIN_RIGHT).to_string()
                                    y2=y.to_string()
                                    stroke="var(--border-color)"
                                    stroke-width="1"
                                    stroke-dasharray="3,3"
                                />
                                <text
                                    x=(MARGIN_LEFT - 8.0).to_string()
                                    y=y.to_string()
                                    text-anchor="end"
                                    alignment-baseline="middle"
                                    fill="var(--text-secondary)"
                                    font-size="12"
                                >
                                    {label}
                                </text>
                                </>
                            }).collect::<Vec<_>>()}

                            // X-axis month labels
                            {x_ticks.into_iter().map(|(x, label)| view! {
                                <text
                                    x=x.to_string()
                                    y=(CHART_HEIGHT - MARGIN_BOTTOM + 20.0).to_string()
                                    text-anchor="middle"
                                    fill="var(--text-secondary)"
                                    font-size="12"
                                >
                                    {label}
                                </text>
                            }).collect::<Vec<_>>()}

                            // Area fills under both series
                            <path d=area_path(&won, max) fill=WON_COLOR fill-opacity="0.15" stroke="none"/>
                            <path d=area_path(&lost, max) fill=LOST_COLOR fill-opacity="0.15" stroke="none"/>

                            // Series lines
                            <path d=series_path(&won, max) fill="none" stroke=WON_COLOR stroke-width="2.5"/>
                            <path d=series_path(&lost, max) fill="none" stroke=LOST_COLOR stroke-width="2.5"/>

                            // Data point dots
                            {data.iter().enumerate().map(|(i, p)| view! {
                                <>
                                <circle
                                    cx=x_scale(i, len).to_string()
                                    cy=y_scale(p.closed_won, max).to_string()
                                    r="4"
                                    fill=WON_COLOR
                                />
                                <circle
                                    cx=x_scale(i, len).to_string()
                                    cy=y_scale(p.closed_lost, max).to_string()
                                    r="4"
                                    fill=LOST_COLOR
                                />
                                </>
                            }).collect::<Vec<_>>()}

                            // Legend
                            <g transform="translate(100, 16)">
                                <rect x="0" y="0" width="10" height="10" fill=WON_COLOR />
                                <text x="16" y="9" fill="var(--text-secondary)" font-size="12">"Closed won"</text>
                                <rect x="110" y="0" width="10" height="10" fill=LOST_COLOR />
                                <text x="126" y="9" fill="var(--text-secondary)" font-size="12">"Closed lost"</text>
                            </g>
                        </svg>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_count_spans_both_series() {
        let data = tracking_data(TimeRange::All);
        // May closed_won 95 tops both series in the all-time set
        assert_eq!(max_count(data), 95);
        let six = tracking_data(TimeRange::SixMonths);
        assert_eq!(max_count(six), 95);
    }

    #[test]
    fn max_count_guards_empty_and_zero() {
        assert_eq!(max_count(&[]), 1);
        let zero = [TrackingPoint {
            month: "Jan",
            closed_won: 0,
            closed_lost: 0,
        }];
        assert_eq!(max_count(&zero), 1);
    }

    #[test]
    fn series_path_has_one_segment_per_point() {
        let values = [10, 20, 30, 40];
        let path = series_path(&values, 40);
        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" L ").count(), values.len() - 1);
    }

    #[test]
    fn empty_series_yields_empty_paths() {
        assert_eq!(series_path(&[], 1), "");
        assert_eq!(area_path(&[], 1), "");
    }

    #[test]
    fn area_path_closes_to_baseline() {
        let path = area_path(&[5, 10], 10);
        assert!(path.ends_with('Z'));
        assert!(path.contains(&format!("{:.2}", MARGIN_TOP + inner_height())));
    }

    #[test]
    fn scales_pin_extremes_to_chart_edges() {
        assert_eq!(x_scale(0, 6), MARGIN_LEFT);
        assert!((x_scale(5, 6) - (CHART_WIDTH - MARGIN_RIGHT)).abs() < 1e-9);
        assert!((y_scale(0, 100) - (CHART_HEIGHT - MARGIN_BOTTOM)).abs() < 1e-9);
        assert!((y_scale(100, 100) - MARGIN_TOP).abs() < 1e-9);
        // single-point dataset degenerates to the left edge, not NaN
        assert_eq!(x_scale(0, 1), MARGIN_LEFT);
    }
}
