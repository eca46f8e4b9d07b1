//! Lead sources card: donut chart with metric selector and derived legend

use leptos::prelude::*;

use leadboard_core::format::format_currency;
use leadboard_core::models::{source_data, value_share, SourceMetric, SourceSlice};

const DONUT_SIZE: f64 = 200.0;
const DONUT_RADIUS: f64 = 65.0;
const DONUT_STROKE: f64 = 28.0;
/// Gap between segments, in circumference units
const SEGMENT_GAP: f64 = 4.0;

struct DonutSegment {
    color: &'static str,
    dash_array: String,
    dash_offset: String,
}

/// One stroked circle per slice; arc lengths come from actual value
/// shares, not the authored legend percentages. Zero-total input
/// degenerates to zero-length arcs.
fn donut_segments(slices: &'static [SourceSlice]) -> Vec<DonutSegment> {
    let circumference = std::f64::consts::TAU * DONUT_RADIUS;
    let mut offset = 0.0;
    slices
        .iter()
        .map(|s| {
            let span = value_share(s.value, slices) * circumference;
            let arc = (span - SEGMENT_GAP).max(0.0);
            let segment = DonutSegment {
                color: s.color,
                dash_array: format!("{arc:.3} {:.3}", circumference - arc),
                dash_offset: format!("{:.3}", -offset),
            };
            offset += span;
            segment
        })
        .collect()
}

/// Sources card. Selecting a metric swaps the full slice sequence in one
/// assignment; the donut and the legend are derived from that same
/// sequence, so they can never disagree.
///
/// The secondary time-range selector is display-only: it does not affect
/// which dataset is shown. Known limitation carried over from the
/// dashboard design.
#[component]
pub fn SourcesCard() -> impl IntoView {
    let (metric, set_metric) = signal(SourceMetric::default());
    let (window, set_window) = signal("6m".to_string());

    view! {
        <div class="card sources-card">
            <div class="card-header">
                <h3 class="card-title">"Sources"</h3>
                <select
                    class="range-select"
                    aria-label="Select period"
                    prop:value=move || window.get()
                    on:change=move |ev| set_window.set(event_target_value(&ev))
                >
                    <option value="1m">"Last month"</option>
                    <option value="6m" selected=true>"Last 6 months"</option>
                    <option value="1y">"Last 1 year"</option>
                </select>
            </div>
            <div class="card-body">
                {move || {
                    let slices = source_data(metric.get());
                    let segments = donut_segments(slices);
                    let center = DONUT_SIZE / 2.0;

                    view! {
                        <>
                        <svg
                            viewBox=format!("0 0 {DONUT_SIZE} {DONUT_SIZE}")
                            class="sources-donut"
                        >
                            {segments.into_iter().map(|seg| view! {
                                <circle
                                    cx=center.to_string()
                                    cy=center.to_string()
                                    r=DONUT_RADIUS.to_string()
                                    fill="none"
                                    stroke=seg.color
                                    stroke-width=DONUT_STROKE.to_string()
                                    stroke-dasharray=seg.dash_array
                                    stroke-dashoffset=seg.dash_offset
                                    transform=format!("rotate(-90 {center} {center})")
                                />
                            }).collect::<Vec<_>>()}
                        </svg>
                        <ul class="sources-legend">
                            {slices.iter().map(|s| view! {
                                <li class="sources-legend-item">
                                    <div class="sources-legend-name">
                                        <span
                                            class="legend-swatch"
                                            style=format!("background-color: {};", s.color)
                                        ></span>
                                        <span>{s.name}</span>
                                    </div>
                                    <div class="sources-legend-figures">
                                        <span class="sources-legend-value">{format_currency(s.value)}</span>
                                        <span class="sources-legend-share">{format!("{}%", s.percentage)}</span>
                                    </div>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                        </>
                    }
                }}

                <div class="sources-footer">
                    <div class="sources-tabs">
                        {SourceMetric::ALL_METRICS.iter().map(|m| {
                            let m = *m;
                            view! {
                                <button
                                    class=move || if metric.get() == m {
                                        "sources-tab sources-tab--active"
                                    } else {
                                        "sources-tab"
                                    }
                                    on:click=move |_| set_metric.set(m)
                                >
                                    {m.label()}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                    <span class="sources-note" title="Data derived from total leads.">
                        "from leads total"
                        <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 16v-4"/>
                            <path d="M12 8h.01"/>
                        </svg>
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadboard_core::models::sources::LEADS_CAME;

    #[test]
    fn one_segment_per_slice() {
        for metric in SourceMetric::ALL_METRICS {
            let slices = source_data(metric);
            assert_eq!(donut_segments(slices).len(), slices.len());
        }
    }

    #[test]
    fn arcs_and_gaps_cover_the_circumference() {
        let circumference = std::f64::consts::TAU * DONUT_RADIUS;
        let segments = donut_segments(&LEADS_CAME);
        let arc_sum: f64 = segments
            .iter()
            .map(|s| {
                s.dash_array
                    .split_whitespace()
                    .next()
                    .unwrap()
                    .parse::<f64>()
                    .unwrap()
            })
            .sum();
        let expected = circumference - SEGMENT_GAP * LEADS_CAME.len() as f64;
        assert!((arc_sum - expected).abs() < 1e-2);
    }

    #[test]
    fn offsets_advance_monotonically() {
        let segments = donut_segments(&LEADS_CAME);
        let offsets: Vec<f64> = segments
            .iter()
            .map(|s| s.dash_offset.parse::<f64>().unwrap())
            .collect();
        assert_eq!(offsets[0], 0.0);
        for pair in offsets.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn segments_follow_dataset_colors_in_order() {
        let segments = donut_segments(&LEADS_CAME);
        let colors: Vec<_> = segments.iter().map(|s| s.color).collect();
        let expected: Vec<_> = LEADS_CAME.iter().map(|s| s.color).collect();
        assert_eq!(colors, expected);
    }
}
