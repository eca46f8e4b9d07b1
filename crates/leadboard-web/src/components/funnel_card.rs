//! Funnel count card: proportional stage bar plus stage legend

use leptos::prelude::*;

use leadboard_core::format::format_currency;
use leadboard_core::models::{FunnelSummary, ACTIVE_LEADS, FUNNEL_STAGES};

/// Funnel card. The total is computed once per render; each stage's
/// share sizes its segment of the stacked bar. Stage order is funnel
/// position, never count.
#[component]
pub fn FunnelCard() -> impl IntoView {
    let summary = FunnelSummary::from_stages(&FUNNEL_STAGES);

    view! {
        <div class="card funnel-card">
            <div class="card-header">
                <h3 class="card-title">"Funnel count"</h3>
            </div>
            <div class="card-body">
                <div class="funnel-headline">
                    <span class="funnel-headline-value">{ACTIVE_LEADS.to_string()}</span>
                    <span class="funnel-headline-label">"active leads"</span>
                </div>

                <div class="funnel-bar">
                    {FUNNEL_STAGES.iter().map(|stage| view! {
                        <div
                            class="funnel-bar-segment"
                            style=format!(
                                "width: {:.4}%; background-color: {};",
                                summary.width_pct(stage),
                                stage.color
                            )
                        ></div>
                    }).collect::<Vec<_>>()}
                </div>

                <ul class="funnel-stages">
                    {FUNNEL_STAGES.iter().map(|stage| view! {
                        <li class="funnel-stage">
                            <div class="funnel-stage-name">
                                <span
                                    class="legend-swatch"
                                    style=format!("background-color: {};", stage.color)
                                ></span>
                                <span>{stage.name}</span>
                            </div>
                            <div class="funnel-stage-figures">
                                <span class="funnel-stage-count">{stage.count.to_string()}</span>
                                <span class="funnel-stage-value">{format_currency(stage.value)}</span>
                                {match stage.duration_note {
                                    Some(note) => view! {
                                        <span class="funnel-stage-duration" title=note>
                                            {stage.duration}
                                        </span>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <span class="funnel-stage-duration">{stage.duration}</span>
                                    }
                                    .into_any(),
                                }}
                            </div>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
