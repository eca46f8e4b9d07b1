//! Dashboard page: tabbed composition of the stats grid

use leptos::prelude::*;

use leadboard_core::models::{StatEntry, OTHER_DATA, REASONS_LOST};
use leadboard_core::DashboardTab;

use crate::components::{FunnelCard, SourcesCard, StatCard, TrackingChart};

/// Dashboard page with the Sales/Leads tab pair. Switching tabs is a
/// pure display swap; the grid re-reads the same static datasets.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(DashboardTab::default());

    view! {
        <div class="page dashboard-page">
            <div class="dashboard-tabs">
                {DashboardTab::ALL_TABS.iter().map(|t| {
                    let t = *t;
                    view! {
                        <button
                            class=move || if active_tab.get() == t {
                                "dashboard-tab dashboard-tab--active"
                            } else {
                                "dashboard-tab"
                            }
                            on:click=move |_| set_active_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            {move || match active_tab.get() {
                DashboardTab::Sales => view! { <SalesPanel /> }.into_any(),
                DashboardTab::Leads => view! { <StatsGrid /> }.into_any(),
            }}
        </div>
    }
}

/// Placeholder panel for the Sales tab
#[component]
fn SalesPanel() -> impl IntoView {
    view! {
        <div class="card sales-panel">
            <div class="card-header">
                <h3 class="card-title">"Sales Overview"</h3>
                <p class="card-subtitle">"Detailed sales performance metrics and reports."</p>
            </div>
            <div class="card-body">
                <p class="hint">
                    "Sales-specific statistics, charts, and key performance indicators (KPIs) \
                     related to revenue, closed deals, and sales team performance will be \
                     displayed in this section. Currently, this content is a placeholder."
                </p>
            </div>
        </div>
    }
}

/// The stats grid shown on the Leads tab
#[component]
fn StatsGrid() -> impl IntoView {
    view! {
        <div class="stats-grid">
            <FunnelCard />
            <SourcesCard />
            <div class="stats-grid-wide">
                <TrackingChart />
            </div>
            <ReasonsLostCard />
            <OtherDataCard />
        </div>
    }
}

fn stat_cards(entries: &'static [StatEntry]) -> Vec<impl IntoView> {
    entries
        .iter()
        .map(|entry| view! { <StatCard entry /> })
        .collect()
}

#[component]
fn ReasonsLostCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Reasons of leads lost"</h3>
            </div>
            <div class="card-body stat-card-grid stat-card-grid--two">
                {stat_cards(&REASONS_LOST)}
            </div>
        </div>
    }
}

#[component]
fn OtherDataCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Other data"</h3>
            </div>
            <div class="card-body stat-card-grid stat-card-grid--three">
                {stat_cards(&OTHER_DATA)}
            </div>
        </div>
    }
}
