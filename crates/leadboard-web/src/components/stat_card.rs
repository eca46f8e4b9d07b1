//! Stat card component for inline metrics

use leptos::prelude::*;

use leadboard_core::models::{StatEmphasis, StatEntry};

fn emphasis_class(emphasis: StatEmphasis) -> &'static str {
    match emphasis {
        StatEmphasis::Medium => "stat-value stat-value--md",
        StatEmphasis::Large => "stat-value stat-value--lg",
    }
}

/// StatCard - a single labeled metric. Pure presentational; the info
/// tooltip is omitted entirely when the entry carries none.
#[component]
pub fn StatCard(entry: &'static StatEntry) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class=emphasis_class(entry.emphasis)>{entry.value}</p>
            <div class="stat-description">
                {entry.description}
                {entry.info.map(|text| view! {
                    <span class="stat-info" title=text>
                        <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 16v-4"/>
                            <path d="M12 8h.01"/>
                        </svg>
                    </span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_maps_to_distinct_classes() {
        assert_ne!(
            emphasis_class(StatEmphasis::Medium),
            emphasis_class(StatEmphasis::Large)
        );
        assert!(emphasis_class(StatEmphasis::Medium).contains("stat-value"));
    }
}
