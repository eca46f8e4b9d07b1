//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use leadboard_core::SidebarState;

use crate::components::{EmptyState, Header, Sidebar};
use crate::pages::Dashboard;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Layout shell: sidebar + header + routed content area.
///
/// Owns the sidebar expand/collapse state. The sidebar width, the header
/// offset, and the content margin are all driven by the single
/// `app--collapsed` class on the shell root so the three extents can
/// never disagree.
#[component]
fn Shell() -> impl IntoView {
    let (sidebar, set_sidebar) = signal(SidebarState::default());

    // The active path is supplied to the sidebar from here; "/" is the
    // dashboard route.
    let location = use_location();
    let active_path = Signal::derive(move || {
        let path = location.pathname.get();
        if path == "/" {
            "/dashboard".to_string()
        } else {
            path
        }
    });

    view! {
        <div class="app" class=("app--collapsed", move || !sidebar.get().is_expanded())>
            <Sidebar sidebar active_path />
            <div class="shell">
                <Header sidebar set_sidebar title="Dashboard" />
                <main class="content">
                    <Routes fallback=|| "Not found">
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/dashboard") view=Dashboard />
                        <Route
                            path=path!("/leads")
                            view=|| view! {
                                <EmptyState
                                    title="Leads"
                                    description="Lead inbox with qualification workflow. Capture, triage and assign incoming leads."
                                />
                            }
                        />
                        <Route
                            path=path!("/customers")
                            view=|| view! {
                                <EmptyState
                                    title="Customers"
                                    description="Customer directory with contact details and deal history."
                                />
                            }
                        />
                        <Route
                            path=path!("/proposals")
                            view=|| view! {
                                <EmptyState
                                    title="Proposals"
                                    description="Proposal drafts, sent documents and acceptance tracking."
                                />
                            }
                        />
                        <Route
                            path=path!("/invoices")
                            view=|| view! {
                                <EmptyState
                                    title="Invoices"
                                    description="Invoice issuing and payment status."
                                />
                            }
                        />
                        <Route
                            path=path!("/items")
                            view=|| view! {
                                <EmptyState
                                    title="Items"
                                    description="Products and services catalog used in proposals and invoices."
                                />
                            }
                        />
                        <Route
                            path=path!("/mail")
                            view=|| view! {
                                <EmptyState
                                    title="Mail"
                                    description="Shared inbox connected to lead and customer records."
                                />
                            }
                        />
                        <Route
                            path=path!("/shoebox")
                            view=|| view! {
                                <EmptyState
                                    title="Shoebox"
                                    description="Unsorted documents and receipts waiting to be filed."
                                />
                            }
                        />
                        <Route
                            path=path!("/calendar")
                            view=|| view! {
                                <EmptyState
                                    title="Calendar"
                                    description="Meetings and follow-up reminders."
                                />
                            }
                        />
                        <Route
                            path=path!("/help")
                            view=|| view! {
                                <EmptyState
                                    title="Help"
                                    description="Product documentation and onboarding guides."
                                />
                            }
                        />
                        <Route
                            path=path!("/settings")
                            view=|| view! {
                                <EmptyState
                                    title="Settings"
                                    description="Workspace, pipeline and notification settings."
                                />
                            }
                        />
                        <Route
                            path=path!("/support")
                            view=|| view! {
                                <EmptyState
                                    title="Help"
                                    description="Contact support."
                                />
                            }
                        />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
