//! Top header component

use leptos::prelude::*;

use leadboard_core::SidebarState;

/// Header with sidebar toggle, page title and the static "Create" menu
#[component]
pub fn Header(
    sidebar: ReadSignal<SidebarState>,
    set_sidebar: WriteSignal<SidebarState>,
    #[prop(default = "Dashboard")] title: &'static str,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="header">
            <div class="header-left">
                <button
                    class="hamburger"
                    on:click=move |_| set_sidebar.update(|s| s.toggle())
                    aria-label="Toggle sidebar"
                    aria-expanded=move || sidebar.get().is_expanded().to_string()
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <line x1="4" x2="20" y1="6" y2="6"/>
                        <line x1="4" x2="20" y1="12" y2="12"/>
                        <line x1="4" x2="20" y1="18" y2="18"/>
                    </svg>
                </button>
                <h1 class="header-title">{title}</h1>
            </div>

            <div class="header-actions">
                <button
                    class="create-button"
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                    aria-haspopup="menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    "Create"
                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="m6 9 6 6 6-6"/>
                    </svg>
                </button>
                <Show when=move || menu_open.get()>
                    <ul class="create-menu" role="menu">
                        <li role="menuitem" on:click=move |_| set_menu_open.set(false)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <circle cx="12" cy="12" r="10"/>
                                <path d="M8 12h8"/>
                                <path d="M12 8v8"/>
                            </svg>
                            "New Lead"
                        </li>
                        <li role="menuitem" on:click=move |_| set_menu_open.set(false)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>
                                <rect width="20" height="14" x="2" y="6" rx="2"/>
                            </svg>
                            "New Task"
                        </li>
                        <li role="menuitem" on:click=move |_| set_menu_open.set(false)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M21 7.5V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h3.5"/>
                                <path d="M16 2v4"/>
                                <path d="M8 2v4"/>
                                <path d="M3 10h5"/>
                                <circle cx="16" cy="16" r="6"/>
                                <path d="M16 14v2l1 1"/>
                            </svg>
                            "New Event"
                        </li>
                    </ul>
                </Show>
            </div>
        </header>
    }
}
