//! Sticky top navigation with mobile collapse

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::types::NavLink;

const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "início",
        path: "/",
    },
    NavLink {
        label: "projetos",
        path: "/projects",
    },
    NavLink {
        label: "sobre",
        path: "/about",
    },
];

/// `/` only matches exactly; everything else matches by prefix so the
/// dashboard keeps `admin` highlighted.
fn is_active(path: &str, pathname: &str) -> bool {
    if path == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(path)
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let is_open = RwSignal::new(false);
    let location = use_location();
    let pathname = move || location.pathname.get();

    let desktop_links = move || {
        let current = pathname();
        NAV_LINKS
            .iter()
            .map(|link| {
                let active = is_active(link.path, &current);
                view! {
                    <a
                        href=link.path
                        class=format!(
                            "px-4 py-2 rounded-lg font-mono text-sm transition-all duration-200 {}",
                            if active {
                                "text-accent bg-accent/10"
                            } else {
                                "text-muted hover:text-text hover:bg-surface"
                            },
                        )
                    >
                        <Show when=move || active>
                            <span class="mr-1 text-accent">"▸"</span>
                        </Show>
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let mobile_links = move || {
        let current = pathname();
        NAV_LINKS
            .iter()
            .map(|link| {
                let active = is_active(link.path, &current);
                view! {
                    <a
                        href=link.path
                        on:click=move |_| is_open.set(false)
                        class=format!(
                            "px-4 py-3 rounded-lg font-mono text-sm transition-all {}",
                            if active {
                                "text-accent bg-accent/10"
                            } else {
                                "text-muted hover:text-text hover:bg-surface"
                            },
                        )
                    >
                        <Show when=move || active>
                            <span class="mr-1">"▸"</span>
                        </Show>
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sticky top-0 z-50 border-b border-border bg-bg/80 backdrop-blur-md">
            <div class="mx-auto max-w-6xl px-4">
                <div class="flex h-16 items-center justify-between">
                    <a
                        href="/"
                        class="font-mono text-lg font-bold text-accent hover:opacity-80 transition-opacity"
                    >
                        <span class="text-muted">"~/"</span>
                        "brendag"
                    </a>

                    // Desktop links
                    <div class="hidden md:flex items-center gap-1">
                        {desktop_links}
                        <div class="mx-2 h-4 w-px bg-border"></div>
                        <a
                            href="/admin"
                            class="px-4 py-2 rounded-lg font-mono text-sm text-muted hover:text-accent transition-colors"
                        >
                            "admin"
                        </a>
                    </div>

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-muted hover:text-text transition-colors p-2"
                        on:click=move |_| is_open.update(|v| *v = !*v)
                        aria-label=move || if is_open.get() { "Fechar menu" } else { "Abrir menu" }
                    >
                        {move || {
                            if is_open.get() {
                                view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                                    </svg>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                    </svg>
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <Show when=move || is_open.get()>
                    <div class="md:hidden border-t border-border py-3 flex flex-col gap-1">
                        {mobile_links}
                        <a
                            href="/admin"
                            on:click=move |_| is_open.set(false)
                            class="px-4 py-3 rounded-lg font-mono text-sm text-muted hover:text-accent"
                        >
                            "admin"
                        </a>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_link_only_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/projects"));
    }

    #[test]
    fn section_links_match_by_prefix() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/admin", "/admin/dashboard"));
        assert!(!is_active("/about", "/projects"));
    }
}
