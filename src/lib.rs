//! Personal portfolio - Leptos frontend
//!
//! A single-page portfolio with an admin dashboard, backed by a
//! hosted Supabase project for data and auth.

pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod terminal;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use api::SupabaseClient;
use components::{Footer, Navbar};
use config::Config;
use pages::{
    about::AboutPage,
    admin::{dashboard::DashboardPage, login::LoginPage},
    home::HomePage,
    projects::ProjectsPage,
};

/// Main application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_meta_context();

    // One gateway client for the whole app, injected via context.
    let client = SupabaseClient::new(config);
    provide_context(client);

    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-bg text-text">
                <Navbar />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/admin") view=LoginPage />
                    <Route path=path!("/admin/dashboard") view=DashboardPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

/// 404 fallback
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="flex-1 flex items-center justify-center">
            <div class="text-center py-20">
                <p class="font-mono text-6xl font-bold text-muted mb-4">"404"</p>
                <p class="font-mono text-muted mb-8">"página não encontrada"</p>
                <a
                    href="/"
                    class="font-mono text-accent text-sm hover:underline"
                >
                    "voltar para o início →"
                </a>
            </div>
        </main>
    }
}
