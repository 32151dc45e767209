//! Admin login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::hooks::use_auth;

pub const MISSING_FIELDS_ERROR: &str = "Preencha todos os campos.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_submitting = RwSignal::new(false);

    // Already signed in: skip the form entirely.
    let auth_for_redirect = auth.clone();
    Effect::new(move |_| {
        if !auth_for_redirect.loading.get() && auth_for_redirect.user.get().is_some() {
            navigate("/admin/dashboard", Default::default());
        }
    });

    let auth_for_submit = auth.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some(MISSING_FIELDS_ERROR.to_string()));
            return;
        }

        is_submitting.set(true);
        error.set(None);

        let auth = auth_for_submit.clone();
        spawn_local(async move {
            match auth.sign_in(&email_val, &password_val).await {
                // The redirect effect reacts to the session change.
                Ok(()) => {}
                Err(message) => {
                    error.set(Some(message));
                    is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Title text="admin — Brenda G." />
        <main class="flex-1 min-h-screen flex items-center justify-center px-4">
            <Show
                when=move || !auth.loading.get()
                fallback=|| {
                    view! {
                        <span class="font-mono text-muted animate-pulse">
                            "verificando sessão..."
                        </span>
                    }
                }
            >
                <div class="w-full max-w-md">
                    <div class="text-center mb-8">
                        <p class="font-mono text-accent text-sm mb-2">
                            <span class="text-muted">"$ "</span>
                            "sudo su"
                        </p>
                        <h1 class="font-mono text-2xl font-bold text-text">
                            "acesso administrativo"
                        </h1>
                        <p class="font-mono text-xs text-muted mt-2">
                            "área restrita — somente para a Brenda"
                        </p>
                    </div>

                    <div class="rounded-xl border border-border bg-surface p-8">
                        // Terminal-style title bar
                        <div class="flex items-center gap-2 mb-6 pb-4 border-b border-border">
                            <div class="w-2.5 h-2.5 rounded-full bg-red-500"></div>
                            <div class="w-2.5 h-2.5 rounded-full bg-yellow-500"></div>
                            <div class="w-2.5 h-2.5 rounded-full bg-green-500"></div>
                            <span class="ml-2 font-mono text-xs text-muted">
                                "admin@brendag ~ login"
                            </span>
                        </div>

                        <form on:submit=on_submit.clone() class="space-y-5">
                            <div>
                                <label class="font-mono text-xs text-accent block mb-2">
                                    "email"
                                </label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="seu@email.com"
                                    class="w-full bg-bg border border-border rounded-lg px-4 py-3 font-mono text-sm text-text placeholder:text-muted focus:outline-none focus:border-accent/50 transition-colors"
                                />
                            </div>

                            <div>
                                <label class="font-mono text-xs text-accent block mb-2">
                                    "senha"
                                </label>
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    placeholder="••••••••"
                                    class="w-full bg-bg border border-border rounded-lg px-4 py-3 font-mono text-sm text-text placeholder:text-muted focus:outline-none focus:border-accent/50 transition-colors"
                                />
                            </div>

                            <Show when=move || error.get().is_some()>
                                <div class="rounded-lg border border-red-700/50 bg-red-900/20 px-4 py-3">
                                    <p class="font-mono text-xs text-red-400">
                                        {move || format!("✗ {}", error.get().unwrap_or_default())}
                                    </p>
                                </div>
                            </Show>

                            <button
                                type="submit"
                                disabled=move || is_submitting.get()
                                class="w-full font-mono text-sm px-4 py-2 rounded-lg bg-accent text-bg hover:bg-accent-dim font-medium transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if is_submitting.get() { "autenticando..." } else { "entrar →" }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>
        </main>
    }
}
