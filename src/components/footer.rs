//! Page footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-8 px-4">
            <div class="mx-auto max-w-6xl flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="font-mono text-xs text-muted">
                    <span class="text-accent">"$ "</span>
                    "feito com ☕ por Brenda G. © 2025"
                </p>
                <div class="flex items-center gap-4">
                    <a
                        href="https://github.com/seu-usuario"
                        target="_blank"
                        rel="noreferrer"
                        class="font-mono text-xs text-muted hover:text-accent transition-colors"
                    >
                        "github"
                    </a>
                    <a
                        href="https://linkedin.com/in/seu-usuario"
                        target="_blank"
                        rel="noreferrer"
                        class="font-mono text-xs text-muted hover:text-accent transition-colors"
                    >
                        "linkedin"
                    </a>
                    <a
                        href="mailto:seu@email.com"
                        class="font-mono text-xs text-muted hover:text-accent transition-colors"
                    >
                        "email"
                    </a>
                </div>
            </div>
        </footer>
    }
}
