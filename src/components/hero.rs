//! Landing hero with the rotating typed role line

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ROLES: [&str; 4] = [
    "DevOps Engineer",
    "Software Engineer",
    "Automation Developer",
    "CI/CD Enthusiast",
];

const TYPE_DELAY_MS: u32 = 80;
const ERASE_DELAY_MS: u32 = 40;
const HOLD_DELAY_MS: u32 = 2000;

#[component]
pub fn Hero() -> impl IntoView {
    let display = RwSignal::new(String::new());

    // The typing loop runs detached; the flag stops it after teardown
    // so it never writes to a disposed signal.
    let stopped = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let stopped = Arc::clone(&stopped);
        move || stopped.store(true, Ordering::Relaxed)
    });

    spawn_local(async move {
        let mut role = 0usize;
        'outer: loop {
            let text = ROLES[role];
            let chars: Vec<char> = text.chars().collect();

            for shown in 1..=chars.len() {
                TimeoutFuture::new(TYPE_DELAY_MS).await;
                if stopped.load(Ordering::Relaxed) {
                    break 'outer;
                }
                display.try_set(chars[..shown].iter().collect());
            }

            TimeoutFuture::new(HOLD_DELAY_MS).await;
            if stopped.load(Ordering::Relaxed) {
                break;
            }

            for shown in (0..chars.len()).rev() {
                TimeoutFuture::new(ERASE_DELAY_MS).await;
                if stopped.load(Ordering::Relaxed) {
                    break 'outer;
                }
                display.try_set(chars[..shown].iter().collect());
            }

            role = (role + 1) % ROLES.len();
        }
    });

    view! {
        <section class="min-h-[90vh] flex items-center">
            <div class="mx-auto max-w-6xl px-4 py-20 w-full">
                <div class="max-w-3xl">
                    <p class="font-mono text-accent text-sm mb-4">
                        <span class="text-muted">"$ "</span>
                        "whoami"
                    </p>

                    <h1 class="font-mono text-4xl md:text-6xl font-bold text-text mb-4">
                        "Olá, eu sou "
                        <span class="text-gradient">"Brenda"</span>
                    </h1>

                    // Typed role line with blinking cursor
                    <div class="flex items-center gap-2 mb-6 h-10">
                        <span class="font-mono text-xl md:text-2xl text-muted">
                            {move || display.get()}
                        </span>
                        <span class="w-0.5 h-6 bg-accent animate-blink"></span>
                    </div>

                    <p class="font-mono text-muted text-base md:text-lg leading-relaxed mb-8 max-w-xl">
                        "Estudante apaixonada por automação, pipelines CI/CD e boas práticas de engenharia de software. Buscando estágio para transformar café em "
                        <span class="text-accent">"código que funciona em produção"</span>
                        "."
                    </p>

                    <div class="flex flex-wrap gap-4 mb-12">
                        <a
                            href="/projects"
                            class="font-mono text-base px-6 py-3 rounded-lg border border-transparent bg-accent text-bg hover:bg-accent-dim font-medium transition-all duration-200"
                        >
                            "ver projetos"
                        </a>
                        <a
                            href="/about"
                            class="font-mono text-base px-6 py-3 rounded-lg border border-accent text-accent hover:bg-accent/10 font-medium transition-all duration-200"
                        >
                            "sobre mim"
                        </a>
                        <a
                            href="https://github.com/seu-usuario"
                            target="_blank"
                            rel="noreferrer"
                            class="font-mono text-base px-6 py-3 rounded-lg border border-transparent text-muted hover:text-text hover:bg-surface font-medium transition-all duration-200"
                        >
                            "github ↗"
                        </a>
                    </div>

                    <div class="flex flex-wrap gap-8">
                        {[("10+", "projetos"), ("5+", "tecnologias"), ("100%", "dedicação")]
                            .map(|(value, label)| {
                                view! {
                                    <div class="flex flex-col">
                                        <span class="font-mono text-2xl font-bold text-accent">{value}</span>
                                        <span class="font-mono text-xs text-muted">{label}</span>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </div>
        </section>
    }
}
