//! Interactive terminal section

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::terminal::{evaluate, Evaluation, LineKind, TerminalLine, OUTPUT_STAGGER_MS, WELCOME_LINE};

fn line_classes(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Input => "text-accent",
        LineKind::Output => "text-text",
        LineKind::Error => "text-red-400",
        LineKind::Success => "text-green-400",
    }
}

#[component]
pub fn Terminal() -> impl IntoView {
    let history = RwSignal::new(vec![TerminalLine::new(LineKind::Output, WELCOME_LINE)]);
    let input = RwSignal::new(String::new());
    // While a response is printing the input is disabled, which keeps
    // the staggered output of successive commands from interleaving.
    let printing = RwSignal::new(false);

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let bottom_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line in view.
    Effect::new(move |_| {
        history.track();
        if let Some(el) = bottom_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let run_command = move || {
        let raw = input.get_untracked();
        input.set(String::new());

        match evaluate(&raw) {
            Evaluation::Noop => {}
            Evaluation::Clear => history.set(Vec::new()),
            Evaluation::Respond { echo, lines } => {
                history.update(|h| h.push(TerminalLine::new(LineKind::Input, echo)));
                printing.set(true);
                spawn_local(async move {
                    for (i, line) in lines.iter().enumerate() {
                        if i > 0 {
                            TimeoutFuture::new(OUTPUT_STAGGER_MS).await;
                        }
                        let appended = history
                            .try_update(|h| h.push(TerminalLine::new(LineKind::Output, *line)));
                        if appended.is_none() {
                            // View torn down mid-response.
                            return;
                        }
                    }
                    printing.try_set(false);
                });
            }
            Evaluation::Unknown { echo, message } => {
                history.update(|h| {
                    h.push(TerminalLine::new(LineKind::Input, echo));
                    h.push(TerminalLine::new(LineKind::Error, message));
                });
            }
        }
    };

    let focus_input = move |_| {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    };

    view! {
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                <div class="mb-8 text-center">
                    <p class="font-mono text-accent text-sm mb-2">
                        <span class="text-muted">"$ "</span>
                        "interact"
                    </p>
                    <h2 class="font-mono text-2xl md:text-3xl font-bold text-text">
                        "terminal interativo"
                    </h2>
                </div>

                <div
                    class="mx-auto max-w-2xl rounded-xl border border-border bg-surface overflow-hidden cursor-text"
                    on:click=focus_input
                >
                    // macOS-style title bar
                    <div class="flex items-center gap-2 px-4 py-3 border-b border-border bg-bg">
                        <div class="w-3 h-3 rounded-full bg-red-500"></div>
                        <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                        <div class="w-3 h-3 rounded-full bg-green-500"></div>
                        <span class="ml-2 font-mono text-xs text-muted">
                            "brenda@portfolio ~ bash"
                        </span>
                    </div>

                    <div class="p-4 h-72 overflow-y-auto font-mono text-sm space-y-1">
                        <For
                            each=move || history.get()
                            key=|line| line.id
                            let:line
                        >
                            <p class=format!("leading-relaxed {}", line_classes(line.kind))>
                                {line.text}
                            </p>
                        </For>
                        <div node_ref=bottom_ref></div>
                    </div>

                    <div class="flex items-center gap-2 px-4 py-3 border-t border-border">
                        <span class="font-mono text-accent text-sm">"$"</span>
                        <input
                            node_ref=input_ref
                            type="text"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    run_command();
                                }
                            }
                            disabled=move || printing.get()
                            placeholder="digite um comando..."
                            autocomplete="off"
                            spellcheck="false"
                            class="flex-1 bg-transparent font-mono text-sm text-text outline-none placeholder:text-muted disabled:opacity-60"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
