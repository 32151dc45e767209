//! Full project listing with category filters

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ProjectCard, SkeletonGrid};
use crate::hooks::{use_projects, ProjectQuery};
use crate::types::ProjectCategory;

/// Filter chips: `None` means all projects.
const FILTERS: [(&str, Option<ProjectCategory>); 6] = [
    ("todos", None),
    ("devops", Some(ProjectCategory::Devops)),
    ("backend", Some(ProjectCategory::Backend)),
    ("frontend", Some(ProjectCategory::Frontend)),
    ("automation", Some(ProjectCategory::Automation)),
    ("fullstack", Some(ProjectCategory::Fullstack)),
];

fn result_counter(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} projeto{plural} encontrado{plural}")
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let active_filter = RwSignal::new(Option::<ProjectCategory>::None);

    // Re-fetches whenever the filter chip changes; rapid clicks
    // resolve latest-wins inside the hook.
    let projects = use_projects(move || ProjectQuery::in_category(active_filter.get()));

    view! {
        <Title text="projetos — Brenda G." />
        <main class="flex-1 mx-auto max-w-6xl px-4 py-16 w-full">
            <div class="mb-12">
                <p class="font-mono text-accent text-sm mb-2">
                    <span class="text-muted">"$ "</span>
                    "ls ./projects"
                </p>
                <h1 class="font-mono text-3xl md:text-4xl font-bold text-text mb-4">
                    "todos os projetos"
                </h1>
                <p class="font-mono text-muted max-w-xl">
                    "Automações, pipelines, APIs e interfaces — tudo que construí ao longo da minha jornada em engenharia de software."
                </p>
            </div>

            // Filter chips
            <div class="flex flex-wrap gap-2 mb-10">
                {FILTERS
                    .map(|(label, value)| {
                        let selected = move || active_filter.get() == value;
                        view! {
                            <button
                                on:click=move |_| active_filter.set(value)
                                class=move || {
                                    format!(
                                        "font-mono text-sm px-4 py-2 rounded-lg border transition-all duration-200 {}",
                                        if selected() {
                                            "bg-accent/10 text-accent border-accent/30"
                                        } else {
                                            "text-muted border-border hover:text-text hover:bg-surface"
                                        },
                                    )
                                }
                            >
                                <Show when=selected>
                                    <span class="mr-1">"▸"</span>
                                </Show>
                                {label}
                            </button>
                        }
                    })}
            </div>

            <Show when=move || projects.loading.get()>
                <SkeletonGrid count=6 />
            </Show>

            <Show when=move || projects.error.get().is_some()>
                <div class="text-center py-20">
                    <p class="font-mono text-red-400 mb-2">
                        {move || projects.error.get().unwrap_or_default()}
                    </p>
                    <p class="font-mono text-xs text-muted">
                        "Verifique sua conexão e tente novamente."
                    </p>
                </div>
            </Show>

            {move || {
                if projects.loading.get() || projects.error.get().is_some() {
                    return view! {}.into_any();
                }
                let list = projects.data.get().unwrap_or_default();
                if list.is_empty() {
                    let filter_note = active_filter
                        .get()
                        .map(|c| format!(" na categoria \"{c}\""))
                        .unwrap_or_default();
                    view! {
                        <div class="text-center py-20 border border-dashed border-border rounded-xl">
                            <p class="font-mono text-2xl mb-2">"📁"</p>
                            <p class="font-mono text-muted">
                                {format!("Nenhum projeto encontrado{filter_note}.")}
                            </p>
                            <Show when=move || active_filter.get().is_some()>
                                <button
                                    on:click=move |_| active_filter.set(None)
                                    class="font-mono text-accent text-sm mt-4 hover:underline"
                                >
                                    "limpar filtro"
                                </button>
                            </Show>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <p class="font-mono text-xs text-muted mb-6">
                            {result_counter(list.len())}
                        </p>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_pluralizes() {
        assert_eq!(result_counter(1), "1 projeto encontrado");
        assert_eq!(result_counter(2), "2 projetos encontrados");
        assert_eq!(result_counter(0), "0 projetos encontrados");
    }

    #[test]
    fn filters_cover_every_category_plus_all() {
        assert_eq!(FILTERS[0].1, None);
        let categories: Vec<_> = FILTERS.iter().filter_map(|(_, c)| *c).collect();
        assert_eq!(categories, ProjectCategory::ALL);
    }
}
