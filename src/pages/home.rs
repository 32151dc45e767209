//! Landing page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Hero, ProjectCard, SkeletonGrid, Skills, Terminal};
use crate::hooks::{use_projects, ProjectQuery};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Brenda G. — DevOps & Automação" />
        <main class="flex-1">
            <Hero />
            <FeaturedProjects />
            <Terminal />
            <Skills />
        </main>
    }
}

/// Featured-projects section, fed by the gateway's featured read.
#[component]
fn FeaturedProjects() -> impl IntoView {
    let projects = use_projects(|| ProjectQuery::featured());

    view! {
        <section class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                <div class="mb-12 text-center">
                    <p class="font-mono text-accent text-sm mb-2">
                        <span class="text-muted">"$ "</span>
                        "ls ./projects --featured"
                    </p>
                    <h2 class="font-mono text-2xl md:text-3xl font-bold text-text">
                        "projetos em destaque"
                    </h2>
                </div>

                <Show when=move || projects.loading.get()>
                    <SkeletonGrid count=3 />
                </Show>

                <Show when=move || projects.error.get().is_some()>
                    <div class="text-center py-12">
                        <p class="font-mono text-red-400">
                            {move || projects.error.get().unwrap_or_default()}
                        </p>
                    </div>
                </Show>

                {move || {
                    let list = projects.data.get();
                    if projects.loading.get() || projects.error.get().is_some() {
                        return view! {}.into_any();
                    }
                    match list {
                        Some(list) if list.is_empty() => {
                            view! {
                                <div class="text-center py-12">
                                    <p class="font-mono text-muted">
                                        "Nenhum projeto em destaque ainda."
                                    </p>
                                    <p class="font-mono text-xs text-muted mt-2">
                                        "Adicione projetos pelo painel admin!"
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                        Some(list) => {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {list
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project=project /> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                        None => view! {}.into_any(),
                    }
                }}

                <div class="text-center mt-12">
                    <a
                        href="/projects"
                        class="inline-block font-mono text-base px-6 py-3 rounded-lg border border-accent text-accent hover:bg-accent/10 font-medium transition-all duration-200"
                    >
                        "ver todos os projetos →"
                    </a>
                </div>
            </div>
        </section>
    }
}
