//! Admin dashboard: project list and creation form

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use gloo_timers::future::TimeoutFuture;

use crate::components::Badge;
use crate::hooks::{use_auth, use_projects, ProjectQuery};
use crate::types::{NewProject, Project, ProjectCategory};

pub const TITLE_REQUIRED: &str = "O título é obrigatório.";
pub const DESCRIPTION_REQUIRED: &str = "A descrição é obrigatória.";
pub const STACK_REQUIRED: &str = "Informe pelo menos uma tecnologia.";
pub const CREATE_FAILED: &str = "Erro ao criar projeto. Tente novamente.";

/// "Docker, Python,  Bash" → ["Docker", "Python", "Bash"]
fn split_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    List,
    New,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    // Route guard: unauthenticated visitors go back to the login.
    let auth_for_guard = auth.clone();
    let navigate_for_guard = navigate.clone();
    Effect::new(move |_| {
        if !auth_for_guard.loading.get() && auth_for_guard.user.get().is_none() {
            navigate_for_guard("/admin", Default::default());
        }
    });

    // Bumped after create/delete so the list refetches without a page
    // reload.
    let refresh = RwSignal::new(0u32);
    let projects = use_projects(move || {
        refresh.track();
        ProjectQuery::all()
    });

    let active_tab = RwSignal::new(Tab::List);

    let email_label = {
        let auth = auth.clone();
        move || {
            format!(
                "logado como {}",
                auth.user.get().map(|u| u.email).unwrap_or_default()
            )
        }
    };

    let on_sign_out = {
        let auth = auth.clone();
        move |_| auth.sign_out()
    };

    view! {
        <Title text="painel — Brenda G." />
        <Show
            when=move || !auth.loading.get()
            fallback=|| {
                view! {
                    <main class="flex-1 min-h-screen flex items-center justify-center">
                        <span class="font-mono text-muted animate-pulse">"carregando..."</span>
                    </main>
                }
            }
        >
            <main class="flex-1 mx-auto max-w-6xl px-4 py-12 w-full">
                // Header
                <div class="flex items-center justify-between mb-10">
                    <div>
                        <p class="font-mono text-accent text-sm mb-1">
                            <span class="text-muted">"$ "</span>
                            "sudo dashboard"
                        </p>
                        <h1 class="font-mono text-2xl font-bold text-text">
                            "painel administrativo"
                        </h1>
                        <p class="font-mono text-xs text-muted mt-1">{email_label.clone()}</p>
                    </div>

                    <button
                        on:click=on_sign_out.clone()
                        class="font-mono text-xs px-3 py-1.5 rounded-lg border border-red-700/50 text-red-400 hover:bg-red-900/20 transition-all"
                    >
                        "sair ↗"
                    </button>
                </div>

                // Tabs
                <div class="flex gap-2 mb-8 border-b border-border pb-4">
                    <button
                        on:click=move |_| active_tab.set(Tab::List)
                        class=move || tab_classes(active_tab.get() == Tab::List)
                    >
                        {move || {
                            let count = projects.data.get().map(|p| p.len()).unwrap_or(0);
                            format!("projetos ({count})")
                        }}
                    </button>
                    <button
                        on:click=move |_| active_tab.set(Tab::New)
                        class=move || tab_classes(active_tab.get() == Tab::New)
                    >
                        "+ novo projeto"
                    </button>
                </div>

                <Show when=move || active_tab.get() == Tab::List>
                    <ProjectList projects=projects refresh=refresh active_tab=active_tab />
                </Show>

                <Show when=move || active_tab.get() == Tab::New>
                    <NewProjectForm refresh=refresh />
                </Show>
            </main>
        </Show>
    }
}

fn tab_classes(active: bool) -> String {
    format!(
        "font-mono text-sm px-4 py-2 rounded-lg transition-all {}",
        if active {
            "bg-accent/10 text-accent border border-accent/30"
        } else {
            "text-muted hover:text-text hover:bg-surface border border-transparent"
        }
    )
}

#[component]
fn ProjectList(
    projects: crate::hooks::UseProjects,
    refresh: RwSignal<u32>,
    active_tab: RwSignal<Tab>,
) -> impl IntoView {
    let client = expect_context::<crate::api::SupabaseClient>();

    let delete_project = move |project: &Project| {
        let prompt = format!(
            "Deletar \"{}\"? Essa ação não pode ser desfeita.",
            project.title
        );
        let confirmed = window()
            .confirm_with_message(&prompt)
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let client = client.clone();
        let id = project.id.clone();
        spawn_local(async move {
            if client.delete_project(&id).await {
                refresh.update(|v| *v += 1);
            }
        });
    };

    view! {
        <div>
            <Show when=move || projects.loading.get()>
                <p class="font-mono text-muted animate-pulse">"carregando projetos..."</p>
            </Show>

            {move || {
                if projects.loading.get() {
                    return view! {}.into_any();
                }
                let list = projects.data.get().unwrap_or_default();
                if list.is_empty() {
                    view! {
                        <div class="text-center py-16 border border-dashed border-border rounded-xl">
                            <p class="font-mono text-muted mb-2">"Nenhum projeto ainda."</p>
                            <button
                                on:click=move |_| active_tab.set(Tab::New)
                                class="font-mono text-accent text-sm hover:underline"
                            >
                                "criar primeiro projeto →"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let delete_project = delete_project.clone();
                    view! {
                        <div class="space-y-4">
                            {list
                                .into_iter()
                                .map(|project| {
                                    let delete_project = delete_project.clone();
                                    let project_for_delete = project.clone();
                                    let featured = project.featured;
                                    view! {
                                        <div class="rounded-xl border border-border bg-surface p-6">
                                            <div class="flex items-start justify-between gap-4">
                                                <div class="flex-1">
                                                    <div class="flex items-center gap-3 mb-2">
                                                        <h3 class="font-mono font-bold text-text">
                                                            {project.title.clone()}
                                                        </h3>
                                                        <Show when=move || featured>
                                                            <span class="font-mono text-xs text-accent">
                                                                "★ destaque"
                                                            </span>
                                                        </Show>
                                                        <Badge
                                                            label=project.category.as_str()
                                                            variant=project.category.to_string()
                                                        />
                                                        <span class="font-mono text-xs text-muted">
                                                            {project.created_at.format("%d/%m/%Y").to_string()}
                                                        </span>
                                                    </div>

                                                    <p class="font-mono text-xs text-muted mb-3">
                                                        {project.description.clone()}
                                                    </p>

                                                    <div class="flex flex-wrap gap-1">
                                                        {project
                                                            .stack
                                                            .iter()
                                                            .map(|tech| {
                                                                view! { <Badge label=tech.clone() /> }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                </div>

                                                <div class="flex gap-2 shrink-0">
                                                    {project
                                                        .github_url
                                                        .clone()
                                                        .map(|url| {
                                                            view! {
                                                                <a
                                                                    href=url
                                                                    target="_blank"
                                                                    rel="noreferrer"
                                                                    class="font-mono text-xs px-3 py-1.5 rounded-lg border border-transparent text-muted hover:text-text hover:bg-bg transition-all"
                                                                >
                                                                    "GitHub"
                                                                </a>
                                                            }
                                                        })}
                                                    <button
                                                        on:click=move |_| delete_project(&project_for_delete)
                                                        class="font-mono text-xs px-3 py-1.5 rounded-lg border border-red-700/50 text-red-400 hover:bg-red-900/20 transition-all"
                                                    >
                                                        "deletar"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn NewProjectForm(refresh: RwSignal<u32>) -> impl IntoView {
    let client = expect_context::<crate::api::SupabaseClient>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let long_description = RwSignal::new(String::new());
    let stack = RwSignal::new(String::new());
    let category = RwSignal::new(ProjectCategory::Devops);
    let github_url = RwSignal::new(String::new());
    let demo_url = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let featured = RwSignal::new(false);

    let form_error = RwSignal::new(Option::<String>::None);
    let form_success = RwSignal::new(false);
    let is_submitting = RwSignal::new(false);

    let reset_form = move || {
        title.set(String::new());
        description.set(String::new());
        long_description.set(String::new());
        stack.set(String::new());
        category.set(ProjectCategory::Devops);
        github_url.set(String::new());
        demo_url.set(String::new());
        image_url.set(String::new());
        featured.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);
        form_success.set(false);

        // Field-level required-ness checks, first failure wins.
        if title.get().trim().is_empty() {
            form_error.set(Some(TITLE_REQUIRED.to_string()));
            return;
        }
        if description.get().trim().is_empty() {
            form_error.set(Some(DESCRIPTION_REQUIRED.to_string()));
            return;
        }
        let stack_list = split_stack(&stack.get());
        if stack_list.is_empty() {
            form_error.set(Some(STACK_REQUIRED.to_string()));
            return;
        }

        is_submitting.set(true);

        let non_empty = |value: String| if value.is_empty() { None } else { Some(value) };
        let payload = NewProject {
            title: title.get(),
            description: description.get(),
            long_description: non_empty(long_description.get()),
            stack: stack_list,
            category: category.get(),
            github_url: non_empty(github_url.get()),
            demo_url: non_empty(demo_url.get()),
            image_url: non_empty(image_url.get()),
            featured: featured.get(),
        };

        let client = client.clone();
        spawn_local(async move {
            let result = client.insert_project(&payload).await;
            is_submitting.set(false);

            if result.is_none() {
                form_error.set(Some(CREATE_FAILED.to_string()));
                return;
            }

            reset_form();
            refresh.update(|v| *v += 1);
            form_success.set(true);
            TimeoutFuture::new(3000).await;
            form_success.try_set(false);
        });
    };

    let input_classes = "w-full bg-surface border border-border rounded-lg px-4 py-3 font-mono text-sm text-text placeholder:text-muted focus:outline-none focus:border-accent/50 transition-colors";

    view! {
        <div class="max-w-2xl">
            <form on:submit=on_submit class="space-y-6">
                <div>
                    <label class="font-mono text-xs text-accent block mb-2">"título *"</label>
                    <input
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        placeholder="Ex: Pipeline CI/CD com GitHub Actions"
                        class=input_classes
                    />
                </div>

                <div>
                    <label class="font-mono text-xs text-accent block mb-2">
                        "descrição curta *"
                    </label>
                    <input
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        placeholder="Uma linha resumindo o projeto"
                        class=input_classes
                    />
                </div>

                <div>
                    <label class="font-mono text-xs text-accent block mb-2">
                        "descrição detalhada"
                    </label>
                    <textarea
                        prop:value=move || long_description.get()
                        on:input=move |ev| long_description.set(event_target_value(&ev))
                        rows="4"
                        placeholder="Contexto, desafios, soluções..."
                        class=format!("{input_classes} resize-none")
                    ></textarea>
                </div>

                <div>
                    <label class="font-mono text-xs text-accent block mb-2">
                        "stack * "
                        <span class="text-muted">"(separada por vírgula)"</span>
                    </label>
                    <input
                        prop:value=move || stack.get()
                        on:input=move |ev| stack.set(event_target_value(&ev))
                        placeholder="Docker, Python, GitHub Actions"
                        class=input_classes
                    />
                </div>

                <div>
                    <label class="font-mono text-xs text-accent block mb-2">"categoria *"</label>
                    <select
                        prop:value=move || category.get().as_str().to_string()
                        on:change=move |ev| {
                            if let Some(parsed) = ProjectCategory::parse(&event_target_value(&ev)) {
                                category.set(parsed);
                            }
                        }
                        class=input_classes
                    >
                        {ProjectCategory::ALL
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })}
                    </select>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="font-mono text-xs text-accent block mb-2">"github url"</label>
                        <input
                            prop:value=move || github_url.get()
                            on:input=move |ev| github_url.set(event_target_value(&ev))
                            placeholder="https://github.com/..."
                            class=input_classes
                        />
                    </div>
                    <div>
                        <label class="font-mono text-xs text-accent block mb-2">"demo url"</label>
                        <input
                            prop:value=move || demo_url.get()
                            on:input=move |ev| demo_url.set(event_target_value(&ev))
                            placeholder="https://..."
                            class=input_classes
                        />
                    </div>
                </div>

                <div>
                    <label class="font-mono text-xs text-accent block mb-2">"url da imagem"</label>
                    <input
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                        placeholder="https://... (screenshot do projeto)"
                        class=input_classes
                    />
                </div>

                <div class="flex items-center gap-3">
                    <input
                        type="checkbox"
                        id="featured"
                        prop:checked=move || featured.get()
                        on:change=move |ev| featured.set(event_target_checked(&ev))
                        class="w-4 h-4 accent-green-400"
                    />
                    <label for="featured" class="font-mono text-sm text-text cursor-pointer">
                        "exibir na home como destaque"
                    </label>
                </div>

                <Show when=move || form_error.get().is_some()>
                    <div class="rounded-lg border border-red-700/50 bg-red-900/20 px-4 py-3">
                        <p class="font-mono text-xs text-red-400">
                            {move || format!("✗ {}", form_error.get().unwrap_or_default())}
                        </p>
                    </div>
                </Show>

                <Show when=move || form_success.get()>
                    <div class="rounded-lg border border-green-700/50 bg-green-900/20 px-4 py-3">
                        <p class="font-mono text-xs text-green-400">
                            "✓ Projeto criado com sucesso!"
                        </p>
                    </div>
                </Show>

                <div class="flex gap-3 pt-2">
                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        class="font-mono text-sm px-4 py-2 rounded-lg bg-accent text-bg hover:bg-accent-dim font-medium transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || if is_submitting.get() { "salvando..." } else { "criar projeto →" }}
                    </button>
                    <button
                        type="button"
                        on:click=move |_| reset_form()
                        class="font-mono text-sm px-4 py-2 rounded-lg border border-transparent text-muted hover:text-text hover:bg-surface transition-all duration-200"
                    >
                        "limpar"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_splits_trimmed_and_filtered() {
        assert_eq!(
            split_stack("Docker, Python,  Bash"),
            vec!["Docker", "Python", "Bash"]
        );
    }

    #[test]
    fn stack_drops_empty_entries() {
        assert_eq!(split_stack("Docker,,  ,Python,"), vec!["Docker", "Python"]);
        assert!(split_stack("").is_empty());
        assert!(split_stack(" , ,").is_empty());
    }

    #[test]
    fn stack_keeps_single_entry() {
        assert_eq!(split_stack("  Terraform  "), vec!["Terraform"]);
    }
}
