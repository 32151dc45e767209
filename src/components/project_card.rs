//! Project card shared by the home and projects pages

use leptos::prelude::*;

use crate::components::Badge;
use crate::types::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        stack,
        category,
        github_url,
        demo_url,
        image_url,
        featured,
        ..
    } = project;

    view! {
        <div class="rounded-xl border border-border bg-surface p-6 transition-all duration-300 hover:-translate-y-1 hover:border-accent/30">
            <div class="mb-4">
                {image_url
                    .map(|url| {
                        view! {
                            <img
                                src=url
                                alt=title.clone()
                                class="w-full h-36 object-cover rounded-lg mb-3"
                            />
                        }
                    })}
                <div class="flex items-start justify-between gap-2">
                    <h3 class="font-mono text-lg font-bold text-text mb-1">{title}</h3>
                    <Show when=move || featured>
                        <span class="text-accent text-xs font-mono shrink-0">"★ destaque"</span>
                    </Show>
                </div>
                <Badge label=category.as_str() variant=category.to_string() />
            </div>

            <p class="text-muted text-sm leading-relaxed">{description}</p>

            <div class="mt-4 pt-4 border-t border-border">
                <div class="flex flex-wrap gap-1 w-full mb-3">
                    {stack
                        .into_iter()
                        .map(|tech| view! { <Badge label=tech /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="flex gap-2 w-full">
                    {github_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noreferrer"
                                    class="flex-1 text-center font-mono text-xs px-3 py-1.5 rounded-lg border border-transparent text-muted hover:text-text hover:bg-bg transition-all"
                                >
                                    "GitHub"
                                </a>
                            }
                        })}
                    {demo_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noreferrer"
                                    class="flex-1 text-center font-mono text-xs px-3 py-1.5 rounded-lg border border-accent text-accent hover:bg-accent/10 transition-all"
                                >
                                    "Demo ↗"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
