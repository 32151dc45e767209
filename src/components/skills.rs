//! Static skills section

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeSize};
use crate::types::{Skill, SkillCategory};

const SKILLS: [Skill; 12] = [
    // Languages
    Skill { name: "Python", level: 80, category: SkillCategory::Languages, icon: "🐍" },
    Skill { name: "TypeScript", level: 70, category: SkillCategory::Languages, icon: "📘" },
    Skill { name: "Bash", level: 75, category: SkillCategory::Languages, icon: "💻" },
    // DevOps
    Skill { name: "Docker", level: 75, category: SkillCategory::Devops, icon: "🐳" },
    Skill { name: "GitHub Actions", level: 80, category: SkillCategory::Devops, icon: "⚙️" },
    Skill { name: "Linux", level: 70, category: SkillCategory::Devops, icon: "🐧" },
    // Cloud
    Skill { name: "Vercel", level: 85, category: SkillCategory::Cloud, icon: "▲" },
    Skill { name: "AWS", level: 50, category: SkillCategory::Cloud, icon: "☁️" },
    // Databases
    Skill { name: "PostgreSQL", level: 65, category: SkillCategory::Databases, icon: "🐘" },
    Skill { name: "Supabase", level: 70, category: SkillCategory::Databases, icon: "⚡" },
    // Tools
    Skill { name: "Git", level: 85, category: SkillCategory::Tools, icon: "🔀" },
    Skill { name: "VSCode", level: 90, category: SkillCategory::Tools, icon: "📝" },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-surface/30">
            <div class="mx-auto max-w-6xl">
                <div class="mb-12 text-center">
                    <p class="font-mono text-accent text-sm mb-2">
                        <span class="text-muted">"$ "</span>
                        "cat skills.json"
                    </p>
                    <h2 class="font-mono text-2xl md:text-3xl font-bold text-text">
                        "habilidades técnicas"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let group: Vec<Skill> = SKILLS
                                .iter()
                                .copied()
                                .filter(|s| s.category == category)
                                .collect();
                            view! { <SkillGroupCard category=category skills=group /> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillGroupCard(category: SkillCategory, skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-border bg-surface p-6 transition-all duration-300 hover:-translate-y-1 hover:border-accent/30">
            <div class="mb-4">
                <Badge
                    label=category.as_str()
                    variant=category.as_str().to_string()
                    size=BadgeSize::Md
                />
            </div>

            <div class="space-y-4 mt-2">
                {skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div>
                                <div class="flex justify-between items-center mb-1">
                                    <span class="font-mono text-sm text-text flex items-center gap-2">
                                        <span>{skill.icon}</span>
                                        {skill.name}
                                    </span>
                                    <span class="font-mono text-xs text-muted">
                                        {format!("{}%", skill.level)}
                                    </span>
                                </div>
                                // Tailwind can't express dynamic widths, so the
                                // bar width is inlined.
                                <div class="h-1.5 w-full bg-border rounded-full overflow-hidden">
                                    <div
                                        class="h-full bg-accent rounded-full transition-all duration-1000"
                                        style=format!("width: {}%", skill.level)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
