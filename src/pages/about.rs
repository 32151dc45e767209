//! About page — static presentation content

use leptos::prelude::*;
use leptos_meta::Title;

struct TimelineEntry {
    year: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        year: "2024",
        title: "Início na área de DevOps",
        description: "Primeiros contatos com Docker, CI/CD e automação de pipelines.",
        icon: "🚀",
    },
    TimelineEntry {
        year: "2023",
        title: "Ingresso na faculdade",
        description: "Início do curso de Engenharia de Software. Primeiros passos com Python e lógica de programação.",
        icon: "🎓",
    },
    TimelineEntry {
        year: "2023",
        title: "Primeiro projeto open source",
        description: "Contribuição para projetos no GitHub e criação dos primeiros scripts de automação.",
        icon: "💻",
    },
];

const VALUES: [(&str, &str, &str); 4] = [
    ("⚙️", "Automação", "Se pode ser automatizado, deve ser."),
    ("📖", "Aprendizado", "Sempre há algo novo para aprender."),
    ("🔍", "Qualidade", "Código que funciona e é fácil de manter."),
    ("🤝", "Colaboração", "Os melhores produtos nascem em equipe."),
];

const QUICK_INFO: [(&str, &str); 5] = [
    ("localização", "Brasil 🇧🇷"),
    ("curso", "Engenharia de Software"),
    ("foco", "DevOps & Automação"),
    ("status", "🟢 disponível para estágio"),
    ("email", "seu@email.com"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="sobre — Brenda G." />
        <main class="flex-1 mx-auto max-w-6xl px-4 py-16 w-full">
            <div class="mb-16">
                <p class="font-mono text-accent text-sm mb-2">
                    <span class="text-muted">"$ "</span>
                    "cat sobre-mim.txt"
                </p>
                <h1 class="font-mono text-3xl md:text-4xl font-bold text-text mb-6">
                    "sobre mim"
                </h1>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-start">
                    <div class="space-y-4">
                        <p class="font-mono text-muted leading-relaxed">
                            "Sou estudante de Engenharia de Software apaixonada por DevOps, automação e boas práticas de desenvolvimento. Acredito que infraestrutura bem feita é tão importante quanto o código em si."
                        </p>
                        <p class="font-mono text-muted leading-relaxed">
                            "Tenho experiência com pipelines CI/CD, containerização com Docker, scripting em Python e Bash, e estou sempre buscando formas de tornar processos mais eficientes e confiáveis."
                        </p>
                        <p class="font-mono text-muted leading-relaxed">
                            "Busco uma oportunidade de estágio onde possa contribuir com automação e engenharia de software enquanto aprendo com profissionais experientes."
                        </p>

                        <div class="pt-4">
                            <a
                                href="/curriculo.pdf"
                                download
                                class="inline-block font-mono text-sm px-4 py-2 rounded-lg bg-accent text-bg hover:bg-accent-dim font-medium transition-all duration-200"
                            >
                                "baixar currículo ↓"
                            </a>
                        </div>
                    </div>

                    <div class="space-y-4 font-mono">
                        {QUICK_INFO
                            .map(|(label, value)| {
                                view! {
                                    <div class="flex flex-col sm:flex-row sm:items-center gap-1 sm:gap-4 py-3 border-b border-border">
                                        <span class="text-accent text-sm w-32 shrink-0">{label}</span>
                                        <span class="text-text text-sm">{value}</span>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </div>

            // Values
            <div class="mb-16">
                <h2 class="font-mono text-xl font-bold text-text mb-8">"o que me move"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    {VALUES
                        .map(|(icon, title, desc)| {
                            view! {
                                <div class="rounded-xl border border-border bg-surface p-6">
                                    <p class="text-2xl mb-3">{icon}</p>
                                    <h3 class="font-mono font-bold text-text mb-1">{title}</h3>
                                    <p class="font-mono text-xs text-muted leading-relaxed">{desc}</p>
                                </div>
                            }
                        })}
                </div>
            </div>

            // Timeline
            <div>
                <h2 class="font-mono text-xl font-bold text-text mb-8">"minha jornada"</h2>
                <div class="space-y-6">
                    {TIMELINE
                        .map(|entry| {
                            view! {
                                <div class="flex gap-4 items-start">
                                    <div class="w-10 h-10 shrink-0 rounded-lg border border-border bg-surface flex items-center justify-center">
                                        {entry.icon}
                                    </div>
                                    <div class="pb-2">
                                        <p class="font-mono text-xs text-accent mb-1">{entry.year}</p>
                                        <h3 class="font-mono font-bold text-text mb-1">{entry.title}</h3>
                                        <p class="font-mono text-sm text-muted leading-relaxed">
                                            {entry.description}
                                        </p>
                                    </div>
                                </div>
                            }
                        })}
                </div>
            </div>
        </main>
    }
}
