//! Category/tech badge

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    #[default]
    Sm,
    Md,
}

impl BadgeSize {
    fn classes(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "text-xs px-2 py-0.5",
            BadgeSize::Md => "text-sm px-3 py-1",
        }
    }
}

/// Color scheme keyed by the category name; unknown variants (plain
/// tech tags) fall back to the neutral scheme.
fn variant_classes(variant: &str) -> &'static str {
    match variant {
        "devops" => "bg-green-900/40 text-green-400 border-green-700/50",
        "backend" => "bg-blue-900/40 text-blue-400 border-blue-700/50",
        "frontend" => "bg-purple-900/40 text-purple-400 border-purple-700/50",
        "automation" => "bg-yellow-900/40 text-yellow-400 border-yellow-700/50",
        "fullstack" => "bg-pink-900/40 text-pink-400 border-pink-700/50",
        "languages" => "bg-cyan-900/40 text-cyan-400 border-cyan-700/50",
        "cloud" => "bg-orange-900/40 text-orange-400 border-orange-700/50",
        "databases" => "bg-red-900/40 text-red-400 border-red-700/50",
        "tools" => "bg-slate-800/40 text-slate-400 border-slate-600/50",
        _ => "bg-surface text-muted border-border",
    }
}

#[component]
pub fn Badge(
    #[prop(into)] label: String,
    /// Category name driving the color scheme; omit for neutral tags.
    #[prop(optional, into)]
    variant: Option<String>,
    #[prop(optional)] size: BadgeSize,
) -> impl IntoView {
    let colors = match variant.as_deref() {
        Some(variant) => variant_classes(variant.trim()),
        None => variant_classes(""),
    };

    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border font-mono font-medium {} {}",
            size.classes(),
            colors,
        )>{label}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_scheme() {
        for name in [
            "devops",
            "backend",
            "frontend",
            "automation",
            "fullstack",
            "languages",
            "cloud",
            "databases",
            "tools",
        ] {
            assert_ne!(variant_classes(name), variant_classes(""), "{name}");
        }
    }

    #[test]
    fn unknown_variants_use_the_neutral_scheme() {
        assert_eq!(variant_classes("Docker"), variant_classes(""));
    }
}
