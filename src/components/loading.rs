//! Skeleton loaders

use leptos::prelude::*;

/// Pulsing placeholder in the shape of a project card.
#[component]
pub fn ProjectCardSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-xl border border-border bg-surface p-6 animate-pulse">
            <div class="h-4 bg-border rounded w-3/4 mb-4"></div>
            <div class="h-3 bg-border rounded w-full mb-2"></div>
            <div class="h-3 bg-border rounded w-2/3 mb-6"></div>
            <div class="flex gap-2">
                <div class="h-5 bg-border rounded-full w-16"></div>
                <div class="h-5 bg-border rounded-full w-16"></div>
            </div>
        </div>
    }
}

/// Grid of card skeletons shown while a project list loads.
#[component]
pub fn SkeletonGrid(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {(0..count).map(|_| view! { <ProjectCardSkeleton /> }).collect::<Vec<_>>()}
        </div>
    }
}
