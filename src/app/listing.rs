use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::filter::{Category, CategoryFilter};

/// Category preselected by the `?category=` query param, `All` when absent
/// or unknown.
pub fn category_from_query<C>() -> CategoryFilter<C>
where
    C: Category + Send + Sync,
{
    use_query_map().with_untracked(|q| {
        q.get("category")
            .and_then(|slug| CategoryFilter::parse(&slug))
            .unwrap_or(CategoryFilter::All)
    })
}

#[component]
pub fn CategoryTabs<C>(
    selected: RwSignal<CategoryFilter<C>>,
    counts: Vec<(C, usize)>,
    total: usize,
) -> impl IntoView
where
    C: Category + Send + Sync,
{
    let count_for = move |option: CategoryFilter<C>| match option {
        CategoryFilter::All => total,
        CategoryFilter::Only(c) => counts
            .iter()
            .find(|(cat, _)| *cat == c)
            .map(|(_, n)| *n)
            .unwrap_or_default(),
    };
    view! {
        <div class="flex flex-wrap gap-2" role="tablist">
            {CategoryFilter::<C>::options()
                .map(|option| {
                    let count = count_for(option);
                    view! {
                        <button
                            role="tab"
                            aria-selected=move || (selected.get() == option).to_string()
                            class=move || {
                                if selected.get() == option {
                                    "px-4 py-2 rounded-md border bg-cyan/20 text-cyan border-cyan/30"
                                } else {
                                    "px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/20"
                                }
                            }
                            on:click=move |_| selected.set(option)
                        >
                            {option.label()}
                            <span class="ml-2 text-xs text-muted">{count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SearchBar(query: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="relative w-full sm:max-w-md">
            <input
                type="search"
                class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !query.read().is_empty()>
                <button
                    class="absolute right-2 top-2 text-muted hover:text-foreground"
                    aria-label="Clear search"
                    on:click=move |_| query.set(String::new())
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn ResultCount(#[prop(into)] count: Signal<usize>, noun: &'static str) -> impl IntoView {
    view! {
        <p class="text-sm text-muted">
            {move || {
                let n = count.get();
                if n == 1 { format!("1 {noun}") } else { format!("{n} {noun}s") }
            }}
        </p>
    }
}

#[component]
pub fn EmptyState(on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center py-16 text-center section-content">
            <p class="text-lg font-medium mb-2">"No results found"</p>
            <p class="text-muted mb-6">"Try another keyword or category."</p>
            <button
                class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200"
                on:click=move |_| on_reset.run(())
            >
                "Reset filters"
            </button>
        </div>
    }
}

#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-lg bg-background border border-muted/30 p-6 shadow-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute right-4 top-4 text-muted hover:text-foreground"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|tag| {
                    view! { <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">{tag}</span> }
                })
                .collect_view()}
        </div>
    }
}
