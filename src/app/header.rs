use leptos::prelude::*;
use leptos_router::components::*;

use crate::{content::PROFILE, theme::Theme};

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "About"),
    ("/projects", "Projects"),
    ("/certificates", "Certificates"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_items = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A
                        href=*href
                        attr:class="px-3 py-2 rounded-md hover:text-cyan aria-[current=page]:text-cyan aria-[current=page]:font-bold transition-colors duration-200"
                        on:click=move |_| set_menu_open(false)
                    >
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-40 shadow-lg bg-background/90 backdrop-blur-sm">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="text-xl font-bold">
                        <span class="text-cyan">"<"</span>
                        {PROFILE.name.clone()}
                        <span class="text-cyan">" />"</span>
                    </A>
                    <nav class="hidden md:flex items-center gap-2">{nav_items}</nav>
                    <div class="flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="md:hidden px-3 py-2 rounded-md border border-muted/30"
                            aria-label="Toggle navigation"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="flex flex-col md:hidden mt-2">{nav_items}</nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            class="px-3 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/20 transition-colors duration-200"
            aria-label=move || theme.get().toggle_label()
            title=move || theme.get().toggle_label()
            on:click=move |_| theme.update(|t| *t = t.toggle())
        >
            {move || theme.get().icon()}
        </button>
    }
}
