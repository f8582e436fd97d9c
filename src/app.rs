mod certificates;
mod contact;
mod header;
mod homepage;
mod listing;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::{content::PROFILE, theme::Theme};
use certificates::CertificatesPage;
use contact::ContactPage;
use header::Header;
use homepage::HomePage;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

    // server always renders the default theme, pick up the stored one after hydration
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            theme.set(stored_theme.get_untracked());
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || theme.get(),
        move |t, _, _| {
            set_stored_theme.set(*t);
        },
        false,
    );

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <div class=move || {
                format!(
                    "{} flex flex-col min-h-screen bg-background text-foreground transition-colors duration-300",
                    theme.get().class_name(),
                )
            }>
                <Header />
                <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-7xl px-4 py-8">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/certificates") view=CertificatesPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%b %e %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="py-6 text-center text-sm text-muted border-t border-muted/30">
            <div>{format!("© {}", PROFILE.name)}</div>
            <div class="mt-1">"Last built " {built}</div>
        </footer>
    }
}
