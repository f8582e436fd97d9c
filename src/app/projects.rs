use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use std::time::Duration;

#[cfg(feature = "hydrate")]
use crate::gallery::AUTOPLAY_MS;
use crate::{
    content::{Project, ProjectCategory, PROJECTS},
    filter::{category_counts, filter_items, Category, CategoryFilter},
    gallery::Carousel,
};

use super::listing::{
    category_from_query, CategoryTabs, EmptyState, Modal, ResultCount, SearchBar, TagList,
};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let category = RwSignal::new(category_from_query::<ProjectCategory>());
    let query = RwSignal::new(String::new());
    let opened = RwSignal::new(None::<&'static Project>);

    let listing =
        Memo::new(move |_| query.with(|q| filter_items(PROJECTS.iter(), category.get(), q)));

    let reset = Callback::new(move |_| {
        category.set(CategoryFilter::All);
        query.set(String::new());
    });
    let close = Callback::new(move |_| opened.set(None));

    view! {
        <Title text="Projects" />
        <div class="w-full max-w-6xl mx-auto page-content">
            <h1 class="text-3xl font-bold text-center mb-2 section-content">"Projects"</h1>
            <p class="text-center text-muted mb-8 section-content">
                "Things I've designed and built for the web, mobile and desktop."
            </p>
            <div class="flex flex-col gap-4 mb-6">
                <CategoryTabs
                    selected=category
                    counts=category_counts(PROJECTS.iter())
                    total=PROJECTS.len()
                />
                <div class="flex flex-col sm:flex-row gap-3 sm:items-center sm:justify-between">
                    <SearchBar query placeholder="Search by title or technology..." />
                    <ResultCount count=Signal::derive(move || listing.with(|l| l.count())) noun="project" />
                </div>
            </div>
            {move || {
                listing
                    .with(|l| {
                        if l.is_empty() {
                            Either::Left(view! { <EmptyState on_reset=reset /> })
                        } else {
                            Either::Right(
                                view! {
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 section-content">
                                        {l
                                            .items()
                                            .iter()
                                            .copied()
                                            .map(|p| {
                                                view! {
                                                    <ProjectCard
                                                        project=p
                                                        on_open=Callback::new(move |_| opened.set(Some(p)))
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                },
                            )
                        }
                    })
            }}
            {move || {
                opened.get().map(|p| view! { <ProjectModal project=p on_close=close /> })
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<()>) -> impl IntoView {
    let tags = project.tech_stack.iter().map(str::to_string).collect::<Vec<_>>();
    view! {
        <article
            class="flex flex-col rounded-lg border border-muted/30 bg-brightBlack/10 hover:bg-brightBlack/20 overflow-hidden cursor-pointer transition-colors duration-200"
            on:click=move |_| on_open.run(())
        >
            {project
                .images
                .first()
                .map(|src| {
                    view! {
                        <img
                            class="w-full h-44 object-cover"
                            src=src.clone()
                            alt=project.title.clone()
                            loading="lazy"
                        />
                    }
                })}
            <div class="flex flex-col flex-grow p-4 gap-3">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold text-blue">{project.title.clone()}</h2>
                    <span class="text-xs uppercase text-muted">{project.category.label()}</span>
                </div>
                <p class="text-sm leading-relaxed flex-grow">{project.description.clone()}</p>
                <TagList tags />
            </div>
        </article>
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(project.images.len()));

    #[cfg(feature = "hydrate")]
    if carousel.get_untracked().should_autoplay() {
        match set_interval_with_handle(
            move || carousel.update(|c| *c = c.next()),
            Duration::from_millis(AUTOPLAY_MS),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("Couldn't start gallery autoplay: {e:?}"),
        }
    }

    view! {
        <Modal on_close>
            <h2 class="text-2xl font-bold mb-1 pr-8">{project.title.clone()}</h2>
            <p class="text-sm text-muted mb-4">{project.category.label()}</p>
            <Gallery project carousel />
            <p class="leading-relaxed my-4">{project.description.clone()}</p>
            {(!project.features.is_empty())
                .then(|| {
                    view! {
                        <h3 class="font-bold mb-2">"Features"</h3>
                        <ul class="list-disc list-inside mb-4 space-y-1">
                            {project
                                .features
                                .iter()
                                .map(|f| view! { <li>{f.clone()}</li> })
                                .collect_view()}
                        </ul>
                    }
                })}
            <h3 class="font-bold mb-2">"Tech Stack"</h3>
            <div class="space-y-2 mb-4">
                {project
                    .tech_stack
                    .layers()
                    .into_iter()
                    .map(|(layer, techs)| {
                        view! {
                            <div>
                                {layer
                                    .map(|l| {
                                        view! {
                                            <p class="text-sm capitalize text-muted mb-1">{l.to_string()}</p>
                                        }
                                    })}
                                <TagList tags=techs.to_vec() />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-3">
                {project
                    .github
                    .clone()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/20"
                            >
                                <i class="devicon-github-plain mr-2" />
                                "Source"
                            </a>
                        }
                    })}
                {project
                    .live
                    .clone()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30"
                            >
                                "Live demo"
                            </a>
                        }
                    })}
            </div>
        </Modal>
    }
}

#[component]
fn Gallery(project: &'static Project, carousel: RwSignal<Carousel>) -> impl IntoView {
    if project.images.is_empty() {
        return Either::Left(());
    }
    let many = project.images.len() > 1;
    Either::Right(view! {
        <div class="relative">
            <img
                class="w-full max-h-96 object-contain rounded-md bg-black/40"
                src=move || project.images[carousel.get().index()].clone()
                alt=project.title.clone()
            />
            <Show when=move || many>
                <button
                    class="absolute left-2 top-1/2 -translate-y-1/2 px-3 py-1 rounded-full bg-black/60 text-white"
                    aria-label="Previous image"
                    on:click=move |_| carousel.update(|c| *c = c.prev())
                >
                    "‹"
                </button>
                <button
                    class="absolute right-2 top-1/2 -translate-y-1/2 px-3 py-1 rounded-full bg-black/60 text-white"
                    aria-label="Next image"
                    on:click=move |_| carousel.update(|c| *c = c.next())
                >
                    "›"
                </button>
                <div class="flex justify-center gap-2 mt-2">
                    {(0..project.images.len())
                        .map(|i| {
                            view! {
                                <button
                                    aria-label=format!("Show image {}", i + 1)
                                    class=move || {
                                        if carousel.get().index() == i {
                                            "w-3 h-3 rounded-full bg-cyan"
                                        } else {
                                            "w-3 h-3 rounded-full bg-muted/50"
                                        }
                                    }
                                    on:click=move |_| carousel.update(|c| *c = c.select(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    })
}
