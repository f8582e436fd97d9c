use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{Certificate, CertificateCategory, CERTIFICATES},
    filter::{category_counts, filter_items, Category, CategoryFilter},
};

use super::listing::{
    category_from_query, CategoryTabs, EmptyState, Modal, ResultCount, SearchBar, TagList,
};

#[component]
pub fn CertificatesPage() -> impl IntoView {
    let category = RwSignal::new(category_from_query::<CertificateCategory>());
    let query = RwSignal::new(String::new());
    let opened = RwSignal::new(None::<&'static Certificate>);

    let listing =
        Memo::new(move |_| query.with(|q| filter_items(CERTIFICATES.iter(), category.get(), q)));

    let reset = Callback::new(move |_| {
        category.set(CategoryFilter::All);
        query.set(String::new());
    });
    let close = Callback::new(move |_| opened.set(None));

    view! {
        <Title text="Certificates" />
        <div class="w-full max-w-6xl mx-auto page-content">
            <h1 class="text-3xl font-bold text-center mb-2 section-content">"Certificates"</h1>
            <p class="text-center text-muted mb-8 section-content">
                "Courses and certifications I've completed along the way."
            </p>
            <div class="flex flex-col gap-4 mb-6">
                <CategoryTabs
                    selected=category
                    counts=category_counts(CERTIFICATES.iter())
                    total=CERTIFICATES.len()
                />
                <div class="flex flex-col sm:flex-row gap-3 sm:items-center sm:justify-between">
                    <SearchBar query placeholder="Search by title or skill..." />
                    <ResultCount
                        count=Signal::derive(move || listing.with(|l| l.count()))
                        noun="certificate"
                    />
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
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 section-content">
                                        {l
                                            .items()
                                            .iter()
                                            .copied()
                                            .map(|c| {
                                                view! {
                                                    <CertificateCard
                                                        certificate=c
                                                        on_open=Callback::new(move |_| opened.set(Some(c)))
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
                opened
                    .get()
                    .map(|c| view! { <CertificateModal certificate=c on_close=close /> })
            }}
        </div>
    }
}

#[component]
fn CertificateCard(certificate: &'static Certificate, on_open: Callback<()>) -> impl IntoView {
    view! {
        <article
            class="flex flex-col gap-2 p-4 rounded-lg border border-muted/30 bg-brightBlack/10 hover:bg-brightBlack/20 cursor-pointer transition-colors duration-200"
            on:click=move |_| on_open.run(())
        >
            <div class="flex items-start justify-between gap-2">
                <h2 class="text-lg font-bold text-blue leading-tight">
                    {certificate.title.clone()}
                </h2>
                <Show when=move || certificate.featured>
                    <span class="shrink-0 text-xs px-2 py-1 rounded bg-yellow/20 text-yellow">
                        "★ Featured"
                    </span>
                </Show>
            </div>
            <p class="text-sm text-cyan">{certificate.issuer.clone()}</p>
            <p class="text-xs text-muted">
                {certificate.category.label()} " · "
                {certificate.issue_date.format("%b %Y").to_string()}
            </p>
            <TagList tags=certificate.skills.clone() />
        </article>
    }
}

#[component]
fn CertificateModal(certificate: &'static Certificate, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal on_close>
            <h2 class="text-2xl font-bold mb-1 pr-8">{certificate.title.clone()}</h2>
            <p class="text-cyan mb-1">{certificate.issuer.clone()}</p>
            <p class="text-sm text-muted mb-4">
                {certificate.category.label()} " · Issued "
                {certificate.issue_date.format("%B %e, %Y").to_string()}
            </p>
            <p class="leading-relaxed mb-4">{certificate.description.clone()}</p>
            <h3 class="font-bold mb-2">"Skills"</h3>
            <TagList tags=certificate.skills.clone() />
            {certificate
                .credential_url
                .clone()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block mt-6 px-4 py-2 rounded-md bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30"
                        >
                            "View credential"
                        </a>
                    }
                })}
        </Modal>
    }
}
