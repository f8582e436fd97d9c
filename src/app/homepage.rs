use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{featured_certificates, PROFILE, SKILLS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <section class="flex flex-col items-center text-center gap-4 lg:mt-8 section-content">
                <h1 class="text-3xl lg:text-4xl font-bold">
                    "Hi, I'm " <span class="text-cyan">{PROFILE.name.clone()}</span>
                </h1>
                <p class="text-xl text-muted">{PROFILE.role.clone()}</p>
                <p class="text-sm">"📍 " {PROFILE.location.clone()}</p>
                <div class="flex flex-col sm:flex-row items-center gap-4 mt-4">
                    <a
                        href=PROFILE.cv_path.clone()
                        download=PROFILE.cv_filename.clone()
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        <i class="extra-download mr-2" />
                        "Download CV"
                    </a>
                    <A
                        href="/contact"
                        attr:class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:bg-brightBlack/20 transition-all duration-200"
                    >
                        "Contact Me"
                    </A>
                </div>
                <ProfileLinks />
            </section>
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 mt-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold mb-6">"About Me"</h2>
                    {PROFILE
                        .bio
                        .iter()
                        .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{p.clone()}</p> })
                        .collect_view()}
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold mb-6">"Skills"</h2>
                    <div class="space-y-4">
                        {SKILLS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div>
                                        <h3 class="font-medium text-green mb-2">{group.name.clone()}</h3>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|s| {
                                                    view! {
                                                        <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">
                                                            {s.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
            <FeaturedCertificates />
        </div>
    }
}

#[component]
fn ProfileLinks() -> impl IntoView {
    view! {
        <div class="flex gap-4 mt-4">
            {PROFILE
                .links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-2xl hover:text-cyan transition-colors duration-200"
                            aria-label=format!("{} Profile", link.label)
                        >
                            <i class=link.icon.clone()></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeaturedCertificates() -> impl IntoView {
    let featured = featured_certificates().collect::<Vec<_>>();
    (!featured.is_empty())
        .then(|| {
            view! {
                <section class="mt-12 section-content">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-xl font-bold">"Featured Certificates"</h2>
                        <A href="/certificates" attr:class="text-sm text-cyan hover:underline">
                            "See all →"
                        </A>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {featured
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <div class="p-4 rounded-lg border border-muted/30 bg-brightBlack/10">
                                        <p class="font-bold text-blue leading-tight">{c.title.clone()}</p>
                                        <p class="text-sm text-cyan mt-1">{c.issuer.clone()}</p>
                                        <p class="text-xs text-muted mt-1">
                                            {c.issue_date.format("%b %Y").to_string()}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            }
        })
}
