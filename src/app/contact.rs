use leptos::{either::Either, ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::{
    contact::{ContactForm, Field, FieldErrors, Submission, SubmitStatus},
    content::PROFILE,
};

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submission = RwSignal::new(Submission::default());
    let status = Memo::new(move |_| submission.with(|s| s.status()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        let Some(generation) = submission.try_update(|s| s.begin()).flatten() else {
            return;
        };
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, generation);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::contact::{send, STATUS_CLEAR_MS};

            let res = send(&current).await;
            match &res {
                Ok(()) => form.set(ContactForm::default()),
                Err(e) => log::error!("{e}"),
            }
            submission.update(|s| s.finish(generation, &res));

            gloo_timers::future::TimeoutFuture::new(STATUS_CLEAR_MS).await;
            submission.update(|s| s.clear(generation));
        });
    };

    view! {
        <Title text="Contact" />
        <div class="w-full max-w-2xl mx-auto page-content">
            <h1 class="text-3xl font-bold text-center mb-2 section-content">"Get in Touch"</h1>
            <p class="text-center text-muted mb-8 section-content">
                "Have a project in mind or just want to say hi? Drop me a message."
            </p>
            <form
                class="flex flex-col gap-4 p-6 rounded-lg border border-muted/30 bg-brightBlack/10 section-content"
                novalidate=true
                on:submit=on_submit
            >
                <FormField field=Field::Name form errors />
                <FormField field=Field::Email form errors input_type="email" />
                <FormField field=Field::Subject form errors />
                <FormField field=Field::Message form errors multiline=true />
                <button
                    type="submit"
                    class="px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || status.get().is_sending()
                >
                    {move || if status.get().is_sending() { "Sending..." } else { "Send Message" }}
                </button>
                {move || {
                    let current = status.get();
                    current
                        .notice()
                        .map(|notice| {
                            let class = if current == SubmitStatus::Sent {
                                "p-3 rounded-md bg-green/20 text-green"
                            } else {
                                "p-3 rounded-md bg-red/20 text-red"
                            };
                            view! {
                                <p class=class role="status">
                                    {notice}
                                </p>
                            }
                        })
                }}
            </form>
            <div class="mt-8 text-center">
                <p class="mb-4">
                    "Or reach me directly at "
                    <a class="text-cyan" href=format!("mailto:{}", PROFILE.email)>
                        {PROFILE.email.clone()}
                    </a>
                </p>
                <div class="flex justify-center gap-4">
                    {PROFILE
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-2xl hover:text-cyan"
                                    aria-label=link.label.clone()
                                >
                                    <i class=link.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] multiline: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field));
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let v = event_target_value(&ev);
        form.update(|f| f.set(field, v));
    };
    let class = move || {
        if error().is_some() {
            "w-full px-4 py-2 rounded-md border border-red bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-red"
        } else {
            "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-cyan"
        }
    };

    view! {
        <div class="flex flex-col gap-1">
            <label for=field.id() class="font-medium">
                {field.label()}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=field.id()
                            rows="6"
                            class=class
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=field.id()
                            type=input_type
                            class=class
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || error().map(|msg| view! { <p class="text-sm text-red">{msg}</p> })}
        </div>
    }
}
