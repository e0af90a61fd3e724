use contracts::domain::contact::{ContactForm as ContactDraft, ContactStatus, SUCCESS_RESET_MS};
use contracts::domain::portfolio::PROFILE;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Hands the message to the visitor's mail client through a `mailto:` link.
fn open_mail_client(uri: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .location()
        .set_href(uri)
        .map_err(|e| format!("{e:?}"))
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(ContactStatus::Idle);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !status.get_untracked().accepts_input() {
            return;
        }
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let uri = match draft.validate().and_then(|_| draft.mailto_uri(PROFILE.email)) {
            Ok(uri) => uri,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        status.set(ContactStatus::Submitting);

        spawn_local(async move {
            // let the button label paint before the mail client takes focus
            TimeoutFuture::new(50).await;
            if let Err(e) = open_mail_client(&uri) {
                log::error!("could not open mail client: {}", e);
                error.set(Some("Could not open your mail client.".to_string()));
                status.set(ContactStatus::Idle);
                return;
            }
            status.set(ContactStatus::Success);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());

            TimeoutFuture::new(SUCCESS_RESET_MS).await;
            status.set(ContactStatus::Idle);
        });
    };

    let locked = move || !status.get().accepts_input();

    view! {
        <form class="contact-form" on:submit=submit novalidate=true>
            <label>
                <span>"Name"</span>
                <input
                    type="text"
                    required=true
                    placeholder="Ada Lovelace"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    disabled=locked
                />
            </label>
            <label>
                <span>"Email"</span>
                <input
                    type="email"
                    required=true
                    placeholder="ada@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=locked
                />
            </label>
            <label>
                <span>"Message"</span>
                <textarea
                    rows="5"
                    required=true
                    placeholder="Let's build something..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                    disabled=locked
                ></textarea>
            </label>
            {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
            <button
                type="submit"
                class=move || match status.get() {
                    ContactStatus::Success => "btn-primary success",
                    _ => "btn-primary",
                }
                disabled=locked
            >
                {move || status.get().button_label()}
            </button>
        </form>
    }
}
