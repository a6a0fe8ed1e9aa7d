use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::hooks::use_reveal;
use crate::contact::{
    submit, ContactForm, Field, FormTransport, SubmitError, SubmitStatus, FORM_CONTENT_TYPE,
    FORM_NAME, HONEYPOT_FIELD,
};
use crate::content::{CONTACT_INFO, CONTACT_SOCIALS};
use crate::motion::SECTION_RELAXED;
use crate::navigation::Anchor;
use crate::reveal::VisibilityOptions;

/// Posts through the browser's `fetch`.
struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn post_form(&self, path: &str, body: String) -> Result<u16, SubmitError> {
        let response = Request::post(path)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .map_err(|err| SubmitError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        Ok(response.status())
    }
}

fn field_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let (node, visible) = use_reveal(VisibilityOptions::default());
    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();
    let item = |index: usize| SECTION_RELAXED.item_style(visible, index);

    let oninput = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = field_value(&event) {
                form.borrow_mut().draft.set(field, value);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let form = Rc::clone(&form);
            let redraw = redraw.clone();
            spawn_local(async move {
                // Outcome is already logged and reflected in the form state.
                let _ = submit(&form, &FetchTransport, move || redraw.force_update()).await;
            });
        })
    };

    let snapshot = form.borrow().clone();
    let draft = &snapshot.draft;
    let busy = snapshot.is_busy();

    html! {
        <section id={Anchor::Contact.id()} class="section">
            <div class="section-container">
                <div ref={node} class="section-inner" style={SECTION_RELAXED.container_style(visible)}>
                    <div class="section-header" style={item(0)}>
                        <h2>{"Get In "}<span class="gradient-text">{"Touch"}</span></h2>
                        <p>{"Have a project in mind or want to collaborate? I'd love to hear from you!"}</p>
                    </div>

                    <div class="contact-grid">
                        <div class="card" style={item(1)}>
                            <h3 class="gradient-text">{"Send me a message"}</h3>
                            <form name={FORM_NAME} method="POST" class="contact-form" {onsubmit}>
                                <input type="hidden" name="form-name" value={FORM_NAME} />
                                <div class="visually-hidden" aria-hidden="true">
                                    <input name={HONEYPOT_FIELD} tabindex="-1" autocomplete="off" />
                                </div>

                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="name">{"Name"}</label>
                                        <input
                                            type="text"
                                            id="name"
                                            name={Field::Name.name()}
                                            value={draft.name.clone()}
                                            oninput={oninput(Field::Name)}
                                            required={true}
                                            placeholder="Your Name"
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="email">{"Email"}</label>
                                        <input
                                            type="email"
                                            id="email"
                                            name={Field::Email.name()}
                                            value={draft.email.clone()}
                                            oninput={oninput(Field::Email)}
                                            required={true}
                                            placeholder="your@email.com"
                                        />
                                    </div>
                                </div>

                                <div class="form-field">
                                    <label for="subject">{"Subject"}</label>
                                    <input
                                        type="text"
                                        id="subject"
                                        name={Field::Subject.name()}
                                        value={draft.subject.clone()}
                                        oninput={oninput(Field::Subject)}
                                        required={true}
                                        placeholder="Project Discussion"
                                    />
                                </div>

                                <div class="form-field">
                                    <label for="message">{"Message"}</label>
                                    <textarea
                                        id="message"
                                        name={Field::Message.name()}
                                        value={draft.message.clone()}
                                        oninput={oninput(Field::Message)}
                                        required={true}
                                        rows="5"
                                        placeholder="Tell me about your project..."
                                    />
                                </div>

                                <button type="submit" class="button button-primary button-wide" disabled={busy}>
                                    if busy {
                                        <span class="spinner" aria-hidden="true" />
                                    } else {
                                        <span aria-hidden="true">{"➤"}</span>
                                    }
                                    <span>{snapshot.submit_label()}</span>
                                </button>

                                if let Some(notice) = snapshot.notice() {
                                    <p
                                        class={classes!("form-notice", (*snapshot.status() == SubmitStatus::Failed).then_some("is-error"))}
                                        role="status"
                                    >
                                        {notice}
                                    </p>
                                }
                            </form>
                        </div>

                        <div class="contact-aside" style={item(2)}>
                            <div class="card">
                                <h3 class="gradient-text">{"Contact Information"}</h3>
                                { for CONTACT_INFO.iter().map(|info| html! {
                                    <a key={info.title} class="contact-info" href={info.href}>
                                        <h4>{info.title}</h4>
                                        <p>{info.value}</p>
                                    </a>
                                }) }
                            </div>

                            <div class="card">
                                <h3 class="gradient-text">{"Follow me"}</h3>
                                <div class="social-row">
                                    { for CONTACT_SOCIALS.iter().map(|social| html! {
                                        <a key={social.label} class="social-icon" href={social.href} aria-label={social.label}>
                                            {social.label}
                                        </a>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
