use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notification, Toast, ToastKind};
use crate::config;

pub const BUDGET_RANGES: [&str; 5] = [
    "Less than $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "More than $50,000",
];

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormData {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormErrors {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub budget: Option<String>,
    pub requirements: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile.is_none()
            && self.email.is_none()
            && self.company.is_none()
            && self.budget.is_none()
            && self.requirements.is_none()
    }
}

// local@domain.tld, no whitespace, single '@', at least one '.' in the
// domain. Matches the check the backend runs on the same payload.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

/// Checks every field and reports all failures together so the form can show
/// them at once. Runs before any network call; no request is issued while
/// this returns errors.
pub fn validate_form(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if data.mobile.trim().is_empty() {
        errors.mobile = Some("Mobile number is required".to_string());
    }
    if data.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(data.email.trim()) {
        errors.email = Some("Invalid email format".to_string());
    }
    if data.company.trim().is_empty() {
        errors.company = Some("Company name is required".to_string());
    }
    if !BUDGET_RANGES.contains(&data.budget.as_str()) {
        errors.budget = Some("Please select a budget range".to_string());
    }
    if data.requirements.trim().is_empty() {
        errors.requirements = Some("Requirements are required".to_string());
    }

    errors
}

#[derive(Debug, PartialEq)]
enum SubmitAction {
    /// A submission is already in flight; this attempt is dropped.
    Ignore,
    /// Validation failed; show the per-field errors, issue no request.
    Reject(FormErrors),
    /// Validation passed; issue exactly one request.
    Send,
}

/// Decides what one submit attempt does. A pending request blocks re-entrant
/// submits until it resolves, and validation runs before any network
/// activity.
fn next_submit_action(in_flight: bool, data: &FormData) -> SubmitAction {
    if in_flight {
        return SubmitAction::Ignore;
    }
    let errors = validate_form(data);
    if errors.is_empty() {
        SubmitAction::Send
    } else {
        SubmitAction::Reject(errors)
    }
}

/// Maps the outcome of one submit round-trip to the next form state and the
/// toast to show. Only a confirmed delivery clears the form; on failure the
/// entered values stay so the user can retry.
fn resolve_submission(succeeded: bool) -> (Option<FormData>, Toast) {
    if succeeded {
        (
            Some(FormData::default()),
            Toast {
                kind: ToastKind::Success,
                message: "Message sent successfully! We'll get back to you soon.".to_string(),
            },
        )
    } else {
        (
            None,
            Toast {
                kind: ToastKind::Error,
                message: "Failed to send message. Please try again later.".to_string(),
            },
        )
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form_data = use_state(FormData::default);
    let errors = use_state(FormErrors::default);
    let is_submitting = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    // Pending auto-dismiss for the current toast. Replacing the value drops
    // the previous Timeout, which cancels it, so an old timer never clears a
    // newer toast.
    let dismiss_timer = use_state(|| None::<Timeout>);

    let on_name = {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            data.name = input.value();
            form_data.set(data);
        })
    };
    let on_mobile = {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            data.mobile = input.value();
            form_data.set(data);
        })
    };
    let on_email = {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            data.email = input.value();
            form_data.set(data);
        })
    };
    let on_company = {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            data.company = input.value();
            form_data.set(data);
        })
    };
    let on_budget = {
        let form_data = form_data.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            data.budget = select.value();
            form_data.set(data);
        })
    };
    let on_requirements = {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            data.requirements = textarea.value();
            form_data.set(data);
        })
    };

    let onsubmit = {
        let form_data = form_data.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();
        let dismiss_timer = dismiss_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match next_submit_action(*is_submitting, &form_data) {
                SubmitAction::Ignore => {}
                SubmitAction::Reject(new_errors) => {
                    errors.set(new_errors);
                    toast.set(Some(Toast {
                        kind: ToastKind::Error,
                        message: "Please fill in all required fields correctly".to_string(),
                    }));
                    let toast_setter = toast.clone();
                    dismiss_timer
                        .set(Some(Timeout::new(4_000, move || toast_setter.set(None))));
                }
                SubmitAction::Send => {
                    errors.set(FormErrors::default());
                    is_submitting.set(true);
                    toast.set(Some(Toast {
                        kind: ToastKind::Loading,
                        message: "Sending your message...".to_string(),
                    }));
                    // The loading toast stays until the request resolves
                    dismiss_timer.set(None);

                    let payload = (*form_data).clone();
                    let form_data = form_data.clone();
                    let is_submitting = is_submitting.clone();
                    let toast = toast.clone();
                    let dismiss_timer = dismiss_timer.clone();
                    spawn_local(async move {
                        let result =
                            Request::post(&format!("{}/api/contact", config::get_backend_url()))
                                .json(&payload)
                                .unwrap()
                                .send()
                                .await;

                        let succeeded = matches!(&result, Ok(response) if response.ok());
                        let (next_form, next_toast) = resolve_submission(succeeded);
                        if let Some(reset) = next_form {
                            form_data.set(reset);
                        }
                        toast.set(Some(next_toast));
                        is_submitting.set(false);

                        let toast_setter = toast.clone();
                        dismiss_timer
                            .set(Some(Timeout::new(4_000, move || toast_setter.set(None))));
                    });
                }
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        background: #f9fafb;
                        padding: 5rem 1rem;
                    }
                    .contact-container {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .contact-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .contact-header h2 {
                        font-size: 2.5rem;
                        font-weight: bold;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .contact-header p {
                        font-size: 1.25rem;
                        color: #4b5563;
                    }
                    .contact-form {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                        padding: 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        color: #374151;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        background: #fff;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #2563eb;
                        box-shadow: 0 0 0 2px rgba(37, 99, 235, 0.3);
                    }
                    .form-field.has-error input,
                    .form-field.has-error select,
                    .form-field.has-error textarea {
                        border-color: #ef4444;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin: 0.25rem 0 0;
                    }
                    .form-field.full-width {
                        grid-column: 1 / -1;
                    }
                    .submit-button {
                        grid-column: 1 / -1;
                        background: #2563eb;
                        color: #fff;
                        font-weight: bold;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .submit-button:hover {
                        background: #1d4ed8;
                    }
                    .submit-button:disabled {
                        background: #93c5fd;
                        cursor: not-allowed;
                    }
                    @media (max-width: 768px) {
                        .contact-form {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="contact-container">
                <div class="contact-header">
                    <h2>{"Get in Touch"}</h2>
                    <p>{"Let's discuss how we can help transform your business"}</p>
                </div>
                <form class="contact-form" {onsubmit}>
                    <div class={classes!("form-field", errors.name.as_ref().map(|_| "has-error"))}>
                        <label for="name">{"Full Name"}</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="John Doe"
                            value={form_data.name.clone()}
                            oninput={on_name}
                        />
                        if let Some(message) = &errors.name {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class={classes!("form-field", errors.mobile.as_ref().map(|_| "has-error"))}>
                        <label for="mobile">{"Mobile Number"}</label>
                        <input
                            type="tel"
                            id="mobile"
                            placeholder="+1 (555) 000-0000"
                            value={form_data.mobile.clone()}
                            oninput={on_mobile}
                        />
                        if let Some(message) = &errors.mobile {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class={classes!("form-field", errors.email.as_ref().map(|_| "has-error"))}>
                        <label for="email">{"Email Address"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="john@example.com"
                            value={form_data.email.clone()}
                            oninput={on_email}
                        />
                        if let Some(message) = &errors.email {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class={classes!("form-field", errors.company.as_ref().map(|_| "has-error"))}>
                        <label for="company">{"Company Name"}</label>
                        <input
                            type="text"
                            id="company"
                            placeholder="Your Company"
                            value={form_data.company.clone()}
                            oninput={on_company}
                        />
                        if let Some(message) = &errors.company {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class={classes!("form-field", "full-width", errors.budget.as_ref().map(|_| "has-error"))}>
                        <label for="budget">{"Project Budget"}</label>
                        <select id="budget" value={form_data.budget.clone()} onchange={on_budget}>
                            <option value="" selected={form_data.budget.is_empty()}>
                                {"Select your budget range"}
                            </option>
                            { for BUDGET_RANGES.iter().map(|range| html! {
                                <option value={*range} selected={form_data.budget == *range}>
                                    {*range}
                                </option>
                            }) }
                        </select>
                        if let Some(message) = &errors.budget {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class={classes!("form-field", "full-width", errors.requirements.as_ref().map(|_| "has-error"))}>
                        <label for="requirements">{"Project Requirements"}</label>
                        <textarea
                            id="requirements"
                            rows="5"
                            placeholder="Tell us about your project..."
                            value={form_data.requirements.clone()}
                            oninput={on_requirements}
                        />
                        if let Some(message) = &errors.requirements {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <button type="submit" class="submit-button" disabled={*is_submitting}>
                        { if *is_submitting { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </div>
            if let Some(current) = (*toast).clone() {
                <Notification toast={current} />
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            name: "Jane Doe".to_string(),
            mobile: "555-0100".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme".to_string(),
            budget: "$10,000 - $25,000".to_string(),
            requirements: "Need a chatbot".to_string(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_form(&valid_form()).is_empty());
    }

    #[test]
    fn blank_fields_each_get_their_own_error() {
        let mut data = valid_form();
        data.name = "  ".to_string();
        let errors = validate_form(&data);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert!(errors.mobile.is_none());

        let mut data = valid_form();
        data.requirements = String::new();
        let errors = validate_form(&data);
        assert_eq!(errors.requirements.as_deref(), Some("Requirements are required"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn unselected_budget_is_an_error() {
        let mut data = valid_form();
        data.budget = String::new();
        let errors = validate_form(&data);
        assert_eq!(errors.budget.as_deref(), Some("Please select a budget range"));
    }

    #[test]
    fn email_shape_is_checked_after_trimming() {
        for bad in ["no-at-sign", "jane@example", "jane@.com", "jane@ example.com", "@example.com"] {
            let mut data = valid_form();
            data.email = bad.to_string();
            let errors = validate_form(&data);
            assert_eq!(errors.email.as_deref(), Some("Invalid email format"), "{}", bad);
        }

        let mut data = valid_form();
        data.email = "  jane@example.com  ".to_string();
        assert!(validate_form(&data).is_empty());
    }

    #[test]
    fn empty_email_reports_missing_not_invalid() {
        let mut data = valid_form();
        data.email = " ".to_string();
        let errors = validate_form(&data);
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
    }

    #[test]
    fn pending_submission_suppresses_a_second_attempt() {
        // Even a fully valid form must not produce a second request while
        // one is outstanding.
        assert_eq!(next_submit_action(true, &valid_form()), SubmitAction::Ignore);
    }

    #[test]
    fn idle_form_sends_when_valid_and_rejects_when_not() {
        assert_eq!(next_submit_action(false, &valid_form()), SubmitAction::Send);

        match next_submit_action(false, &FormData::default()) {
            SubmitAction::Reject(errors) => assert!(!errors.is_empty()),
            other => panic!("expected Reject, got {:?}", other),
        }
    }

    #[test]
    fn success_resets_the_form_and_failure_preserves_it() {
        let (next_form, toast) = resolve_submission(true);
        assert_eq!(next_form, Some(FormData::default()));
        assert!(matches!(toast.kind, ToastKind::Success));

        let (next_form, toast) = resolve_submission(false);
        assert!(next_form.is_none());
        assert!(matches!(toast.kind, ToastKind::Error));
    }

    #[test]
    fn every_failure_is_reported_at_once() {
        let errors = validate_form(&FormData::default());
        assert!(errors.name.is_some());
        assert!(errors.mobile.is_some());
        assert!(errors.email.is_some());
        assert!(errors.company.is_some());
        assert!(errors.budget.is_some());
        assert!(errors.requirements.is_some());
    }
}
