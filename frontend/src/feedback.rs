use crate::{captcha, element_by_id};

use homepage_core::feedback::{self, Feedback, FeedbackError};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, XmlHttpRequest};

pub const FORM_ID: &'static str = "feedbackForm";
pub const MESSAGE_ID: &'static str = "formMessage";
pub const SUBMIT_ID: &'static str = "submitBtn";

pub const MESSAGE_HIDE_MS: i32 = 5000;

pub fn init() {
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        submit();
    });

    element_by_id(FORM_ID)
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onsubmit(Some(on_submit.as_ref().unchecked_ref()));
    on_submit.forget();
}

fn submit() {
    let form = element_by_id(FORM_ID);
    let feedback = read_form(&form);

    if let Err(err) = feedback.validate() {
        show_message(err.user_message(), "error");
        return;
    }
    if let Err(err) = feedback::check_challenge(captcha::is_loaded(), captcha::is_solved()) {
        show_message(err.user_message(), "error");
        return;
    }

    set_submitting(true);

    let action = form.dyn_ref::<HtmlFormElement>().unwrap().action();

    let request = XmlHttpRequest::new().unwrap();
    request.open("POST", &action).unwrap();
    request.set_request_header("Accept", "application/json").unwrap();
    request
        .set_request_header("X-Requested-With", "XMLHttpRequest")
        .unwrap();
    request
        .set_request_header("Content-Type", "application/x-www-form-urlencoded")
        .unwrap();

    // whatever the outcome, the submit control comes back
    let request0 = request.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || {
        match feedback::submission_outcome(request0.status().unwrap_or(0)) {
            Ok(()) => {
                show_message("Message sent! I will reply soon.", "success");
                element_by_id(FORM_ID)
                    .dyn_ref::<HtmlFormElement>()
                    .unwrap()
                    .reset();
                captcha::reset();
            }
            Err(err) => show_message(err.user_message(), "error"),
        }
        set_submitting(false);
    });
    request.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    let on_error = Closure::<dyn FnMut()>::new(move || {
        show_message(FeedbackError::NetworkFailure.user_message(), "error");
        set_submitting(false);
    });
    request.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    request.send_with_opt_str(Some(&feedback.form_body())).unwrap();
}

fn read_form(form: &Element) -> Feedback {
    Feedback {
        name: input_value(form, "input[name='name']"),
        email: input_value(form, "input[type='email']"),
        message: textarea_value(form, "textarea"),
    }
}

fn input_value(form: &Element, selector: &str) -> String {
    form.query_selector(selector)
        .unwrap()
        .and_then(|field| field.dyn_ref::<HtmlInputElement>().map(|field| field.value()))
        .unwrap_or_default()
}

fn textarea_value(form: &Element, selector: &str) -> String {
    form.query_selector(selector)
        .unwrap()
        .and_then(|field| {
            field
                .dyn_ref::<HtmlTextAreaElement>()
                .map(|field| field.value())
        })
        .unwrap_or_default()
}

fn set_submitting(submitting: bool) {
    let button = element_by_id(SUBMIT_ID);
    let button = button.dyn_ref::<HtmlButtonElement>().unwrap();

    button.set_disabled(submitting);
    button.set_text_content(Some(if submitting { "Sending..." } else { "Send" }));
}

/// Transient status line under the form; hides itself after a few seconds.
pub fn show_message(text: &str, kind: &str) {
    let message = element_by_id(MESSAGE_ID);
    message.set_text_content(Some(text));
    message.set_class_name(kind);

    let hide = Closure::<dyn FnMut()>::new(move || {
        element_by_id(MESSAGE_ID).class_list().add_1("hidden").unwrap();
    });
    web_sys::window()
        .unwrap()
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.as_ref().unchecked_ref(),
            MESSAGE_HIDE_MS,
        )
        .unwrap();
    hide.forget();
}
