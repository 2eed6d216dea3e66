use crate::{element_by_id, feedback, log};

use homepage_core::feedback::FeedbackError;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;

/// How long the third-party widget gets to appear before the page reports a
/// load failure.
pub const LOAD_CHECK_MS: i32 = 5000;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = grecaptcha, js_name = getResponse, catch)]
    fn challenge_response() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = grecaptcha, js_name = reset, catch)]
    fn challenge_reset() -> Result<(), JsValue>;
}

pub fn is_loaded() -> bool {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("grecaptcha")).unwrap_or(false)
}

pub fn is_solved() -> bool {
    if !is_loaded() {
        return false;
    }
    challenge_response()
        .ok()
        .and_then(|token| token.as_string())
        .map(|token| !token.is_empty())
        .unwrap_or(false)
}

pub fn reset() {
    if !is_loaded() {
        return;
    }
    let _ = challenge_reset();
    // a fresh challenge means the submit control waits for the next solve
    set_submit_enabled(false);
}

/// The widget never calling back is indistinguishable from it still loading,
/// so the page checks once after a fixed delay.
pub fn schedule_load_check() {
    let check = Closure::<dyn FnMut()>::new(move || {
        if !is_loaded() {
            log("challenge widget failed to load");
            feedback::show_message(FeedbackError::ChallengeLoadFailure.user_message(), "error");
        }
    });

    web_sys::window()
        .unwrap()
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            check.as_ref().unchecked_ref(),
            LOAD_CHECK_MS,
        )
        .unwrap();
    check.forget();
}

/// Global the widget invokes once the visitor solves the challenge.
#[wasm_bindgen(js_name = onRecaptchaSuccess)]
pub fn on_challenge_solved() {
    set_submit_enabled(true);
}

fn set_submit_enabled(enabled: bool) {
    element_by_id(feedback::SUBMIT_ID)
        .dyn_ref::<HtmlButtonElement>()
        .unwrap()
        .set_disabled(!enabled);
}
