use crate::{alert, document, element_by_id, posts, App};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

pub const MODAL_ID: &'static str = "authModal";

pub fn init(app: Rc<RefCell<App>>) {
    let modal = element_by_id(MODAL_ID);

    // clicking the backdrop (not the dialog inside it) closes the modal
    let modal_target: JsValue = modal.clone().into();
    let on_backdrop = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(target) = event.target() {
            if JsValue::from(target) == modal_target {
                toggle_modal(false);
            }
        }
    });
    modal
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_backdrop.as_ref().unchecked_ref()));
    on_backdrop.forget();

    let on_close = Closure::<dyn FnMut()>::new(move || toggle_modal(false));
    document()
        .query_selector(".modal-content .close")
        .unwrap()
        .unwrap()
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();

    let app0 = app.clone();
    let on_login = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let outcome = app0
            .borrow()
            .accounts
            .login(&input_value("username"), &input_value("password"));

        match outcome {
            Ok(session) => {
                app0.borrow_mut().session = session;
                toggle_modal(false);
                posts::render(&app0);
            }
            Err(err) => alert(err.user_message()),
        }
    });
    element_by_id("authForm")
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onsubmit(Some(on_login.as_ref().unchecked_ref()));
    on_login.forget();

    // register then sign straight in, like the page always did
    let on_register = Closure::<dyn FnMut()>::new(move || {
        let username = input_value("username");
        let password = input_value("password");

        let outcome = app
            .borrow()
            .accounts
            .register(&username, &password)
            .and_then(|_| app.borrow().accounts.login(&username, &password));

        match outcome {
            Ok(session) => {
                app.borrow_mut().session = session;
                toggle_modal(false);
                posts::render(&app);
            }
            Err(err) => alert(err.user_message()),
        }
    });
    element_by_id("registerBtn")
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_register.as_ref().unchecked_ref()));
    on_register.forget();
}

pub fn toggle_modal(show: bool) {
    element_by_id(MODAL_ID)
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .set_property("display", if show { "flex" } else { "none" })
        .unwrap();
}

fn input_value(id: &str) -> String {
    element_by_id(id).dyn_ref::<HtmlInputElement>().unwrap().value()
}
