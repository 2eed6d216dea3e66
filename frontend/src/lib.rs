extern crate console_error_panic_hook;
extern crate homepage_core;
extern crate js_sys;
extern crate wasm_bindgen;
extern crate wasm_bindgen_test;
extern crate web_sys;

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

pub mod auth;
pub mod captcha;
pub mod feedback;
pub mod gallery;
pub mod local_storage;
pub mod posts;
pub mod theme;

use homepage_core::accounts::AccountStore;
use homepage_core::events;
use homepage_core::persisted::Session;
use homepage_core::posts::PostStore;
use local_storage::BrowserStore;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);
}

/// Both stores over the one browser substrate, plus the current session.
/// Handlers share it through an `Rc<RefCell<..>>`.
pub struct App {
    pub accounts: AccountStore<BrowserStore>,
    pub posts: PostStore<BrowserStore>,
    pub session: Session,
}

pub fn get_local_storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn element_by_id(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

pub fn alert(message: &str) {
    web_sys::window().unwrap().alert_with_message(message).unwrap();
}

#[wasm_bindgen]
pub fn bootstrap() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let storage = BrowserStore::new(get_local_storage());
    let (event_sender, _events) = events::channel();

    let account_store = AccountStore::new(storage.clone(), event_sender.clone());
    let post_store = PostStore::new(storage.clone(), event_sender);
    let session = account_store.current_session();

    let app = Rc::new(RefCell::new(App {
        accounts: account_store,
        posts: post_store,
        session,
    }));

    theme::init(storage);
    gallery::init();
    auth::init(app.clone());
    posts::init(app.clone());
    feedback::init();
    captcha::schedule_load_check();

    // same as the page it replaces: signed-in visitors see their posts,
    // everyone else is asked to sign in first
    if app.borrow().session.is_signed_in() {
        posts::render(&app);
    } else {
        auth::toggle_modal(true);
    }
}
