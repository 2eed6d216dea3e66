use crate::local_storage::BrowserStore;
use crate::{document, element_by_id};

use homepage_core::persisted::Theme;
use homepage_core::storage::KeyValueStore;
use homepage_core::THEME_STORAGE_KEY;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const TOGGLE_ID: &'static str = "themeToggle";

pub fn init(storage: BrowserStore) {
    apply(Theme::from_stored(storage.get(THEME_STORAGE_KEY).as_deref()));

    let on_toggle = Closure::<dyn FnMut()>::new(move || {
        let next = Theme::from_stored(storage.get(THEME_STORAGE_KEY).as_deref()).toggled();
        storage.set(THEME_STORAGE_KEY, next.as_str());
        apply(next);
    });

    element_by_id(TOGGLE_ID)
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_toggle.as_ref().unchecked_ref()));
    on_toggle.forget();
}

fn apply(theme: Theme) {
    let body = document().body().unwrap();
    let toggle = element_by_id(TOGGLE_ID);

    match theme {
        Theme::Dark => {
            body.class_list().add_1("dark").unwrap();
            toggle.set_text_content(Some("🌞 Light theme"));
        }
        Theme::Light => {
            body.class_list().remove_1("dark").unwrap();
            toggle.set_text_content(Some("🌓 Dark theme"));
        }
    }
}
