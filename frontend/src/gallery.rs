use crate::{document, element_by_id};

use homepage_core::gallery::{Gallery, AUTO_ADVANCE_MS};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

type TimerHandle = Rc<RefCell<Option<i32>>>;

pub fn init() {
    let total = document()
        .query_selector_all(".gallery-img")
        .unwrap()
        .length() as usize;

    let gallery = Rc::new(RefCell::new(Gallery::new(total)));
    let timer: TimerHandle = Rc::new(RefCell::new(None));

    show_slide(0);

    let gallery0 = gallery.clone();
    let tick = Rc::new(Closure::<dyn FnMut()>::new(move || {
        let change = gallery0.borrow_mut().tick();
        show_slide(change.index);
    }));

    let change = gallery.borrow_mut().start();
    if change.restart_timer {
        restart_timer(&timer, &tick);
    }

    let gallery1 = gallery.clone();
    let timer1 = timer.clone();
    let tick1 = tick.clone();
    let on_next = Closure::<dyn FnMut()>::new(move || {
        let change = gallery1.borrow_mut().next();
        show_slide(change.index);
        if change.restart_timer {
            restart_timer(&timer1, &tick1);
        }
    });
    element_by_id("nextBtn")
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_next.as_ref().unchecked_ref()));
    on_next.forget();

    let on_prev = Closure::<dyn FnMut()>::new(move || {
        let change = gallery.borrow_mut().prev();
        show_slide(change.index);
        if change.restart_timer {
            restart_timer(&timer, &tick);
        }
    });
    element_by_id("prevBtn")
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_prev.as_ref().unchecked_ref()));
    on_prev.forget();
}

fn show_slide(index: usize) {
    let images = document().query_selector_all(".gallery-img").unwrap();

    for at in 0..images.length() {
        if let Some(node) = images.item(at) {
            let image: &Element = node.unchecked_ref();
            if at as usize == index {
                image.class_list().add_1("active").unwrap();
            } else {
                image.class_list().remove_1("active").unwrap();
            }
        }
    }
}

/// The one place the interval is armed. Manual navigation and startup both
/// come through here, so a click can never race a pending tick.
fn restart_timer(timer: &TimerHandle, tick: &Closure<dyn FnMut()>) {
    let window = web_sys::window().unwrap();

    if let Some(handle) = timer.borrow_mut().take() {
        window.clear_interval_with_handle(handle);
    }

    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            AUTO_ADVANCE_MS,
        )
        .unwrap();
    *timer.borrow_mut() = Some(handle);
}
