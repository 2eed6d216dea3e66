use crate::{alert, auth, document, element_by_id, App};

use homepage_core::errors::StoreError;
use homepage_core::view::{project_posts, PostView};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlTextAreaElement};

pub const COMPOSER_ID: &'static str = "postContent";
pub const CONTAINER_ID: &'static str = "postsContainer";

pub fn init(app: Rc<RefCell<App>>) {
    let on_post = Closure::<dyn FnMut()>::new(move || {
        if !app.borrow().session.is_signed_in() {
            auth::toggle_modal(true);
            return;
        }

        let composer = element_by_id(COMPOSER_ID);
        let composer = composer.dyn_ref::<HtmlTextAreaElement>().unwrap();

        let outcome = {
            let app = app.borrow();
            app.posts.create(&composer.value(), &app.session)
        };

        match outcome {
            Ok(_) => {
                composer.set_value("");
                render(&app);
            }
            // empty content is silently ignored, like the page it replaces
            Err(StoreError::EmptyField) => {}
            Err(err) => alert(err.user_message()),
        }
    });

    element_by_id("postButton")
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_post.as_ref().unchecked_ref()));
    on_post.forget();
}

/// Rebuilds the whole post list from the projection. No incremental update;
/// the list is small and the substrate is re-read on every change anyway.
pub fn render(app: &Rc<RefCell<App>>) {
    let container = element_by_id(CONTAINER_ID);
    container.set_inner_html("");

    let views = {
        let app = app.borrow();
        project_posts(&app.posts.list(), &app.session)
    };

    for view in views {
        container.append_child(&post_element(app, &view)).unwrap();
    }
}

fn post_element(app: &Rc<RefCell<App>>, view: &PostView) -> Element {
    let document = document();

    let post = document.create_element("div").unwrap();
    post.set_class_name("post");
    post.set_attribute("data-id", &view.id.to_string()).unwrap();

    let header = document.create_element("div").unwrap();
    header.set_class_name("post-header");

    let author = document.create_element("strong").unwrap();
    author.set_text_content(Some(&view.author_label));
    header.append_child(&author).unwrap();

    if view.deletable_by_viewer {
        let delete = document.create_element("button").unwrap();
        delete.set_class_name("delete-post");
        delete.set_text_content(Some("Delete"));
        header.append_child(&delete).unwrap();

        let app0 = app.clone();
        let post_id = view.id;
        let on_delete = Closure::<dyn FnMut()>::new(move || {
            let outcome = {
                let app = app0.borrow();
                app.posts.delete(post_id, &app.session)
            };

            match outcome {
                Ok(true) => render(&app0),
                Ok(false) => {}
                Err(err) => {
                    // the post vanished under us; redraw what is left
                    alert(err.user_message());
                    render(&app0);
                }
            }
        });
        delete
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .set_onclick(Some(on_delete.as_ref().unchecked_ref()));
        on_delete.forget();
    }
    post.append_child(&header).unwrap();

    let content = document.create_element("div").unwrap();
    content.set_class_name("post-content");
    content.set_text_content(Some(&view.content));
    post.append_child(&content).unwrap();

    let actions = document.create_element("div").unwrap();
    actions.set_class_name("post-actions");

    let like = document.create_element("button").unwrap();
    like.set_class_name("like-btn");
    like.set_text_content(Some(&format!("{} {}", view.like_glyph(), view.like_count)));
    actions.append_child(&like).unwrap();

    let app1 = app.clone();
    let post_id = view.id;
    let on_like = Closure::<dyn FnMut()>::new(move || {
        let viewer = match app1.borrow().session.user() {
            Some(viewer) => viewer.to_owned(),
            None => {
                auth::toggle_modal(true);
                return;
            }
        };

        let outcome = app1.borrow().posts.toggle_like(post_id, &viewer);
        match outcome {
            Ok(_) => render(&app1),
            Err(err) => {
                alert(err.user_message());
                render(&app1);
            }
        }
    });
    like.dyn_ref::<HtmlElement>()
        .unwrap()
        .set_onclick(Some(on_like.as_ref().unchecked_ref()));
    on_like.forget();

    post.append_child(&actions).unwrap();

    let date = document.create_element("div").unwrap();
    date.set_class_name("post-date");
    date.set_text_content(Some(&view.date_label()));
    post.append_child(&date).unwrap();

    post
}
