extern crate chrono;
extern crate env_logger;
extern crate log;
extern crate once_cell;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate tokio;
extern crate urlencoding;
extern crate uuid;

pub mod accounts;
pub mod errors;
pub mod events;
pub mod feedback;
pub mod gallery;
pub mod persisted;
pub mod posts;
pub mod repository;
pub mod storage;
pub mod view;

use std::io::Write;

// Key names match what the original page wrote, so data present in a
// visitor's browser stays readable.
pub const THEME_STORAGE_KEY: &'static str = "theme";
pub const USERS_STORAGE_KEY: &'static str = "users";
pub const CURRENT_USER_STORAGE_KEY: &'static str = "currentUser";
pub const POSTS_STORAGE_KEY: &'static str = "posts";

pub fn init_logger() {
    let _ = env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}
