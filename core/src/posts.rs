use crate::errors::StoreError;
use crate::events::{EventSender, StoreEvent};
use crate::persisted::{Post, Session};
use crate::repository::Repository;
use crate::storage::KeyValueStore;
use crate::POSTS_STORAGE_KEY;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

pub struct PostStore<S: KeyValueStore> {
    posts: Repository<Post, S>,
    events: EventSender,
}

impl<S: KeyValueStore> PostStore<S> {
    pub fn new(storage: S, events: EventSender) -> Self {
        PostStore {
            posts: Repository::new(storage, POSTS_STORAGE_KEY),
            events,
        }
    }

    /// Newest first. Insertion order is what the substrate holds; display
    /// order is its reverse.
    pub fn list(&self) -> Vec<Post> {
        let mut posts = self.posts.load();
        posts.reverse();
        posts
    }

    /// Appends a post authored by the session user, with a fresh id, the
    /// current timestamp and an empty like-set.
    pub fn create(&self, content: &str, session: &Session) -> Result<Post, StoreError> {
        let author = session.user().ok_or(StoreError::SignInRequired)?;

        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyField);
        }

        let post = Post {
            id: Uuid::new_v4(),
            content: content.to_owned(),
            author: Some(author.to_owned()),
            date: Utc::now(),
            likes: Vec::new(),
        };
        self.posts.append(post.clone());
        debug!("created post {} by {:?}", post.id, author);

        let _ = self.events.send(StoreEvent::PostCreated(post.id));
        Ok(post)
    }

    /// Flips membership of `username` in the like-set and returns the new
    /// membership. A stale id is a `NotFound`, not a silent mis-target.
    pub fn toggle_like(&self, post_id: Uuid, username: &str) -> Result<bool, StoreError> {
        let mut now_liked = false;

        let updated = self.posts.update_where(
            |post| post.id == post_id,
            |post| {
                match post.likes.iter().position(|liker| liker == username) {
                    Some(at) => {
                        post.likes.remove(at);
                        now_liked = false;
                    }
                    None => {
                        post.likes.push(username.to_owned());
                        now_liked = true;
                    }
                };
            },
        );
        if updated == 0 {
            return Err(StoreError::NotFound);
        }

        let _ = self.events.send(StoreEvent::PostLikeToggled(
            post_id,
            username.to_owned(),
            now_liked,
        ));
        Ok(now_liked)
    }

    /// Removes the post when the session user is its author. A foreign post
    /// is left alone (`Ok(false)`); a stale id is a `NotFound`.
    pub fn delete(&self, post_id: Uuid, session: &Session) -> Result<bool, StoreError> {
        let requester = session.user().ok_or(StoreError::SignInRequired)?;

        let posts = self.posts.load();
        let post = match posts.iter().find(|post| post.id == post_id) {
            Some(post) => post,
            None => return Err(StoreError::NotFound),
        };

        if post.author.as_deref() != Some(requester) {
            debug!("ignoring delete of {} by non-author {:?}", post_id, requester);
            return Ok(false);
        }

        self.posts.remove_where(|post| post.id == post_id);
        let _ = self.events.send(StoreEvent::PostDeleted(post_id));
        Ok(true)
    }
}
