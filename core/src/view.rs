use crate::persisted::{Post, Session};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const ANONYMOUS_AUTHOR: &'static str = "Anonymous";

/// Everything the renderer needs for one post row. Pure projection of the
/// post list and the viewing session; holds no state of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostView {
    pub id: Uuid,
    pub author_label: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub like_count: usize,
    pub liked_by_viewer: bool,
    pub deletable_by_viewer: bool,
}

impl PostView {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn like_glyph(&self) -> &'static str {
        if self.liked_by_viewer {
            "❤️"
        } else {
            "🤍"
        }
    }
}

pub fn project_posts(posts: &[Post], session: &Session) -> Vec<PostView> {
    posts
        .iter()
        .map(|post| {
            let viewer_is_author = match (session.user(), post.author.as_deref()) {
                (Some(viewer), Some(author)) => viewer == author,
                _ => false,
            };

            PostView {
                id: post.id,
                author_label: post
                    .author
                    .clone()
                    .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_owned()),
                content: post.content.clone(),
                date: post.date,
                like_count: post.like_count(),
                liked_by_viewer: session
                    .user()
                    .map(|viewer| post.liked_by(viewer))
                    .unwrap_or(false),
                deletable_by_viewer: viewer_is_author,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(author: Option<&str>, likes: &[&str]) -> Post {
        Post {
            id: Uuid::new_v4(),
            content: "hello".to_owned(),
            author: author.map(|name| name.to_owned()),
            date: Utc::now(),
            likes: likes.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn missing_author_renders_as_anonymous() {
        let views = project_posts(&[post(None, &[])], &Session::signed_in("alice"));
        assert_eq!(views[0].author_label, ANONYMOUS_AUTHOR);
        assert!(!views[0].deletable_by_viewer);
    }

    #[test]
    fn only_the_author_sees_the_delete_action() {
        let posts = [post(Some("alice"), &[])];

        let as_alice = project_posts(&posts, &Session::signed_in("alice"));
        assert!(as_alice[0].deletable_by_viewer);

        let as_bob = project_posts(&posts, &Session::signed_in("bob"));
        assert!(!as_bob[0].deletable_by_viewer);

        let anonymous = project_posts(&posts, &Session::anonymous());
        assert!(!anonymous[0].deletable_by_viewer);
    }

    #[test]
    fn like_glyph_follows_viewer_membership() {
        let posts = [post(Some("alice"), &["bob", "carol"])];

        let as_bob = project_posts(&posts, &Session::signed_in("bob"));
        assert!(as_bob[0].liked_by_viewer);
        assert_eq!(as_bob[0].like_glyph(), "❤️");
        assert_eq!(as_bob[0].like_count, 2);

        let as_alice = project_posts(&posts, &Session::signed_in("alice"));
        assert!(!as_alice[0].liked_by_viewer);
        assert_eq!(as_alice[0].like_glyph(), "🤍");
    }
}
