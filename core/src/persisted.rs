use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Account {
    pub username: String,
    // stored in the clear, exactly like the page it replaces
    pub password: String,
}

/// The author + like-set post shape. Records written by the old anonymous
/// variant lack `author` and `likes`; the serde defaults keep them readable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub likes: Vec<String>,
}

impl Post {
    pub fn liked_by(&self, username: &str) -> bool {
        self.likes.iter().any(|liker| liker == username)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// The one current identity the page recognizes. Held explicitly and passed
/// to the stores instead of living in an ambient global.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Session { user: None }
    }

    pub fn signed_in(username: &str) -> Self {
        Session {
            user: Some(username.to_owned()),
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than a stored `"dark"` reads as light, matching how
    /// the original page checked the saved value.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_reads_stored_value() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("???")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn post_without_author_or_likes_still_deserializes() {
        let raw = format!(
            r#"{{"id":"{}","content":"hello","date":"2024-01-01T00:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let post: Post = serde_json::from_str(&raw).unwrap();

        assert_eq!(post.author, None);
        assert_eq!(post.like_count(), 0);
    }

    #[test]
    fn liked_by_is_exact_membership() {
        let post = Post {
            id: Uuid::new_v4(),
            content: "hello".to_owned(),
            author: Some("alice".to_owned()),
            date: Utc::now(),
            likes: vec!["bob".to_owned()],
        };

        assert!(post.liked_by("bob"));
        assert!(!post.liked_by("alice"));
        assert!(!post.liked_by("bo"));
    }
}
