//! # Serialization View
//!
//! Converts entities into a transmission-safe, string-keyed mapping. The
//! consumer picks the wire format; this layer only decides what is visible:
//! identifiers as canonical lowercase text, timestamps as epoch
//! milliseconds, secrets never.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::id::EntityId;
use crate::models::{Comment, Entity, Post, User};

/// Transmission-safe representation of an entity.
pub trait View {
    /// Field-name to value mapping, safe to hand to a wire encoder.
    fn to_view(&self) -> Map<String, Value>;
}

/// Milliseconds since epoch, rounded (not truncated) from microseconds.
fn epoch_millis(at: DateTime<Utc>) -> i64 {
    (at.timestamp_micros() + 500).div_euclid(1_000)
}

fn id_value(id: Option<EntityId>) -> Value {
    match id {
        Some(id) => Value::String(id.to_string()),
        None => Value::Null,
    }
}

fn optional(text: Option<&str>) -> Value {
    match text {
        Some(text) => Value::String(text.to_string()),
        None => Value::Null,
    }
}

impl View for User {
    /// The hash, salt, and activation token are deliberately absent.
    fn to_view(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".into(), id_value(self.id()));
        fields.insert("email".into(), Value::String(self.email().to_string()));
        fields.insert("name".into(), Value::String(self.name().to_string()));
        fields.insert("avatar".into(), optional(self.avatar()));
        fields
    }
}

impl View for Post {
    fn to_view(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".into(), id_value(self.id()));
        fields.insert("user_id".into(), id_value(Some(self.user_id())));
        fields.insert("title".into(), Value::String(self.title().to_string()));
        fields.insert("body".into(), Value::String(self.body().to_string()));
        fields.insert("subject".into(), Value::String(self.subject().to_string()));
        fields.insert("location".into(), optional(self.location()));
        fields.insert("created_at".into(), Value::from(epoch_millis(self.created_at())));
        fields
    }
}

impl View for Comment {
    fn to_view(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".into(), id_value(self.id()));
        fields.insert("post_id".into(), id_value(Some(self.post_id())));
        fields.insert("user_id".into(), id_value(Some(self.user_id())));
        fields.insert("parent_id".into(), id_value(self.parent_id()));
        fields.insert("body".into(), Value::String(self.body().to_string()));
        fields.insert("created_at".into(), Value::from(epoch_millis(self.created_at())));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn demo_user() -> User {
        User::new(
            None,
            "zoe@example.com",
            "Zoe",
            None,
            &"0123456789abcdef".repeat(8),
            &"0123456789abcdef".repeat(4),
            Some(&"ff".repeat(16)),
        )
        .unwrap()
    }

    #[test]
    fn user_view_excludes_secrets() {
        let view = demo_user().to_view();
        assert_eq!(view["email"], json!("zoe@example.com"));
        assert_eq!(view["name"], json!("Zoe"));
        assert!(!view.contains_key("hash"));
        assert!(!view.contains_key("salt"));
        assert!(!view.contains_key("activation_token"));
    }

    #[test]
    fn unsaved_post_view_has_null_id_and_millis() {
        let post = Post::new(
            None,
            EntityId::random(),
            "Hello",
            "World",
            "general",
            None,
            None,
        )
        .unwrap();
        let view = post.to_view();
        assert_eq!(view["id"], Value::Null);
        assert_eq!(view["title"], json!("Hello"));
        assert_eq!(view["body"], json!("World"));
        assert_eq!(view["location"], Value::Null);
        assert_eq!(
            view["created_at"].as_i64().unwrap(),
            epoch_millis(post.created_at())
        );
    }

    #[test]
    fn saved_entity_renders_lowercase_hyphenated_id() {
        let mut post =
            Post::new(None, EntityId::random(), "Hello", "World", "general", None, None).unwrap();
        let id = EntityId::parse("6EC0BD7F-11C0-43DA-975E-2A8AD9EBAE0B").unwrap();
        post.assign_id(id);
        assert_eq!(
            post.to_view()["id"],
            json!("6ec0bd7f-11c0-43da-975e-2a8ad9ebae0b")
        );
    }

    #[test]
    fn comment_view_carries_thread_references() {
        let parent = EntityId::random();
        let comment = Comment::new(
            None,
            EntityId::random(),
            EntityId::random(),
            Some(parent),
            "agreed",
            None,
        )
        .unwrap();
        let view = comment.to_view();
        assert_eq!(view["parent_id"], json!(parent.to_string()));
        assert_eq!(view["body"], json!("agreed"));
    }

    #[test]
    fn millis_round_rather_than_truncate() {
        let at = DateTime::from_timestamp_micros(1_700_000_000_001_500).unwrap();
        assert_eq!(epoch_millis(at), 1_700_000_000_002);
        let at = DateTime::from_timestamp_micros(1_700_000_000_001_499).unwrap();
        assert_eq!(epoch_millis(at), 1_700_000_000_001);
    }
}
