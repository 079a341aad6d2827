use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

/// A message as it sits on the queue: routing topic plus an opaque payload.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub id: Ulid,
    pub topic: String,
    pub payload: Vec<u8>,
    pub enqueued_at: DateTime<Utc>,
}

impl Envelope {
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            id: Ulid::new(),
            topic: topic.into(),
            payload: payload.into(),
            enqueued_at: Utc::now(),
        }
    }

    /// JSON-encodes `body` as the payload.
    pub fn json<T: Serialize>(topic: impl Into<String>, body: &T) -> serde_json::Result<Self> {
        Ok(Self::new(topic, serde_json::to_vec(body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_envelope_carries_encoded_body() {
        let env = Envelope::json("user.greeted", &json!({ "name": "weaver" })).unwrap();
        assert_eq!(env.topic, "user.greeted");
        assert_eq!(env.payload, br#"{"name":"weaver"}"#.to_vec());
    }

    #[test]
    fn ids_are_unique() {
        let a = Envelope::new("t", b"{}".to_vec());
        let b = Envelope::new("t", b"{}".to_vec());
        assert_ne!(a.id, b.id);
    }
}
