//! Router - topic から Caller への対応付け
//!
//! 初期化時に登録し（mutable）、実行時は共有参照だけで dispatch します（immutable）。

use std::collections::HashMap;

use caller_core::{Caller, CallerError, Candidate, DecodeError};
use thiserror::Error;

use crate::envelope::Envelope;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no handler registered for topic={0}")]
    UnknownTopic(String),

    #[error("duplicate handler for topic={0}")]
    DuplicateTopic(String),

    #[error("invalid handler for topic={topic}: {source}")]
    InvalidHandler {
        topic: String,
        #[source]
        source: CallerError,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Default)]
pub struct Router {
    callers: HashMap<String, Caller>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            callers: HashMap::new(),
        }
    }

    /// Wraps `handler` in a `Caller` and routes `topic` to it.
    pub fn register<C, M>(&mut self, topic: impl Into<String>, handler: C) -> Result<(), RouteError>
    where
        C: Candidate<M>,
    {
        let topic = topic.into();
        let caller = match Caller::new(handler) {
            Ok(caller) => caller,
            Err(source) => return Err(RouteError::InvalidHandler { topic, source }),
        };
        self.register_caller(topic, caller)
    }

    pub fn register_caller(
        &mut self,
        topic: impl Into<String>,
        caller: Caller,
    ) -> Result<(), RouteError> {
        let topic = topic.into();
        if self.callers.contains_key(&topic) {
            return Err(RouteError::DuplicateTopic(topic));
        }
        log::debug!("route {topic} -> {}", caller.param_type());
        self.callers.insert(topic, caller);
        Ok(())
    }

    pub fn dispatch(&self, envelope: &Envelope) -> Result<(), RouteError> {
        let caller = self
            .callers
            .get(&envelope.topic)
            .ok_or_else(|| RouteError::UnknownTopic(envelope.topic.clone()))?;
        caller.call(&envelope.payload)?;
        Ok(())
    }

    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = self.callers.keys().map(String::as_str).collect();
        topics.sort_unstable();
        topics
    }

    pub fn len(&self) -> usize {
        self.callers.len()
    }
}
