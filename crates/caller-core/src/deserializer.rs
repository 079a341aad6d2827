//! Deserializer - 差し替え可能なデコード戦略
//!
//! 形は `(payload, destination) -> Result<(), DecodeError>`。
//! デフォルトは JSON（`Deserializer::json()`）。

use std::fmt;
use std::sync::Arc;

use crate::destination::Destination;
use crate::error::DecodeError;

type DecodeFn = dyn Fn(&[u8], &mut dyn Destination) -> Result<(), DecodeError> + Send + Sync;

/// Deserializer は payload を引数インスタンスに書き込む関数値
///
/// # 使用例
/// ```
/// use caller_core::{Caller, DecodeError, Deserializer};
///
/// let mut caller = Caller::new(|n: u64| assert_eq!(n, 42)).unwrap();
/// caller.deserializer = Deserializer::new(|payload, dest| {
///     let text = std::str::from_utf8(payload).map_err(DecodeError::custom)?;
///     dest.fill_json(text.trim().as_bytes())?;
///     Ok(())
/// });
/// caller.call(b"  42\n").unwrap();
/// ```
#[derive(Clone)]
pub struct Deserializer {
    decode: Arc<DecodeFn>,
    name: &'static str,
}

impl Deserializer {
    pub fn new<F>(decode: F) -> Self
    where
        F: Fn(&[u8], &mut dyn Destination) -> Result<(), DecodeError> + Send + Sync + 'static,
    {
        Self {
            decode: Arc::new(decode),
            name: "custom",
        }
    }

    /// JSON via `serde_json`.
    pub fn json() -> Self {
        Self::new(|payload, dest| {
            dest.fill_json(payload)?;
            Ok(())
        })
        .named("json")
    }

    /// Builds a deserializer from a function that parses the payload into a
    /// `serde_json::Value` tree first.
    ///
    /// Useful for formats that can transcode into the serde data model, or
    /// for unwrapping an outer envelope before the argument is filled.
    pub fn from_value<F>(parse: F) -> Self
    where
        F: Fn(&[u8]) -> Result<serde_json::Value, DecodeError> + Send + Sync + 'static,
    {
        Self::new(move |payload, dest| {
            let value = parse(payload)?;
            dest.fill_value(value)?;
            Ok(())
        })
        .named("value")
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn deserialize(
        &self,
        payload: &[u8],
        dest: &mut dyn Destination,
    ) -> Result<(), DecodeError> {
        (self.decode)(payload, dest)
    }
}

impl Default for Deserializer {
    fn default() -> Self {
        Self::json()
    }
}

impl fmt::Debug for Deserializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deserializer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::Slot;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Order {
        id: u64,
    }

    #[test]
    fn default_is_json() {
        let de = Deserializer::default();
        assert_eq!(de.name(), "json");

        let mut slot = Slot::<Order>::new();
        de.deserialize(br#"{"id":12}"#, &mut slot).unwrap();
        assert_eq!(slot.get().id, 12);
    }

    #[test]
    fn json_reports_trailing_garbage() {
        let mut slot = Slot::<Order>::new();
        let err = Deserializer::json()
            .deserialize(br#"{"id":1} x"#, &mut slot)
            .unwrap_err();
        assert!(err.is_json());
    }

    #[test]
    fn from_value_unwraps_an_envelope() {
        let de = Deserializer::from_value(|payload| {
            let mut outer: serde_json::Value = serde_json::from_slice(payload)?;
            Ok(outer["data"].take())
        })
        .named("envelope");
        assert_eq!(de.name(), "envelope");

        let mut slot = Slot::<Order>::new();
        de.deserialize(br#"{"type":"order","data":{"id":5}}"#, &mut slot)
            .unwrap();
        assert_eq!(slot.get().id, 5);
    }

    #[test]
    fn custom_error_is_returned_as_is() {
        let de = Deserializer::new(|_, _| Err(DecodeError::custom("nope")));
        let mut slot = Slot::<Order>::new();
        let err = de.deserialize(b"{}", &mut slot).unwrap_err();
        assert!(matches!(err, DecodeError::Custom(_)));
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn debug_shows_name() {
        let s = format!("{:?}", Deserializer::json());
        assert!(s.contains("json"));
    }
}
