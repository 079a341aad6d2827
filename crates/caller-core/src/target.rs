//! Target - 呼び出し対象の関数
//!
//! # 二層構造
//! - **表層（Typed）**: `FunctionTarget<F, A>` - 引数型 `A` に単相化される
//! - **内部（Dyn）**: `DynTarget` - object-safe, `Caller` が `Box<dyn DynTarget>` で保持
//!
//! 型消去は `DynTarget` の境界でだけ行われるので、確保・デコード・呼び出しは
//! すべて具体的な `A` のまま実行されます。

use std::marker::PhantomData;

use crate::deserializer::Deserializer;
use crate::destination::{Argument, Slot};
use crate::error::DecodeError;
use crate::signature::ParamType;

/// DynTarget は object-safe な呼び出し対象
pub trait DynTarget: Send + Sync {
    fn param_type(&self) -> ParamType;

    /// allocate → deserialize → invoke
    fn call_dyn(&self, payload: &[u8], deserializer: &Deserializer) -> Result<(), DecodeError>;
}

/// A single-argument, unit-returning function bound to its argument type.
pub struct FunctionTarget<F, A> {
    func: F,
    _marker: PhantomData<fn(A)>,
}

impl<F, A> FunctionTarget<F, A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Argument,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }

    pub(crate) fn allocate(&self) -> Slot<A> {
        Slot::new()
    }

    /// Runs `deserializer` against a fresh slot. On error the slot is dropped.
    pub(crate) fn deserialize(
        &self,
        payload: &[u8],
        deserializer: &Deserializer,
    ) -> Result<Slot<A>, DecodeError> {
        let mut slot = self.allocate();
        deserializer.deserialize(payload, &mut slot)?;
        Ok(slot)
    }

    pub(crate) fn invoke(&self, slot: Slot<A>) {
        (self.func)(slot.into_inner())
    }
}

impl<F, A> DynTarget for FunctionTarget<F, A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Argument,
{
    fn param_type(&self) -> ParamType {
        ParamType::of::<A>()
    }

    fn call_dyn(&self, payload: &[u8], deserializer: &Deserializer) -> Result<(), DecodeError> {
        let slot = self.deserialize(payload, deserializer)?;
        self.invoke(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default, Clone, PartialEq, Deserialize)]
    struct Message {
        body: String,
    }

    const PAYLOAD: &[u8] = br#"{"body":"Success!"}"#;

    fn silent(_: Message) {}

    #[test]
    fn allocate_returns_fresh_zero_values() {
        let target = FunctionTarget::new(silent);
        let a = target.allocate();
        let b = target.allocate();
        assert_eq!(a.get(), &Message::default());
        assert_eq!(b.get(), &Message::default());
    }

    #[test]
    fn deserialize_success() {
        let target = FunctionTarget::new(silent);
        let slot = target.deserialize(PAYLOAD, &Deserializer::json()).unwrap();
        assert_eq!(slot.get().body, "Success!");
    }

    #[test]
    fn deserialize_failure() {
        let target = FunctionTarget::new(silent);
        let err = target.deserialize(b"{", &Deserializer::json());
        assert!(err.is_err());
    }

    #[test]
    fn invoke_passes_value() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let target = FunctionTarget::new(move |m: Message| sink.lock().unwrap().push(m.body));

        let slot = target.deserialize(PAYLOAD, &Deserializer::json()).unwrap();
        target.invoke(slot);

        assert_eq!(*seen.lock().unwrap(), vec!["Success!".to_string()]);
    }

    #[test]
    fn call_dyn_skips_target_on_decode_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let target: Box<dyn DynTarget> = Box::new(FunctionTarget::new(move |_: Message| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(target.call_dyn(b"{", &Deserializer::json()).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        target.call_dyn(PAYLOAD, &Deserializer::json()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(target.param_type().is::<Message>());
    }
}
