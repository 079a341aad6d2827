//! Caller - payload をデコードして関数を呼び出すアダプタ
//!
//! # 使用例
//! ```
//! use caller_core::Caller;
//! use serde::Deserialize;
//!
//! #[derive(Default, Deserialize)]
//! struct Message {
//!     body: String,
//! }
//!
//! let caller = Caller::new(|m: Message| println!("{}", m.body))?;
//! caller.call(br#"{"body":"Success!"}"#)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use crate::candidate::Candidate;
use crate::deserializer::Deserializer;
use crate::error::{CallerError, DecodeError};
use crate::signature::ParamType;
use crate::target::DynTarget;

/// Caller wraps a one-argument, unit-returning function and calls it with
/// arguments decoded from raw payloads.
///
/// `deserializer` is read on every call. Replacing it needs `&mut self`, so it
/// cannot change while calls are running through a shared reference.
pub struct Caller {
    pub deserializer: Deserializer,
    target: Box<dyn DynTarget>,
    param: ParamType,
}

impl Caller {
    /// 候補を検証して Caller を作成
    ///
    /// # 検証（この順序）
    /// 1. 関数でなければ `InvalidFunctionType`
    /// 2. 引数が 1 つでなければ `InvalidFunctionInArguments`
    /// 3. 戻り値があれば `InvalidFunctionOutArguments`
    pub fn new<C, M>(candidate: C) -> Result<Self, CallerError>
    where
        C: Candidate<M>,
    {
        let param = candidate.signature().validate()?;
        let target = candidate
            .into_target()
            .ok_or(CallerError::InvalidFunctionType)?;
        log::trace!("caller created for parameter type {param}");

        Ok(Self {
            deserializer: Deserializer::default(),
            target,
            param,
        })
    }

    pub fn with_deserializer(mut self, deserializer: Deserializer) -> Self {
        self.deserializer = deserializer;
        self
    }

    /// The captured parameter type of the wrapped function.
    pub fn param_type(&self) -> &ParamType {
        &self.param
    }

    /// Decodes `payload` into a fresh argument and calls the wrapped function.
    ///
    /// A decode error is returned as the deserializer produced it and the
    /// function is not called. Panics raised by the function are not caught.
    pub fn call(&self, payload: &[u8]) -> Result<(), DecodeError> {
        log::trace!(
            "calling {} handler with {} byte payload ({})",
            self.param,
            payload.len(),
            self.deserializer.name()
        );
        self.target.call_dyn(payload, &self.deserializer)
    }
}

impl fmt::Debug for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caller")
            .field("param", &self.param.name())
            .field("deserializer", &self.deserializer)
            .finish_non_exhaustive()
    }
}
