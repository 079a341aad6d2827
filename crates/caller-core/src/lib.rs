//! caller-core
//!
//! Turns a one-argument function into a handler for raw payloads: each call
//! allocates a fresh argument, decodes the payload into it and invokes the
//! function with it.
//!
//! # モジュール構成
//! - **caller**: `Caller`（構築時の形状検証 + 呼び出し）
//! - **candidate**: `Candidate` trait（関数 / 値の形を報告）
//! - **signature**: 実行時の型記述子（`ParamType`, `Signature`）
//! - **target**: 型消去された呼び出し対象（`DynTarget`）
//! - **destination**: デシリアライザの書き込み先（`Destination`, `Slot`）
//! - **deserializer**: 差し替え可能なデコード戦略（デフォルトは JSON）
//! - **error**: `CallerError`, `DecodeError`

pub mod caller;
pub mod candidate;
pub mod deserializer;
pub mod destination;
pub mod error;
pub mod signature;
pub mod target;

pub use self::caller::Caller;
pub use self::candidate::{Candidate, NotCallable, Opaque};
pub use self::deserializer::Deserializer;
pub use self::destination::{Argument, Destination, Slot};
pub use self::error::{BoxError, CallerError, DecodeError};
pub use self::signature::{Kind, ParamType, Signature};
pub use self::target::DynTarget;
