//! Destination - デシリアライザの書き込み先
//!
//! 呼び出しごとに確保される引数インスタンス（`Slot<A>`）を、
//! 型を知らないデシリアライザからは `&mut dyn Destination` として見せます。
//!
//! # 二層構造
//! - **表層（Typed）**: `Slot<A>` - `A` を直接保持
//! - **内部（Dyn）**: `Destination` - object-safe, type erasure

use serde::de::DeserializeOwned;

/// Argument は target 関数の引数型に必要な境界
///
/// - `DeserializeOwned`: payload から復元するため
/// - `Default`: 呼び出しごとの「ゼロ値」を確保するため
/// - `'static`: `TypeId` で型記述子を作るため
pub trait Argument: DeserializeOwned + Default + 'static {}

impl<T> Argument for T where T: DeserializeOwned + Default + 'static {}

/// Destination is the write surface a deserializer sees.
///
/// A fill replaces the whole value. Fields missing from the payload only keep
/// their zero value when the type opts into it with `#[serde(default)]`.
pub trait Destination {
    /// Name of the argument type behind this handle.
    fn type_name(&self) -> &'static str;

    /// Decode a JSON document straight into the destination.
    fn fill_json(&mut self, payload: &[u8]) -> Result<(), serde_json::Error>;

    /// Decode an already-parsed value tree into the destination.
    fn fill_value(&mut self, value: serde_json::Value) -> Result<(), serde_json::Error>;
}

/// A freshly allocated, zero-valued argument instance.
#[derive(Debug, Default)]
pub struct Slot<A> {
    value: A,
}

impl<A: Argument> Slot<A> {
    pub fn new() -> Self {
        Self {
            value: A::default(),
        }
    }

    pub fn get(&self) -> &A {
        &self.value
    }

    pub fn into_inner(self) -> A {
        self.value
    }
}

impl<A: Argument> Destination for Slot<A> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<A>()
    }

    fn fill_json(&mut self, payload: &[u8]) -> Result<(), serde_json::Error> {
        self.value = serde_json::from_slice(payload)?;
        Ok(())
    }

    fn fill_value(&mut self, value: serde_json::Value) -> Result<(), serde_json::Error> {
        self.value = serde_json::from_value(value)?;
        Ok(())
    }
}
