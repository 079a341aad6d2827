//! Candidate - `Caller::new` に渡せる値
//!
//! 関数（クロージャ / 関数アイテム / 関数ポインタ、引数 0〜6 個）と
//! 関数ではない値の両方を受け付け、実行時の形（`Signature`）を報告します。
//!
//! # マーカー型パラメータ
//! `Candidate<Marker>` の `Marker` は impl 同士が重ならないようにするためのもので、
//! 呼び出し側が指定する必要はありません（推論されます）。
//! - 関数: `fn(A, B, ..) -> R`
//! - 値: `NotCallable`

use crate::destination::Argument;
use crate::signature::{ParamType, Signature};
use crate::target::{DynTarget, FunctionTarget};

/// Anything that can be offered to `Caller::new`.
///
/// Functions with one argument are only candidates when the argument type
/// implements [`Argument`] (`DeserializeOwned + Default + 'static`). A
/// one-argument function over a borrowed or non-`Default` type is rejected
/// by the compiler, even when it also returns a value, instead of failing
/// `Caller::new` at runtime:
///
/// ```compile_fail
/// use caller_core::Caller;
///
/// let _ = Caller::new(|s: &str| s.len());
/// ```
///
/// ```compile_fail
/// use caller_core::Caller;
///
/// #[derive(serde::Deserialize)]
/// struct NoDefault {
///     id: u64,
/// }
///
/// let _ = Caller::new(|_: NoDefault| {});
/// ```
pub trait Candidate<Marker>: Sized {
    fn signature(&self) -> Signature;

    /// The type-erased target.
    ///
    /// Returns `Some` exactly when `signature().validate()` succeeds, and
    /// `None` for every other shape.
    fn into_target(self) -> Option<Box<dyn DynTarget>>;
}

/// Marker for candidates that are plain values.
#[derive(Debug, Clone, Copy)]
pub struct NotCallable;

/// Wraps an arbitrary value so it can be offered as a (non-callable) candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opaque<T>(pub T);

impl<T: 'static> Candidate<NotCallable> for Opaque<T> {
    fn signature(&self) -> Signature {
        Signature::value::<T>()
    }

    fn into_target(self) -> Option<Box<dyn DynTarget>> {
        None
    }
}

macro_rules! impl_candidate_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate<NotCallable> for $ty {
                fn signature(&self) -> Signature {
                    Signature::value::<$ty>()
                }

                fn into_target(self) -> Option<Box<dyn DynTarget>> {
                    None
                }
            }
        )*
    };
}

impl_candidate_for_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    serde_json::Value,
);

impl<F, A, R> Candidate<fn(A) -> R> for F
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Argument,
    R: 'static,
{
    fn signature(&self) -> Signature {
        Signature::function(vec![ParamType::of::<A>()], ParamType::of::<R>())
    }

    fn into_target(self) -> Option<Box<dyn DynTarget>> {
        if !ParamType::of::<R>().is_unit() {
            return None;
        }
        let func = self;
        Some(Box::new(FunctionTarget::new(move |arg: A| {
            func(arg);
        })))
    }
}

// 引数が 1 つ以外の関数は形だけ報告し、target は作らない
macro_rules! impl_candidate_for_fn {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> Candidate<fn($($arg,)*) -> Out> for Func
        where
            Func: Fn($($arg,)*) -> Out,
            Out: 'static,
            $($arg: 'static,)*
        {
            fn signature(&self) -> Signature {
                Signature::function(vec![$(ParamType::of::<$arg>(),)*], ParamType::of::<Out>())
            }

            fn into_target(self) -> Option<Box<dyn DynTarget>> {
                None
            }
        }
    };
}

impl_candidate_for_fn!();
impl_candidate_for_fn!(A1, A2);
impl_candidate_for_fn!(A1, A2, A3);
impl_candidate_for_fn!(A1, A2, A3, A4);
impl_candidate_for_fn!(A1, A2, A3, A4, A5);
impl_candidate_for_fn!(A1, A2, A3, A4, A5, A6);
