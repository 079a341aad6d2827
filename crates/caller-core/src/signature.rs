//! Signature - 候補値の実行時型記述子
//!
//! `Candidate::signature()` が返す情報で、`Caller::new` はこれだけを見て
//! 形状検証（関数か / 引数は 1 つか / 戻り値は無いか）を行います。

use std::any::{TypeId, type_name};
use std::fmt;

use crate::error::CallerError;

/// ParamType は型の実行時記述子（名前 + TypeId）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamType {
    name: &'static str,
    id: TypeId,
}

impl ParamType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub fn is_unit(&self) -> bool {
        self.is::<()>()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Kind distinguishes callables from plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Function,
    Value(ParamType),
}

/// Signature は候補の形
///
/// - `inputs`: 引数の型（宣言順）
/// - `output`: 戻り値の型。`()` を返す関数は `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub kind: Kind,
    pub inputs: Vec<ParamType>,
    pub output: Option<ParamType>,
}

impl Signature {
    /// Shape of a callable. A unit return type counts as "no output".
    pub fn function(inputs: Vec<ParamType>, output: ParamType) -> Self {
        Self {
            kind: Kind::Function,
            inputs,
            output: (!output.is_unit()).then_some(output),
        }
    }

    pub fn value<T: ?Sized + 'static>() -> Self {
        Self {
            kind: Kind::Value(ParamType::of::<T>()),
            inputs: Vec::new(),
            output: None,
        }
    }

    pub fn is_function(&self) -> bool {
        self.kind == Kind::Function
    }

    /// 形状検証。順序は固定で、最初に失敗したチェックのエラーを返す
    pub fn validate(&self) -> Result<ParamType, CallerError> {
        if !self.is_function() {
            return Err(CallerError::InvalidFunctionType);
        }
        let [param] = self.inputs.as_slice() else {
            return Err(CallerError::InvalidFunctionInArguments);
        };
        if self.output.is_some() {
            return Err(CallerError::InvalidFunctionOutArguments);
        }
        Ok(*param)
    }
}
