//! Errors - 構築時エラーとデコードエラー
//!
//! - `CallerError`: `Caller::new` が候補の形を検証して返すエラー
//! - `DecodeError`: デシリアライザが返すエラー（`Caller::call` はそのまま返す）

use thiserror::Error;

/// CallerError は `Caller::new` の形状検証エラー
///
/// 検証は次の順序で行われ、最初に失敗したものが返ります。
/// 1. `InvalidFunctionType`
/// 2. `InvalidFunctionInArguments`
/// 3. `InvalidFunctionOutArguments`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallerError {
    #[error("argument must be function")]
    InvalidFunctionType,

    #[error("function must have only one input argument")]
    InvalidFunctionInArguments,

    #[error("function must not have output arguments")]
    InvalidFunctionOutArguments,
}

/// Boxed error used by custom deserializers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// DecodeError is whatever the configured deserializer reported.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("json decode: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(BoxError),
}

impl DecodeError {
    pub fn custom(err: impl Into<BoxError>) -> Self {
        Self::Custom(err.into())
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_error_messages() {
        assert_eq!(
            CallerError::InvalidFunctionType.to_string(),
            "argument must be function"
        );
        assert_eq!(
            CallerError::InvalidFunctionInArguments.to_string(),
            "function must have only one input argument"
        );
        assert_eq!(
            CallerError::InvalidFunctionOutArguments.to_string(),
            "function must not have output arguments"
        );
    }

    #[test]
    fn custom_decode_error_keeps_source_message() {
        let err = DecodeError::custom("unexpected frame");
        assert!(!err.is_json());
        assert_eq!(err.to_string(), "unexpected frame");
    }

    #[test]
    fn json_decode_error_converts_with_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DecodeError = json_err.into();
        assert!(err.is_json());
        assert!(err.to_string().starts_with("json decode: "));
    }
}
