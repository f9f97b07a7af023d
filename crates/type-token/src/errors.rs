//! Construction errors for type tokens.
//!
//! Every [`TypeTokenError`] is fatal and raised while a token is being
//! built. None of them is transient: each one reports a shape the caller
//! asked for that cannot be described, so retrying the same call always
//! fails the same way. The first failure aborts the whole tree; no partially
//! built token is ever returned.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::ArgumentPath;

// ---------------------------------------------------------------------------
// Unsupported expression kinds
// ---------------------------------------------------------------------------

/// Expression kinds a token refuses to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedKind {
    /// `[T; N]` or `[T]`. Use `Vec<T>` instead.
    Array,
    /// An unbound generic parameter such as `T`.
    TypeVariable,
    /// An existential such as `dyn Any` or "some subtype of `X`".
    Wildcard,
}

impl UnsupportedKind {
    /// Suggestion appended to the error message, if any.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Array => " Use Vec instead of arrays.",
            Self::TypeVariable | Self::Wildcard => "",
        }
    }
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Array => "Array type",
            Self::TypeVariable => "Type variable type",
            Self::Wildcard => "Wildcard type",
        })
    }
}

// ---------------------------------------------------------------------------
// TypeTokenError
// ---------------------------------------------------------------------------

/// Errors raised while building a [`crate::TypeToken`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum TypeTokenError {
    /// A required type reference was absent.
    ///
    /// Produced by: the explicit factories when handed `None`.
    #[error("Invalid type argument at {position}: type must not be absent")]
    InvalidTypeArgument {
        /// Where the absent reference was expected.
        position: ArgumentPath,
    },

    /// An array, type variable, or wildcard expression was found.
    ///
    /// Produced by: the validator, at any nesting depth.
    #[error("{kind} {expression} at {position} is not supported.{}", .kind.hint())]
    UnsupportedTypeKind {
        /// Which unsupported kind was found.
        kind: UnsupportedKind,
        /// The offending expression, rendered.
        expression: String,
        /// Where the offending expression sits in the tree.
        position: ArgumentPath,
    },

    /// Structural capture found an ancestor relationship without arguments.
    ///
    /// Produced by: [`crate::TypeToken::capture`] when the capture type was
    /// declared without a type argument.
    #[error("{ancestor} isn't parameterized")]
    MissingTypeArgument {
        /// The ancestor relationship, rendered.
        ancestor: String,
    },
}

impl TypeTokenError {
    /// Where in the expression tree the failure occurred, if it is tied to
    /// a position.
    pub fn position(&self) -> Option<&ArgumentPath> {
        match self {
            Self::InvalidTypeArgument { position } => Some(position),
            Self::UnsupportedTypeKind { position, .. } => Some(position),
            Self::MissingTypeArgument { .. } => None,
        }
    }
}
