//! The [`TypeToken`] descriptor and its construction entry points.
//!
//! A token is a raw type plus one child token per type argument. It is an
//! immutable value: equality and hashing are structural over the whole tree,
//! and two tokens built through different entry points for the same shape are
//! equal.
//!
//! ## Entry points
//!
//! | Entry point | Input | Errors |
//! |-------------|-------|--------|
//! | [`TypeToken::from_type`] | a [`TypeRef`] | `InvalidTypeArgument`, `UnsupportedTypeKind` |
//! | [`TypeToken::list_of`] | element [`TypeRef`] | `InvalidTypeArgument`, `UnsupportedTypeKind` |
//! | [`TypeToken::map_of`] | key and value [`TypeRef`]s | `InvalidTypeArgument`, `UnsupportedTypeKind` |
//! | [`TypeToken::of`] | a [`Reflect`] type | `UnsupportedTypeKind` |
//! | [`TypeToken::capture`] | a [`Capture`] type | `UnsupportedTypeKind`, `MissingTypeArgument` |
//! | [`TypeToken::from_expr`] | a hand-built [`TypeExpr`] | `UnsupportedTypeKind` |

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::capture::{captured_argument, Capture};
use crate::decompose::{decompose, decompose_application, decompose_at};
use crate::expression::{write_arguments, TypeExpr};
use crate::reflect::{Reflect, TypeRef};
use crate::{ArgumentPath, RawType, TypeTokenError};

/// A type with its generic arguments, as an immutable tree.
///
/// `TypeToken` for `HashMap<String, Vec<i32>>` has raw type `HashMap` and the
/// parameters `[String, Vec<i32>]`, each a token in turn. The raw type is
/// never an array, type variable, or wildcard, at any depth.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeToken {
    raw_type: RawType,
    type_parameters: Vec<TypeToken>,
}

impl TypeToken {
    pub(crate) fn from_parts(raw_type: RawType, type_parameters: Vec<TypeToken>) -> Self {
        Self {
            raw_type,
            type_parameters,
        }
    }

    /// Creates a token for the referenced type.
    ///
    /// A plain type such as `TypeRef::of::<String>()` yields a token without
    /// parameters.
    ///
    /// # Errors
    ///
    /// - [`TypeTokenError::InvalidTypeArgument`] if `type_ref` is `None`.
    /// - [`TypeTokenError::UnsupportedTypeKind`] if the referenced type is,
    ///   or has an argument that is, an array, slice, or `dyn Any`.
    pub fn from_type(type_ref: impl Into<Option<TypeRef>>) -> Result<Self, TypeTokenError> {
        let type_ref = type_ref.into();
        record(
            "from_type",
            decompose_at(type_ref.as_ref().map(TypeRef::expr), &ArgumentPath::root()),
        )
    }

    /// Creates a token for `Vec<element>`.
    ///
    /// # Errors
    ///
    /// - [`TypeTokenError::InvalidTypeArgument`] if `element` is `None`.
    /// - [`TypeTokenError::UnsupportedTypeKind`] if `element` is not
    ///   describable; the position starts at `$[0]`.
    pub fn list_of(element: impl Into<Option<TypeRef>>) -> Result<Self, TypeTokenError> {
        let element = element.into();
        record(
            "list_of",
            decompose_application(
                RawType::list(),
                [element.as_ref().map(TypeRef::expr)],
                &ArgumentPath::root(),
            ),
        )
    }

    /// Creates a token for `HashMap<key, value>`; parameters keep that order.
    ///
    /// # Errors
    ///
    /// - [`TypeTokenError::InvalidTypeArgument`] if `key` or `value` is `None`.
    /// - [`TypeTokenError::UnsupportedTypeKind`] if `key` or `value` is not
    ///   describable.
    pub fn map_of(
        key: impl Into<Option<TypeRef>>,
        value: impl Into<Option<TypeRef>>,
    ) -> Result<Self, TypeTokenError> {
        let key = key.into();
        let value = value.into();
        record(
            "map_of",
            decompose_application(
                RawType::map(),
                [key.as_ref().map(TypeRef::expr), value.as_ref().map(TypeRef::expr)],
                &ArgumentPath::root(),
            ),
        )
    }

    /// Creates a token for `T`, arguments included.
    ///
    /// # Errors
    ///
    /// [`TypeTokenError::UnsupportedTypeKind`] if `T` is, or has an argument
    /// that is, an array, slice, or `dyn Any`.
    pub fn of<T: Reflect + ?Sized>() -> Result<Self, TypeTokenError> {
        record("of", decompose(&T::type_expr()))
    }

    /// Creates a token for the argument pinned by the capture type `C`.
    ///
    /// # Errors
    ///
    /// - [`TypeTokenError::MissingTypeArgument`] if `C` was declared without
    ///   an argument.
    /// - [`TypeTokenError::UnsupportedTypeKind`] if the pinned argument is not
    ///   describable.
    pub fn capture<C: Capture>() -> Result<Self, TypeTokenError> {
        let ancestor = C::ancestor();
        let result = captured_argument(&ancestor).and_then(decompose);
        record("capture", result)
    }

    /// Creates a token from a hand-built expression.
    ///
    /// # Errors
    ///
    /// [`TypeTokenError::UnsupportedTypeKind`] if `expr` contains an
    /// undescribable kind at any depth.
    pub fn from_expr(expr: &TypeExpr) -> Result<Self, TypeTokenError> {
        record("from_expr", decompose(expr))
    }

    /// The nominal type this token describes, without arguments.
    pub fn raw_type(&self) -> RawType {
        self.raw_type
    }

    /// Tokens of the type arguments, in declaration order.
    pub fn type_parameters(&self) -> &[TypeToken] {
        &self.type_parameters
    }

    /// The token of the `index`-th type argument.
    pub fn parameter(&self, index: usize) -> Option<&TypeToken> {
        self.type_parameters.get(index)
    }

    /// Returns `true` if this token carries type arguments.
    pub fn is_parameterized(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}

impl TryFrom<&TypeExpr> for TypeToken {
    type Error = TypeTokenError;

    fn try_from(expr: &TypeExpr) -> Result<Self, Self::Error> {
        Self::from_expr(expr)
    }
}

fn record(
    entry_point: &'static str,
    result: Result<TypeToken, TypeTokenError>,
) -> Result<TypeToken, TypeTokenError> {
    match &result {
        Ok(token) => debug!(entry_point, %token, "built type token"),
        Err(error) => debug!(entry_point, %error, "type token construction failed"),
    }
    result
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeToken(raw_type=")?;
        fmt::Debug::fmt(&self.raw_type, f)?;
        f.write_str(", type_parameters=")?;
        f.debug_list().entries(&self.type_parameters).finish()?;
        f.write_str(")")
    }
}

/// Renders `Name<Arg, ...>` with short names; `{:#}` renders full paths.
impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw_type, f)?;
        write_arguments(f, &self.type_parameters)
    }
}
