//! Classification of type expressions into the shapes a token can describe.

use tracing::trace;

use crate::errors::UnsupportedKind;
use crate::expression::{ParameterizedType, TypeExpr};
use crate::{ArgumentPath, RawType, TypeTokenError};

/// A type expression that passed validation at one level of the tree.
///
/// Only the two describable shapes exist here, so the decomposer never sees
/// an array, variable, or wildcard. Arguments of a parameterized expression
/// are validated separately when the decomposer descends into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supported<'a> {
    /// A bare nominal type.
    Nominal(RawType),
    /// A generic constructor applied to arguments.
    Parameterized(&'a ParameterizedType),
}

impl Supported<'_> {
    /// The raw type at the head of the expression.
    pub fn raw_type(self) -> RawType {
        match self {
            Self::Nominal(raw) => raw,
            Self::Parameterized(parameterized) => parameterized.raw(),
        }
    }
}

/// Classifies `expr`, found at `position`, or rejects it.
///
/// # Errors
///
/// - [`TypeTokenError::InvalidTypeArgument`] if `expr` is absent.
/// - [`TypeTokenError::UnsupportedTypeKind`] for array, type variable, and
///   wildcard expressions.
pub fn validate_supported<'a>(
    expr: Option<&'a TypeExpr>,
    position: &ArgumentPath,
) -> Result<Supported<'a>, TypeTokenError> {
    let Some(expr) = expr else {
        return Err(TypeTokenError::InvalidTypeArgument {
            position: position.clone(),
        });
    };

    let kind = match expr {
        TypeExpr::Nominal(raw) => return Ok(Supported::Nominal(*raw)),
        TypeExpr::Parameterized(parameterized) => {
            return Ok(Supported::Parameterized(parameterized))
        }
        TypeExpr::Array(_) => UnsupportedKind::Array,
        TypeExpr::Variable(_) => UnsupportedKind::TypeVariable,
        TypeExpr::Wildcard(_) => UnsupportedKind::Wildcard,
    };

    trace!(%expr, %position, ?kind, "rejecting type expression");
    Err(TypeTokenError::UnsupportedTypeKind {
        kind,
        expression: expr.to_string(),
        position: position.clone(),
    })
}
