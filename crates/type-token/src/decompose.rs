//! Recursive conversion of type expressions into [`TypeToken`] trees.
//!
//! Every level is validated before it is converted, so an unsupported kind
//! nested at any depth aborts the whole conversion.

use tracing::trace;

use crate::expression::TypeExpr;
use crate::validate::{validate_supported, Supported};
use crate::{ArgumentPath, RawType, TypeToken, TypeTokenError};

/// Converts `expr` into a token, treating it as the root of the tree.
///
/// # Errors
///
/// [`TypeTokenError::UnsupportedTypeKind`] if `expr` or any argument below
/// it is an array, type variable, or wildcard.
pub fn decompose(expr: &TypeExpr) -> Result<TypeToken, TypeTokenError> {
    decompose_at(Some(expr), &ArgumentPath::root())
}

/// Converts a possibly absent expression found at `position`.
pub(crate) fn decompose_at(
    expr: Option<&TypeExpr>,
    position: &ArgumentPath,
) -> Result<TypeToken, TypeTokenError> {
    let token = match validate_supported(expr, position)? {
        Supported::Nominal(raw) => TypeToken::from_parts(raw, Vec::new()),
        Supported::Parameterized(parameterized) => decompose_application(
            parameterized.raw(),
            parameterized.arguments().iter().map(Some),
            position,
        )?,
    };
    trace!(%position, %token, "decomposed type expression");
    Ok(token)
}

/// Converts `raw` applied to `arguments`, any of which may be absent.
///
/// Arguments are decomposed in order; the first failure is returned.
pub(crate) fn decompose_application<'a>(
    raw: RawType,
    arguments: impl IntoIterator<Item = Option<&'a TypeExpr>>,
    position: &ArgumentPath,
) -> Result<TypeToken, TypeTokenError> {
    let parameters = arguments
        .into_iter()
        .enumerate()
        .map(|(index, argument)| decompose_at(argument, &position.child(index)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TypeToken::from_parts(raw, parameters))
}
