//! Structural capture through a purpose-built capture type.
//!
//! A capture type stands in for "a subtype of the `TypeToken` template,
//! created only to pin down one type argument". It declares that ancestor
//! relationship as a type expression through [`Capture::ancestor`], and
//! [`TypeToken::capture`](crate::TypeToken::capture) reads the argument back
//! out of it.
//!
//! The [`type_token!`](crate::type_token!) macro declares capture types:
//!
//! - `type_token!(pub ListOfStrings = Vec<String>);` pins `Vec<String>`;
//! - `type_token!(pub Unpinned);` declares a capture type whose ancestor is
//!   the bare template, which capture rejects.

use crate::expression::TypeExpr;
use crate::{RawType, TypeToken, TypeTokenError};

/// A type that declares its relationship to the [`TypeToken`] template.
pub trait Capture: 'static {
    /// The ancestor expression, normally `TypeToken<Argument>`.
    fn ancestor() -> TypeExpr;
}

/// The raw type of the template every capture type descends from.
pub fn template() -> RawType {
    RawType::of::<TypeToken>()
}

/// Returns the first argument of a parameterized ancestor relationship.
///
/// # Errors
///
/// [`TypeTokenError::MissingTypeArgument`] if `ancestor` is not a
/// parameterized expression or carries no arguments.
pub fn captured_argument(ancestor: &TypeExpr) -> Result<&TypeExpr, TypeTokenError> {
    let argument = match ancestor {
        TypeExpr::Parameterized(parameterized) => parameterized.arguments().first(),
        _ => None,
    };
    argument.ok_or_else(|| TypeTokenError::MissingTypeArgument {
        ancestor: ancestor.to_string(),
    })
}

/// Declares a capture type for structural capture.
///
/// `type_token!(pub Name = Type);` declares a unit struct whose ancestor is
/// `TypeToken<Type>`; `Type` must implement [`Reflect`](crate::Reflect).
/// `type_token!(pub Name);` declares one with the bare `TypeToken` ancestor.
/// Both forms also get a `Name::token()` shorthand for
/// `TypeToken::capture::<Name>()`.
#[macro_export]
macro_rules! type_token {
    (@declare $(#[$attr:meta])* $vis:vis $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// Captures the token pinned by this type.
            #[allow(dead_code)]
            $vis fn token() -> ::std::result::Result<$crate::TypeToken, $crate::TypeTokenError> {
                $crate::TypeToken::capture::<Self>()
            }
        }
    };
    ($(#[$attr:meta])* $vis:vis $name:ident = $argument:ty) => {
        $crate::type_token!(@declare $(#[$attr])* $vis $name);

        impl $crate::Capture for $name {
            fn ancestor() -> $crate::TypeExpr {
                $crate::TypeExpr::parameterized(
                    $crate::capture::template(),
                    [<$argument as $crate::Reflect>::type_expr()],
                )
            }
        }
    };
    ($(#[$attr:meta])* $vis:vis $name:ident) => {
        $crate::type_token!(@declare $(#[$attr])* $vis $name);

        impl $crate::Capture for $name {
            fn ancestor() -> $crate::TypeExpr {
                $crate::TypeExpr::Nominal($crate::capture::template())
            }
        }
    };
}
