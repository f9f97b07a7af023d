//! Runtime descriptors for generic types.
//!
//! A [`TypeToken`] records a type together with its generic arguments, so a
//! value-conversion layer can tell `Vec<i32>` from `Vec<String>` while still
//! matching both as "some `Vec`". Tokens are immutable values with structural
//! equality, hashing, and rendering.
//!
//! ## Architectural Layer
//!
//! **Pure domain library.** No I/O, no configuration, no global state. Every
//! construction either returns a complete token or a [`TypeTokenError`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | [`RawType`], [`ArgumentPath`], the [`Erased`] placeholder |
//! | [`expression`] | [`TypeExpr`], the input grammar |
//! | [`validate`] | Classification and rejection of expression kinds |
//! | [`decompose`] | Recursive conversion of expressions into tokens |
//! | [`reflect`] | [`Reflect`], [`TypeRef`], static Rust types as expressions |
//! | [`capture`] | [`Capture`], structural capture through capture types |
//! | [`token`] | [`TypeToken`] and its entry points |
//! | [`errors`] | [`TypeTokenError`] |

pub mod capture;
pub mod decompose;
pub mod errors;
pub mod expression;
pub mod identifiers;
pub mod reflect;
pub mod token;
pub mod validate;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use capture::Capture;
pub use errors::{TypeTokenError, UnsupportedKind};
pub use expression::{ArrayType, ParameterizedType, TypeExpr, TypeVariable, WildcardType};
pub use identifiers::{ArgumentPath, Erased, RawType};
pub use reflect::{Reflect, TypeRef};
pub use token::TypeToken;
