//! Static Rust types as type expressions.
//!
//! [`Reflect`] is the type-witness half of structural capture: a type states
//! its own expression, arguments included, so `TypeToken::of::<Vec<String>>()`
//! can recover the `String` that `TypeId` alone would not reveal.
//!
//! Implementations are provided for primitives, `String`, `str`, `()`, the
//! std collections, `Option`, `Result`, and the smart pointers. Fixed-length
//! arrays and slices reflect as array expressions and `dyn Any` reflects as an
//! unbounded wildcard; both are rejected when a token is built from them.
//!
//! [`TypeRef`] carries a reflected expression as a value, for the explicit
//! factories on [`crate::TypeToken`].
//!
//! User types opt in with [`reflect!`](crate::reflect!):
//!
//! - `reflect!(Point, Celsius);` for plain types;
//! - `reflect!(Iterable<T>);` for a generic type, one parameter name per
//!   declared type parameter.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::expression::TypeExpr;
use crate::RawType;

/// A `'static` type that can state its own type expression.
pub trait Reflect: 'static {
    /// The expression describing `Self`, including every type argument.
    fn type_expr() -> TypeExpr;
}

/// A reflected type handed to the explicit factories as a value.
///
/// The whole expression is kept, so an array, a `dyn Any`, or a generic
/// instantiation passed to [`crate::TypeToken::list_of`] is classified like
/// any other argument instead of being taken for a bare nominal type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(TypeExpr);

impl TypeRef {
    /// The reflected expression of `T`.
    pub fn of<T: Reflect + ?Sized>() -> Self {
        Self(T::type_expr())
    }

    /// Returns the reflected expression.
    pub fn expr(&self) -> &TypeExpr {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Implements [`Reflect`] for plain or generic nominal types.
///
/// The raw type of a generic type is the type applied to
/// [`Erased`](crate::Erased) in every position, so the type parameters must
/// not carry bounds that `Erased` fails to meet.
#[macro_export]
macro_rules! reflect {
    ($name:ident < $($param:ident),+ $(,)? >) => {
        impl<$($param: $crate::Reflect),+> $crate::Reflect for $name<$($param),+> {
            fn type_expr() -> $crate::TypeExpr {
                $crate::TypeExpr::parameterized(
                    $crate::RawType::of::<$name<$($crate::__erased!($param)),+>>(),
                    [$(<$param as $crate::Reflect>::type_expr()),+],
                )
            }
        }
    };
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::Reflect for $name {
                fn type_expr() -> $crate::TypeExpr {
                    $crate::TypeExpr::nominal::<$name>()
                }
            }
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __erased {
    ($param:ident) => {
        $crate::Erased
    };
}

reflect!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

reflect!(Vec<T>);
reflect!(VecDeque<T>);
reflect!(LinkedList<T>);
reflect!(HashSet<T>);
reflect!(BTreeSet<T>);
reflect!(BinaryHeap<T>);
reflect!(Option<T>);
reflect!(Result<T, E>);
reflect!(HashMap<K, V>);
reflect!(BTreeMap<K, V>);

impl Reflect for () {
    fn type_expr() -> TypeExpr {
        TypeExpr::nominal::<()>()
    }
}

// Pointers accept unsized pointees so that `Box<str>` and `Box<[T]>` reflect.
macro_rules! reflect_pointer {
    ($($pointer:ident),+) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $pointer<T> {
                fn type_expr() -> TypeExpr {
                    TypeExpr::parameterized(
                        RawType::of::<$pointer<crate::Erased>>(),
                        [T::type_expr()],
                    )
                }
            }
        )+
    };
}

reflect_pointer!(Box, Rc, Arc);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_expr() -> TypeExpr {
        TypeExpr::array(T::type_expr(), N)
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_expr() -> TypeExpr {
        TypeExpr::slice(T::type_expr())
    }
}

impl Reflect for dyn Any {
    fn type_expr() -> TypeExpr {
        TypeExpr::wildcard()
    }
}

impl Reflect for dyn Any + Send {
    fn type_expr() -> TypeExpr {
        TypeExpr::wildcard()
    }
}

impl Reflect for dyn Any + Send + Sync {
    fn type_expr() -> TypeExpr {
        TypeExpr::wildcard()
    }
}
