//! Type expressions: the input grammar of the descriptor machinery.
//!
//! A [`TypeExpr`] is an owned tree describing a type as written, including
//! the kinds a [`crate::TypeToken`] refuses to represent (arrays, unbound
//! type variables, wildcards). Expressions come from the [`crate::Reflect`]
//! trait, from [`crate::Capture`] ancestors, or are built by hand.
//!
//! Rendering follows Rust syntax where one exists (`Vec<String>`, `[u8; 4]`,
//! `[u8]`); wildcards use `?`, `? <: Bound` and `? :> Bound`.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::RawType;

// ---------------------------------------------------------------------------
// TypeExpr
// ---------------------------------------------------------------------------

/// A type expression, possibly of a kind that cannot be described.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    /// A bare nominal type with no arguments (`String`).
    Nominal(RawType),
    /// A generic constructor applied to argument expressions (`Vec<String>`).
    Parameterized(ParameterizedType),
    /// A fixed-length array or a slice (`[u8; 4]`, `[u8]`).
    Array(ArrayType),
    /// An unbound generic parameter (`T`).
    Variable(TypeVariable),
    /// An existential "some type", optionally bounded.
    Wildcard(WildcardType),
}

impl TypeExpr {
    /// Bare nominal expression for `T`.
    pub fn nominal<T: ?Sized + 'static>() -> Self {
        Self::Nominal(RawType::of::<T>())
    }

    /// Applies `raw` to `arguments`, in order.
    pub fn parameterized(raw: RawType, arguments: impl IntoIterator<Item = TypeExpr>) -> Self {
        Self::Parameterized(ParameterizedType::new(raw, arguments))
    }

    /// Fixed-length array of `component`.
    pub fn array(component: TypeExpr, length: usize) -> Self {
        Self::Array(ArrayType::new(component, Some(length)))
    }

    /// Slice of `component`.
    pub fn slice(component: TypeExpr) -> Self {
        Self::Array(ArrayType::new(component, None))
    }

    /// Unbound type variable called `name`.
    pub fn variable(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Variable(TypeVariable::new(name))
    }

    /// Unbounded wildcard.
    pub fn wildcard() -> Self {
        Self::Wildcard(WildcardType::unbounded())
    }

    /// The raw type at the head of this expression, for nominal and
    /// parameterized expressions.
    pub fn raw_type(&self) -> Option<RawType> {
        match self {
            Self::Nominal(raw) => Some(*raw),
            Self::Parameterized(parameterized) => Some(parameterized.raw()),
            Self::Array(_) | Self::Variable(_) | Self::Wildcard(_) => None,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal(raw) => fmt::Display::fmt(raw, f),
            Self::Parameterized(parameterized) => fmt::Display::fmt(parameterized, f),
            Self::Array(array) => fmt::Display::fmt(array, f),
            Self::Variable(variable) => fmt::Display::fmt(variable, f),
            Self::Wildcard(wildcard) => fmt::Display::fmt(wildcard, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Expression kinds
// ---------------------------------------------------------------------------

/// A generic constructor applied to an ordered list of argument expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParameterizedType {
    raw: RawType,
    arguments: Vec<TypeExpr>,
}

impl ParameterizedType {
    /// Creates the application of `raw` to `arguments`.
    ///
    /// The argument count is not checked against the constructor's own
    /// parameter list.
    pub fn new(raw: RawType, arguments: impl IntoIterator<Item = TypeExpr>) -> Self {
        Self {
            raw,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// The applied constructor.
    pub fn raw(&self) -> RawType {
        self.raw
    }

    /// The argument expressions in source order.
    pub fn arguments(&self) -> &[TypeExpr] {
        &self.arguments
    }
}

impl fmt::Display for ParameterizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)?;
        write_arguments(f, &self.arguments)
    }
}

/// An array (`length` set) or slice (`length` unset) of a component expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArrayType {
    component: Box<TypeExpr>,
    length: Option<usize>,
}

impl ArrayType {
    /// Creates an array of `component`; `None` describes a slice.
    pub fn new(component: TypeExpr, length: Option<usize>) -> Self {
        Self {
            component: Box::new(component),
            length,
        }
    }

    /// The element expression.
    pub fn component(&self) -> &TypeExpr {
        &self.component
    }

    /// The fixed length, `None` for slices.
    pub fn length(&self) -> Option<usize> {
        self.length
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt::Display::fmt(&*self.component, f)?;
        if let Some(length) = self.length {
            write!(f, "; {length}")?;
        }
        f.write_str("]")
    }
}

/// A generic parameter that has not been bound to a concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeVariable {
    name: Cow<'static, str>,
}

impl TypeVariable {
    /// Creates a type variable called `name`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// The declared parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// "Some type", optionally bounded above (a subtype of) or below (a
/// supertype of) another expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WildcardType {
    upper: Option<Box<TypeExpr>>,
    lower: Option<Box<TypeExpr>>,
}

impl WildcardType {
    /// Any type at all.
    pub fn unbounded() -> Self {
        Self {
            upper: None,
            lower: None,
        }
    }

    /// Some type that is a subtype of `bound`.
    pub fn subtype_of(bound: TypeExpr) -> Self {
        Self {
            upper: Some(Box::new(bound)),
            lower: None,
        }
    }

    /// Some type that is a supertype of `bound`.
    pub fn supertype_of(bound: TypeExpr) -> Self {
        Self {
            upper: None,
            lower: Some(Box::new(bound)),
        }
    }

    /// The bound every admitted type is a subtype of (`? <: X`), if any.
    pub fn upper_bound(&self) -> Option<&TypeExpr> {
        self.upper.as_deref()
    }

    /// The bound every admitted type is a supertype of (`? :> X`), if any.
    pub fn lower_bound(&self) -> Option<&TypeExpr> {
        self.lower.as_deref()
    }
}

impl fmt::Display for WildcardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("?")?;
        if let Some(upper) = &self.upper {
            f.write_str(" <: ")?;
            fmt::Display::fmt(&**upper, f)?;
        }
        if let Some(lower) = &self.lower {
            f.write_str(" :> ")?;
            fmt::Display::fmt(&**lower, f)?;
        }
        Ok(())
    }
}

/// Writes `<A, B, ...>` for a non-empty argument list, forwarding the
/// formatter flags to every argument.
pub(crate) fn write_arguments<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    arguments: &[T],
) -> fmt::Result {
    if arguments.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(argument, f)?;
    }
    f.write_str(">")
}
