//! Identity types shared by expressions, descriptors, and errors.
//!
//! [`RawType`] names a nominal type with all generic argument information
//! stripped. Rust gives every instantiation its own [`TypeId`], so the raw
//! identity of a generic constructor is taken from the constructor applied to
//! [`Erased`] in every position: `Vec<i32>` and `Vec<String>` both report the
//! raw type of `Vec<Erased>`.
//!
//! [`ArgumentPath`] locates a sub-expression inside an expression tree and is
//! carried by every construction error.

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Erased placeholder
// ---------------------------------------------------------------------------

/// Placeholder argument used to take the identity of a generic constructor.
///
/// Never instantiated by the descriptor machinery; it only appears inside the
/// type passed to [`RawType::of`], e.g. `RawType::of::<Vec<Erased>>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Erased;

// ---------------------------------------------------------------------------
// RawType
// ---------------------------------------------------------------------------

/// Identity of a nominal type with no argument information.
///
/// Equality and hashing use the [`TypeId`] only. The type name is kept for
/// rendering and never participates in comparisons.
#[derive(Clone, Copy)]
pub struct RawType {
    id: TypeId,
    full_name: &'static str,
}

impl RawType {
    /// Returns the raw type of `T`.
    ///
    /// For generic constructors pass the constructor applied to [`Erased`],
    /// e.g. `RawType::of::<HashMap<Erased, Erased>>()`. An instantiation such
    /// as `Vec<String>` has its own identity, equal to no constructor; use
    /// [`crate::TypeRef`] to hand a whole type to the factories.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            full_name: std::any::type_name::<T>(),
        }
    }

    /// The ordered container constructor used by [`crate::TypeToken::list_of`]: `Vec`.
    pub fn list() -> Self {
        Self::of::<Vec<Erased>>()
    }

    /// The associative container constructor used by [`crate::TypeToken::map_of`]: `HashMap`.
    pub fn map() -> Self {
        Self::of::<HashMap<Erased, Erased>>()
    }

    /// Returns `true` if this raw type is exactly `T`.
    pub fn is<T: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Returns the underlying [`TypeId`].
    pub fn type_id(self) -> TypeId {
        self.id
    }

    /// Fully qualified path of the constructor, without generic arguments
    /// (e.g. `"alloc::vec::Vec"`).
    ///
    /// Types not named by a path (tuples, references, function pointers,
    /// arrays, trait objects) return their whole type name.
    pub fn path(self) -> &'static str {
        let head = self.head();
        if is_path(head) {
            head
        } else {
            self.full_name
        }
    }

    /// Short name (e.g. `"Vec"`).
    ///
    /// For types not named by a path every embedded path is shortened to its
    /// last segment: `(i32, alloc::string::String)` becomes `(i32, String)`.
    pub fn name(self) -> Cow<'static, str> {
        let head = self.head();
        if is_path(head) {
            Cow::Borrowed(head.rsplit("::").next().unwrap_or(head))
        } else {
            Cow::Owned(shorten_paths(self.full_name))
        }
    }

    fn head(self) -> &'static str {
        match self.full_name.find('<') {
            Some(end) => &self.full_name[..end],
            None => self.full_name,
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_path(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| is_identifier_char(c) || c == ':')
}

/// Drops the leading `segment::` parts of every path inside `full_name`.
fn shorten_paths(full_name: &str) -> String {
    let mut out = String::with_capacity(full_name.len());
    // Start of the identifier run currently at the end of `out`.
    let mut segment_start = 0;
    let mut rest = full_name;

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("::") {
            out.truncate(segment_start);
            rest = after;
            continue;
        }
        out.push(c);
        if !is_identifier_char(c) {
            segment_start = out.len();
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

impl PartialEq for RawType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RawType {}

impl Hash for RawType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Renders the short name; the alternate flag (`{:#}`) renders the full path.
impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.path())
        } else {
            f.write_str(&self.name())
        }
    }
}

impl Serialize for RawType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RawType", 2)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("path", self.path())?;
        state.end()
    }
}

// ---------------------------------------------------------------------------
// ArgumentPath
// ---------------------------------------------------------------------------

/// Position of a sub-expression, as the argument indices walked from the root.
///
/// Rendered as `$` for the root and `$[1][0]` for "first argument of the
/// second argument of the root".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArgumentPath(Vec<usize>);

impl ArgumentPath {
    /// The root of an expression tree.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the path of the `index`-th argument below this position.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Returns `true` for the root position.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of argument levels below the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns the argument indices as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for ArgumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for index in &self.0 {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

impl Serialize for ArgumentPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_type_names_strip_path_and_arguments() {
        let list = RawType::list();
        assert_eq!(list.name(), "Vec");
        assert_eq!(list.path(), "alloc::vec::Vec");

        let string = RawType::of::<String>();
        assert_eq!(string.name(), "String");
        assert_eq!(format!("{string:#}"), "alloc::string::String");

        assert_eq!(RawType::of::<i32>().name(), "i32");
        assert_eq!(RawType::of::<()>().name(), "()");
    }

    #[test]
    fn raw_type_names_of_structural_types() {
        let tuple = RawType::of::<(i32, String)>();
        assert_eq!(tuple.name(), "(i32, String)");
        assert_eq!(tuple.path(), "(i32, alloc::string::String)");

        let function = RawType::of::<fn(String) -> i32>();
        assert_eq!(function.name(), "fn(String) -> i32");
        assert_eq!(function.to_string(), "fn(String) -> i32");

        let array = RawType::of::<[u8; 3]>();
        assert_eq!(array.name(), "[u8; 3]");
        assert_eq!(array.path(), "[u8; 3]");

        let reference = RawType::of::<&'static Vec<String>>();
        assert_eq!(reference.name(), "&Vec<String>");
    }

    #[test]
    fn raw_type_identity_ignores_name() {
        assert_eq!(RawType::of::<Vec<Erased>>(), RawType::list());
        assert_ne!(RawType::of::<Vec<String>>(), RawType::list());
        assert!(RawType::map().is::<HashMap<Erased, Erased>>());
        assert!(!RawType::map().is::<HashMap<String, String>>());
    }

    #[test]
    fn raw_type_serializes_name_and_path() {
        let json = serde_json::to_value(RawType::of::<String>()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "String", "path": "alloc::string::String" })
        );
    }

    #[test]
    fn argument_path_renders_indices() {
        let root = ArgumentPath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "$");

        let nested = root.child(1).child(0);
        assert_eq!(nested.depth(), 2);
        assert_eq!(nested.as_slice(), &[1, 0]);
        assert_eq!(nested.to_string(), "$[1][0]");
        assert_eq!(serde_json::to_value(&nested).unwrap(), "$[1][0]");
    }
}
