//! Named type-token shapes, one per construction entry point, including the
//! shapes that are expected to be rejected.

use std::any::Any;
use std::collections::{HashMap, VecDeque};

use type_token::{type_token, TypeRef, TypeToken, TypeTokenError};

type_token!(DequeOfStrings = VecDeque<String>);
type_token!(ArrayOfStrings = [String; 3]);
type_token!(Unpinned);

pub struct Entry {
    pub name: &'static str,
    pub summary: &'static str,
    build: fn() -> Result<TypeToken, TypeTokenError>,
}

impl Entry {
    pub fn build(&self) -> Result<TypeToken, TypeTokenError> {
        (self.build)()
    }
}

pub static ENTRIES: &[Entry] = &[
    Entry {
        name: "string",
        summary: "from_type(String)",
        build: || TypeToken::from_type(TypeRef::of::<String>()),
    },
    Entry {
        name: "list-of-integers",
        summary: "list_of(i32)",
        build: || TypeToken::list_of(TypeRef::of::<i32>()),
    },
    Entry {
        name: "map-of-string-to-integer",
        summary: "map_of(String, i32)",
        build: || TypeToken::map_of(TypeRef::of::<String>(), TypeRef::of::<i32>()),
    },
    Entry {
        name: "map-missing-value",
        summary: "map_of(String, None)",
        build: || TypeToken::map_of(TypeRef::of::<String>(), None),
    },
    Entry {
        name: "list-of-arrays",
        summary: "list_of([u8; 4])",
        build: || TypeToken::list_of(TypeRef::of::<[u8; 4]>()),
    },
    Entry {
        name: "nested-map",
        summary: "of::<HashMap<String, Vec<Option<u64>>>>()",
        build: TypeToken::of::<HashMap<String, Vec<Option<u64>>>>,
    },
    Entry {
        name: "list-of-any",
        summary: "of::<Vec<Box<dyn Any>>>()",
        build: TypeToken::of::<Vec<Box<dyn Any>>>,
    },
    Entry {
        name: "deque-of-strings",
        summary: "capture of TypeToken<VecDeque<String>>",
        build: TypeToken::capture::<DequeOfStrings>,
    },
    Entry {
        name: "array-of-strings",
        summary: "capture of TypeToken<[String; 3]>",
        build: TypeToken::capture::<ArrayOfStrings>,
    },
    Entry {
        name: "unpinned",
        summary: "capture of bare TypeToken",
        build: TypeToken::capture::<Unpinned>,
    },
];

pub fn find(name: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|entry| entry.name == name)
}
