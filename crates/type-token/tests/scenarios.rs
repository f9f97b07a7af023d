use std::collections::HashMap;

use type_token::{
    reflect, type_token, ArgumentPath, RawType, TypeRef, TypeToken, TypeTokenError,
    UnsupportedKind,
};

#[allow(dead_code)]
struct Iterable<T>(Vec<T>);

reflect!(Iterable<T>);

type_token!(IterableOfStrings = Iterable<String>);
type_token!(ArrayOfStrings = [String; 3]);
type_token!(Unpinned);

fn leaf(type_ref: TypeRef) -> TypeToken {
    TypeToken::from_type(type_ref).unwrap()
}

#[test]
fn test_from_type() {
    let token = TypeToken::from_type(TypeRef::of::<String>()).unwrap();

    assert_eq!(token.raw_type(), RawType::of::<String>());
    assert!(token.type_parameters().is_empty());
}

#[test]
fn test_list_of() {
    let token = TypeToken::list_of(TypeRef::of::<i32>()).unwrap();

    assert_eq!(token.raw_type(), RawType::list());
    assert_eq!(token.type_parameters(), &[leaf(TypeRef::of::<i32>())]);
}

#[test]
fn test_map_of_keeps_key_then_value() {
    let token = TypeToken::map_of(TypeRef::of::<String>(), TypeRef::of::<i32>()).unwrap();

    assert_eq!(token.raw_type(), RawType::map());
    assert_eq!(
        token.type_parameters(),
        &[leaf(TypeRef::of::<String>()), leaf(TypeRef::of::<i32>())]
    );
}

#[test]
fn test_explicit_factories_reject_unsupported_kinds() {
    assert_eq!(
        TypeToken::from_type(TypeRef::of::<[String; 3]>()),
        Err(TypeTokenError::UnsupportedTypeKind {
            kind: UnsupportedKind::Array,
            expression: "[String; 3]".to_string(),
            position: ArgumentPath::root(),
        })
    );

    assert_eq!(
        TypeToken::list_of(TypeRef::of::<[String; 2]>()),
        Err(TypeTokenError::UnsupportedTypeKind {
            kind: UnsupportedKind::Array,
            expression: "[String; 2]".to_string(),
            position: ArgumentPath::root().child(0),
        })
    );

    let slice_value =
        TypeToken::map_of(TypeRef::of::<String>(), TypeRef::of::<[u8]>()).unwrap_err();
    assert_eq!(slice_value.position(), Some(&ArgumentPath::root().child(1)));

    let any = TypeToken::from_type(TypeRef::of::<dyn std::any::Any>()).unwrap_err();
    assert!(matches!(
        any,
        TypeTokenError::UnsupportedTypeKind {
            kind: UnsupportedKind::Wildcard,
            ..
        }
    ));
}

#[test]
fn test_explicit_factories_keep_instantiated_arguments() {
    let list = TypeToken::list_of(TypeRef::of::<HashMap<String, i32>>()).unwrap();

    assert_eq!(list, TypeToken::of::<Vec<HashMap<String, i32>>>().unwrap());
    assert_eq!(list.to_string(), "Vec<HashMap<String, i32>>");
    assert_eq!(list.parameter(0).unwrap().raw_type(), RawType::map());

    let map = TypeToken::map_of(TypeRef::of::<String>(), TypeRef::of::<Vec<u8>>()).unwrap();
    assert_eq!(map, TypeToken::of::<HashMap<String, Vec<u8>>>().unwrap());

    let plain = TypeToken::from_type(TypeRef::of::<Vec<String>>()).unwrap();
    assert_eq!(plain, TypeToken::of::<Vec<String>>().unwrap());
}

#[test]
fn test_capture_of_user_generic() {
    let captured = IterableOfStrings::token().unwrap();

    assert_eq!(captured.raw_type(), RawType::of::<Iterable<type_token::Erased>>());
    assert_eq!(captured.type_parameters(), &[leaf(TypeRef::of::<String>())]);
    assert_eq!(captured.to_string(), "Iterable<String>");
    assert_eq!(captured, TypeToken::of::<Iterable<String>>().unwrap());
}

#[test]
fn test_capture_of_array_is_rejected() {
    let error = TypeToken::capture::<ArrayOfStrings>().unwrap_err();

    assert_eq!(
        error,
        TypeTokenError::UnsupportedTypeKind {
            kind: UnsupportedKind::Array,
            expression: "[String; 3]".to_string(),
            position: ArgumentPath::root(),
        }
    );
    assert!(error.to_string().contains("[String; 3]"));
}

#[test]
fn test_capture_without_argument() {
    let error = TypeToken::capture::<Unpinned>().unwrap_err();

    assert!(matches!(error, TypeTokenError::MissingTypeArgument { .. }));
    assert_eq!(error.to_string(), "TypeToken isn't parameterized");
}

#[test]
fn test_null_rejection() {
    assert!(matches!(
        TypeToken::map_of(TypeRef::of::<String>(), None),
        Err(TypeTokenError::InvalidTypeArgument { .. })
    ));
    assert!(matches!(
        TypeToken::from_type(None),
        Err(TypeTokenError::InvalidTypeArgument { .. })
    ));
}

#[test]
fn test_rejection_is_depth_insensitive() {
    let nested_array = TypeToken::of::<Vec<[String; 2]>>().unwrap_err();
    assert_eq!(nested_array.position(), Some(&ArgumentPath::root().child(0)));

    let deep_slice = TypeToken::of::<HashMap<String, Vec<Box<[u8]>>>>().unwrap_err();
    assert_eq!(
        deep_slice,
        TypeTokenError::UnsupportedTypeKind {
            kind: UnsupportedKind::Array,
            expression: "[u8]".to_string(),
            position: ArgumentPath::root().child(1).child(0).child(0),
        }
    );

    let nested_any = TypeToken::of::<Option<Box<dyn std::any::Any>>>().unwrap_err();
    assert!(matches!(
        nested_any,
        TypeTokenError::UnsupportedTypeKind {
            kind: UnsupportedKind::Wildcard,
            ..
        }
    ));
}
