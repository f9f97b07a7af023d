use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::thread;

use type_token::{type_token, RawType, TypeExpr, TypeRef, TypeToken};

type_token!(ListOfStrings = Vec<String>);

fn hash_of(token: &TypeToken) -> u64 {
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    hasher.finish()
}

fn samples() -> Vec<TypeToken> {
    vec![
        TypeToken::from_type(TypeRef::of::<String>()).unwrap(),
        TypeToken::of::<String>().unwrap(),
        TypeToken::list_of(TypeRef::of::<String>()).unwrap(),
        TypeToken::of::<Vec<String>>().unwrap(),
        ListOfStrings::token().unwrap(),
        TypeToken::list_of(TypeRef::of::<i32>()).unwrap(),
        TypeToken::map_of(TypeRef::of::<String>(), TypeRef::of::<i32>()).unwrap(),
        TypeToken::of::<HashMap<String, i32>>().unwrap(),
        TypeToken::of::<HashMap<i32, String>>().unwrap(),
        TypeToken::of::<BTreeMap<String, i32>>().unwrap(),
        TypeToken::of::<Vec<Vec<String>>>().unwrap(),
        TypeToken::of::<Option<HashSet<u8>>>().unwrap(),
    ]
}

#[test]
fn test_equality_is_an_equivalence_relation() {
    let tokens = samples();

    for a in &tokens {
        assert_eq!(a, a);
        for b in &tokens {
            assert_eq!(a == b, b == a, "symmetry: {a} / {b}");
            for c in &tokens {
                if a == b && b == c {
                    assert_eq!(a, c, "transitivity: {a} / {b} / {c}");
                }
            }
        }
    }
}

#[test]
fn test_equal_tokens_hash_equally() {
    let tokens = samples();

    for a in &tokens {
        for b in &tokens {
            if a == b {
                assert_eq!(hash_of(a), hash_of(b), "{a} / {b}");
            }
        }
    }

    let distinct: HashSet<_> = tokens.iter().cloned().collect();
    assert_eq!(distinct.len(), 8);
}

#[test]
fn test_path_independence() {
    let explicit = TypeToken::list_of(TypeRef::of::<String>()).unwrap();
    let witnessed = TypeToken::of::<Vec<String>>().unwrap();
    let captured = TypeToken::capture::<ListOfStrings>().unwrap();
    let hand_built = TypeToken::from_expr(&TypeExpr::parameterized(
        RawType::list(),
        [TypeExpr::nominal::<String>()],
    ))
    .unwrap();

    assert_eq!(explicit, witnessed);
    assert_eq!(witnessed, captured);
    assert_eq!(captured, hand_built);
}

#[test]
fn test_distinct_raw_types_with_same_arguments_differ() {
    let hash_map = TypeToken::of::<HashMap<String, i32>>().unwrap();
    let btree_map = TypeToken::of::<BTreeMap<String, i32>>().unwrap();

    assert_eq!(hash_map.type_parameters(), btree_map.type_parameters());
    assert_ne!(hash_map, btree_map);
}

#[test]
fn test_tokens_are_shared_across_threads() {
    let token = TypeToken::of::<HashMap<String, Vec<u64>>>().unwrap();

    let rendered: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| token.to_string()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(rendered.iter().all(|r| r == "HashMap<String, Vec<u64>>"));
}
