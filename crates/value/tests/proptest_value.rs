//! Property tests for equality, hashing, and JSON round-trips.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use forma_value::Value;
use proptest::prelude::*;

fn hash_of(v: &Value) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

/// JSON-shaped values only: no bytes, no datetimes, so the serde
/// round-trip is lossless.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(Value::integer),
        // Finite floats: JSON cannot carry NaN/inf.
        (-1.0e9_f64..1.0e9).prop_map(Value::float),
        "[a-z]{0,8}".prop_map(Value::text),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|pairs| Value::object(pairs)),
        ]
    })
}

proptest! {
    #[test]
    fn equal_values_hash_equally(v in json_value()) {
        let clone = v.clone();
        prop_assert_eq!(&v, &clone);
        prop_assert_eq!(hash_of(&v), hash_of(&clone));
    }

    #[test]
    fn serde_json_round_trip(v in json_value()) {
        let text = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn json_value_conversion_round_trip(v in json_value()) {
        let json = serde_json::Value::from(v.clone());
        let back = Value::from(json);
        prop_assert_eq!(back, v);
    }

    #[test]
    fn object_equality_ignores_entry_order(
        pairs in prop::collection::hash_map("[a-z]{1,6}", any::<i64>(), 0..8)
    ) {
        let forward: Value = Value::object(
            pairs.iter().map(|(k, v)| (k.clone(), Value::integer(*v))),
        );
        let mut reversed: Vec<_> = pairs.into_iter().collect();
        reversed.reverse();
        let backward: Value = Value::object(
            reversed.into_iter().map(|(k, v)| (k, Value::integer(v))),
        );
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }
}
