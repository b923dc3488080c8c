//! The JSON envelope is transparent to a successful decode: parsing a
//! document through the envelope is equivalent to parsing the decoded
//! native value directly.

use forma_blueprint::prelude::*;
use pretty_assertions::assert_eq;

fn schema() -> ObjectModel {
    ObjectModel::builder()
        .field("a", integer().boxed())
        .build()
        .unwrap()
}

#[test]
fn envelope_is_transparent_for_objects() {
    let through_envelope = json(object(schema()))
        .apply(&Value::text(r#"{"a": 1}"#))
        .unwrap();

    let native = Value::object([("a".to_string(), Value::integer(1))]);
    let direct = object(schema()).apply(&native).unwrap();

    assert_eq!(through_envelope, direct);
}

#[test]
fn envelope_is_transparent_for_lists() {
    let through_envelope = json(list(integer()))
        .apply(&Value::text("[\"1\", \"2\", \"-3\"]"))
        .unwrap();
    let native = Value::array([Value::text("1"), Value::text("2"), Value::text("-3")]);
    let direct = list(integer()).apply(&native).unwrap();

    assert_eq!(through_envelope, vec![1, 2, -3]);
    assert_eq!(through_envelope, direct);
}

#[test]
fn envelope_failures_carry_the_decode_reason() {
    let bp = json(object(schema())).with_tag("payload");
    let err = bp.apply(&Value::text("{\"a\": }")).unwrap_err();
    match err {
        ParseError::InvalidInput { ref reason, .. } => {
            assert!(reason.starts_with("malformed JSON"), "reason: {reason}");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn envelope_tolerates_padding_but_not_interior_garbage() {
    let bp = json(integer());
    assert_eq!(bp.apply(&Value::text("  \r\n 5 \u{0085}")).unwrap(), 5);
    assert!(bp.apply(&Value::text("5 5")).is_err());
}

#[test]
fn nested_envelopes_compose() {
    // An envelope inside an object inside an envelope.
    let inner_model = ObjectModel::builder()
        .field("flag", json(boolean()).boxed())
        .build()
        .unwrap();
    let bp = json(object(inner_model));

    let parsed = bp
        .apply(&Value::text(r#"{"flag": "true"}"#))
        .unwrap();
    assert_eq!(parsed.get("flag"), Some(&Value::boolean(true)));
}
