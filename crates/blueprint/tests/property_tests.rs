//! Property tests: acceptance monotonicity across parsing modes,
//! list round-trips, and filter idempotence.

use forma_blueprint::prelude::*;
use proptest::prelude::*;

/// Scalar inputs of every shape a leaf blueprint might see, including
/// numeric and boolean-token text.
fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(Value::integer),
        (-1.0e12_f64..1.0e12).prop_map(Value::float),
        any::<i64>().prop_map(|i| Value::text(i.to_string())),
        "[a-z ]{0,10}".prop_map(Value::text),
        prop_oneof![
            Just("true"),
            Just("false"),
            Just("yes"),
            Just("OFF"),
            Just("1"),
            Just("0"),
        ]
        .prop_map(Value::text),
    ]
}

/// Accepted-by-a-stricter-mode implies accepted-by-a-looser-mode, with
/// the identical output.
fn assert_monotone<T, F, B>(make: F, input: &Value)
where
    T: PartialEq + std::fmt::Debug,
    B: Blueprint<Output = T>,
    F: Fn(ParsingMode) -> B,
{
    let strict = make(ParsingMode::Strict).apply(input);
    let rational = make(ParsingMode::Rational).apply(input);
    let loose = make(ParsingMode::Loose).apply(input);

    if let Ok(out) = &strict {
        assert_eq!(
            rational.as_ref().ok(),
            Some(out),
            "rational must accept whatever strict accepts: {input}"
        );
    }
    if let Ok(out) = &rational {
        assert_eq!(
            loose.as_ref().ok(),
            Some(out),
            "loose must accept whatever rational accepts: {input}"
        );
    }
}

proptest! {
    #[test]
    fn boolean_acceptance_is_monotone(input in scalar_value()) {
        assert_monotone(BooleanBlueprint::with_mode, &input);
    }

    #[test]
    fn integer_acceptance_is_monotone(input in scalar_value()) {
        assert_monotone(IntegerBlueprint::with_mode, &input);
    }

    #[test]
    fn float_acceptance_is_monotone(input in scalar_value()) {
        // Compare through bit patterns: the property is "identical
        // output", which for floats means identical canonical bits.
        let strict = FloatBlueprint::with_mode(ParsingMode::Strict).apply(&input);
        let rational = FloatBlueprint::with_mode(ParsingMode::Rational).apply(&input);
        let loose = FloatBlueprint::with_mode(ParsingMode::Loose).apply(&input);

        if let Ok(out) = strict {
            prop_assert_eq!(rational.as_ref().ok().map(|f| f.to_bits()), Some(out.to_bits()));
        }
        if let Ok(out) = rational {
            prop_assert_eq!(loose.as_ref().ok().map(|f| f.to_bits()), Some(out.to_bits()));
        }
    }

    #[test]
    fn text_acceptance_is_monotone(input in scalar_value()) {
        assert_monotone(TextBlueprint::with_mode, &input);
    }

    #[test]
    fn list_of_integers_round_trips(items in prop::collection::vec(any::<i64>(), 0..16)) {
        let bp = list(integer());

        // Numeric text parses to the original integers.
        let textual = Value::array(items.iter().map(|i| Value::text(i.to_string())));
        let parsed = bp.apply(&textual).unwrap();
        prop_assert_eq!(&parsed, &items);

        // Re-serializing the parsed list and re-parsing is stable.
        let serialized = Value::from(parsed.clone());
        let reparsed = bp.apply(&serialized).unwrap();
        prop_assert_eq!(reparsed, items);
    }

    #[test]
    fn strip_filter_is_idempotent(s in "[ \t]{0,4}[a-z]{0,12}[ \t]{0,4}") {
        let filter = strip();
        let once = filter.filter(s);
        let twice = filter.filter(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parsing_is_deterministic(input in scalar_value()) {
        let bp = integer().with_tag("n");
        let first = bp.apply(&input);
        let second = bp.apply(&input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            (a, b) => prop_assert!(false, "diverging outcomes: {:?} vs {:?}", a, b),
        }
    }
}
