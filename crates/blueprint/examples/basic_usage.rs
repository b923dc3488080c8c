//! Leaf blueprints, filters, and validators in isolation.
//!
//! Run with: `cargo run --example basic_usage -p forma-blueprint`

use forma_blueprint::prelude::*;

fn main() {
    // A leaf blueprint coerces reasonable shapes under rational mode.
    let retries = integer()
        .with_tag("retries")
        .with_validator(between(0_i64, 10));

    for raw in [Value::integer(3), Value::text("7"), Value::float(2.0)] {
        println!("retries {raw} -> {:?}", retries.apply(&raw));
    }

    // Out-of-range and malformed inputs fail with typed errors.
    for raw in [Value::text("99"), Value::text("many")] {
        println!("retries {raw} -> {}", retries.apply(&raw).unwrap_err());
    }

    // Filters run before validators, in declared order.
    let username = text()
        .with_tag("username")
        .with_filter(strip())
        .with_filter(lowercase())
        .with_validator(min_length(3))
        .with_validator(matches("^[a-z0-9_]+$").expect("pattern is valid"));

    println!(
        "username -> {:?}",
        username.apply(&Value::text("  Forma_01  "))
    );

    // Strict mode refuses coercion outright.
    let strict_port = IntegerBlueprint::with_mode(ParsingMode::Strict).with_tag("port");
    println!(
        "strict port from text -> {}",
        strict_port.apply(&Value::text("8080")).unwrap_err()
    );
}
