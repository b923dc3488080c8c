//! Parsing a JSON configuration document against a nested schema.
//!
//! Run with: `cargo run --example config_parsing -p forma-blueprint`

use forma_blueprint::prelude::*;

fn schema() -> ConfigResult<ObjectBlueprint> {
    let server = ObjectModel::builder()
        .field(
            "host",
            text().with_filter(strip()).with_validator(not_blank()).boxed(),
        )
        .field(
            "port",
            integer().with_tag("port").with_validator(between(1_i64, 65535)).boxed(),
        )
        .optional_field("bind", ip_address().boxed(), "0.0.0.0")
        .build()?;

    let model = ObjectModel::builder()
        .field("server", object(server).boxed())
        .field("tags", list(text()).boxed())
        .optional_field("debug", boolean().boxed(), false)
        .build()?;

    Ok(object(model).with_tag("config"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = json(schema()?);

    let document = r#"
        {
            "server": {"host": "  example.org ", "port": "8080"},
            "tags": ["a", "b"]
        }
    "#;

    let parsed = config.apply(&Value::text(document))?;
    println!("parsed: {parsed:?}");

    // A failure deep in the tree surfaces with the leaf's own tag and
    // the offending raw value.
    let bad = r#"{"server": {"host": "example.org", "port": "eighty"}, "tags": []}"#;
    let err = config.apply(&Value::text(bad)).unwrap_err();
    println!("rejected by {:?}: {err}", err.tag().as_str());

    Ok(())
}
