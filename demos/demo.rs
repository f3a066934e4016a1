//! Walks through every accessor against the sample document in
//! `demos/app-config.json`.
//!
//! Run with `cargo run --example demo` from the repository root.

use app_config::ConfigStore;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ComplexSetting {
    #[serde(rename = "Setting1")]
    setting1: String,
    #[serde(rename = "Setting2")]
    setting2: String,
}

#[derive(Debug, Default, Deserialize)]
struct TestObject {
    #[serde(rename = "SomeValue")]
    some_value: i32,
    #[serde(rename = "SubObject")]
    sub_object: SubObject,
}

#[derive(Debug, Default, Deserialize)]
struct SubObject {
    #[serde(rename = "Int")]
    int: i64,
    #[serde(rename = "Dec")]
    dec: f64,
    #[serde(rename = "Str")]
    str: String,
}

fn main() -> Result<(), app_config::ConfigError> {
    // Surfaces the warning if the process-wide fallback path is exercised.
    tracing_subscriber::fmt::init();

    let config = ConfigStore::from_file("demos/app-config.json")?;

    let abc: Option<String> = config.app_setting("Test.Abc")?;
    println!("Test.Abc = {:?}", abc);

    let double: f64 = config.require_app_setting("DoubleSetting")?;
    println!("DoubleSetting = {}", double);

    println!("Default = {:?}", config.connection_string("Default")?);

    let complex: ComplexSetting = config.require_app_setting("ComplexSetting")?;
    println!("ComplexSetting = {} / {}", complex.setting1, complex.setting2);

    let test_object: TestObject = config.require_section("TestObject")?;
    println!(
        "TestObject = {} ({}, {}, {})",
        test_object.some_value,
        test_object.sub_object.int,
        test_object.sub_object.dec,
        test_object.sub_object.str,
    );

    // A missing section is not an error unless required; opt back into the
    // default-instance behavior explicitly.
    let missing: TestObject = config.section("MissingObject")?.unwrap_or_default();
    println!("MissingObject = {:?}", missing);

    // The process-wide instance loads app-config.json from the program's own
    // directory; without one it falls back to an empty store.
    let ambient = ConfigStore::application();
    println!(
        "ambient Test.Abc = {:?}",
        ambient.app_setting::<String>("Test.Abc")?
    );

    Ok(())
}
