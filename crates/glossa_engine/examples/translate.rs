//! Minimal end-to-end demo: load two catalogs from memory, then watch
//! the same phrase render in both languages and hit the cache.
//!
//! Run with `RUST_LOG=glossa_engine=trace` to see match and cache events.

use glossa_engine::{Localizer, StaticSource, phrase};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = StaticSource::new()
        .with(
            "en_AU",
            r#"{
                "greeting": ["Hello $name!", "name"],
                "farewell": ["Goodbye $name, see you $when.", "name", "when"]
            }"#,
        )
        .with(
            "de_DE",
            r#"{
                "greeting": ["Hallo $name!", "name"],
                "farewell": ["Bis $when, $name.", "name", "when"]
            }"#,
        );

    let localizer = Localizer::new(source, "en_AU");
    localizer.load_all(["en_AU", "de_DE"]).await?;

    let name = "Ada";
    let greeting = phrase!["Hello ", {name}, "!"];

    println!("en_AU: {}", localizer.localize("en_AU", &greeting));
    println!("de_DE: {}", localizer.localize("de_DE", &greeting));

    let when = "tomorrow";
    let farewell = phrase!["Goodbye ", {name}, ", see you ", {when}, "."];
    println!("de_DE: {}", localizer.localize("de_DE", &farewell));

    println!("cache: {:?}", localizer.stats());
    Ok(())
}
