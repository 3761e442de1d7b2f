//! adclick-gate binary: evaluate a URL against an attribution configuration.
//!
//! Reads a JSON request from stdin, writes a JSON verdict to stdout:
//!
//! ```text
//! { "url": "https://ads-example.com/click", "config": { ...optional... } }
//!   -> { "allowed": true, "reason": "allow-list entry ads-example.com" }
//! ```
//!
//! When `config` is omitted the embedded default configuration is used.
//! Pass `--verbose` for debug logging on stderr.

use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;

use adclick_gate::config::AttributionConfig;
use adclick_gate::eval::AttributionEvaluator;
use adclick_gate::feature::FeatureFlags;
use adclick_gate::logging;
use adclick_gate::store::AttributionStore;

#[derive(Deserialize)]
struct Request {
    url: Option<String>,
    config: Option<serde_json::Value>,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    logging::init(verbose);

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }

    let request: Request = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            std::process::exit(1);
        }
    };

    let Some(url) = request.url else {
        eprintln!("missing \"url\" field");
        std::process::exit(1);
    };

    let config = match request.config {
        Some(value) => match AttributionConfig::from_json(&value.to_string()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("config parse error: {e}");
                std::process::exit(1);
            }
        },
        None => AttributionConfig::default_config(),
    };

    let store = Arc::new(AttributionStore::new());
    let flags = Arc::new(FeatureFlags::new());
    config.install(&store, &flags);

    let evaluator = AttributionEvaluator::new(store, flags);
    let verdict = evaluator.verdict(&url);

    let output = serde_json::json!({
        "allowed": verdict.allowed,
        "reason": verdict.reason,
    });

    println!("{}", serde_json::to_string(&output).expect("verdict serializes"));
}
