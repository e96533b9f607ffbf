//! lsys-points generator as a WASM module for browser environments.
//!
//! This crate exposes the generation pipeline via `wasm-bindgen`, returning
//! JSON strings a renderer can parse directly.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { make_points } from 'lsys-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(make_points('{"length": [50, 60], "angle": [3, 34]}', "X", "F[-X][+X]"));
//! for (const p of result.report.graph.points) {
//!   if (p.parent !== -1) drawLine(p, result.report.graph.points[p.parent]);
//! }
//! ```

use lsys_generator::{GenerationReport, Generator, GeneratorConfig};
use lsys_types::Result;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// JSON envelope returned by [`make_points`].
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<GenerationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<GenerationReport>> for PointsResult {
    fn from(result: Result<GenerationReport>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                report: Some(report),
                error: None,
            },
            Err(e) => Self {
                success: false,
                report: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Generate a point graph from a JSON configuration.
///
/// Returns a JSON string containing a `PointsResult`:
/// ```json
/// {
///   "success": true,
///   "report": {
///     "graph": { "points": [{ "x": 10, "y": 0, "angle": 1.57, "level": 0, "index": 0, "parent": -1 }], "width": 20, "height": 10, "minX": 0, "minY": 0 },
///     "iterations": { "requested": 2, "effective": 2, "limit": 13 },
///     "symbols": 25,
///     "diagnostics": { "items": [], "total": 0 }
///   }
/// }
/// ```
///
/// On failure, `success` is `false` and `error` holds the message.
/// An empty `config_json` means the defaults.
#[wasm_bindgen]
pub fn make_points(config_json: &str, axiom: &str, rule: &str) -> String {
    let result = parse_config(config_json).and_then(|config| generate(config, axiom, rule));
    to_json(&PointsResult::from(result))
}

/// Same as [`make_points`], taking the configuration as a JS object.
#[wasm_bindgen]
pub fn make_points_js(config: JsValue, axiom: &str, rule: &str) -> String {
    let result = if config.is_undefined() || config.is_null() {
        generate(GeneratorConfig::default(), axiom, rule)
    } else {
        match serde_wasm_bindgen::from_value::<GeneratorConfig>(config) {
            Ok(config) => generate(config, axiom, rule),
            Err(e) => {
                return to_json(&PointsResult {
                    success: false,
                    report: None,
                    error: Some(e.to_string()),
                })
            }
        }
    };
    to_json(&PointsResult::from(result))
}

/// JSON envelope returned by [`expand`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<String>> for ExpandResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(symbols) => Self {
                success: true,
                symbols: Some(symbols),
                error: None,
            },
            Err(e) => Self {
                success: false,
                symbols: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Return the expanded symbol string after iteration capping, as a JSON
/// `ExpandResult`: `{"success": true, "symbols": "F[-X][+X]"}` or
/// `{"success": false, "error": "..."}`.
#[wasm_bindgen]
pub fn expand(config_json: &str, axiom: &str, rule: &str) -> String {
    let result = parse_config(config_json)
        .and_then(Generator::new)
        .and_then(|g| g.expand(axiom, rule));
    to_json(&ExpandResult::from(result))
}

/// Return the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_config(config_json: &str) -> Result<GeneratorConfig> {
    if config_json.trim().is_empty() {
        Ok(GeneratorConfig::default())
    } else {
        GeneratorConfig::from_json(config_json)
    }
}

fn generate(config: GeneratorConfig, axiom: &str, rule: &str) -> Result<GenerationReport> {
    Generator::new(config)?.generate(axiom, rule)
}

fn to_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization error: {e}"}}"#)
    })
}
