use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments describing a single target-algorithm run. Only `seed` and
/// `instance` are consumed by the command-line builder; the remaining fields
/// are accepted by convention and carried through untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunArgs {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub specifics: Option<String>,
    #[serde(default)]
    pub cutoff: Option<f64>,
    #[serde(default)]
    pub runlength: Option<u64>,
}

/// Solver tuning parameters. serde_json is built with `preserve_order`, so
/// iteration order is insertion order (document order when parsed from json),
/// which keeps generated command lines reproducible.
pub type ParamMap = Map<String, Value>;

/// Renders a parameter value as a single argv token. String values are
/// interpolated verbatim; anything else keeps its canonical json rendering.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}
