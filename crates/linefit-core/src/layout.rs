// File: crates/linefit-core/src/layout.rs
// Summary: Plot layout record: optional axis ranges merged with free-form options.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Free-form layout keys (title, width, legend, ...), passed through verbatim.
pub type LayoutOptions = Map<String, Value>;

/// Layout as the front end expects it: a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(Map<String, Value>);

impl Layout {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Set `key`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with("title", json!({ "text": title.into() }))
    }

    /// `xaxis.range`, if set and well formed.
    pub fn x_range(&self) -> Option<[f64; 2]> { axis_range(self.get("xaxis")?) }
    /// `yaxis.range`, if set and well formed.
    pub fn y_range(&self) -> Option<[f64; 2]> { axis_range(self.get("yaxis")?) }
}

fn axis_range(axis: &Value) -> Option<[f64; 2]> {
    let r = axis.get("range")?.as_array()?;
    match r.as_slice() {
        [lo, hi] => Some([lo.as_f64()?, hi.as_f64()?]),
        _ => None,
    }
}

/// Layout with the given axis ranges, then `options` merged on top.
/// Keys in `options` win over the generated `xaxis`/`yaxis` entries.
pub fn build_layout(x_range: Option<[f64; 2]>, y_range: Option<[f64; 2]>, options: &LayoutOptions) -> Layout {
    let mut layout = Map::new();
    if let Some(r) = x_range { layout.insert("xaxis".into(), json!({ "range": r })); }
    if let Some(r) = y_range { layout.insert("yaxis".into(), json!({ "range": r })); }
    layout.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
    Layout(layout)
}
