// File: crates/linefit-core/src/trace.rs
// Summary: Plot trace records ({x, y, mode, name[, text]}) for a plotly-style front end.
// Notes:
// - Records are plain data. Builders take their inputs by reference and return
//   fresh values; nothing here keeps shared defaults between calls.

use serde::{Deserialize, Serialize};

use crate::fit::expected_value_for_line;
use crate::types::{Line, Point};

/// Default name for sample traces.
pub const DATA_NAME: &str = "data";
/// Default name for traces evaluated from a function or line.
pub const LINE_NAME: &str = "line function";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Bare x/y columns, before a mode and name are attached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    /// Attach mode and name, producing a trace.
    pub fn into_trace(self, mode: Mode, name: impl Into<String>) -> Trace {
        Trace { x: self.x, y: self.y, mode, name: name.into(), text: None }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: Mode,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

impl Trace {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Per-point hover labels.
    pub fn with_text<S: Into<String>>(mut self, text: impl IntoIterator<Item = S>) -> Self {
        self.text = Some(text.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize { self.x.len().min(self.y.len()) }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Paired (x, y) view of the trace.
    pub fn points(&self) -> Vec<Point> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y)).collect()
    }
}

/// Split samples into a trace's x and y columns.
pub fn trace(data: &[Point], mode: Mode, name: &str) -> Trace {
    let x = data.iter().map(|p| p.x).collect();
    let y = data.iter().map(|p| p.y).collect();
    Series { x, y }.into_trace(mode, name)
}

/// Trace from explicit columns plus hover text; `text` is always emitted, even when empty.
pub fn trace_values(x_values: &[f64], y_values: &[f64], mode: Mode, name: &str, text: &[String]) -> Trace {
    Series { x: x_values.to_vec(), y: y_values.to_vec() }
        .into_trace(mode, name)
        .with_text(text.iter().cloned())
}

/// Evaluate `line_function` at each x.
pub fn line_function_data<F>(line_function: F, x_values: &[f64]) -> Series
where
    F: Fn(f64) -> f64,
{
    let y = x_values.iter().map(|&x| line_function(x)).collect();
    Series { x: x_values.to_vec(), y }
}

pub fn line_function_trace<F>(line_function: F, x_values: &[f64], mode: Mode, name: &str) -> Trace
where
    F: Fn(f64) -> f64,
{
    line_function_data(line_function, x_values).into_trace(mode, name)
}

/// Evaluate `y = m*x + b` at each x.
pub fn m_b_data(m: f64, b: f64, x_values: &[f64]) -> Series {
    line_function_data(|x| expected_value_for_line(m, b, x), x_values)
}

pub fn m_b_trace(m: f64, b: f64, x_values: &[f64], mode: Mode, name: &str) -> Trace {
    m_b_data(m, b, x_values).into_trace(mode, name)
}

impl Line {
    /// Line trace over `x_values`, drawn in `lines` mode.
    pub fn trace(&self, x_values: &[f64], name: &str) -> Trace {
        m_b_trace(self.m, self.b, x_values, Mode::Lines, name)
    }
}
