// File: crates/linefit-core/src/figure.rs
// Summary: Figure record ({data, layout}) assembly and JSON export for the plotting front end.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::Result as FitResult;
use crate::fit::{build_regression_line, pair_and_sort};
use crate::grid::linspace;
use crate::layout::{build_layout, Layout, LayoutOptions};
use crate::trace::{trace, Mode, Trace, DATA_NAME, LINE_NAME};
use crate::types::Line;
use crate::view::{Extent, PAD_FRACTION};

#[derive(Clone, Debug)]
pub struct FigureOptions {
    /// Number of x positions the fitted line is sampled at.
    pub line_points: usize,
    pub data_name: String,
    pub line_name: String,
    pub title: Option<String>,
    /// Pad axis ranges around the samples instead of fitting them tightly.
    pub pad_ranges: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            line_points: 50,
            data_name: DATA_NAME.to_string(),
            line_name: LINE_NAME.to_string(),
            title: None,
            pad_ranges: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// Combine traces and a layout into one figure.
pub fn plot(traces: Vec<Trace>, layout: Layout) -> Figure {
    Figure { data: traces, layout }
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the figure as pretty JSON to `path`, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty().context("serialize figure")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        log::info!("wrote figure with {} traces to {}", self.data.len(), path.display());
        Ok(())
    }
}

/// Fit the endpoint line and lay out samples plus line in one figure.
/// The line is sampled across the x extent of the samples.
pub fn fit_figure(x_values: &[f64], y_values: &[f64], opts: &FigureOptions) -> FitResult<(Line, Figure)> {
    let line = build_regression_line(x_values, y_values)?;
    let points = pair_and_sort(x_values, y_values)?;

    let mut extent = Extent::from_points(&points);
    let xs = linspace(extent.x_min, extent.x_max, opts.line_points);
    if opts.pad_ranges {
        extent = extent.padded(PAD_FRACTION);
    }

    let mut layout = build_layout(Some(extent.x_range()), Some(extent.y_range()), &LayoutOptions::new());
    if let Some(title) = &opts.title {
        layout = layout.with_title(title.as_str());
    }

    let traces = vec![
        trace(&points, Mode::Markers, &opts.data_name),
        line.trace(&xs, &opts.line_name),
    ];
    Ok((line, plot(traces, layout)))
}
