// File: crates/linefit-core/src/lib.rs
// Summary: Core library entry point; exports the endpoint line fitter and plot record builders.

pub mod error;
pub mod types;
pub mod fit;
pub mod grid;
pub mod view;
pub mod trace;
pub mod layout;
pub mod figure;

pub use error::FitError;
pub use types::{Line, Point};
pub use fit::{build_regression_line, endpoints, expected_value_for_line, pair_and_sort, slope, y_intercept};
pub use grid::linspace;
pub use view::Extent;
pub use trace::{line_function_data, line_function_trace, m_b_data, m_b_trace, trace, trace_values, Mode, Series, Trace};
pub use layout::{build_layout, Layout, LayoutOptions};
pub use figure::{fit_figure, plot, Figure, FigureOptions};
