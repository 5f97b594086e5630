// File: crates/linefit-examples/src/bin/fit.rs
// Summary: Minimal example that fits an endpoint line and writes the plot figure to JSON.

use linefit_core::{build_layout, build_regression_line, linspace, plot, trace, LayoutOptions, Mode, Point};

fn main() {
    // Noisy samples, deliberately out of order
    let data = vec![
        Point::new(4.0, 1.4),
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.8),
        Point::new(1.0, 1.2),
        Point::new(5.0, 2.0),
        Point::new(3.0, 1.8),
    ];
    let xs: Vec<f64> = data.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = data.iter().map(|p| p.y).collect();

    let line = build_regression_line(&xs, &ys).expect("fit line");
    println!("m = {}, b = {}", line.m, line.b);

    let traces = vec![
        trace(&data, Mode::Markers, "data"),
        line.trace(&linspace(0.0, 5.0, 11), "endpoint line"),
    ];
    let layout = build_layout(Some([0.0, 5.0]), Some([0.0, 2.2]), &LayoutOptions::new());
    let fig = plot(traces, layout);

    let out = std::path::PathBuf::from("target/out/example_fit.json");
    fig.write_json(&out).expect("write figure");
    println!("Wrote {}", out.display());
}
