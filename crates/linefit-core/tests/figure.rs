// File: crates/linefit-core/tests/figure.rs
// Purpose: End-to-end figure assembly and JSON export.

use linefit_core::{fit_figure, plot, Figure, FigureOptions, FitError, Layout, Line, Mode};

#[test]
fn fit_figure_holds_samples_and_line() {
    let x = [5.0, 1.0, 3.0];
    let y = [10.0, 2.0, 6.0];
    let opts = FigureOptions { line_points: 5, ..FigureOptions::default() };
    let (line, fig) = fit_figure(&x, &y, &opts).expect("fit");
    assert_eq!(line, Line::new(2.0, 0.0));
    assert_eq!(fig.data.len(), 2);

    let samples = &fig.data[0];
    assert_eq!(samples.mode, Mode::Markers);
    assert_eq!(samples.x, vec![1.0, 3.0, 5.0]);
    assert_eq!(samples.y, vec![2.0, 6.0, 10.0]);

    let fitted = &fig.data[1];
    assert_eq!(fitted.mode, Mode::Lines);
    assert_eq!(fitted.name, "line function");
    assert_eq!(fitted.x, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(fitted.y, vec![2.0, 4.0, 6.0, 8.0, 10.0]);

    // 2% padding on each side of the sample box
    let [x0, x1] = fig.layout.x_range().expect("x range");
    let [y0, y1] = fig.layout.y_range().expect("y range");
    assert!((x0 - 0.92).abs() < 1e-9 && (x1 - 5.08).abs() < 1e-9);
    assert!((y0 - 1.84).abs() < 1e-9 && (y1 - 10.16).abs() < 1e-9);
    assert!(fig.layout.get("title").is_none());
}

#[test]
fn fit_figure_tight_ranges_and_title() {
    let opts = FigureOptions { pad_ranges: false, title: Some("endpoint fit".into()), ..FigureOptions::default() };
    let (_, fig) = fit_figure(&[0.0, 2.0], &[1.0, -1.0], &opts).expect("fit");
    assert_eq!(fig.layout.x_range(), Some([0.0, 2.0]));
    assert_eq!(fig.layout.y_range(), Some([-1.0, 1.0]));
    assert_eq!(fig.layout.get("title"), Some(&serde_json::json!({ "text": "endpoint fit" })));
    assert_eq!(fig.data[1].x.len(), 50);
}

#[test]
fn fit_figure_surfaces_fit_errors() {
    let opts = FigureOptions::default();
    assert!(matches!(fit_figure(&[1.0, 1.0], &[0.0, 1.0], &opts), Err(FitError::DegenerateInput { .. })));
    assert!(matches!(fit_figure(&[1.0, 2.0], &[0.0], &opts), Err(FitError::ShapeMismatch { .. })));
}

#[test]
fn write_json_smoke() {
    let (_, fig) = fit_figure(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0], &FigureOptions::default()).expect("fit");
    let out = std::path::PathBuf::from("target/test_out/figure.json");
    fig.write_json(&out).expect("write should succeed");

    let text = std::fs::read_to_string(&out).expect("output exists");
    let back: Figure = serde_json::from_str(&text).expect("valid figure json");
    assert_eq!(back.data.len(), 2);
    assert_eq!(back.data[0], fig.data[0]);
    let [x0, x1] = back.layout.x_range().expect("x range");
    assert!((x0 + 0.04).abs() < 1e-9 && (x1 - 2.04).abs() < 1e-9);
}

#[test]
fn plot_keeps_trace_order() {
    let a = Line::new(1.0, 0.0).trace(&[0.0, 1.0], "a");
    let b = Line::new(-1.0, 0.0).trace(&[0.0, 1.0], "b");
    let fig = plot(vec![a, b], Layout::new());
    let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(fig.to_json().expect("json").matches("\"mode\":\"lines\"").count(), 2);
}

#[test]
fn options_clone_and_print() {
    let opts = FigureOptions { title: Some("t".into()), ..FigureOptions::default() };
    let copy = opts.clone();
    assert_eq!(copy.title.as_deref(), Some("t"));
    assert_eq!(copy.line_points, 50);
    assert!(format!("{:?}", copy).contains("line_points"));
}
