// File: crates/demo/src/main.rs
// Summary: Demo loads (x, y) samples from CSV, fits the endpoint line and writes a plot figure as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use linefit_core::{fit_figure, trace_values, Figure, FigureOptions, Line, Mode};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fit a line through the lowest-x and highest-x samples of a CSV file", long_about = None)]
struct Args {
    /// CSV file with a header row
    #[arg(index = 1, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/samples.csv"))]
    input: PathBuf,

    /// Column holding x values
    #[arg(long, default_value = "x")]
    x_col: String,

    /// Column holding y values
    #[arg(long, default_value = "y")]
    y_col: String,

    /// Optional column used as hover text for the samples
    #[arg(long)]
    label_col: Option<String>,

    /// Output JSON path (default: target/out/figure_<stem>.json)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Number of positions the fitted line is sampled at
    #[arg(long, default_value_t = 50)]
    points: usize,

    /// Plot title
    #[arg(long)]
    title: Option<String>,
}

/// Parsed sample columns, index-aligned.
struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
    labels: Option<Vec<String>>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("Using input file: {}", args.input.display());
    let samples = load_samples_csv(&args.input, &args.x_col, &args.y_col, args.label_col.as_deref())
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    println!("Loaded {} samples", samples.x.len());

    let opts = FigureOptions {
        line_points: args.points.max(2),
        title: args.title.clone(),
        ..FigureOptions::default()
    };
    let (line, fig) = build_figure(&samples, &opts)?;
    println!("Endpoint line: y = {:.6} * x + {:.6}", line.m, line.b);

    let out = args.out.clone().unwrap_or_else(|| out_name_for(&args.input));
    fig.write_json(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Fit the samples; labelled samples get hover text on the markers trace.
fn build_figure(samples: &Samples, opts: &FigureOptions) -> Result<(Line, Figure)> {
    let (line, mut fig) = fit_figure(&samples.x, &samples.y, opts)
        .context("fitting endpoint line (check column names/delimiter)")?;
    if let Some(labels) = &samples.labels {
        fig.data[0] = trace_values(&samples.x, &samples.y, Mode::Markers, &opts.data_name, labels);
    }
    Ok((line, fig))
}

/// Produce output file name like target/out/figure_<stem>.json
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("samples");
    PathBuf::from("target/out").join(format!("figure_{}.json", stem))
}

/// Load the named columns; rows whose x or y does not parse are skipped.
fn load_samples_csv(path: &Path, x_col: &str, y_col: &str, label_col: Option<&str>) -> Result<Samples> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let i_x = idx(x_col).with_context(|| format!("no column named '{}' in {:?}", x_col, headers))?;
    let i_y = idx(y_col).with_context(|| format!("no column named '{}' in {:?}", y_col, headers))?;
    let i_label = match label_col {
        Some(name) => Some(idx(name).with_context(|| format!("no column named '{}' in {:?}", name, headers))?),
        None => None,
    };

    let mut out = Samples { x: Vec::new(), y: Vec::new(), labels: i_label.map(|_| Vec::new()) };
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            log::warn!("skipping row {}: unparsable x/y", row + 1);
            continue;
        };
        out.x.push(x);
        out.y.push(y);
        if let (Some(labels), Some(i)) = (out.labels.as_mut(), i_label) {
            labels.push(rec.get(i).unwrap_or_default().to_string());
        }
    }
    Ok(out)
}
