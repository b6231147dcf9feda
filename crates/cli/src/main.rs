mod input;
mod provenance;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hull2d::api::{
    all_thicknesses, hull_of_unordered, Coord, MelkmanHull, Point, Thickness, ThicknessWitness,
    Widen,
};
use provenance::{BuildInfo, RunParams};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Incremental convex hull and rotating-caliper thickness")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct InputArgs {
    /// Point list: .csv with columns x,y or .json [[x, y], ...], in polyline order
    #[arg(long)]
    input: PathBuf,
    /// Sort the points first (any point set instead of a simple polyline)
    #[arg(long)]
    unordered: bool,
    /// Integer coordinates (i32) with exact predicates in i128
    #[arg(long)]
    integer: bool,
    /// Also write the JSON report here, with a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
}

impl InputArgs {
    fn run_params(
        &self,
        action: &'static str,
        metric: Option<&'static str>,
        tag: Option<String>,
    ) -> RunParams {
        RunParams {
            action,
            input: self.input.clone(),
            metric,
            unordered: self.unordered,
            integer: self.integer,
            tags: tag.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Hv,
    Euclidean,
    Both,
}

impl MetricArg {
    fn name(self) -> &'static str {
        match self {
            MetricArg::Hv => "horizontal_vertical",
            MetricArg::Euclidean => "euclidean",
            MetricArg::Both => "both",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull and print its vertices
    Hull {
        #[command(flatten)]
        io: InputArgs,
    },
    /// Minimal width of the hull with its witness triple
    Thickness {
        #[command(flatten)]
        io: InputArgs,
        #[arg(long, value_enum, default_value_t = MetricArg::Both)]
        metric: MetricArg,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct HullReport {
    input_points: usize,
    degenerate: bool,
    vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct WidthReport {
    metric: &'static str,
    width: f64,
    p: [f64; 2],
    q: [f64; 2],
    s: [f64; 2],
    edge: usize,
    antipode: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { io } => hull(io, cmd.tag),
        Action::Thickness { io, metric } => thickness(io, metric, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn build<C, W>(points: Vec<Point<C>>, unordered: bool) -> MelkmanHull<C, W>
where
    C: Coord + PartialOrd,
    W: Widen<C>,
{
    if unordered {
        hull_of_unordered(&points)
    } else {
        MelkmanHull::from_points(points)
    }
}

#[inline]
fn xy<C: Coord + Into<f64>>(p: Point<C>) -> [f64; 2] {
    [p.x.into(), p.y.into()]
}

fn hull_report<C, W>(hull: &MelkmanHull<C, W>, input_points: usize) -> HullReport
where
    C: Coord + Into<f64>,
    W: Widen<C>,
{
    HullReport {
        input_points,
        degenerate: hull.is_degenerate(),
        vertices: hull.iter().map(xy).collect(),
    }
}

fn width_report<C>(metric: Thickness, w: &ThicknessWitness<C>) -> WidthReport
where
    C: Coord + Into<f64>,
{
    WidthReport {
        metric: match metric {
            Thickness::HorizontalVertical => "horizontal_vertical",
            Thickness::Euclidean => "euclidean",
        },
        width: w.width,
        p: xy(w.p),
        q: xy(w.q),
        s: xy(w.s),
        edge: w.edge,
        antipode: w.antipode,
    }
}

fn width_reports<C, W>(hull: &MelkmanHull<C, W>, metric: MetricArg) -> Result<Vec<WidthReport>>
where
    C: Coord + Into<f64>,
    W: Widen<C>,
{
    let single = match metric {
        MetricArg::Hv => Thickness::HorizontalVertical,
        MetricArg::Euclidean => Thickness::Euclidean,
        MetricArg::Both => {
            let both = all_thicknesses::<C, W, _>(hull)?;
            return Ok(Thickness::ALL
                .iter()
                .map(|&m| width_report(m, both.get(m)))
                .collect());
        }
    };
    Ok(vec![width_report(single, &hull.thickness(single)?)])
}

fn hull(io: InputArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %io.input.display(),
        unordered = io.unordered,
        integer = io.integer,
        tag = ?tag,
        "hull"
    );
    let coords = input::read_coords(&io.input)?;
    let report = if io.integer {
        let h = build::<i32, i128>(input::to_i32_points(&coords)?, io.unordered);
        hull_report(&h, coords.len())
    } else {
        let h = build::<f64, f64>(input::to_f64_points(&coords), io.unordered);
        hull_report(&h, coords.len())
    };
    tracing::info!(
        vertices = report.vertices.len(),
        degenerate = report.degenerate,
        "hull_built"
    );
    let run = io.run_params("hull", None, tag);
    emit(&report, io.out.as_deref(), &run)
}

fn thickness(io: InputArgs, metric: MetricArg, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %io.input.display(),
        ?metric,
        unordered = io.unordered,
        integer = io.integer,
        tag = ?tag,
        "thickness"
    );
    let coords = input::read_coords(&io.input)?;
    let reports = if io.integer {
        let h = build::<i32, i128>(input::to_i32_points(&coords)?, io.unordered);
        width_reports(&h, metric)?
    } else {
        let h = build::<f64, f64>(input::to_f64_points(&coords), io.unordered);
        width_reports(&h, metric)?
    };
    for r in &reports {
        tracing::info!(metric = r.metric, width = r.width, "thickness_done");
    }
    let run = io.run_params("thickness", Some(metric.name()), tag);
    emit(&reports, io.out.as_deref(), &run)
}

/// Print the report; with `out`, also write it and its provenance sidecar.
fn emit<T: Serialize>(report: &T, out: Option<&Path>, run: &RunParams) -> Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    println!("{body}");
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, &body)?;
        let prov = provenance::write_sidecar(out, run)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "build": BuildInfo::current(),
        "tags": tag.into_iter().collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point<i32>> {
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
    }

    #[test]
    fn both_metrics_reported_in_fixed_order() {
        let h = build::<i32, i128>(triangle(), false);
        let reports = width_reports(&h, MetricArg::Both).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].metric, "horizontal_vertical");
        assert_eq!(reports[0].width, 1.0);
        assert_eq!(reports[1].metric, "euclidean");
        assert_eq!(reports[1].p, [1.0, 1.0]);
        assert_eq!(reports[1].s, [1.0, 0.0]);
    }

    #[test]
    fn degenerate_input_propagates_error() {
        let h = build::<i32, i128>(vec![Point::new(0, 0), Point::new(2, 2)], true);
        assert!(hull_report(&h, 2).degenerate);
        let err = width_reports(&h, MetricArg::Hv).unwrap_err();
        assert!(err.to_string().contains("degenerate hull"));
    }

    #[test]
    fn extreme_integer_corners_report_true_width() {
        let corners = vec![
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
        ];
        let h = build::<i32, i128>(corners, false);
        let report = hull_report(&h, 3);
        assert!(!report.degenerate);
        assert_eq!(report.vertices.len(), 3);
        let reports = width_reports(&h, MetricArg::Euclidean).unwrap();
        let span = i32::MAX as f64 - i32::MIN as f64;
        assert!(reports[0].width > 3.0e9);
        assert!(((reports[0].width - span / 2.0f64.sqrt()) / span).abs() < 1e-12);
    }

    #[test]
    fn run_params_carry_cli_flags() {
        let io = InputArgs {
            input: PathBuf::from("pts.json"),
            unordered: true,
            integer: true,
            out: None,
        };
        let run = io.run_params("thickness", Some(MetricArg::Hv.name()), Some("t".into()));
        assert_eq!(run.metric, Some("horizontal_vertical"));
        assert!(run.unordered && run.integer);
        assert_eq!(run.tags, vec!["t".to_string()]);
    }
}
