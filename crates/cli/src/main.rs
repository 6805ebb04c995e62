use anyhow::{Context, Result};
use chainhull::cfg::{CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, DEFAULT_POINT_COUNT};
use chainhull::hull::check_finite;
use chainhull::rand::{random_points, CanvasCfg, ReplayToken};
use chainhull::trace::{EventSink, NoTrace, TraceEvent};
use chainhull::{Hull, HullAlgorithm, Point};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls with a replayable construction trace")]
struct Cmd {
    /// Log at DEBUG level (trace events are logged when --trace is set)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Monotone,
    GiftWrap,
}

impl From<Algo> for HullAlgorithm {
    fn from(a: Algo) -> Self {
        match a {
            Algo::Monotone => HullAlgorithm::MonotoneChain,
            Algo::GiftWrap => HullAlgorithm::GiftWrap,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv with x,y[,id] or .json)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Monotone)]
        algo: Algo,
        /// Record construction events in the output
        #[arg(long)]
        trace: bool,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a reproducible random point set on a padded canvas
    Random {
        #[arg(long, default_value_t = DEFAULT_POINT_COUNT)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = CANVAS_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = CANVAS_HEIGHT)]
        height: u32,
        #[arg(long, default_value_t = CANVAS_PADDING)]
        padding: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull {
            input,
            algo,
            trace,
            out,
        } => hull(&input, algo.into(), trace, out.as_deref()),
        Action::Random {
            count,
            seed,
            index,
            width,
            height,
            padding,
            out,
        } => {
            let canvas = CanvasCfg {
                width,
                height,
                padding,
            };
            random(count, canvas, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

/// Logs every event at DEBUG and keeps it for the output document.
#[derive(Default)]
struct LogSink {
    events: Vec<TraceEvent>,
}

impl EventSink for LogSink {
    fn emit(&mut self, event: TraceEvent) {
        tracing::debug!(chain = event.chain.as_str(), "{event}");
        self.events.push(event);
    }
}

#[derive(Serialize)]
struct HullDoc {
    algo: &'static str,
    input_len: usize,
    ids: Vec<u32>,
    area: f64,
    hull: Hull,
    events: Vec<TraceEvent>,
}

fn compute(points: &[Point], algo: HullAlgorithm, trace: bool) -> HullDoc {
    let (hull, events) = if trace {
        if algo == HullAlgorithm::GiftWrap {
            tracing::warn!(algo = algo.as_str(), "algorithm emits no trace events");
        }
        let mut sink = LogSink::default();
        let hull = algo.compute(points, &mut sink);
        (hull, sink.events)
    } else {
        (algo.compute(points, &mut NoTrace), Vec::new())
    };
    HullDoc {
        algo: algo.as_str(),
        input_len: points.len(),
        ids: hull.ids(),
        area: hull.signed_area(),
        hull,
        events,
    }
}

fn hull(input: &Path, algo: HullAlgorithm, trace: bool, out: Option<&Path>) -> Result<()> {
    let points = io::read_points(input)?;
    check_finite(&points)?;
    let doc = compute(&points, algo, trace);
    tracing::info!(
        input = %input.display(),
        algo = doc.algo,
        n = doc.input_len,
        h = doc.ids.len(),
        events = doc.events.len(),
        "hull"
    );
    match out {
        Some(out) => {
            create_parent(out)?;
            std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", out.display()))?;
            let params = json!({
                "input": input.to_string_lossy(),
                "algo": doc.algo,
                "trace": trace,
            });
            write_sidecar(out, Provenance::new("hull", params))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn random(count: usize, canvas: CanvasCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    let points = random_points(count, canvas, tok)?;
    tracing::info!(count, seed = tok.seed, index = tok.index, out = %out.display(), "random");
    create_parent(out)?;
    io::write_points(out, &points)?;
    let params = json!({
        "count": count,
        "seed": tok.seed,
        "index": tok.index,
        "width": canvas.width,
        "height": canvas.height,
        "padding": canvas.padding,
    });
    write_sidecar(out, Provenance::new("random", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let prov = Provenance::new("report", json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
