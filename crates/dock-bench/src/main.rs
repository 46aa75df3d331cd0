use std::io;
use std::time::{Duration, Instant};

use clap::Parser;

use panel_dock::geometry::Length;
use panel_dock::panel::BorderEdge;
use panel_dock::state::LayoutState;

#[derive(Parser, Debug)]
#[command(
    name = "dock-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Event-dispatch benchmark for checking layout state throughput"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 5.0
    )]
    duration_seconds: f64,

    /// Snapshot after every dispatch instead of once per gesture cycle.
    #[arg(long = "snapshot-heavy", default_value_t = false)]
    snapshot_heavy: bool,
}

impl BenchCli {
    fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_seconds)
    }
}

struct BenchStats {
    started: Instant,
    dispatches: u64,
    cycles: u64,
    double_clicks: u64,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            dispatches: 0,
            cycles: 0,
            double_clicks: 0,
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn final_report(&self) -> String {
        let secs = self.elapsed().as_secs_f64().max(f64::EPSILON);
        format!(
            "dispatches: {} ({:.0}/s)\ngesture cycles: {}\ndouble-clicks classified: {}",
            self.dispatches,
            self.dispatches as f64 / secs,
            self.cycles,
            self.double_clicks,
        )
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    if !(0.5..=600.0).contains(&args.duration_seconds) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "duration must be between 0.5 and 600 seconds",
        ));
    }

    let stats = run_benchmark(args.duration(), args.snapshot_heavy);
    println!("{}", stats.final_report());
    Ok(())
}

/// Drive one full gesture cycle per iteration: a border double-click on
/// every panel, a freeform drag commit, the launcher toggle, and a pass
/// over the left rail buttons.
fn run_benchmark(duration: Duration, snapshot_heavy: bool) -> BenchStats {
    let mut layout: LayoutState = LayoutState::default();
    let mut stats = BenchStats::new();

    loop {
        let now = Instant::now();
        let step = Duration::from_millis(10);

        for edge in [BorderEdge::Right, BorderEdge::Bottom, BorderEdge::BottomRight] {
            layout.home_resize_start(edge, now);
            if layout.home_resize_start(edge, now + step) {
                stats.double_clicks += 1;
            }
            stats.dispatches += 2;
            maybe_snapshot(&layout, snapshot_heavy);
        }

        layout.chat_resize_start(BorderEdge::Top, now);
        if layout.chat_resize_start(BorderEdge::Top, now + step) {
            stats.double_clicks += 1;
        }
        layout.chat_resize_stop(None, Some(Length::Px(48)));
        stats.dispatches += 3;
        maybe_snapshot(&layout, snapshot_heavy);

        layout.left_resize_start(BorderEdge::Right, now);
        layout.left_resize_stop(Some(Length::Px(320)), None);
        layout.left_account_click();
        layout.left_alerts_click();
        layout.left_alerts_click();
        stats.dispatches += 5;
        maybe_snapshot(&layout, snapshot_heavy);

        layout.home_toggle();
        layout.home_toggle();
        stats.dispatches += 2;

        // One read per cycle so the whole write-then-read path is timed.
        let snap = layout.snapshot();
        assert_eq!(snap.revision, layout.revision());

        stats.cycles += 1;
        if stats.elapsed() >= duration {
            break;
        }
    }

    stats
}

fn maybe_snapshot(layout: &LayoutState, heavy: bool) {
    if heavy {
        std::hint::black_box(layout.snapshot());
    }
}
