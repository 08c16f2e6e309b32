//! Airboard Headless Simulation Harness
//!
//! Drives the cabin engine through fixed boundary scenarios and a seeded
//! random churn, checking the seat partition after every step.
//! Runs entirely in-process: no terminal menu, no rendering.
//!
//! Usage:
//!   cargo run -p airboard-simtest
//!   cargo run -p airboard-simtest -- --verbose --ops 50000 --seed 7
//!   cargo run -p airboard-simtest -- --json

use std::collections::BTreeSet;

use airboard_logic::cabin::Cabin;
use airboard_logic::config::CabinConfig;
use airboard_logic::error::CabinError;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Airboard headless harness
#[derive(Parser, Debug)]
#[command(name = "airboard-simtest")]
#[command(about = "Checks cabin invariants over scripted and random runs", long_about = None)]
struct Args {
    /// Print passing checks too
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Random operations per churn run
    #[arg(long = "ops", default_value = "10000")]
    ops: usize,

    /// Seed for the churn runs
    #[arg(long = "seed", default_value = "42")]
    seed: u64,

    /// Print the summary as JSON
    #[arg(long = "json")]
    json: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !args.json {
        println!("=== Airboard Simulation Harness ===\n");
    }

    let mut results = Vec::new();

    // 1. Boundary scenarios
    results.extend(validate_boundaries(args.json));

    // 2. Ordering guarantees
    results.extend(validate_ordering(args.json));

    // 3. Round trip and seat reuse
    results.extend(validate_round_trip(args.json));

    // 4. Random churn across cabin shapes
    results.extend(validate_churn(args.ops, args.seed, args.json));

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    if args.json {
        let checks: Vec<_> = results
            .iter()
            .map(|r| serde_json::json!({ "name": r.name, "passed": r.passed, "detail": r.detail }))
            .collect();
        let report = serde_json::json!({
            "passed": passed,
            "failed": failed,
            "total": total,
            "checks": checks,
        });
        println!("{report:#}");
    } else {
        println!();
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || args.verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }

        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed, total, failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

fn cabin(rows: u32, seats_per_row: u32) -> Option<Cabin> {
    Cabin::new(&CabinConfig {
        rows,
        seats_per_row,
    })
    .ok()
}

fn section(title: &str, quiet: bool) {
    if !quiet {
        println!("--- {title} ---");
    }
}

// ── 1. Boundaries ───────────────────────────────────────────────────────

fn validate_boundaries(quiet: bool) -> Vec<TestResult> {
    section("Boundaries", quiet);
    let mut results = Vec::new();

    let Some(mut c) = cabin(1, 2) else {
        results.push(TestResult::check("cabin_1x2_builds", false, "1x2 cabin rejected"));
        return results;
    };
    for n in ["A", "B", "C"] {
        let _ = c.enqueue(n);
    }
    let a = c.board_next();
    let b = c.board_next();
    let full = c.board_next();

    results.push(TestResult::check(
        "capacity_first_seat",
        matches!(&a, Ok(x) if x.passenger == "A" && x.seat.index == 0 && (x.seat.row, x.seat.column) == (1, 1)),
        format!("{a:?}"),
    ));
    results.push(TestResult::check(
        "capacity_second_seat",
        matches!(&b, Ok(x) if x.passenger == "B" && x.seat.index == 1 && (x.seat.row, x.seat.column) == (1, 2)),
        format!("{b:?}"),
    ));
    results.push(TestResult::check(
        "capacity_full_reports_head",
        full == Err(CabinError::CabinFull {
            next_in_line: "C".into(),
        }),
        format!("{full:?}"),
    ));
    results.push(TestResult::check(
        "capacity_full_keeps_head",
        c.next_in_line() == Some("C") && c.queue_len() == 1,
        format!("line = {:?}", c.waiting().collect::<Vec<_>>()),
    ));

    let Some(mut fresh) = cabin(3, 4) else {
        results.push(TestResult::check("cabin_3x4_builds", false, "3x4 cabin rejected"));
        return results;
    };
    let board = fresh.board_next();
    results.push(TestResult::check(
        "empty_line",
        board == Err(CabinError::NoPassengersWaiting),
        format!("{board:?}"),
    ));
    let off = fresh.disembark_last();
    results.push(TestResult::check(
        "empty_cabin",
        off == Err(CabinError::CabinEmpty),
        format!("{off:?}"),
    ));

    let blank = fresh.enqueue("  \t ");
    results.push(TestResult::check(
        "blank_name_rejected",
        blank == Err(CabinError::InvalidName) && fresh.queue_len() == 0,
        format!("{blank:?}"),
    ));
    let _ = fresh.enqueue(" Alice ");
    let seated = fresh.board_next();
    results.push(TestResult::check(
        "name_trimmed",
        matches!(&seated, Ok(x) if x.passenger == "Alice"),
        format!("{seated:?}"),
    ));

    results
}

// ── 2. Ordering ─────────────────────────────────────────────────────────

fn validate_ordering(quiet: bool) -> Vec<TestResult> {
    section("Ordering", quiet);
    let mut results = Vec::new();

    let Some(mut c) = cabin(4, 6) else {
        results.push(TestResult::check("cabin_4x6_builds", false, "4x6 cabin rejected"));
        return results;
    };
    let names: Vec<String> = (0..24).map(|i| format!("P{i:02}")).collect();
    for n in &names {
        let _ = c.enqueue(n);
    }

    let boarded: Vec<String> = std::iter::from_fn(|| c.board_next().ok())
        .map(|b| b.passenger)
        .collect();
    results.push(TestResult::check(
        "fifo_boarding",
        boarded == names,
        format!("{} of {} boarded in enqueue order", boarded.len(), names.len()),
    ));

    let off: Vec<String> = std::iter::from_fn(|| c.disembark_last().ok())
        .map(|d| d.passenger)
        .collect();
    let mut reversed = boarded.clone();
    reversed.reverse();
    results.push(TestResult::check(
        "lifo_disembark",
        off == reversed,
        format!("{} disembarked, first off {:?}", off.len(), off.first()),
    ));

    results
}

// ── 3. Round trip & reuse ───────────────────────────────────────────────

fn validate_round_trip(quiet: bool) -> Vec<TestResult> {
    section("Round trip", quiet);
    let mut results = Vec::new();

    let config = CabinConfig {
        rows: 5,
        seats_per_row: 5,
    };
    let (Ok(fresh), Ok(mut c)) = (Cabin::new(&config), Cabin::new(&config)) else {
        results.push(TestResult::check("cabin_5x5_builds", false, "5x5 cabin rejected"));
        return results;
    };
    let total = c.capacity();
    for i in 0..total {
        let _ = c.enqueue(&format!("R{i}"));
    }
    let seated = std::iter::from_fn(|| c.board_next().ok()).count();
    let left = std::iter::from_fn(|| c.disembark_last().ok()).count();

    let pool: BTreeSet<usize> = c.free_order().collect();
    results.push(TestResult::check(
        "round_trip_counts",
        seated == total && left == total,
        format!("{seated} seated, {left} disembarked of {total}"),
    ));
    results.push(TestResult::check(
        "round_trip_pool_restored",
        pool == (0..total).collect::<BTreeSet<_>>() && c.is_empty(),
        format!("{} free, {} occupied", c.free_seats(), c.occupied()),
    ));
    results.push(TestResult::check(
        "round_trip_grid_empty",
        c.snapshot_layout() == fresh.snapshot_layout(),
        "grid matches a fresh cabin",
    ));

    // Seat reuse: freed seat rejoins at the pool tail.
    let Some(mut r) = cabin(1, 3) else {
        results.push(TestResult::check("cabin_1x3_builds", false, "1x3 cabin rejected"));
        return results;
    };
    for n in ["A", "B", "C", "D"] {
        let _ = r.enqueue(n);
    }
    let _ = r.board_next();
    let freed = r.disembark_last().map(|d| d.seat.index);
    let order: Vec<usize> = std::iter::from_fn(|| r.board_next().ok())
        .map(|b| b.seat.index)
        .collect();
    results.push(TestResult::check(
        "seat_reuse_at_pool_tail",
        freed == Ok(0) && order == vec![1, 2, 0],
        format!("freed {freed:?}, refill order {order:?}"),
    ));
    results.push(TestResult::check(
        "seat_reuse_new_occupant",
        r.occupant(0) == Some("D"),
        format!("seat 0 holds {:?}", r.occupant(0)),
    ));

    results
}

// ── 4. Random churn ─────────────────────────────────────────────────────

#[derive(Default)]
struct ChurnStats {
    enqueued: usize,
    boarded: usize,
    disembarked: usize,
    full: usize,
    no_one_waiting: usize,
    empty: usize,
}

fn validate_churn(ops: usize, seed: u64, quiet: bool) -> Vec<TestResult> {
    section("Churn", quiet);
    let mut results = Vec::new();
    let shapes = [(1u32, 1u32), (1, 2), (3, 4), (10, 6), (33, 3)];

    for (i, &(rows, cols)) in shapes.iter().enumerate() {
        let name = format!("churn_{rows}x{cols}");
        let Some(mut c) = cabin(rows, cols) else {
            results.push(TestResult::check(&name, false, "cabin rejected"));
            continue;
        };
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
        let mut stats = ChurnStats::default();
        let mut failure = None;

        for step in 0..ops {
            let outcome = match rng.gen_range(0..10) {
                0..=3 => c.enqueue(&format!("P{step}")).map(|_| stats.enqueued += 1),
                4..=6 => c.board_next().map(|_| stats.boarded += 1),
                _ => c.disembark_last().map(|_| stats.disembarked += 1),
            };
            match outcome {
                Ok(()) => {}
                Err(CabinError::CabinFull { .. }) => stats.full += 1,
                Err(CabinError::NoPassengersWaiting) => stats.no_one_waiting += 1,
                Err(CabinError::CabinEmpty) => stats.empty += 1,
                Err(e) => {
                    failure = Some(format!("step {step}: unexpected {e}"));
                    break;
                }
            }
            if let Err(v) = c.check_invariants() {
                failure = Some(format!("step {step}: {v}"));
                break;
            }
        }

        log::debug!("{name}: {} seated, {} waiting at end", c.occupied(), c.queue_len());
        results.push(match failure {
            Some(detail) => TestResult::check(&name, false, detail),
            None => TestResult::check(
                &name,
                true,
                format!(
                    "{ops} ops: {} enqueued, {} boarded, {} disembarked, \
                     {} full, {} no-one-waiting, {} empty",
                    stats.enqueued,
                    stats.boarded,
                    stats.disembarked,
                    stats.full,
                    stats.no_one_waiting,
                    stats.empty
                ),
            ),
        });
    }

    results
}
