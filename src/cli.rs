// Command line front end for unicoderange.
//
// Takes one or more font paths, reconciles each font's ulUnicodeRange bits
// with its character map, and prints a PRE/POST report for every font that
// was changed.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueHint};

use crate::io::{FileReport, ReconcileOptions, reconcile_file, validate_paths};
use crate::ranges::RangeBitmask;
use crate::ranges::table::bit_name;
use crate::reconcile::{BitDiff, ReconcileResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Set OpenType OS/2 ulUnicodeRange bits from the code points a font maps.
#[derive(Parser, Debug)]
#[command(
    name = "unicoderange",
    version,
    about = "Set OS/2 ulUnicodeRange bit flags from a font's character map",
    arg_required_else_help = true
)]
struct Cli {
    /// Font files to update in place.
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    fonts: Vec<PathBuf>,

    /// Report what would change without writing any file.
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Continue with the next font when one cannot be read or written.
    #[arg(short = 'k', long)]
    keep_going: bool,

    /// Print one JSON object per font instead of the text report.
    #[arg(long = "json")]
    json_output: bool,

    /// Never colorize changed bits.
    #[arg(long)]
    no_color: bool,

    /// Quiet mode (errors only).
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Options {
    fonts: Vec<PathBuf>,
    dry_run: bool,
    keep_going: bool,
    json_output: bool,
    color: bool,
    quiet: bool,
    verbose: u8,
}

fn resolve_options(cli: Cli, color_capable: bool) -> Options {
    Options {
        fonts: cli.fonts,
        dry_run: cli.dry_run,
        keep_going: cli.keep_going,
        json_output: cli.json_output,
        color: color_capable && !cli.no_color && !cli.json_output,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
    }
}

fn log_filter(opts: &Options) -> &'static str {
    if opts.quiet {
        return "error";
    }
    match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("unicoderange".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli, false);
    }
}

// ---------------------------------------------------------------------------
// Report formatting
// ---------------------------------------------------------------------------

fn green(c: char) -> String {
    format!("{GREEN}{c}{RESET}")
}

/// Text report for one font, including the trailing blank line.
fn format_text(report: &FileReport, color: bool) -> String {
    let path = report.path.display();
    match &report.result {
        ReconcileResult::Unchanged => format!("No change required in {path}\n\n"),
        ReconcileResult::Changed { diff, .. } => {
            let post = if color {
                diff.render_expected_with(green)
            } else {
                diff.render_expected()
            };
            format!("{path}:\n PRE: {}\nPOST: {post}\n\n", diff.render_observed())
        }
    }
}

fn bit_list(mask: RangeBitmask) -> serde_json::Value {
    mask.iter_bits()
        .map(|bit| serde_json::json!({ "bit": bit, "name": bit_name(bit) }))
        .collect()
}

fn format_json(report: &FileReport) -> serde_json::Value {
    let (added, removed) = match &report.result {
        ReconcileResult::Changed { diff, .. } => (bit_list(diff.added()), bit_list(diff.removed())),
        ReconcileResult::Unchanged => (serde_json::json!([]), serde_json::json!([])),
    };
    serde_json::json!({
        "path": report.path.display().to_string(),
        "status": if report.is_changed() { "changed" } else { "unchanged" },
        "written": report.written,
        "codepoints": report.codepoints,
        "stored": report.stored,
        "expected": report.expected,
        "added": added,
        "removed": removed,
    })
}

fn log_changed_bits(report: &FileReport, diff: &BitDiff) {
    let path = report.path.display();
    for bit in diff.added().iter_bits() {
        log::info!("{path}: +{bit} {}", bit_name(bit).unwrap_or("reserved"));
    }
    for bit in diff.removed().iter_bits() {
        log::info!("{path}: -{bit} {}", bit_name(bit).unwrap_or("reserved"));
    }
}

fn emit(out: &mut impl Write, report: &FileReport, opts: &Options) -> io::Result<()> {
    if let ReconcileResult::Changed { diff, .. } = &report.result {
        log_changed_bits(report, diff);
        if opts.dry_run {
            log::info!("{}: dry run, file not written", report.path.display());
        }
    }
    if opts.json_output {
        writeln!(out, "{}", format_json(report))
    } else {
        out.write_all(format_text(report, opts.color).as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Batch driver
// ---------------------------------------------------------------------------

/// Process every font in order. Returns the process exit code.
fn run_batch(opts: &Options, out: &mut impl Write) -> i32 {
    // Every path is checked before any font is touched.
    if let Err(e) = validate_paths(&opts.fonts) {
        eprintln!("{e}");
        return 1;
    }

    let reconcile_opts = ReconcileOptions {
        dry_run: opts.dry_run,
    };
    let mut failed = 0usize;

    for path in &opts.fonts {
        match reconcile_file(path, &reconcile_opts) {
            Ok(report) => {
                if let Err(e) = emit(out, &report, opts) {
                    eprintln!("unicoderange: write error: {e}");
                    return 1;
                }
            }
            Err(e) => {
                eprintln!("unicoderange: {e}");
                if !opts.keep_going {
                    return 1;
                }
                log::warn!("skipping {}", e.path().display());
                failed += 1;
            }
        }
    }

    if let Err(e) = out.flush() {
        eprintln!("unicoderange: write error: {e}");
        return 1;
    }
    if failed > 0 {
        log::warn!("{failed} of {} font(s) failed", opts.fonts.len());
        return 1;
    }
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap and processes each font.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli, io::stdout().is_terminal());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(&opts)))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit_code = run_batch(&opts, &mut out);
    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
