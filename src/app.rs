//! Application orchestrator.
//! Loads/merges config, initializes logging, installs signal handlers,
//! validates roots, lists both trees, classifies, reports, and optionally
//! relocates. Listing failures are fatal; relocation failures are per-file.

use anyhow::Result;
use atty::Stream;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use fuzzy_sort::cli::Args;
use fuzzy_sort::config::xml::{ensure_default_config_exists, load_config_from_xml, CONFIG_ENV};
use fuzzy_sort::errors::FuzzySortError;
use fuzzy_sort::output as out;
use fuzzy_sort::report::{self, ConsoleSink, ReportSink};
use fuzzy_sort::{classify_with, default_config_path, list_files, relocate, shutdown, validate_roots};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV} or set it to another file."
            ));
            return Ok(());
        }
        match default_config_path() {
            Ok(p) => {
                out::print_info(&format!("Default fuzzy_sort config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. Run without --print-config to create a template.",
                    );
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init)
    if let Some(path) = ensure_default_config_exists() {
        out::print_success(&format!(
            "A template fuzzy_sort config was written to: {}",
            path.display()
        ));
        out::print_info(
            "Edit the file to set `threshold`, `found_dir`, `not_found_dir`, `log_level` and `log_file`. CLI flags always override it.",
        );
    }

    // Build config (may read XML). CLI args override config values.
    let mut cfg = load_config_from_xml().unwrap_or_default();
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt: Option<tracing_appender::non_blocking::WorkerGuard> =
        init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; shutting down gracefully...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        })
        .expect("failed to install signal handler");
    }

    if shutdown::is_requested() {
        return Ok(());
    }

    debug!("Starting fuzzy_sort: {:?}", args);

    // Main run (so we can drop guard after)
    let result = (|| -> Result<()> {
        // clap guarantees the positionals outside --print-config.
        let source = args
            .source
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SOURCE is required"))?;
        let target = args
            .target
            .clone()
            .ok_or_else(|| anyhow::anyhow!("TARGET is required"))?;

        if let Err(e) = validate_roots(&source, &target) {
            if let Some(fe) = e.downcast_ref::<FuzzySortError>() {
                error!(code = fe.code(), error = %fe, "Root validation failed");
            } else {
                error!(error = ?e, "Root validation failed");
            }
            out::print_error(&format!("{e}"));
            return Err(e);
        }

        let sources = list_files(&source, "source")?;
        let targets = list_files(&target, "target")?;
        info!(
            sources = sources.len(),
            targets = targets.len(),
            threshold = cfg.threshold,
            "Listed both trees"
        );

        if shutdown::is_requested() {
            return Err(FuzzySortError::Interrupted.into());
        }

        let pb = progress_bar(sources.len() as u64, args.json);
        let classified = classify_with(&sources, &targets, cfg.threshold, || pb.inc(1));
        pb.finish_and_clear();

        let sink = ConsoleSink;
        report::emit(&sink, &classified, cfg.unmatched_only);

        let matched = classified.iter().filter(|c| c.outcome.is_matched()).count();
        let unmatched = classified.len() - matched;

        if cfg.relocate {
            let found_root = source.join(&cfg.found_dir);
            let not_found_root = source.join(&cfg.not_found_dir);
            let outcomes = relocate(
                &classified,
                &source,
                &found_root,
                &not_found_root,
                cfg.dry_run,
            );
            let (moved, failed) = report::emit_relocations(&sink, &outcomes);
            info!(matched, unmatched, moved, failed, "Run complete");
            sink.summary(&format!(
                "{matched} matched, {unmatched} unmatched; {moved} moved, {failed} failed"
            ));
        } else {
            info!(matched, unmatched, "Run complete");
            sink.summary(&format!("{matched} matched, {unmatched} unmatched"));
        }
        Ok(())
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

/// Progress over the source file count. Hidden when logs are JSON or stderr
/// is not a terminal.
fn progress_bar(len: u64, json: bool) -> ProgressBar {
    if json || !atty::is(Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("Processing source files [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}
