use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// A simple writer that appends written bytes into an in-memory Vec<u8>.
/// We wrap the Vec in an Arc<Mutex<...>> so the MakeWriter closure can clone it.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn scoped_logging_writes_to_buffer_without_global_side_effects() {
    // Shared in-memory buffer for captured logs
    let buf = Arc::new(Mutex::new(Vec::new()));

    // MakeWriter closure: each call returns a fresh BufferWriter that clones the Arc
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };

    // Build a compact formatter layer that writes into our buffer.
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .compact();

    let env_filter = EnvFilter::new("info");

    // Construct a subscriber but don't call `.init()` to avoid setting a global.
    let subscriber = registry().with(env_filter).with(layer);

    // Convert into a Dispatch and run scoped with dispatcher::with_default so the
    // test does not change the global subscriber for other tests.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, || {
        info!(target: "test_target", "integration-test: hello {}", "world");
    });

    let contents = {
        let guard = buf.lock().unwrap();
        String::from_utf8_lossy(&guard[..]).to_string()
    };

    assert!(
        contents.contains("integration-test: hello world"),
        "logged output did not contain expected text; contents={}",
        contents
    );
}

#[test]
fn file_logging_writes_to_custom_path_and_verifies_output() {
    let td = tempdir().expect("tempdir");
    let log_path: PathBuf = td.path().join("fuzzy_sort_test.log");

    // If the tempdir has a symlink ancestor (common on macOS test
    // environments), the production logger would refuse file logging. Skip
    // to avoid false failures in CI/dev setups.
    if fuzzy_sort::path_has_symlink_ancestor(&log_path).unwrap() {
        eprintln!(
            "Skipping file logging test: path has symlink ancestor: {}",
            log_path.display()
        );
        return;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("open log file for append");

    // Wrap in non-blocking appender used by tracing
    let (writer, guard): (tracing_appender::non_blocking::NonBlocking, WorkerGuard) =
        tracing_appender::non_blocking(file);

    let file_layer = tsfmt::layer()
        .with_writer(move || writer.clone())
        .with_target(false)
        .compact();

    let env_filter = EnvFilter::new("info");

    let subscriber = registry().with(env_filter).with(file_layer);
    let dispatch = tracing::Dispatch::new(subscriber);

    tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!("file-logging-test: written");
    });

    // Drop the guard to flush the non-blocking worker
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("read log file");
    assert!(
        contents.contains("file-logging-test"),
        "log file did not contain expected text; contents={}",
        contents
    );
}
