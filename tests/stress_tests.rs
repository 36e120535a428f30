//! Stress tests for concurrent use of one facade
//!
//! These tests verify:
//! - Concurrent builders never mix fields between records
//! - Every record reaches the sink as one complete line
//! - Filtered levels stay cheap and silent under load

use logshim::prelude::*;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 500;

/// Sink that splits every write in two, so torn records would be visible
#[derive(Clone, Default)]
struct ChoppyBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for ChoppyBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let half = (buf.len() / 2).max(1).min(buf.len());
        self.0.lock().extend_from_slice(&buf[..half]);
        thread::yield_now();
        Ok(half)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ChoppyBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().clone())
            .expect("log output is UTF-8")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[test]
fn test_concurrent_warn_records_stay_independent() {
    let sink = ChoppyBuffer::default();
    let log = Arc::new(CoreLogger::new(sink.clone(), Level::Warn));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    log.warn()
                        .uint64("thread", t as u64)
                        .uint64("seq", i as u64)
                        .str("tag", &format!("t{}-{}", t, i))
                        .msg("concurrent");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let record: serde_json::Value =
            serde_json::from_str(line).expect("record was torn or interleaved");
        let t = record["thread"].as_u64().unwrap();
        let i = record["seq"].as_u64().unwrap();
        assert_eq!(record["tag"], format!("t{}-{}", t, i));
        assert_eq!(record["message"], "concurrent");
        assert!(seen.insert((t, i)), "duplicate record {}-{}", t, i);
    }

    assert_eq!(log.logger().metrics().total_logged(), (THREADS * LINES_PER_THREAD) as u64);
    assert_eq!(log.logger().metrics().dropped_count(), 0);
}

#[test]
fn test_concurrent_filtered_levels() {
    let sink = ChoppyBuffer::default();
    let log = Arc::new(CoreLogger::new(sink.clone(), Level::Error));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    log.debug().int("seq", i as i32).msg("filtered");
                    if i % 100 == 0 {
                        log.error().int("thread", t as i32).msg("kept");
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * (LINES_PER_THREAD / 100));
    assert!(lines.iter().all(|l| l.contains("\"kept\"")));
    assert_eq!(
        log.logger().metrics().filtered_count(),
        (THREADS * LINES_PER_THREAD) as u64
    );
}
