// crates/engine/src/aggregator.rs
//! Fan-out/fan-in word counting.
//!
//! One scanner thread runs per input file. Each thread drains its private
//! table into [`Pair`]s on a shared bounded lane, reports an optional failure,
//! and finally sends a single [`Completion`] marker on a separate lane. The
//! aggregator is the only writer of the shared table:
//!
//! 1. **Spawning**: launch every scanner before waiting on any of them.
//! 2. **Collecting**: `select!` over the Pair and Completion lanes until every
//!    live scanner has reported completion.
//! 3. **Draining**: non-blocking sweep of the Pair lane. Completion markers can
//!    be picked up before the Pairs that were sent ahead of them, so without
//!    this sweep buffered counts would be lost.
//! 4. **Done**: lanes are dropped, threads joined, the table handed back.

use crate::config::Config;
use crate::error::EngineError;
use crate::scanner::FileScanner;
use crate::stats::RunResult;
use crate::table::FrequencyTable;
use crossbeam_channel::{Receiver, Sender, bounded, never, select};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// One `(word, count)` entry handed from a scanner to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub word: String,
    pub count: u64,
}

/// Sent exactly once by every scanner after its last [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion;

type Failure = (PathBuf, EngineError);

/// Sending half of the lanes, cloned into every scanner thread.
#[derive(Clone)]
struct Lanes {
    pairs: Sender<Pair>,
    done: Sender<Completion>,
    failures: Sender<Failure>,
}

#[derive(Debug, Clone)]
pub struct Aggregator {
    scanner: FileScanner,
    channel_capacity: Option<usize>,
}

impl Aggregator {
    pub fn new(config: &Config) -> Self {
        Self {
            scanner: FileScanner::new(config.min_chars),
            channel_capacity: config.channel_capacity,
        }
    }

    /// Count words across `paths`, one thread per path.
    ///
    /// Never fails as a whole: unreadable files contribute nothing (or a
    /// partial count) and show up in [`RunResult::errors`].
    pub fn aggregate(&self, paths: &[PathBuf]) -> RunResult {
        let files = paths.len();
        if files == 0 {
            return RunResult::default();
        }

        let pair_capacity = self.channel_capacity.unwrap_or(files).max(files);
        let (pair_tx, pair_rx) = bounded(pair_capacity);
        let (done_tx, done_rx) = bounded(files);
        let (fail_tx, fail_rx) = bounded(files);
        let lanes = Lanes {
            pairs: pair_tx,
            done: done_tx,
            failures: fail_tx,
        };

        log::debug!("spawning {files} scanners (pair lane capacity {pair_capacity})");
        let mut errors = Vec::new();
        let mut handles = Vec::with_capacity(files);
        for (idx, path) in paths.iter().enumerate() {
            match self.spawn_scanner(idx, path.clone(), lanes.clone()) {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    let err = EngineError::Spawn {
                        path: path.clone(),
                        source,
                    };
                    log::error!("{err}");
                    errors.push((path.clone(), err));
                }
            }
        }
        // only scanner threads may keep the lanes open from here on
        drop(lanes);

        let mut table = FrequencyTable::new();
        log::debug!("collecting from {} live scanners", handles.len());
        let collected = collect(&pair_rx, &done_rx, handles.len(), &mut table);

        let drained = drain(&pair_rx, &mut table);
        log::debug!("merged {collected} pairs while collecting, {drained} in the drain sweep");

        errors.extend(fail_rx.try_iter());
        for handle in handles {
            if handle.join().is_err() {
                log::error!("a scanner thread panicked; its file may be undercounted");
            }
        }

        log::debug!(
            "done: {} distinct words, {} failures",
            table.len(),
            errors.len()
        );
        RunResult { table, errors }
    }

    fn spawn_scanner(
        &self,
        idx: usize,
        path: PathBuf,
        lanes: Lanes,
    ) -> std::io::Result<JoinHandle<()>> {
        let scanner = self.scanner;
        thread::Builder::new()
            .name(format!("scan-{idx}"))
            .spawn(move || {
                let outcome = scanner.scan(&path);
                if let Some(err) = outcome.error {
                    let _ = lanes.failures.send((path, err));
                }
                for (word, count) in outcome.table {
                    if lanes.pairs.send(Pair { word, count }).is_err() {
                        break;
                    }
                }
                let _ = lanes.done.send(Completion);
            })
    }
}

/// Merge Pairs until `live` completion markers have been seen.
///
/// Returns the number of Pairs merged. A disconnected completion lane means
/// no scanner is left to report, so the loop ends early instead of hanging.
pub(crate) fn collect(
    pairs: &Receiver<Pair>,
    done: &Receiver<Completion>,
    mut live: usize,
    table: &mut FrequencyTable,
) -> usize {
    let mut pair_lane = pairs.clone();
    let mut merged = 0;

    while live > 0 {
        select! {
            recv(pair_lane) -> msg => match msg {
                Ok(pair) => {
                    table.add(&pair.word, pair.count);
                    merged += 1;
                }
                Err(_) => pair_lane = never(),
            },
            recv(done) -> msg => match msg {
                Ok(Completion) => live -= 1,
                Err(_) => {
                    log::warn!("completion lane closed with {live} scanners unaccounted for");
                    break;
                }
            },
        }
    }
    merged
}

/// Merge every Pair that is already buffered, without blocking.
pub(crate) fn drain(pairs: &Receiver<Pair>, table: &mut FrequencyTable) -> usize {
    let mut merged = 0;
    while let Ok(pair) = pairs.try_recv() {
        table.add(&pair.word, pair.count);
        merged += 1;
    }
    merged
}
