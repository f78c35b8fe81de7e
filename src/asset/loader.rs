//! Background rig loading with stale-result protection.
//!
//! Rig requests run on a named worker thread so a slow disk or parse
//! never stalls the frame loop. Every request carries the engine's
//! avatar generation; results for a superseded generation are discarded
//! by the poller, which is how a late response is prevented from
//! mutating a torn-down scene.

use std::path::PathBuf;
use std::sync::mpsc;

use super::{AssetSource, AvatarAsset};
use crate::error::HandsignError;

enum LoadRequest {
    Load {
        generation: u64,
        path: PathBuf,
    },
    Shutdown,
}

/// What a finished or progressing load produced.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Coarse progress report in `[0, 1]`.
    Progress(f32),
    /// Terminal result of the load.
    Done(Result<AvatarAsset, HandsignError>),
}

/// A loader event tagged with the generation of the request it answers.
#[derive(Debug)]
pub struct LoadEvent {
    /// Avatar generation the originating request was submitted under.
    pub generation: u64,
    /// Progress or terminal result.
    pub outcome: LoadOutcome,
}

/// Background thread that loads rig assets off the frame loop.
pub struct AssetLoader {
    request_tx: mpsc::Sender<LoadRequest>,
    result_rx: mpsc::Receiver<LoadEvent>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl AssetLoader {
    /// Spawn the loader thread over the given source.
    ///
    /// # Errors
    ///
    /// Returns [`HandsignError::ThreadSpawn`] if the thread cannot be
    /// created.
    pub fn new(
        source: Box<dyn AssetSource>,
    ) -> Result<Self, HandsignError> {
        let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
        let (result_tx, result_rx) = mpsc::channel::<LoadEvent>();

        let thread = std::thread::Builder::new()
            .name("rig-loader".into())
            .spawn(move || {
                Self::thread_loop(&request_rx, &result_tx, source.as_ref());
            })
            .map_err(HandsignError::ThreadSpawn)?;

        Ok(Self {
            request_tx,
            result_rx,
            thread: Some(thread),
        })
    }

    /// Submit a load request (non-blocking send).
    pub fn submit(&self, generation: u64, path: PathBuf) {
        log::debug!("rig-loader: submit gen {generation} path {path:?}");
        let _ = self.request_tx.send(LoadRequest::Load { generation, path });
    }

    /// Non-blocking check for the next loader event.
    pub fn try_recv(&self) -> Option<LoadEvent> {
        self.result_rx.try_recv().ok()
    }

    /// Shut down the loader thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(LoadRequest::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn thread_loop(
        request_rx: &mpsc::Receiver<LoadRequest>,
        result_tx: &mpsc::Sender<LoadEvent>,
        source: &dyn AssetSource,
    ) {
        while let Ok(request) = request_rx.recv() {
            // Only the newest pending request matters; a newer submit
            // supersedes anything still queued behind it.
            let latest = drain_latest(request, request_rx);
            let LoadRequest::Load { generation, path } = latest else {
                break;
            };

            let mut report = |ratio: f32| {
                let _ = result_tx.send(LoadEvent {
                    generation,
                    outcome: LoadOutcome::Progress(ratio),
                });
            };
            let result = source.load(&path, &mut report);
            let _ = result_tx.send(LoadEvent {
                generation,
                outcome: LoadOutcome::Done(result),
            });
        }
    }
}

impl Drop for AssetLoader {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Drain queued requests, keeping only the most recent (Shutdown wins).
fn drain_latest(
    first: LoadRequest,
    rx: &mpsc::Receiver<LoadRequest>,
) -> LoadRequest {
    let mut latest = first;
    while let Ok(next) = rx.try_recv() {
        if matches!(latest, LoadRequest::Shutdown) {
            return latest;
        }
        latest = next;
    }
    latest
}
