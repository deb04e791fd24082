//! One-shot asset slots.
//!
//! A loader runs somewhere else (a blocking task, a thread, a test) and
//! resolves its [`AssetLoader`] exactly once.  The session owns the matching
//! [`PendingAsset`] and checks it each frame with [`PendingAsset::poll`],
//! which never blocks.

use std::fmt::Display;

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::{SimError, SimResult};

/// Sending half: resolve once with the loaded value or an error.
#[derive(Debug)]
pub struct AssetLoader<T> {
    tx: oneshot::Sender<Result<T, String>>,
}

impl<T> AssetLoader<T> {
    pub fn finish<E: Display>(self, result: Result<T, E>) {
        // The receiver may already be gone if the session was dropped.
        let _ = self.tx.send(result.map_err(|e| e.to_string()));
    }

    pub fn resolve(self, value: T) {
        self.finish::<String>(Ok(value));
    }

    pub fn fail<E: Display>(self, reason: E) {
        self.finish(Err::<T, E>(reason));
    }
}

/// Result of one [`PendingAsset::poll`].
#[derive(Debug)]
pub enum AssetPoll<T> {
    Pending,
    Ready(T),
    Failed(String),
}

/// Receiving half of an asset load.
#[derive(Debug)]
pub struct PendingAsset<T> {
    rx: oneshot::Receiver<Result<T, String>>,
}

impl<T> PendingAsset<T> {
    pub fn channel() -> (AssetLoader<T>, PendingAsset<T>) {
        let (tx, rx) = oneshot::channel();
        (AssetLoader { tx }, PendingAsset { rx })
    }

    /// Check for a result without blocking.
    ///
    /// `Ready` or `Failed` is reported once; the slot is spent afterwards.  A
    /// loader dropped without resolving counts as a failure.
    pub fn poll(&mut self) -> AssetPoll<T> {
        match self.rx.try_recv() {
            Ok(Ok(value))              => AssetPoll::Ready(value),
            Ok(Err(reason))            => AssetPoll::Failed(reason),
            Err(TryRecvError::Empty)   => AssetPoll::Pending,
            Err(TryRecvError::Closed)  => AssetPoll::Failed("loader dropped without a result".into()),
        }
    }

    /// Wait for the load to finish.  For hosts that want an asset in hand
    /// before the first frame.
    pub async fn wait(self, asset: &'static str) -> SimResult<T> {
        match self.rx.await {
            Ok(Ok(value))   => Ok(value),
            Ok(Err(reason)) => Err(SimError::Asset { asset, reason }),
            Err(_)          => Err(SimError::Asset {
                asset,
                reason: "loader dropped without a result".into(),
            }),
        }
    }
}
