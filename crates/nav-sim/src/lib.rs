//! `nav-sim` — the navigation session and its frame loop.
//!
//! # Frame loop
//!
//! ```text
//! per frame (NavSession::frame):
//!   ① Assets    — poll pending mesh / location loads without blocking;
//!                 a resolved mesh is registered under the configured zone.
//!   ② Clock     — record the frame delta (negative deltas clamp to 0).
//!   ③ Movement  — MovementController::tick on the PathStore.
//!   ④ Camera    — CameraRig::track; observer sees the new pose.
//!   ⑤ Notices   — "Destination is reached!" once per completed route.
//!
//! between frames (NavSession::request):
//!   RequestHandler::handle → route installed or notice explaining why not.
//! ```
//!
//! Everything runs on the caller's thread, strictly in that order.  Only the
//! asset loaders run elsewhere, and they hand their results over through
//! one-shot channels.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_core::NavConfig;
//! use nav_mesh::GraphNavMesh;
//! use nav_sim::{LogObserver, PendingAsset, SessionBuilder};
//!
//! let (loader, pending) = PendingAsset::channel();
//! let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::new())
//!     .pending_zone(pending)
//!     .build()?;
//! // ...hand `loader` to a background task...
//! session.frame(1.0 / 60.0, &mut LogObserver);
//! ```

pub mod asset;
pub mod builder;
pub mod error;
pub mod notice;
pub mod observer;
pub mod session;

#[cfg(test)]
mod tests;

pub use asset::{AssetLoader, AssetPoll, PendingAsset};
pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use notice::Notice;
pub use observer::{LogObserver, NavObserver, NoopObserver};
pub use session::NavSession;
