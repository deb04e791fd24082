//! `nav-mobility` — route storage and per-frame path following.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`state`]      | `AgentState`, `TickOutcome`, `MoveEvent`                   |
//! | [`store`]      | `PathStore` — active route + agent state                   |
//! | [`controller`] | `MovementController` — constant-speed waypoint following   |
//! | [`camera`]     | `CameraRig`, `CameraPose` — trailing / top-down camera     |
//! | [`error`]      | `MobilityError`, `MobilityResult<T>`                       |
//!
//! # Movement model
//!
//! Each frame the controller moves the agent toward the front waypoint at a
//! fixed speed.  A waypoint within `arrival_threshold` is popped; popping the
//! last one reports [`MoveEvent::Arrived`] exactly once for that route.
//!
//! Steps are not clamped at the target, so the agent may overshoot by up to
//! `speed × dt` on a long frame.  The threshold test hides this for normal
//! frame rates; it is a known approximation, not an invariant.

pub mod camera;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;


pub use camera::{CameraPose, CameraRig};
pub use controller::MovementController;
pub use error::{MobilityError, MobilityResult};
pub use state::{AgentState, MoveEvent, TickOutcome};
pub use store::PathStore;
