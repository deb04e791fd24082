//! `nav-request` — turning a user's selection into an active route.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`locations`]  | `LocationMap` — named points of the station model         |
//! | [`request`]    | `NavRequest` — dropdown and click requests                |
//! | [`visualizer`] | `RouteVisualizer` trait, `NoopVisualizer`                 |
//! | [`handler`]    | `RequestHandler`, `RouteSummary`                          |
//! | [`error`]      | `RequestError`, `LocationError`                           |
//!
//! # Request lifecycle
//!
//! 1. Check that both ends were selected.
//! 2. Resolve location names through the `LocationMap`.
//! 3. Query the `NavMesh`: group of the start, closest node at each end,
//!    then a path between the two nodes' centroids.
//! 4. Only if every step succeeded: teleport the agent (when the request
//!    names a start), install the route, and refresh the visualizer.
//!
//! A failed request changes nothing.  The previous route, if any, keeps
//! playing.

pub mod error;
pub mod handler;
pub mod locations;
pub mod request;
pub mod visualizer;


pub use error::{LocationError, RequestError, RequestResult};
pub use handler::{RequestHandler, RouteSummary};
pub use locations::LocationMap;
pub use request::NavRequest;
pub use visualizer::{NoopVisualizer, RouteVisualizer};
