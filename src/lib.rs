//! chart-reconcile: keyed enter/update/exit reconciliation for animated charts.
//!
//! A [`ChartComponent`] is mounted on a [`render::Renderer`] container and fed
//! data snapshots. Each snapshot is diffed by key against the geometry left on
//! screen by the previous one, producing a [`api::TransitionPlan`] whose
//! frames are sampled from an injected clock. Line, pie, bar and circle charts
//! share the same reconciliation and differ only in their shape generator.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartComponent, ChartConfig, ChartKind, ChartRenderer};
pub use crate::core::{DataKey, DataPoint, DataSnapshot, Viewport};
pub use error::{ChartError, ChartResult};
