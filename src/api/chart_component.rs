use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::DataSnapshot;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_snapshot;
use super::{ChartConfig, ChartRenderer, Clock, MonotonicClock, RenderState, TransitionPlan};

/// Result of one [`ChartComponent::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Nothing to animate; the container was not touched.
    Idle,
    Animating { progress: f64 },
    /// The final frame was drawn and the targets committed.
    Committed,
}

#[derive(Debug)]
struct Mounted<R> {
    container: R,
    renderer: ChartRenderer,
}

/// Lifecycle adapter binding a [`ChartRenderer`] to a host container.
///
/// Every data change runs exactly one reconciliation, synchronously. Frames
/// reach the container only through [`ChartComponent::tick`], driven by the
/// injected clock. After [`ChartComponent::unmount`] every call is a no-op.
#[derive(Debug)]
pub struct ChartComponent<R: Renderer, C: Clock = MonotonicClock> {
    mounted: Option<Mounted<R>>,
    clock: C,
    frames_rendered: u64,
}

impl<R: Renderer> ChartComponent<R> {
    /// Mounts on the system monotonic clock.
    pub fn mount(container: R, initial: &DataSnapshot, config: ChartConfig) -> ChartResult<Self> {
        Self::mount_with_clock(container, initial, config, MonotonicClock::default())
    }
}

impl<R: Renderer, C: Clock> ChartComponent<R, C> {
    /// Validates `config` and `initial`, reconciles the initial snapshot
    /// against the empty state and draws its first frame.
    pub fn mount_with_clock(
        container: R,
        initial: &DataSnapshot,
        config: ChartConfig,
        clock: C,
    ) -> ChartResult<Self> {
        let mut renderer = ChartRenderer::new(config)?;
        let points = initial.points();
        validate_snapshot(&points).inspect_err(|error| {
            warn!(%error, "rejected initial snapshot");
        })?;
        renderer.reconcile(&points, clock.now_ms())?;

        let mut component = Self {
            mounted: Some(Mounted {
                container,
                renderer,
            }),
            clock,
            frames_rendered: 0,
        };
        component.tick()?;
        Ok(component)
    }

    /// Reconciles a new snapshot, superseding any running transition.
    ///
    /// Returns `Ok(None)` without doing anything when unmounted. A malformed
    /// snapshot is rejected before the renderer runs and leaves the retained
    /// state untouched.
    pub fn on_data_change(&mut self, snapshot: &DataSnapshot) -> ChartResult<Option<&TransitionPlan>> {
        let Some(mounted) = self.mounted.as_mut() else {
            trace!("data change ignored: component unmounted");
            return Ok(None);
        };

        let points = snapshot.points();
        validate_snapshot(&points).inspect_err(|error| {
            warn!(%error, "rejected snapshot");
        })?;
        let plan = mounted.renderer.reconcile(&points, self.clock.now_ms())?;
        Ok(Some(plan))
    }

    /// Samples the running transition at the clock's current reading and
    /// hands the frame to the container.
    pub fn tick(&mut self) -> ChartResult<TickOutcome> {
        let Some(mounted) = self.mounted.as_mut() else {
            return Ok(TickOutcome::Idle);
        };
        let Some(sample) = mounted.renderer.frame_at(self.clock.now_ms())? else {
            return Ok(TickOutcome::Idle);
        };

        mounted.container.render(&sample.frame)?;
        self.frames_rendered += 1;
        if sample.committed {
            Ok(TickOutcome::Committed)
        } else {
            Ok(TickOutcome::Animating {
                progress: sample.progress,
            })
        }
    }

    /// Drops the retained state and detaches from the container, handing it
    /// back. Later calls return `None`.
    pub fn unmount(&mut self) -> Option<R> {
        let Mounted { mut container, .. } = self.mounted.take()?;
        container.detach();
        trace!(frames = self.frames_rendered, "chart unmounted");
        Some(container)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<&RenderState> {
        self.mounted.as_ref().map(|mounted| mounted.renderer.state())
    }

    #[must_use]
    pub fn active_plan(&self) -> Option<&TransitionPlan> {
        self.mounted
            .as_ref()
            .and_then(|mounted| mounted.renderer.active_plan())
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&ChartRenderer> {
        self.mounted.as_ref().map(|mounted| &mounted.renderer)
    }

    #[must_use]
    pub fn container(&self) -> Option<&R> {
        self.mounted.as_ref().map(|mounted| &mounted.container)
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Reconciliations run since mount, the initial one included.
    #[must_use]
    pub fn reconcile_count(&self) -> u64 {
        self.mounted
            .as_ref()
            .map_or(0, |mounted| mounted.renderer.revision())
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
