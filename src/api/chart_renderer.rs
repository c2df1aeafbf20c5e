use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{DataKey, DataPoint, OrdinalColorScale};
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::frame_builder::build_frame;
use super::validation::validate_config;
use super::{
    ChartConfig, ChartKind, ElementId, IdAllocator, RenderState, ShapeGenerator, ShapeTransition,
    TaskStatus, TransitionPhase, TransitionPlan, TransitionScheduler,
};

/// One drawn instant of the active transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSample {
    pub frame: RenderFrame,
    /// Linear (un-eased) progress in `[0, 1]`.
    pub progress: f64,
    /// True for the final frame, after which the plan's targets are committed.
    pub committed: bool,
}

/// Owns the retained geometry of one chart and reconciles snapshots into
/// transition plans.
///
/// Reconciliation is synchronous; only the visual progression is driven by
/// the host clock through [`ChartRenderer::frame_at`].
#[derive(Debug)]
pub struct ChartRenderer {
    config: ChartConfig,
    generator: ShapeGenerator,
    state: RenderState,
    ids: IdAllocator,
    element_ids: IndexMap<DataKey, ElementId>,
    series_id: Option<ElementId>,
    colors: Option<OrdinalColorScale>,
    scheduler: TransitionScheduler,
    active_plan: Option<TransitionPlan>,
    revision: u64,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        let generator = ShapeGenerator::for_config(&config);
        let mut ids = IdAllocator::new(config.effective_chart_id());
        let series_id = (config.kind == ChartKind::Line).then(|| ids.allocate());

        Ok(Self {
            config,
            generator,
            state: RenderState::default(),
            ids,
            element_ids: IndexMap::new(),
            series_id,
            colors: None,
            scheduler: TransitionScheduler::default(),
            active_plan: None,
            revision: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn generator(&self) -> &ShapeGenerator {
        &self.generator
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Plan of the transition still in flight, if any.
    #[must_use]
    pub fn active_plan(&self) -> Option<&TransitionPlan> {
        self.active_plan.as_ref()
    }

    /// Number of reconciliations performed so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn element_id(&self, key: &str) -> Option<&ElementId> {
        self.element_ids.get(key)
    }

    /// Element id of the line series path; `None` for other chart kinds.
    #[must_use]
    pub fn series_id(&self) -> Option<&ElementId> {
        self.series_id.as_ref()
    }

    /// Diffs `points` against the retained geometry and starts a transition.
    ///
    /// The points must already satisfy the snapshot preconditions (unique,
    /// non-empty keys and finite values). Any in-flight transition is
    /// superseded: its targets become the baseline for this diff.
    pub fn reconcile(&mut self, points: &[DataPoint], now_ms: f64) -> ChartResult<&TransitionPlan> {
        let layout = self.generator.layout(points, self.config.viewport)?;
        let colors = OrdinalColorScale::new(&self.config.palette_colors, layout.targets.keys())?;
        let baseline = self.state.baseline();

        let mut transitions = Vec::with_capacity(layout.targets.len() + baseline.len());
        for (key, target) in &layout.targets {
            let (phase, from) = match baseline.get(key) {
                Some(stored) => (
                    TransitionPhase::Update,
                    self.generator.update_from(*stored, *target, &layout),
                ),
                None => (
                    TransitionPhase::Enter,
                    self.generator.enter_from(*target, &layout),
                ),
            };
            let element_id = self
                .element_ids
                .entry(key.clone())
                .or_insert_with(|| self.ids.allocate())
                .clone();
            transitions.push(ShapeTransition {
                key: key.clone(),
                element_id,
                phase,
                from,
                to: *target,
                color: colors.color(key),
            });
        }

        for (key, stored) in baseline {
            if layout.targets.contains_key(key) {
                continue;
            }
            let element_id = match self.element_ids.shift_remove(key) {
                Some(element_id) => element_id,
                None => self.ids.allocate(),
            };
            let color = self
                .colors
                .as_ref()
                .map_or_else(|| colors.color(key), |previous| previous.color(key));
            transitions.push(ShapeTransition {
                key: key.clone(),
                element_id,
                phase: TransitionPhase::Exit,
                from: *stored,
                to: self.generator.exit_to(*stored, &layout),
                color,
            });
        }

        self.revision += 1;
        let plan = TransitionPlan {
            revision: self.revision,
            kind: self.config.kind,
            duration_ms: self.config.duration_ms,
            easing: self.config.easing_for(self.revision == 1),
            transitions,
        };
        debug!(
            revision = plan.revision,
            enter = plan.phase_count(TransitionPhase::Enter),
            update = plan.phase_count(TransitionPhase::Update),
            exit = plan.phase_count(TransitionPhase::Exit),
            "reconciled snapshot"
        );

        self.state.stage(plan.targets());
        self.colors = Some(colors);
        let (task, cancelled) = self.scheduler.schedule(now_ms, self.config.duration_ms);
        if let Some(cancelled) = cancelled {
            debug!(
                task = task.raw(),
                cancelled = cancelled.raw(),
                "superseded in-flight transition"
            );
        }
        Ok(self.active_plan.insert(plan))
    }

    /// Samples the active transition at `now_ms`.
    ///
    /// Returns `None` when nothing is animating. The sample that reaches the
    /// end of the transition commits the plan's targets into the render state.
    pub fn frame_at(&mut self, now_ms: f64) -> ChartResult<Option<FrameSample>> {
        let Some(plan) = self.active_plan.as_ref() else {
            return Ok(None);
        };

        match self.scheduler.poll(now_ms) {
            TaskStatus::Idle => Ok(None),
            TaskStatus::Running { progress, .. } => {
                trace!(revision = plan.revision, progress, "sampled transition");
                Ok(Some(FrameSample {
                    frame: build_frame(plan, progress, &self.config, self.series_id.as_ref()),
                    progress,
                    committed: false,
                }))
            }
            TaskStatus::Finished { task } => {
                let frame = build_frame(plan, 1.0, &self.config, self.series_id.as_ref());
                self.commit();
                trace!(task = task.raw(), "transition committed");
                Ok(Some(FrameSample {
                    frame,
                    progress: 1.0,
                    committed: true,
                }))
            }
        }
    }

    /// Jumps the active transition to its end and commits it.
    pub fn finish(&mut self) -> Option<RenderFrame> {
        let plan = self.active_plan.as_ref()?;
        let frame = build_frame(plan, 1.0, &self.config, self.series_id.as_ref());
        self.scheduler.cancel();
        self.commit();
        Some(frame)
    }

    fn commit(&mut self) {
        self.state.commit();
        self.active_plan = None;
    }
}
