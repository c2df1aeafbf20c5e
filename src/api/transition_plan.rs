use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataKey, Easing, ShapeDescriptor};
use crate::render::Color;

use super::{ChartKind, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPhase {
    Enter,
    Update,
    Exit,
}

/// Animation of one keyed element from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeTransition {
    pub key: DataKey,
    pub element_id: ElementId,
    pub phase: TransitionPhase,
    pub from: ShapeDescriptor,
    pub to: ShapeDescriptor,
    pub color: Color,
}

impl ShapeTransition {
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.from == self.to
    }
}

/// One interpolated element at a sampled instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledShape {
    pub key: DataKey,
    pub element_id: ElementId,
    pub phase: TransitionPhase,
    pub descriptor: ShapeDescriptor,
    pub color: Color,
}

/// Output of one reconciliation.
///
/// Entering and updating elements follow the new snapshot's order; exiting
/// elements follow at the end in their previous order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub revision: u64,
    pub kind: ChartKind,
    pub duration_ms: f64,
    pub easing: Easing,
    pub transitions: Vec<ShapeTransition>,
}

impl TransitionPlan {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ShapeTransition> {
        self.transitions
            .iter()
            .find(|transition| transition.key.as_str() == key)
    }

    pub fn with_phase(&self, phase: TransitionPhase) -> impl Iterator<Item = &ShapeTransition> {
        self.transitions
            .iter()
            .filter(move |transition| transition.phase == phase)
    }

    #[must_use]
    pub fn phase_count(&self, phase: TransitionPhase) -> usize {
        self.with_phase(phase).count()
    }

    /// True when no element moves: every pair is `(d, d)`.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.transitions.iter().all(ShapeTransition::is_static)
    }

    /// Descriptors the plan settles on, exited keys excluded.
    #[must_use]
    pub fn targets(&self) -> IndexMap<DataKey, ShapeDescriptor> {
        self.transitions
            .iter()
            .filter(|transition| transition.phase != TransitionPhase::Exit)
            .map(|transition| (transition.key.clone(), transition.to))
            .collect()
    }

    /// Interpolates every element at linear progress `progress` in `[0, 1]`,
    /// shaped by the plan's easing.
    #[must_use]
    pub fn sample(&self, progress: f64) -> Vec<SampledShape> {
        let t = self.easing.apply(progress);
        self.transitions
            .iter()
            .map(|transition| SampledShape {
                key: transition.key.clone(),
                element_id: transition.element_id.clone(),
                phase: transition.phase,
                descriptor: transition.from.interpolate(transition.to, t),
                color: transition.color,
            })
            .collect()
    }
}
