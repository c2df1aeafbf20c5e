use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataKey, ShapeDescriptor};

/// Retained geometry of one chart: key to last-committed descriptor.
///
/// `committed` is what finished transitions left on screen. `pending` holds
/// the targets of the in-flight transition; a newer reconciliation replaces it
/// wholesale, so the newest targets always win. Reconciliation diffs against
/// [`RenderState::baseline`], the pending targets when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderState {
    committed: IndexMap<DataKey, ShapeDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending: Option<IndexMap<DataKey, ShapeDescriptor>>,
}

impl RenderState {
    #[must_use]
    pub fn committed(&self) -> &IndexMap<DataKey, ShapeDescriptor> {
        &self.committed
    }

    #[must_use]
    pub fn pending(&self) -> Option<&IndexMap<DataKey, ShapeDescriptor>> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn baseline(&self) -> &IndexMap<DataKey, ShapeDescriptor> {
        self.pending.as_ref().unwrap_or(&self.committed)
    }

    #[must_use]
    pub fn descriptor(&self, key: &str) -> Option<&ShapeDescriptor> {
        self.baseline().get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.baseline().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baseline().is_empty()
    }

    pub(super) fn stage(&mut self, targets: IndexMap<DataKey, ShapeDescriptor>) {
        self.pending = Some(targets);
    }

    /// Promotes pending targets; returns `false` when nothing was pending.
    pub(super) fn commit(&mut self) -> bool {
        match self.pending.take() {
            Some(targets) => {
                self.committed = targets;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::RenderState;
    use crate::core::{CircleGeometry, DataKey, ShapeDescriptor};

    fn circle(radius: f64) -> ShapeDescriptor {
        ShapeDescriptor::Circle(CircleGeometry {
            cx: 0.0,
            cy: 0.0,
            radius,
        })
    }

    #[test]
    fn newest_staged_targets_win() {
        let mut state = RenderState::default();
        state.stage(IndexMap::from([(DataKey::from("a"), circle(1.0))]));
        state.stage(IndexMap::from([(DataKey::from("b"), circle(2.0))]));

        assert!(state.committed().is_empty());
        assert_eq!(state.descriptor("b"), Some(&circle(2.0)));
        assert_eq!(state.descriptor("a"), None);

        assert!(state.commit());
        assert!(!state.has_pending());
        assert_eq!(state.committed().len(), 1);
        assert!(!state.commit());
    }
}
