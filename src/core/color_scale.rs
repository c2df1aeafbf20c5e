use indexmap::IndexSet;

use crate::core::DataKey;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ordinal scale assigning palette colors to category keys.
///
/// The domain holds distinct keys in first-seen order and each key takes the
/// palette entry at its domain index, cycling when the palette is shorter than
/// the domain. Rebuilding the scale from the same key set in the same order
/// yields the same assignment, so colors do not flicker between updates.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    palette: Vec<Color>,
    domain: IndexSet<DataKey>,
}

impl OrdinalColorScale {
    pub fn new<'a, I>(palette: &[Color], keys: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a DataKey>,
    {
        if palette.is_empty() {
            return Err(ChartError::InvalidConfig(
                "color palette must contain at least one color".to_owned(),
            ));
        }

        Ok(Self {
            palette: palette.to_vec(),
            domain: keys.into_iter().cloned().collect(),
        })
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<DataKey> {
        &self.domain
    }

    /// Keys outside the domain take the slot right after the domain, the
    /// position they would get if appended.
    #[must_use]
    pub fn color(&self, key: &DataKey) -> Color {
        let index = self
            .domain
            .get_index_of(key)
            .unwrap_or(self.domain.len());
        self.palette[index % self.palette.len()]
    }
}
