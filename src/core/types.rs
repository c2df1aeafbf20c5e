use std::borrow::{Borrow, Cow};
use std::fmt;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn center(self) -> Position {
        Position::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Stable identity of one data point across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataKey(String);

impl DataKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DataKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DataKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Pixel position, typically supplied by an external layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub key: DataKey,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl DataPoint {
    #[must_use]
    pub fn new(key: impl Into<DataKey>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            position: None,
        }
    }

    /// Pins the point to a pixel position computed outside this crate.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    pub fn from_decimal(key: impl Into<DataKey>, value: Decimal) -> ChartResult<Self> {
        let key = key.into();
        let value = decimal_to_f64(value, key.as_str())?;
        Ok(Self {
            key,
            value,
            position: None,
        })
    }
}

/// Immutable data handed to a chart by its host.
///
/// JSON hosts may send either `[{"key": "a", "value": 1.0}, ...]` or an
/// ordered object such as `{"a": 48, "b": 32}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataSnapshot {
    Series(Vec<DataPoint>),
    Categories(IndexMap<String, f64>),
}

/// Wire form of a snapshot. Object entries stay a list so a repeated label
/// reaches [`DataSnapshot::categories`] instead of overwriting its sibling.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSnapshot {
    Series(Vec<DataPoint>),
    Categories(#[serde(deserialize_with = "category_entries")] Vec<(String, f64)>),
}

impl RawSnapshot {
    fn into_snapshot(self) -> ChartResult<DataSnapshot> {
        match self {
            Self::Series(points) => Ok(DataSnapshot::Series(points)),
            Self::Categories(entries) => DataSnapshot::categories(entries),
        }
    }
}

struct CategoryEntriesVisitor;

impl<'de> Visitor<'de> for CategoryEntriesVisitor {
    type Value = Vec<(String, f64)>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping category labels to numbers")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, f64>()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

fn category_entries<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(CategoryEntriesVisitor)
}

impl<'de> Deserialize<'de> for DataSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawSnapshot::deserialize(deserializer)?
            .into_snapshot()
            .map_err(de::Error::custom)
    }
}

impl Default for DataSnapshot {
    fn default() -> Self {
        Self::Series(Vec::new())
    }
}

impl DataSnapshot {
    #[must_use]
    pub fn series(points: Vec<DataPoint>) -> Self {
        Self::Series(points)
    }

    /// Builds a category snapshot, rejecting repeated labels instead of
    /// silently keeping the last one.
    pub fn categories<I, K>(entries: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut map = IndexMap::new();
        for (label, value) in entries {
            let label = label.into();
            if map.contains_key(&label) {
                return Err(ChartError::DuplicateKey { key: label });
            }
            map.insert(label, value);
        }
        Ok(Self::Categories(map))
    }

    /// Parses a host snapshot. A label repeated inside a JSON object is
    /// reported as [`ChartError::DuplicateKey`].
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: RawSnapshot = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidSnapshot(format!("failed to parse snapshot json payload: {e}"))
        })?;
        raw.into_snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Series(points) => points.len(),
            Self::Categories(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the snapshot as keyed points in snapshot order.
    #[must_use]
    pub fn points(&self) -> Cow<'_, [DataPoint]> {
        match self {
            Self::Series(points) => Cow::Borrowed(points.as_slice()),
            Self::Categories(entries) => Cow::Owned(
                entries
                    .iter()
                    .map(|(label, value)| DataPoint::new(label.as_str(), *value))
                    .collect(),
            ),
        }
    }
}
