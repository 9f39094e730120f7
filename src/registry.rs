use std::fmt;

/// Stable identifier of a navigable page section (its anchor id).
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Vertical extent of a section at one instant, in pixels from document top.
///
/// `top_offset` may be negative (content above the scroll origin); `height`
/// is expected non-negative. Geometry is a snapshot, never a cached fact:
/// layout shifts as images load and content resizes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionGeometry {
    pub top_offset: f64,
    pub height: f64,
}

/// A section paired with freshly measured geometry.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Section {
    pub id: SectionId,
    pub geometry: SectionGeometry,
}

/// Host capability that measures a section's current geometry.
///
/// Returning `None` means the section cannot be measured right now
/// (unmounted, display:none, ...); it is skipped, never an error.
pub trait Measure {
    fn measure(&self, id: &SectionId) -> Option<SectionGeometry>;
}

/// Insertion-ordered set of registered section ids.
///
/// The registry holds no geometry. [`SectionRegistry::snapshot`] re-measures
/// every id through the host capability on each call, so evaluation always
/// sees the current layout and membership changes between calls are safe.
/// Insertion order doubles as the tie-break order downstream.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    ids: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id`. Registering an id twice keeps its original position.
    pub fn register(&mut self, id: SectionId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn unregister(&mut self, id: &SectionId) {
        self.ids.retain(|known| known != id);
    }

    pub fn ids(&self) -> &[SectionId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Measure every registered section through `measure`, preserving
    /// registration order and dropping ids the host cannot measure.
    pub fn snapshot(&self, measure: &impl Measure) -> Vec<Section> {
        self.ids
            .iter()
            .filter_map(|id| {
                measure.measure(id).map(|geometry| Section {
                    id: id.clone(),
                    geometry,
                })
            })
            .collect()
    }
}
