use viewnav::{Measure, SectionGeometry, SectionId, Viewport};

/// Scriptable stand-in for the host UI layer: a document with fixed-height
/// sections and a scroll position the test moves by hand.
pub struct FakeViewport {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    sections: Vec<(SectionId, SectionGeometry)>,
}

impl FakeViewport {
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            viewport_height,
            document_height,
            sections: Vec::new(),
        }
    }

    /// Lay out `sections` as contiguous `(id, height)` bands from the top of
    /// the document.
    pub fn with_stacked_sections(mut self, sections: &[(&str, f64)]) -> Self {
        let mut top = 0.0;
        for (id, height) in sections {
            self.sections.push((
                SectionId::from(*id),
                SectionGeometry {
                    top_offset: top,
                    height: *height,
                },
            ));
            top += height;
        }
        self
    }

    pub fn place_section(&mut self, id: &str, top_offset: f64, height: f64) {
        let geometry = SectionGeometry { top_offset, height };
        match self.sections.iter_mut().find(|(k, _)| k.as_str() == id) {
            Some((_, g)) => *g = geometry,
            None => self.sections.push((SectionId::from(id), geometry)),
        }
    }

    pub fn remove_section(&mut self, id: &str) {
        self.sections.retain(|(k, _)| k.as_str() != id);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }
}

impl Measure for FakeViewport {
    fn measure(&self, id: &SectionId) -> Option<SectionGeometry> {
        self.sections.iter().find(|(k, _)| k == id).map(|(_, g)| *g)
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }
}
