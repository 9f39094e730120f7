use crate::registry::{Section, SectionId};

/// Pure section matcher: which section does `scroll_offset` fall in?
///
/// A section matches when
/// `top_offset - edge_offset < scroll_offset <= top_offset - edge_offset + height`.
/// `edge_offset` is the fixed-header allowance; the lower bound is exclusive
/// and the upper bound inclusive, so a zero-height section never matches.
/// With overlapping sections the LAST match in iteration order wins.
pub fn match_section<'a>(
    scroll_offset: f64,
    sections: &'a [Section],
    edge_offset: f64,
) -> Option<&'a SectionId> {
    let mut hit = None;
    for section in sections {
        let effective_top = section.geometry.top_offset - edge_offset;
        if scroll_offset > effective_top && scroll_offset <= effective_top + section.geometry.height
        {
            hit = Some(&section.id);
        }
    }
    hit
}

/// Maps scroll offsets to the active section, with sticky activation.
///
/// When no section matches the current offset the previous active section is
/// kept, never cleared. That keeps the highlight stable at the document
/// edges instead of flickering off, and it is deliberate product behavior.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    edge_offset: f64,
    active: Option<SectionId>,
}

impl ScrollTracker {
    pub fn new(edge_offset: f64) -> Self {
        Self {
            edge_offset,
            active: None,
        }
    }

    /// Evaluate a fresh section snapshot against `scroll_offset` and return
    /// the active section after the sticky update.
    pub fn evaluate(&mut self, scroll_offset: f64, sections: &[Section]) -> Option<&SectionId> {
        if let Some(id) = match_section(scroll_offset, sections, self.edge_offset) {
            self.active = Some(id.clone());
        }
        self.active.as_ref()
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn edge_offset(&self) -> f64 {
        self.edge_offset
    }

    /// Forget the active section, e.g. on route navigation away from the page.
    pub fn reset(&mut self) {
        self.active = None;
    }
}
