//! Scroll-derived page chrome flags: raised header, scroll-to-top buttons,
//! bottom-of-document detection.

/// Scroll offsets at which chrome elements change state, in pixels.
/// Defaults carry the constants the deployed pages use.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChromeThresholds {
    /// Header gains its raised/shadowed treatment at this offset.
    pub raise_header_at: f64,
    /// Scroll-to-top/bottom buttons appear past this offset.
    pub show_buttons_at: f64,
    /// Slack subtracted from the document end when deciding "at bottom".
    pub bottom_slack: f64,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            raise_header_at: 200.0,
            show_buttons_at: 300.0,
            bottom_slack: 100.0,
        }
    }
}

/// Chrome flags derived from one scroll evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ChromeState {
    pub header_raised: bool,
    pub scroll_buttons_visible: bool,
    pub at_bottom: bool,
}

impl ChromeThresholds {
    pub fn evaluate(
        &self,
        scroll_offset: f64,
        viewport_height: f64,
        document_height: f64,
    ) -> ChromeState {
        ChromeState {
            header_raised: scroll_offset >= self.raise_header_at,
            scroll_buttons_visible: scroll_offset > self.show_buttons_at,
            at_bottom: viewport_height + scroll_offset >= document_height - self.bottom_slack,
        }
    }
}
