//! Walk a simulated portfolio page and print the active section and chrome
//! flags the way a navbar would consume them.

use viewnav::{
    EngineConfig, Measure, NavEngine, SectionGeometry, SectionId, Viewport,
};

/// A fixed single-page layout: five stacked sections, 800px viewport.
struct PortfolioPage {
    scroll_offset: f64,
}

const SECTIONS: [(&str, f64, f64); 5] = [
    ("home", 0.0, 700.0),
    ("about", 700.0, 600.0),
    ("skills", 1300.0, 800.0),
    ("work", 2100.0, 900.0),
    ("contact", 3000.0, 500.0),
];

impl Measure for PortfolioPage {
    fn measure(&self, id: &SectionId) -> Option<SectionGeometry> {
        SECTIONS
            .iter()
            .find(|(name, _, _)| *name == id.as_str())
            .map(|(_, top_offset, height)| SectionGeometry {
                top_offset: *top_offset,
                height: *height,
            })
    }
}

impl Viewport for PortfolioPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn document_height(&self) -> f64 {
        3500.0
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut engine = NavEngine::new(EngineConfig::default())?;
    for (name, _, _) in SECTIONS {
        engine.register_section(SectionId::from(name));
    }

    let mut page = PortfolioPage { scroll_offset: 0.0 };
    for offset in (0..=3400).step_by(200) {
        page.scroll_offset = f64::from(offset);
        engine.handle_scroll(&page);

        let active = engine
            .active_section()
            .map_or("-", SectionId::as_str);
        let chrome = engine.chrome();
        println!(
            "scroll {offset:>5}px  active: {active:<8} header_raised: {:<5} buttons: {:<5} at_bottom: {}",
            chrome.header_raised, chrome.scroll_buttons_visible, chrome.at_bottom
        );
    }

    Ok(())
}
