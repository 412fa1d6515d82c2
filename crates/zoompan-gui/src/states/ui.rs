/// Which view the central panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Viewer,
    Colors,
    Slider,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Viewer, Tab::Colors, Tab::Slider];
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Viewer => write!(f, "Zoom & Pan"),
            Tab::Colors => write!(f, "Color Codes"),
            Tab::Slider => write!(f, "Scrollbar & Spinner"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub tab: Tab,
    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
