pub const DOCUMENT_PANEL_DEFAULT_WIDTH: f32 = 560.0;

/// Gap between the bottom of a selection and the menu rendered under it.
pub const MENU_BELOW_SELECTION_OFFSET: f32 = 8.0;

/// How often the shell repaints to drain backend events while idle.
pub const EVENT_PUMP_INTERVAL_MS: u64 = 75;
