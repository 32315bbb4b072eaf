use memegen_core::consts::DEFAULT_VOLUME;

/// Overall UI state.
pub struct UIState {
    /// File name of the loaded image.
    pub file_name: Option<String>,
    pub top_text: String,
    pub bottom_text: String,
    /// Slider position, mirrored into the session on change.
    pub volume: u8,
    /// Engine that answered the last voice enumeration.
    pub engine: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            file_name: None,
            top_text: String::new(),
            bottom_text: String::new(),
            volume: DEFAULT_VOLUME,
            engine: None,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
