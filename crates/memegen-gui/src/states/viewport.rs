/// Canvas texture as last uploaded.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Canvas size in pixels.
    pub canvas_size: Option<[usize; 2]>,
    pub viewing_label: String,
}
