use zoompan_core::config::ViewConfig;
use zoompan_core::controller::ViewController;
use zoompan_core::error::Result;

/// Viewer display state: the image texture plus the pan/zoom controller.
pub struct ViewerState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    pub controller: ViewController,
    pub viewing_label: String,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            controller: ViewController::new(),
            viewing_label: String::new(),
        }
    }
}

impl ViewerState {
    /// Replace the controller; the view starts over from identity.
    pub fn apply_config(&mut self, config: &ViewConfig) -> Result<()> {
        self.controller = ViewController::from_config(config)?;
        Ok(())
    }

    pub fn set_texture(&mut self, texture: egui::TextureHandle, label: &str) {
        self.image_size = Some(texture.size());
        self.texture = Some(texture);
        self.viewing_label = label.to_string();
        self.controller.reset();
    }
}
