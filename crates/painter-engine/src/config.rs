use crate::coords::SurfaceSize;

/// Render loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    /// Size of both buffers.
    pub surface_size: SurfaceSize,
    /// Name given to the render thread.
    pub thread_name: String,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            surface_size: SurfaceSize::default(),
            thread_name: "painter-render".to_string(),
        }
    }
}

impl LoopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface_size(mut self, size: SurfaceSize) -> Self {
        self.surface_size = size;
        self
    }

    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}
