use thirdplane_layout::LayoutError;
use thirdplane_render_core::RenderError;
use thirdplane_resource::ResourceError;
use thiserror::Error;

/// Everything that can stop a generator run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Asset loading failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
