use crate::error::RenderError;

/// A backend that serializes a laid-out document into a complete file.
///
/// Rendering is synchronous and produces the whole artifact in memory; the
/// caller decides where the bytes go.
pub trait DocumentRenderer {
    /// What the backend consumes, e.g. a slice of pages or slides.
    type Input: ?Sized;

    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, input: &Self::Input) -> Result<Vec<u8>, RenderError>;
}
