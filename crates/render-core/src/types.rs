/// Title and author written into the document properties of either format.
/// Timestamps are never recorded, so identical input gives identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
}

impl DocumentMetadata {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
