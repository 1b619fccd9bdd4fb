/// Structured result of a page scrape, rebuilt wholesale per request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub source_url: String,
    pub title: String,
    pub meta_description: String,
    pub images: Vec<ImageRef>,
    pub blocks: Vec<ContentBlock>,
}

/// A scraped image. Identity is the positional index within its owning list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// One structural unit of scraped content. `id` is backend-assigned and
/// opaque; `kind` is a short tag (paragraph, heading, ...) shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub id: String,
    pub kind: String,
    pub text: String,
    pub images: Vec<ImageRef>,
}

/// Stable identity of an image element within the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    /// Entry in the top-level gallery section.
    Gallery { index: usize },
    /// Image nested inside a content block.
    Inline { block: usize, image: usize },
}

impl ImageTarget {
    /// Identifier sent with process requests: the gallery index, or the
    /// composite `block_<b>_img_<i>` for inline images.
    pub fn composite_id(&self) -> String {
        match self {
            ImageTarget::Gallery { index } => index.to_string(),
            ImageTarget::Inline { block, image } => format!("block_{block}_img_{image}"),
        }
    }
}
