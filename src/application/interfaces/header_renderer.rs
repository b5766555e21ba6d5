use crate::domain::ContainerKeyword;

/// Turns JSON text into header source.
pub trait HeaderRenderer: Send + Sync {
    /// Escape the raw-literal delimiter so `text` can be embedded verbatim.
    fn escape_literal(&self, text: &str) -> String;

    /// Exact inverse of [`HeaderRenderer::escape_literal`].
    fn unescape_literal(&self, text: &str) -> String;

    /// Render one artifact wrapping an already escaped literal body.
    fn render_artifact(
        &self,
        keyword: ContainerKeyword,
        container_name: &str,
        literal_body: &str,
    ) -> String;

    /// Render a combined header nesting the given artifact sources verbatim.
    fn render_combined(&self, keyword: ContainerKeyword, parts: &[String]) -> String;
}
