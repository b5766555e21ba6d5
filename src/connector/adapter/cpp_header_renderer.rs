use crate::application::HeaderRenderer;
use crate::domain::ContainerKeyword;

/// Closing sequence of a C++ raw string literal `R"( ... )"`.
const RAW_LITERAL_CLOSE: &str = ")\"";
/// Splits the closing sequence across two adjacent literals.
const ESCAPED_RAW_LITERAL_CLOSE: &str = ")\"\n\"";

/// Renders headers holding JSON in a `const char*` raw string literal.
pub struct CppHeaderRenderer;

impl CppHeaderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CppHeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer for CppHeaderRenderer {
    fn escape_literal(&self, text: &str) -> String {
        text.replace(RAW_LITERAL_CLOSE, ESCAPED_RAW_LITERAL_CLOSE)
    }

    fn unescape_literal(&self, text: &str) -> String {
        text.replace(ESCAPED_RAW_LITERAL_CLOSE, RAW_LITERAL_CLOSE)
    }

    fn render_artifact(
        &self,
        keyword: ContainerKeyword,
        container_name: &str,
        literal_body: &str,
    ) -> String {
        format!(
            "{} {} {{\n    const char* jsonData = R\"(\n{}\n)\";\n}};\n",
            keyword, container_name, literal_body
        )
    }

    fn render_combined(&self, keyword: ContainerKeyword, parts: &[String]) -> String {
        let mut out = format!("#pragma once\n\n{} Combined {{\n", keyword);
        for part in parts {
            out.push_str(part);
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }
}
