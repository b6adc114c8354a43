//! Markdown document assembly.
//!
//! [`TextWriter`] incrementally builds a Markdown-formatted text buffer
//! (headers, paragraphs, lists, code blocks) and flushes it to a file
//! with a single blocking write. It is a pure formatting utility and is
//! independent of the plugin subsystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Language tag for code-fence syntax highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxHighlighting {
    Apache,
    Armasm,
    Bash,
    C,
    Coffeescript,
    Cpp,
    Csharp,
    Css,
    D,
    Diff,
    Go,
    Handlebars,
    Haskell,
    Http,
    Ini,
    Java,
    Javascript,
    Json,
    Julia,
    Kotlin,
    Less,
    Lua,
    Makefile,
    Markdown,
    Nginx,
    Nim,
    Objectivec,
    Perl,
    Php,
    Plaintext,
    Properties,
    Python,
    R,
    Ruby,
    Rust,
    Scala,
    Scss,
    Shell,
    Sql,
    Swift,
    Typescript,
    X86asm,
    Xml,
    Yaml,
}

impl SyntaxHighlighting {
    /// The tag written after the opening code fence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apache => "apache",
            Self::Armasm => "armasm",
            Self::Bash => "bash",
            Self::C => "c",
            Self::Coffeescript => "coffeescript",
            Self::Cpp => "cpp",
            Self::Csharp => "csharp",
            Self::Css => "css",
            Self::D => "d",
            Self::Diff => "diff",
            Self::Go => "go",
            Self::Handlebars => "handlebars",
            Self::Haskell => "haskell",
            Self::Http => "http",
            Self::Ini => "ini",
            Self::Java => "java",
            Self::Javascript => "javascript",
            Self::Json => "json",
            Self::Julia => "julia",
            Self::Kotlin => "kotlin",
            Self::Less => "less",
            Self::Lua => "lua",
            Self::Makefile => "makefile",
            Self::Markdown => "markdown",
            Self::Nginx => "nginx",
            Self::Nim => "nim",
            Self::Objectivec => "objectivec",
            Self::Perl => "perl",
            Self::Php => "php",
            Self::Plaintext => "plaintext",
            Self::Properties => "properties",
            Self::Python => "python",
            Self::R => "r",
            Self::Ruby => "ruby",
            Self::Rust => "rust",
            Self::Scala => "scala",
            Self::Scss => "scss",
            Self::Shell => "shell",
            Self::Sql => "sql",
            Self::Swift => "swift",
            Self::Typescript => "typescript",
            Self::X86asm => "x86asm",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
        }
    }
}

/// Builds a Markdown document in memory and writes it to a file.
///
/// Methods consume and return `self` so documents chain naturally:
///
/// ```rust,no_run
/// use secuplug::textwriter::TextWriter;
///
/// TextWriter::new("example.md")
///     .add_header_one("My Markdown Document")
///     .add_paragraph("This is a sample document.")
///     .add_list(&["Item 1", "Item 2", "Item 3"])
///     .write_to_file()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TextWriter {
    state: String,
    path: PathBuf,
    endl: String,
}

impl TextWriter {
    /// Create a writer targeting `path`, with `"\n"` line endings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_endl(path, "\n")
    }

    /// Create a writer with a custom line terminator.
    pub fn with_endl(path: impl Into<PathBuf>, endl: impl Into<String>) -> Self {
        Self {
            state: String::new(),
            path: path.into(),
            endl: endl.into(),
        }
    }

    /// The target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document assembled so far.
    pub fn render(&self) -> &str {
        &self.state
    }

    /// Add a level-n header followed by a blank line.
    pub fn add_header_n(mut self, n: usize, header: &str) -> Self {
        self.state.push_str(&"#".repeat(n));
        self.state.push(' ');
        self.state.push_str(header);
        self.state.push_str(&self.endl);
        self.state.push_str(&self.endl);
        self
    }

    /// Add a level-one header.
    pub fn add_header_one(self, header: &str) -> Self {
        self.add_header_n(1, header)
    }

    /// Add a level-two header.
    pub fn add_header_two(self, header: &str) -> Self {
        self.add_header_n(2, header)
    }

    /// Add a level-three header.
    pub fn add_header_three(self, header: &str) -> Self {
        self.add_header_n(3, header)
    }

    /// Add a paragraph followed by a blank line.
    pub fn add_paragraph(mut self, text: &str) -> Self {
        self.state.push_str(text);
        self.state.push_str(&self.endl);
        self.state.push_str(&self.endl);
        self
    }

    /// Add a paragraph with an explicit terminator in place of the first
    /// line ending (the closing line ending is still appended).
    pub fn add_paragraph_with_end(mut self, text: &str, end: &str) -> Self {
        self.state.push_str(text);
        self.state.push_str(end);
        self.state.push_str(&self.endl);
        self
    }

    /// Add a horizontal rule.
    pub fn add_horizontal_rule(mut self) -> Self {
        self.state.push_str("---");
        self.state.push_str(&self.endl);
        self
    }

    /// Add a fenced code block, optionally tagged with a language.
    pub fn add_code_block(mut self, code: &str, highlighting: Option<SyntaxHighlighting>) -> Self {
        self.state.push_str("```");
        if let Some(lang) = highlighting {
            self.state.push_str(lang.as_str());
        }
        self.state.push_str(&self.endl);
        self.state.push_str(code);
        self.state.push_str("```");
        self.state.push_str(&self.endl);
        self
    }

    /// Add an unordered list followed by a blank line.
    pub fn add_list<S: AsRef<str>>(self, items: &[S]) -> Self {
        self.push_list(items, false)
    }

    /// Add an ordered list followed by a blank line.
    pub fn add_ordered_list<S: AsRef<str>>(self, items: &[S]) -> Self {
        self.push_list(items, true)
    }

    fn push_list<S: AsRef<str>>(mut self, items: &[S], ordered: bool) -> Self {
        let endl = self.endl.clone();
        let lines: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if ordered {
                    format!("{}. {}", idx + 1, item.as_ref())
                } else {
                    format!("- {}", item.as_ref())
                }
            })
            .collect();
        self.state.push_str(&lines.join(&endl));
        self.state.push_str(&endl);
        self.state.push_str(&endl);
        self
    }

    /// Write the assembled document to the target file in one blocking
    /// write, replacing any existing content.
    pub fn write_to_file(&self) -> Result<()> {
        fs::write(&self.path, &self.state)?;
        info!(path = %self.path.display(), "text written to file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> TextWriter {
        TextWriter::new("unused.md")
    }

    #[test]
    fn test_header_one() {
        let w = writer().add_header_one("This is a test");
        assert_eq!(w.render(), "# This is a test\n\n");
    }

    #[test]
    fn test_header_two() {
        let w = writer().add_header_two("This is a test");
        assert_eq!(w.render(), "## This is a test\n\n");
    }

    #[test]
    fn test_header_three() {
        let w = writer().add_header_three("This is a test");
        assert_eq!(w.render(), "### This is a test\n\n");
    }

    #[test]
    fn test_header_n() {
        let w = writer().add_header_n(5, "This is a test");
        assert_eq!(w.render(), "##### This is a test\n\n");
    }

    #[test]
    fn test_paragraph() {
        let w = writer().add_paragraph("This is a test");
        assert_eq!(w.render(), "This is a test\n\n");
    }

    #[test]
    fn test_paragraph_with_end() {
        let w = writer()
            .add_paragraph_with_end("This is a test", "bla")
            .add_paragraph_with_end("This is a test", "");
        assert_eq!(w.render(), "This is a testbla\nThis is a test\n");
    }

    #[test]
    fn test_horizontal_rule() {
        let w = writer().add_horizontal_rule();
        assert_eq!(w.render(), "---\n");
    }

    #[test]
    fn test_code_block() {
        let code = "for i in 0..1 {\n    println!(\"{i}\");\n}\n";
        let w = writer().add_code_block(code, None);
        assert_eq!(w.render(), format!("```\n{code}```\n"));
    }

    #[test]
    fn test_code_block_with_highlighting() {
        let w = writer().add_code_block("print(1)\n", Some(SyntaxHighlighting::Python));
        assert_eq!(w.render(), "```python\nprint(1)\n```\n");
    }

    #[test]
    fn test_list() {
        let w = writer().add_list(&["test1", "test2", "test3"]);
        assert_eq!(w.render(), "- test1\n- test2\n- test3\n\n");
    }

    #[test]
    fn test_ordered_list() {
        let w = writer().add_ordered_list(&["test1", "test2", "test3"]);
        assert_eq!(w.render(), "1. test1\n2. test2\n3. test3\n\n");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_header.md");
        let w = TextWriter::new(&path).add_header_one("This is a test");
        w.write_to_file().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "# This is a test\n\n");
    }

    #[test]
    fn test_full_document() {
        let expected = r#"# This is a test

# My Arbitrary Markdown File

## Introduction

Welcome to my Markdown file! This document serves as a demonstration of various Markdown elements.

## Lists

### Ordered List

1. First item
2. Second item
3. Third item

### Unordered List

- Apples
- Bananas
- Oranges

## Code

For a code block:

```python
def greet(name):
    print(f"Hello, {name}!")
```
"#;
        let w = writer()
            .add_header_one("This is a test")
            .add_header_one("My Arbitrary Markdown File")
            .add_header_two("Introduction")
            .add_paragraph(
                "Welcome to my Markdown file! This document serves as a demonstration of various Markdown elements.",
            )
            .add_header_two("Lists")
            .add_header_three("Ordered List")
            .add_ordered_list(&["First item", "Second item", "Third item"])
            .add_header_three("Unordered List")
            .add_list(&["Apples", "Bananas", "Oranges"])
            .add_header_two("Code")
            .add_paragraph("For a code block:")
            .add_code_block(
                "def greet(name):\n    print(f\"Hello, {name}!\")\n",
                Some(SyntaxHighlighting::Python),
            );
        assert_eq!(w.render(), expected);
    }

    #[test]
    fn test_syntax_highlighting_tags() {
        assert_eq!(SyntaxHighlighting::Rust.as_str(), "rust");
        assert_eq!(SyntaxHighlighting::Cpp.as_str(), "cpp");
        assert_eq!(SyntaxHighlighting::X86asm.as_str(), "x86asm");
    }
}
