//! Front-matter parsing for customization markdown files.
//!
//! A document may start with a `---` delimiter line, a block of
//! `key: value` lines, and a closing `---` line. Anything else is treated as
//! a document without metadata. Values are single-line strings; nested YAML,
//! quoting, and multi-line values are intentionally unsupported.

use std::collections::HashMap;

use crate::constants::{DEFAULT_DESCRIPTION, FRONT_MATTER_DELIMITER, UNKNOWN_NAME};

/// A markdown document split into front-matter metadata and body text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: HashMap<String, String>,
    /// Text following the header block, untrimmed. Equals the whole input
    /// when no header block is present.
    pub body: String,
}

/// Parse a document. Cannot fail: malformed input yields empty metadata and
/// the input unchanged as body.
pub fn parse(content: &str) -> ParsedDocument {
    let Some((header, body)) = split_front_matter(content) else {
        return ParsedDocument {
            metadata: HashMap::new(),
            body: content.to_string(),
        };
    };

    let mut metadata = HashMap::new();
    for line in header.lines() {
        let Some(colon) = line.find(':') else {
            continue;
        };
        if colon == 0 {
            continue;
        }
        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();
        metadata.insert(key.to_string(), value.to_string());
    }

    ParsedDocument {
        metadata,
        body: body.to_string(),
    }
}

/// Explicit line-boundary scan: the first line must be a delimiter and a
/// later delimiter line closes the header. Returns `(header, body)` slices,
/// or `None` when the document has no header block.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let first_newline = content.find('\n')?;
    if !is_delimiter_line(&content[..first_newline]) {
        return None;
    }
    let header_start = first_newline + 1;

    let mut line_start = header_start;
    loop {
        let remainder = &content[line_start..];
        let (line, line_end) = match remainder.find('\n') {
            Some(i) => (&remainder[..i], line_start + i + 1),
            None => (remainder, content.len()),
        };

        if is_delimiter_line(line) {
            let header = &content[header_start..line_start];
            let body = if line_end >= content.len() {
                ""
            } else {
                &content[line_end..]
            };
            return Some((header, body));
        }

        if line_end >= content.len() {
            return None;
        }
        line_start = line_end;
    }
}

/// A delimiter line is exactly `---`, allowing trailing whitespace.
fn is_delimiter_line(line: &str) -> bool {
    line.trim_end() == FRONT_MATTER_DELIMITER
}

fn non_empty<'a>(doc: &'a ParsedDocument, key: &str) -> Option<&'a str> {
    doc.metadata
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn name_or_default(doc: &ParsedDocument) -> String {
    non_empty(doc, "name").unwrap_or(UNKNOWN_NAME).to_string()
}

fn description_or_default(doc: &ParsedDocument) -> String {
    non_empty(doc, "description")
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string()
}

/// Metadata extracted from a skill manifest header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
}

/// Metadata extracted from a command file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    pub name: String,
    pub description: String,
    pub allowed_tools: Option<String>,
    pub argument_hint: Option<String>,
    pub model: Option<String>,
}

/// Metadata extracted from an agent file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentMetadata {
    pub name: String,
    pub description: String,
    pub tools: Option<Vec<String>>,
    pub model: Option<String>,
}

/// Metadata extracted from an output style file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStyleMetadata {
    pub name: String,
    pub description: String,
}

pub fn skill_metadata(doc: &ParsedDocument) -> SkillMetadata {
    SkillMetadata {
        name: name_or_default(doc),
        description: description_or_default(doc),
    }
}

pub fn command_metadata(doc: &ParsedDocument) -> CommandMetadata {
    CommandMetadata {
        name: name_or_default(doc),
        description: description_or_default(doc),
        allowed_tools: doc.metadata.get("allowed-tools").cloned(),
        argument_hint: doc.metadata.get("argument-hint").cloned(),
        model: doc.metadata.get("model").cloned(),
    }
}

pub fn agent_metadata(doc: &ParsedDocument) -> AgentMetadata {
    AgentMetadata {
        name: name_or_default(doc),
        description: description_or_default(doc),
        tools: non_empty(doc, "tools")
            .map(|tools| tools.split(',').map(|t| t.trim().to_string()).collect()),
        model: doc.metadata.get("model").cloned(),
    }
}

pub fn output_style_metadata(doc: &ParsedDocument) -> OutputStyleMetadata {
    OutputStyleMetadata {
        name: name_or_default(doc),
        description: description_or_default(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_without_delimiter_passes_through() {
        let input = "# Just a readme\n\nNo metadata here.";
        let doc = parse(input);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn parses_keys_and_body() {
        let doc = parse("---\nname: foo\ndescription: bar\n---\nBODY TEXT");
        assert_eq!(doc.metadata.get("name").unwrap(), "foo");
        assert_eq!(doc.metadata.get("description").unwrap(), "bar");
        assert_eq!(doc.body.trim(), "BODY TEXT");
    }

    #[test]
    fn malformed_lines_contribute_nothing() {
        let doc = parse("---\nweirdline\n:leadingcolon\nname: ok\n---\nbody");
        assert_eq!(doc.metadata.len(), 1);
        assert_eq!(doc.metadata.get("name").unwrap(), "ok");
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let doc = parse("---\nname: a\ndescription: d\nname: b\n---\n");
        assert_eq!(doc.metadata.get("name").unwrap(), "b");
    }

    #[test]
    fn empty_input_yields_empty_document() {
        let doc = parse("");
        assert!(doc.metadata.is_empty());
        assert!(doc.body.is_empty());
    }

    #[test]
    fn header_with_zero_content_lines() {
        let doc = parse("---\n---\nrest of file");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "rest of file");
    }

    #[test]
    fn unclosed_header_is_not_front_matter() {
        let input = "---\nname: foo\nno closing line";
        let doc = parse(input);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn closing_delimiter_at_end_of_input() {
        let doc = parse("---\nname: x\ndescription: y\n---");
        assert_eq!(doc.metadata.get("name").unwrap(), "x");
        assert!(doc.body.is_empty());
    }

    #[test]
    fn delimiter_allows_trailing_whitespace_only() {
        let doc = parse("--- \nname: x\n---  \nbody");
        assert_eq!(doc.metadata.get("name").unwrap(), "x");
        assert_eq!(doc.body, "body");

        let doc = parse(" ---\nname: x\n---\nbody");
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn values_keep_inner_colons() {
        let doc = parse("---\nurl: https://example.com/x\n---\n");
        assert_eq!(doc.metadata.get("url").unwrap(), "https://example.com/x");
    }

    #[test]
    fn skill_metadata_defaults() {
        let doc = parse("no front matter");
        let meta = skill_metadata(&doc);
        assert_eq!(meta.name, "Unknown");
        assert_eq!(meta.description, "No description available");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let doc = parse("---\nname:\ndescription:\n---\n");
        let meta = skill_metadata(&doc);
        assert_eq!(meta.name, "Unknown");
        assert_eq!(meta.description, "No description available");
    }

    #[test]
    fn agent_tools_are_comma_split_and_trimmed() {
        let doc = parse("---\ntools: a, b , c\n---\n");
        let meta = agent_metadata(&doc);
        assert_eq!(meta.tools.unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn absent_tools_key_yields_none() {
        let doc = parse("---\nname: reviewer\n---\n");
        assert!(agent_metadata(&doc).tools.is_none());
        let doc = parse("---\ntools:\n---\n");
        assert!(agent_metadata(&doc).tools.is_none());
    }

    #[test]
    fn command_metadata_passthrough_fields() {
        let doc = parse("---\nallowed-tools: Bash(git:*)\nargument-hint: [file]\nmodel: haiku\n---\n");
        let meta = command_metadata(&doc);
        assert_eq!(meta.allowed_tools.unwrap(), "Bash(git:*)");
        assert_eq!(meta.argument_hint.unwrap(), "[file]");
        assert_eq!(meta.model.unwrap(), "haiku");
    }
}
