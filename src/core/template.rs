/// Story templates — parsing, RON loading, and rendering.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template parse error: {0}")]
    TemplateParse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A segment of a parsed story template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// The `{name}` slot.
    Name,
}

/// A parsed story template with exactly one name slot.
///
/// Deserializing goes through the same slot check as `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStoryTemplate")]
pub struct StoryTemplate {
    segments: Vec<TemplateSegment>,
}

/// Unchecked serde shape of `StoryTemplate`.
#[derive(Debug, Deserialize)]
#[serde(rename = "StoryTemplate")]
struct RawStoryTemplate {
    segments: Vec<TemplateSegment>,
}

impl TryFrom<RawStoryTemplate> for StoryTemplate {
    type Error = TemplateError;

    fn try_from(raw: RawStoryTemplate) -> Result<Self, Self::Error> {
        StoryTemplate::from_segments(raw.segments)
    }
}

/// The Sunvale story up to the name slot.
const SUNVALE_HEAD: &str = "Once upon a dawn-lit morning, a traveler knocked on the gates of Sunvale. \
    The town's baker, seeing you arrive, wiped flour from their hands and called out, \"Hello, ";

/// The Sunvale story after the name slot.
const SUNVALE_TAIL: &str = "!\" Children in the square waved little flags, and even the wind seemed \
    to hum a cheerful tune. You took a deep breath, smiled, and felt at home.";

#[derive(Debug, Deserialize)]
#[serde(rename = "Story")]
struct RonStory {
    text: String,
}

impl StoryTemplate {
    /// The built-in Sunvale story.
    pub fn sunvale() -> StoryTemplate {
        StoryTemplate {
            segments: vec![
                TemplateSegment::Literal(SUNVALE_HEAD.to_string()),
                TemplateSegment::Name,
                TemplateSegment::Literal(SUNVALE_TAIL.to_string()),
            ],
        }
    }

    /// Build a template from segments, requiring exactly one name slot.
    pub fn from_segments(segments: Vec<TemplateSegment>) -> Result<StoryTemplate, TemplateError> {
        match segments
            .iter()
            .filter(|s| matches!(s, TemplateSegment::Name))
            .count()
        {
            0 => Err(TemplateError::TemplateParse(
                "template has no {name} slot".to_string(),
            )),
            1 => Ok(StoryTemplate { segments }),
            n => Err(TemplateError::TemplateParse(format!(
                "template has {} {{name}} slots, expected exactly one",
                n
            ))),
        }
    }

    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{name}` → `Name`
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    ///
    /// The result must contain exactly one `{name}` slot.
    pub fn parse(input: &str) -> Result<StoryTemplate, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                // Escaped brace
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                // Flush any accumulated literal
                if !literal_buf.is_empty() {
                    segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                }

                // Find the closing brace
                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' {
                    if chars[end] == '{' {
                        return Err(TemplateError::TemplateParse(
                            "nested braces are not allowed".to_string(),
                        ));
                    }
                    end += 1;
                }

                if end == len {
                    return Err(TemplateError::TemplateParse("unclosed brace".to_string()));
                }

                let content: String = chars[start..end].iter().collect();
                segments.push(Self::parse_placeholder(&content)?);
                i = end + 1;
            } else if chars[i] == '}' {
                // Escaped closing brace
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(TemplateError::TemplateParse(
                    "unmatched closing brace".to_string(),
                ));
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Self::from_segments(segments)
    }

    fn parse_placeholder(content: &str) -> Result<TemplateSegment, TemplateError> {
        match content {
            "" => Err(TemplateError::TemplateParse("empty braces".to_string())),
            "name" => Ok(TemplateSegment::Name),
            other => Err(TemplateError::TemplateParse(format!(
                "unknown placeholder '{{{}}}'",
                other
            ))),
        }
    }

    /// Load a story template from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<StoryTemplate, TemplateError> {
        tracing::debug!(path = %path.display(), "loading story template");
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a story template from a RON string of the form `Story(text: "...")`.
    pub fn parse_ron(input: &str) -> Result<StoryTemplate, TemplateError> {
        let raw: RonStory = ron::from_str(input)?;
        Self::parse(&raw.text)
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Byte length of everything except the name.
    pub fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                TemplateSegment::Literal(text) => text.len(),
                TemplateSegment::Name => 0,
            })
            .sum()
    }

    /// Render the template. The name is inserted verbatim and never re-parsed.
    pub fn render(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.literal_len() + name.len());
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Name => out.push_str(name),
            }
        }
        out
    }
}
