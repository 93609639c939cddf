//! Day annotations on month text and their console-markup rendering
//!
//! Highlighting is described as a list of [`Annotation`]s (a day number, a
//! style tag and how far the style reaches) and applied in one rendering pass
//! over the day rows of a month block. Markup uses the `[tag]...[/tag]` console
//! markup understood by the dashboard's display widget.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

fn day_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Opaque style token spliced into rendered text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighlightTag(String);

impl HighlightTag {
    pub fn new(tag: impl Into<String>) -> Self {
        HighlightTag(tag.into())
    }

    /// Style for days already behind us
    pub fn dim() -> Self {
        HighlightTag::new("dim")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HighlightTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HighlightTag {
    fn from(tag: &str) -> Self {
        HighlightTag::new(tag)
    }
}

impl From<String> for HighlightTag {
    fn from(tag: String) -> Self {
        HighlightTag(tag)
    }
}

/// How far an annotation's style reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the annotated day
    Local,
    /// From the annotated day until the next annotated day or the end of the block
    Open,
}

/// A style applied to one day of a month block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub day: u32,
    pub tag: HighlightTag,
    pub scope: Scope,
}

/// Month text plus the annotations to render onto it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMarkup {
    text: String,
    annotations: Vec<Annotation>,
}

impl MonthMarkup {
    pub fn new(text: impl Into<String>) -> Self {
        MonthMarkup {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Add an annotation. A later annotation for the same day replaces an earlier one.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Style from `day` onwards
    pub fn open(self, day: u32, tag: HighlightTag) -> Self {
        self.annotate(Annotation {
            day,
            tag,
            scope: Scope::Open,
        })
    }

    /// Style `day` only
    pub fn local(self, day: u32, tag: HighlightTag) -> Self {
        self.annotate(Annotation {
            day,
            tag,
            scope: Scope::Local,
        })
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The month text without markup
    pub fn plain(&self) -> &str {
        &self.text
    }

    /// Apply the annotations as markup.
    ///
    /// Only day rows (lines of digits and spaces) are touched; title and
    /// weekday header lines pass through as-is. A day that does not appear
    /// leaves the text unchanged, and a scope still open at the end of the
    /// block is closed there.
    pub fn render(&self) -> String {
        let mut by_day: HashMap<u32, &Annotation> = HashMap::new();
        for annotation in &self.annotations {
            by_day.insert(annotation.day, annotation);
        }

        if by_day.is_empty() {
            return self.text.clone();
        }

        let mut output = String::with_capacity(self.text.len() + 32 * by_day.len());
        let mut open: Option<&HighlightTag> = None;

        for line in self.text.split_inclusive('\n') {
            if !is_day_row(line) {
                output.push_str(line);
                continue;
            }

            let mut cursor = 0;
            for token in day_token_regex().find_iter(line) {
                let annotation = token
                    .as_str()
                    .parse::<u32>()
                    .ok()
                    .and_then(|day| by_day.get(&day).copied());
                let Some(annotation) = annotation else {
                    continue;
                };

                output.push_str(&line[cursor..token.start()]);
                if let Some(tag) = open.take() {
                    push_close(&mut output, tag);
                }
                push_open(&mut output, &annotation.tag);
                output.push_str(token.as_str());

                match annotation.scope {
                    Scope::Local => push_close(&mut output, &annotation.tag),
                    Scope::Open => open = Some(&annotation.tag),
                }
                cursor = token.end();
            }
            output.push_str(&line[cursor..]);
        }

        if let Some(tag) = open {
            let trailing_newline = output.ends_with('\n');
            if trailing_newline {
                output.pop();
            }
            push_close(&mut output, tag);
            if trailing_newline {
                output.push('\n');
            }
        }

        output
    }
}

fn is_day_row(line: &str) -> bool {
    !line.trim().is_empty() && line.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}

fn push_open(output: &mut String, tag: &HighlightTag) {
    output.push('[');
    output.push_str(tag.as_str());
    output.push(']');
}

fn push_close(output: &mut String, tag: &HighlightTag) {
    output.push_str("[/");
    output.push_str(tag.as_str());
    output.push(']');
}

/// Dim the block from day 1 to its end
pub fn dim_first_day(calendar_text: &str) -> String {
    MonthMarkup::new(calendar_text)
        .open(1, HighlightTag::dim())
        .render()
}

/// Highlight a single day with `tag`
pub fn highlight_day(calendar_text: &str, day: u32, tag: &HighlightTag) -> String {
    MonthMarkup::new(calendar_text)
        .local(day, tag.clone())
        .render()
}
