//! Cursor markup templates.
//!
//! Each cursor's visual element is instantiated from a markup template with
//! `{{…}}` placeholders for the participant's display name and color and for
//! the caret-flag hide timings. Templates are compiled once when the overlay
//! is constructed, so a typo in a custom template fails fast instead of
//! producing broken markup for every cursor.
//!
//! # Examples
//!
//! ```
//! use cursor_overlay::template::{Template, TemplateValues};
//!
//! let template = Template::compile("<span style=\"color: {{color}}\">{{name}}</span>").unwrap();
//! let markup = template.render(&TemplateValues {
//!     name: "Joe Bloggs",
//!     color: "red",
//!     delay_ms: 3000,
//!     speed_ms: 400,
//! });
//! assert_eq!(markup, "<span style=\"color: red\">Joe Bloggs</span>");
//! ```

use crate::error::{Error, Result};

/// Default cursor markup.
///
/// The selection highlight, the caret, and the name flag are separate
/// elements so a host stylesheet can address them individually.
pub const DEFAULT_TEMPLATE: &str = "\
<span class=\"remote-cursor-selections\"></span>\
<span class=\"remote-cursor-caret-container\">\
<span class=\"remote-cursor-caret\" style=\"background-color: {{color}}\"></span>\
</span>\
<div class=\"remote-cursor-flag\" style=\"background-color: {{color}}; transition-delay: {{delay}}ms; transition-duration: {{speed}}ms\">\
<small class=\"remote-cursor-name\">{{name}}</small>\
</div>";

/// A recognized template placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placeholder {
    /// Participant display name (HTML-escaped on render).
    Name,
    /// Participant color token, inserted verbatim.
    Color,
    /// Flag hide delay in milliseconds.
    Delay,
    /// Flag hide transition duration in milliseconds.
    Speed,
}

impl Placeholder {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "color" => Some(Self::Color),
            "delay" => Some(Self::Delay),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Values substituted into a template on render.
#[derive(Clone, Copy, Debug)]
pub struct TemplateValues<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub delay_ms: u64,
    pub speed_ms: u64,
}

/// A compiled cursor markup template.
#[derive(Clone, Debug)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compile a template source string.
    ///
    /// # Errors
    ///
    /// Returns an error if the source contains an unterminated `{{` or a
    /// placeholder name other than `name`, `color`, `delay`, or `speed`.
    pub fn compile(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0usize;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                return Err(Error::UnterminatedPlaceholder {
                    offset: consumed + open,
                });
            };
            let name = after_open[..close].trim();
            let placeholder = Placeholder::parse(name)
                .ok_or_else(|| Error::UnknownPlaceholder(name.to_string()))?;
            segments.push(Segment::Placeholder(placeholder));

            let step = open + 2 + close + 2;
            consumed += step;
            rest = &rest[step..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Render the template with the given values.
    #[must_use]
    pub fn render(&self, values: &TemplateValues<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(Placeholder::Name) => {
                    out.push_str(&escape_html(values.name));
                }
                Segment::Placeholder(Placeholder::Color) => out.push_str(values.color),
                Segment::Placeholder(Placeholder::Delay) => {
                    out.push_str(&values.delay_ms.to_string());
                }
                Segment::Placeholder(Placeholder::Speed) => {
                    out.push_str(&values.speed_ms.to_string());
                }
            }
        }
        out
    }
}

/// Escape text for safe embedding in markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
