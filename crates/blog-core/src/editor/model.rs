use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        bold: false,
        italic: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "start" | "justify" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" | "end" => Some(Align::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph {
        spans: Vec<Span>,
        #[serde(default)]
        align: Align,
    },
    Image {
        url: String,
        #[serde(default)]
        align: Align,
    },
}

impl Block {
    pub fn empty() -> Self {
        Block::Paragraph {
            spans: Vec::new(),
            align: Align::Left,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            spans: normalize(vec![Span::plain(text)]),
            align: Align::Left,
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Block::Image {
            url: url.into(),
            align: Align::Left,
        }
    }

    /// Text of a paragraph; images have none.
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            Block::Image { .. } => String::new(),
        }
    }

    pub fn char_len(&self) -> usize {
        match self {
            Block::Paragraph { spans, .. } => spans.iter().map(Span::char_len).sum(),
            Block::Image { .. } => 0,
        }
    }

    pub fn align(&self) -> Align {
        match self {
            Block::Paragraph { align, .. } | Block::Image { align, .. } => *align,
        }
    }

    pub fn set_align(&mut self, value: Align) {
        match self {
            Block::Paragraph { align, .. } | Block::Image { align, .. } => *align = value,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image { .. })
    }

    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Paragraph { spans, .. } => spans,
            Block::Image { .. } => &[],
        }
    }
}

/// Drop empty spans and merge neighbours that share a style.
pub(crate) fn normalize(spans: Vec<Span>) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.style == span.style => last.text.push_str(&span.text),
            _ => out.push(span),
        }
    }
    out
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(text.len())
}

/// Split spans at a char offset.
pub(crate) fn split_spans(spans: &[Span], at: usize) -> (Vec<Span>, Vec<Span>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut seen = 0;
    for span in spans {
        let len = span.char_len();
        if seen + len <= at {
            left.push(span.clone());
        } else if seen >= at {
            right.push(span.clone());
        } else {
            let cut = byte_offset(&span.text, at - seen);
            left.push(Span::new(&span.text[..cut], span.style));
            right.push(Span::new(&span.text[cut..], span.style));
        }
        seen += len;
    }
    (left, right)
}

/// Style a character inserted at `at` inherits: the one before it, else the one after.
pub(crate) fn style_at(spans: &[Span], at: usize) -> Style {
    let mut seen = 0;
    let mut previous = None;
    for span in spans {
        let len = span.char_len();
        if at > seen && at <= seen + len {
            return span.style;
        }
        if at == 0 && len > 0 {
            return span.style;
        }
        seen += len;
        previous = Some(span.style);
    }
    previous.unwrap_or_default()
}

/// Break spans at every `\n`, one line per entry. Always returns at least one line.
pub(crate) fn split_lines(spans: Vec<Span>) -> Vec<Vec<Span>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        let mut parts = span.text.split('\n');
        if let Some(first) = parts.next() {
            if let Some(line) = lines.last_mut() {
                line.push(Span::new(first, span.style));
            }
        }
        for part in parts {
            lines.push(vec![Span::new(part, span.style)]);
        }
    }
    lines.into_iter().map(normalize).collect()
}

/// A rich-text article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    blocks: Vec<Block>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    blocks: Vec<Block>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::new(raw.blocks)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self {
            blocks: vec![Block::empty()],
        }
    }
}

impl Document {
    /// A document always holds at least one block.
    pub fn new(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            Self::default()
        } else {
            Self { blocks }
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub(crate) fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| !b.is_image() && b.text().trim().is_empty())
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| !b.is_image())
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn word_count(&self) -> usize {
        crate::text::word_count(&self.plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLD: Style = Style {
        bold: true,
        italic: false,
    };

    #[test]
    fn test_normalize_merges_and_drops() {
        let spans = normalize(vec![
            Span::plain("a"),
            Span::plain(""),
            Span::plain("b"),
            Span::new("c", BOLD),
        ]);
        assert_eq!(spans, vec![Span::plain("ab"), Span::new("c", BOLD)]);
    }

    #[test]
    fn test_split_spans_inside_multibyte() {
        let spans = vec![Span::plain("héllo"), Span::new("!", BOLD)];
        let (left, right) = split_spans(&spans, 2);
        assert_eq!(left, vec![Span::plain("hé")]);
        assert_eq!(right, vec![Span::plain("llo"), Span::new("!", BOLD)]);
    }

    #[test]
    fn test_style_at_prefers_previous_char() {
        let spans = vec![Span::new("ab", BOLD), Span::plain("cd")];
        assert_eq!(style_at(&spans, 0), BOLD);
        assert_eq!(style_at(&spans, 2), BOLD);
        assert_eq!(style_at(&spans, 3), Style::PLAIN);
        assert_eq!(style_at(&spans, 4), Style::PLAIN);
        assert_eq!(style_at(&[], 0), Style::PLAIN);
    }

    #[test]
    fn test_split_lines() {
        let lines = split_lines(vec![Span::plain("a\nb"), Span::new("c\n", BOLD)]);
        assert_eq!(
            lines,
            vec![
                vec![Span::plain("a")],
                vec![Span::plain("b"), Span::new("c", BOLD)],
                vec![],
            ]
        );
    }

    #[test]
    fn test_document_text() {
        let doc = Document::new(vec![
            Block::paragraph("Hello world"),
            Block::image("a.png"),
            Block::paragraph("again"),
        ]);
        assert_eq!(doc.plain_text(), "Hello world\nagain");
        assert_eq!(doc.word_count(), 3);
        assert!(!doc.is_empty());
        assert!(Document::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_deserialized_document_keeps_one_block() {
        let doc: Document = serde_json::from_str(r#"{"blocks":[]}"#).unwrap();
        assert_eq!(doc.len(), 1);
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(Document::new(Vec::new()).len(), 1);
    }
}
