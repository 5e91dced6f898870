//! HTML storage format for [`Document`].
//!
//! Export writes `<p>` blocks with `<b>`/`<i>` runs. Import is tolerant:
//! it accepts what browsers and other editors produce for article bodies
//! and ignores anything it does not understand.

use super::model::{normalize, Align, Block, Document, Span, Style};

pub fn to_html(document: &Document) -> String {
    let mut out = String::new();
    for block in document.blocks() {
        let open = match block.align() {
            Align::Left => "<p>".to_string(),
            align => format!(r#"<p style="text-align: {}">"#, align.css()),
        };
        out.push_str(&open);
        match block {
            Block::Image { url, .. } => {
                out.push_str(&format!(r#"<img src="{}">"#, escape(url)));
            }
            Block::Paragraph { spans, .. } if spans.is_empty() => out.push_str("<br>"),
            Block::Paragraph { spans, .. } => {
                for span in spans {
                    let text = escape(&span.text);
                    match (span.style.bold, span.style.italic) {
                        (true, true) => out.push_str(&format!("<b><i>{}</i></b>", text)),
                        (true, false) => out.push_str(&format!("<b>{}</b>", text)),
                        (false, true) => out.push_str(&format!("<i>{}</i>", text)),
                        (false, false) => out.push_str(&text),
                    }
                }
            }
        }
        out.push_str("</p>");
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest.find(';').filter(|end| *end <= 10).and_then(|end| {
            let c = match &rest[1..end] {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                name => numeric_entity(name),
            }?;
            Some((c, end))
        });
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn numeric_entity(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

#[derive(Debug)]
struct Tag<'a> {
    name: String,
    closing: bool,
    attrs: &'a str,
}

impl<'a> Tag<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim().trim_end_matches('/').trim_end();
        let (closing, raw) = match raw.strip_prefix('/') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, raw),
        };
        let end = raw
            .find(|c: char| c.is_whitespace())
            .unwrap_or(raw.len());
        let name = raw[..end].to_ascii_lowercase();
        if name.is_empty() || name.starts_with('!') || name.starts_with('?') {
            return None;
        }
        Some(Tag {
            name,
            closing,
            attrs: &raw[end..],
        })
    }

    fn attr(&self, key: &str) -> Option<String> {
        let mut rest = self.attrs;
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return None;
            }
            let name_end = rest
                .find(|c: char| c == '=' || c.is_whitespace())
                .unwrap_or(rest.len());
            let name = &rest[..name_end];
            rest = rest[name_end..].trim_start();
            let value = if let Some(after_eq) = rest.strip_prefix('=') {
                let after_eq = after_eq.trim_start();
                let (value, remaining) = match after_eq.chars().next() {
                    Some(q @ ('"' | '\'')) => {
                        let body = &after_eq[1..];
                        let close = body.find(q).unwrap_or(body.len());
                        (&body[..close], body.get(close + 1..).unwrap_or(""))
                    }
                    _ => {
                        let close = after_eq
                            .find(char::is_whitespace)
                            .unwrap_or(after_eq.len());
                        (&after_eq[..close], &after_eq[close..])
                    }
                };
                rest = remaining;
                value
            } else {
                ""
            };
            if name.eq_ignore_ascii_case(key) {
                return Some(decode_entities(value));
            }
        }
    }

    fn text_align(&self) -> Option<Align> {
        let style = self.attr("style")?;
        style.split(';').find_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            if prop.trim().eq_ignore_ascii_case("text-align") {
                Align::from_css(value)
            } else {
                None
            }
        })
    }
}

fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "li" | "blockquote" | "pre"
    )
}

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

#[derive(Default)]
struct Importer {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    /// A block element was opened and nothing has been emitted for it yet
    started: bool,
    aligns: Vec<Align>,
    bold: usize,
    italic: usize,
}

impl Importer {
    fn align(&self) -> Align {
        self.aligns.last().copied().unwrap_or_default()
    }

    fn style(&self) -> Style {
        Style {
            bold: self.bold > 0,
            italic: self.italic > 0,
        }
    }

    fn flush(&mut self, keep_empty: bool) {
        if !self.spans.is_empty() || keep_empty {
            let spans = normalize(std::mem::take(&mut self.spans));
            self.blocks.push(Block::Paragraph {
                spans,
                align: self.align(),
            });
        }
        self.started = false;
    }

    fn text(&mut self, raw: &str) {
        let mut collapsed = String::with_capacity(raw.len());
        let mut in_space = false;
        for c in raw.chars() {
            if c.is_whitespace() {
                if !in_space {
                    collapsed.push(' ');
                }
                in_space = true;
            } else {
                collapsed.push(c);
                in_space = false;
            }
        }
        let mut text = decode_entities(&collapsed);
        if self.spans.is_empty() {
            text = text.trim_start().to_string();
        }
        if !text.is_empty() {
            let style = self.style();
            self.spans.push(Span::new(text, style));
        }
    }

    fn tag(&mut self, tag: Tag<'_>) {
        let name = tag.name.as_str();
        match (name, tag.closing) {
            (n, false) if is_block_tag(n) => {
                self.flush(false);
                let align = tag.text_align().unwrap_or_else(|| self.align());
                self.aligns.push(align);
                self.started = true;
                if is_heading(n) {
                    self.bold += 1;
                }
            }
            (n, true) if is_block_tag(n) => {
                let started = self.started;
                self.flush(started);
                self.aligns.pop();
                if is_heading(n) {
                    self.bold = self.bold.saturating_sub(1);
                }
            }
            ("br", _) => self.flush(true),
            ("b" | "strong", false) => self.bold += 1,
            ("b" | "strong", true) => self.bold = self.bold.saturating_sub(1),
            ("i" | "em", false) => self.italic += 1,
            ("i" | "em", true) => self.italic = self.italic.saturating_sub(1),
            ("img", false) => {
                if let Some(src) = tag.attr("src").filter(|s| !s.trim().is_empty()) {
                    self.flush(false);
                    let align = tag.text_align().unwrap_or_else(|| self.align());
                    self.blocks.push(Block::Image { url: src, align });
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Document {
        self.flush(false);
        // Trailing whitespace inside a paragraph is not content.
        for block in &mut self.blocks {
            if let Block::Paragraph { spans, .. } = block {
                if let Some(last) = spans.last_mut() {
                    let trimmed = last.text.trim_end().len();
                    last.text.truncate(trimmed);
                }
                *spans = normalize(std::mem::take(spans));
            }
        }
        Document::new(self.blocks)
    }
}

/// Parse stored article HTML into a document.
pub fn from_html(html: &str) -> Document {
    let mut importer = Importer::default();
    let mut rest = html;
    let mut skip_until: Option<&'static str> = None;

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            if skip_until.is_none() {
                importer.text(rest);
            }
            break;
        };
        if lt > 0 && skip_until.is_none() {
            importer.text(&rest[..lt]);
        }
        rest = &rest[lt..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(rest.len(), |i| i + 3);
            rest = &rest[end..];
            continue;
        }

        let Some(gt) = rest.find('>') else {
            if skip_until.is_none() {
                importer.text(rest);
            }
            break;
        };
        let raw = &rest[1..gt];
        rest = &rest[gt + 1..];

        let Some(tag) = Tag::parse(raw) else { continue };
        if let Some(until) = skip_until {
            if tag.closing && tag.name == until {
                skip_until = None;
            }
            continue;
        }
        match tag.name.as_str() {
            "script" if !tag.closing => skip_until = Some("script"),
            "style" if !tag.closing => skip_until = Some("style"),
            _ => importer.tag(tag),
        }
    }

    importer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(bold: bool, italic: bool) -> Style {
        Style { bold, italic }
    }

    #[test]
    fn test_export() {
        let doc = Document::new(vec![
            Block::Paragraph {
                spans: vec![Span::plain("a < b "), Span::new("bold", styled(true, false))],
                align: Align::Center,
            },
            Block::empty(),
            Block::image("https://cdn/x.png?a=1&b=2"),
        ]);
        assert_eq!(
            to_html(&doc),
            concat!(
                r#"<p style="text-align: center">a &lt; b <b>bold</b></p>"#,
                "<p><br></p>",
                r#"<p><img src="https://cdn/x.png?a=1&amp;b=2"></p>"#,
            )
        );
    }

    #[test]
    fn test_export_import_preserves_document() {
        let doc = Document::new(vec![
            Block::Paragraph {
                spans: vec![
                    Span::plain("Tom & Jerry "),
                    Span::new("both", styled(true, true)),
                    Span::new(" italic", styled(false, true)),
                ],
                align: Align::Right,
            },
            Block::empty(),
            Block::Image {
                url: "a.png".into(),
                align: Align::Center,
            },
            Block::paragraph("end"),
        ]);
        assert_eq!(from_html(&to_html(&doc)), doc);
    }

    #[test]
    fn test_import_foreign_markup() {
        let doc = from_html(concat!(
            "<h2>Title</h2>\n",
            "<div style=\"color: red; text-align:center\">one<br>two</div>\n",
            "<p><strong>x</strong><em>y</em><span>z</span>&nbsp;&#65;&#x42;</p>",
            "<!-- note --><script>alert(1)</script>",
            "<img src='pic.jpg' alt=\"\"/>",
        ));
        let blocks = doc.blocks();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0].spans(), &[Span::new("Title", styled(true, false))]);
        assert_eq!(blocks[1].text(), "one");
        assert_eq!(blocks[1].align(), Align::Center);
        assert_eq!(blocks[2].text(), "two");
        assert_eq!(blocks[2].align(), Align::Center);
        assert_eq!(
            blocks[3].spans(),
            &[
                Span::new("x", styled(true, false)),
                Span::new("y", styled(false, true)),
                Span::plain("z AB"),
            ]
        );
        assert_eq!(blocks[4], Block::image("pic.jpg"));
    }

    #[test]
    fn test_import_plain_text_and_garbage() {
        assert_eq!(from_html("just text").plain_text(), "just text");
        assert_eq!(from_html("").blocks(), &[Block::empty()]);
        assert_eq!(from_html("a &bogus; b < c").plain_text(), "a &bogus; b < c");
    }
}
