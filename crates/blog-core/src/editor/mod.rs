//! Rich-text editor model.
//!
//! The article body is a [`Document`] of paragraph and image blocks. Toolbar
//! commands map to explicit mutations on it, and every mutation records an
//! undo snapshot. HTML is only the storage format sent to the API.

mod command;
mod html;
mod model;

use std::collections::VecDeque;

pub use command::Command;
pub use html::{from_html, to_html};
pub use model::{Align, Block, Document, Span, Style};

use model::{normalize, split_lines, split_spans, style_at};

pub const HISTORY_LIMIT: usize = 100;

/// Selected char range inside one block. `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub block: usize,
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(block: usize, at: usize) -> Self {
        Self {
            block,
            start: at,
            end: at,
        }
    }

    pub fn range(block: usize, start: usize, end: usize) -> Self {
        Self {
            block,
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    document: Document,
    selection: Selection,
    active: Option<Command>,
    undo: VecDeque<Document>,
    redo: Vec<Document>,
}

impl Editor {
    pub fn new(document: Document) -> Self {
        Self {
            document: Document::new(document.into_blocks()),
            ..Self::default()
        }
    }

    pub fn from_html(html: &str) -> Self {
        Self::new(from_html(html))
    }

    pub fn to_html(&self) -> String {
        to_html(&self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Last command applied, for toolbar highlighting
    pub fn active(&self) -> Option<&Command> {
        self.active.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.document.word_count()
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
        self.clamp_selection();
    }

    /// Apply a toolbar command. Returns whether the document changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match &command {
            Command::Undo => self.undo_step(),
            Command::Redo => self.redo_step(),
            Command::Bold => self.toggle(|s| s.bold, |s, v| s.bold = v),
            Command::Italic => self.toggle(|s| s.italic, |s, v| s.italic = v),
            Command::InsertImage(url) => self.insert_image(url),
            Command::Justify(align) => self.justify(*align),
        };
        if changed {
            log::debug!("editor command={}", command.name());
            if command.is_edit() {
                self.active = Some(command);
            }
        }
        changed
    }

    /// Replace the text of a paragraph with what a plain text field now shows.
    ///
    /// The unchanged prefix and suffix keep their styles; inserted text takes
    /// the style of the character before it. Newlines split the paragraph.
    pub fn set_block_text(&mut self, index: usize, text: &str) -> bool {
        let Some(Block::Paragraph { spans, align }) = self.document.block(index).cloned() else {
            return false;
        };
        let old: Vec<char> = spans.iter().flat_map(|s| s.text.chars()).collect();
        let new: Vec<char> = text.chars().collect();
        if old == new {
            return false;
        }

        let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        let inserted: String = new[prefix..new.len() - suffix].iter().collect();
        let style = style_at(&spans, prefix);
        let (mut merged, _) = split_spans(&spans, prefix);
        let (_, tail) = split_spans(&spans, old.len() - suffix);
        merged.push(Span::new(inserted.clone(), style));
        merged.extend(tail);

        self.checkpoint();
        let lines = split_lines(normalize(merged));
        let line_count = lines.len();
        let replacement = lines
            .into_iter()
            .map(|spans| Block::Paragraph { spans, align });
        self.document
            .blocks_mut()
            .splice(index..=index, replacement);

        self.selection = if line_count > 1 {
            let after_break = inserted.rsplit('\n').next().map_or(0, |s| s.chars().count());
            Selection::caret(index + line_count - 1, after_break)
        } else {
            Selection::caret(index, prefix + inserted.chars().count())
        };
        true
    }

    /// Insert an empty paragraph after `index` and put the caret in it.
    pub fn insert_paragraph_after(&mut self, index: usize) {
        self.checkpoint();
        let at = (index + 1).min(self.document.len());
        self.document.blocks_mut().insert(at, Block::empty());
        self.selection = Selection::caret(at, 0);
    }

    pub fn remove_block(&mut self, index: usize) -> bool {
        if index >= self.document.len() {
            return false;
        }
        self.checkpoint();
        let blocks = self.document.blocks_mut();
        blocks.remove(index);
        if blocks.is_empty() {
            blocks.push(Block::empty());
        }
        self.clamp_selection();
        true
    }

    fn toggle(&mut self, get: fn(&Style) -> bool, set: fn(&mut Style, bool)) -> bool {
        let selection = self.selection;
        let Some(Block::Paragraph { spans, align }) = self.document.block(selection.block).cloned()
        else {
            return false;
        };
        let len: usize = spans.iter().map(|s| s.text.chars().count()).sum();
        // A caret formats the whole block.
        let (start, end) = if selection.is_collapsed() {
            (0, len)
        } else {
            (selection.start.min(len), selection.end.min(len))
        };
        if start == end {
            return false;
        }

        let (head, rest) = split_spans(&spans, start);
        let (mut middle, tail) = split_spans(&rest, end - start);
        let value = !middle.iter().all(|s| get(&s.style));
        for span in &mut middle {
            set(&mut span.style, value);
        }

        self.checkpoint();
        let spans = normalize(head.into_iter().chain(middle).chain(tail).collect());
        self.document.blocks_mut()[selection.block] = Block::Paragraph { spans, align };
        true
    }

    fn insert_image(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.checkpoint();
        let index = self.selection.block.min(self.document.len().saturating_sub(1));
        let blocks = self.document.blocks_mut();
        let replace_empty = matches!(&blocks[index], Block::Paragraph { spans, .. } if spans.is_empty());
        let at = if replace_empty {
            blocks[index] = Block::image(url);
            index
        } else {
            blocks.insert(index + 1, Block::image(url));
            index + 1
        };
        if at + 1 == blocks.len() {
            blocks.push(Block::empty());
        }
        self.selection = Selection::caret(at + 1, 0);
        true
    }

    fn justify(&mut self, align: Align) -> bool {
        let index = self.selection.block;
        match self.document.block(index) {
            Some(block) if block.align() != align => {}
            _ => return false,
        }
        self.checkpoint();
        if let Some(block) = self.document.blocks_mut().get_mut(index) {
            block.set_align(align);
        }
        true
    }

    fn undo_step(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.document, previous);
        self.redo.push(current);
        self.clamp_selection();
        true
    }

    fn redo_step(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.document, next);
        self.push_undo(current);
        self.clamp_selection();
        true
    }

    fn checkpoint(&mut self) {
        let snapshot = self.document.clone();
        self.push_undo(snapshot);
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Document) {
        if self.undo.len() == HISTORY_LIMIT {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    fn clamp_selection(&mut self) {
        let last = self.document.len().saturating_sub(1);
        let block = self.selection.block.min(last);
        let len = self.document.block(block).map_or(0, Block::char_len);
        self.selection = Selection::range(
            block,
            self.selection.start.min(len),
            self.selection.end.min(len),
        );
    }
}
