use super::model::Align;

/// Toolbar commands understood by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    Bold,
    Italic,
    InsertImage(String),
    Justify(Align),
}

impl Command {
    /// Map a toolbar command name. `insertImage` needs its url, so it only
    /// parses through here when one is supplied.
    pub fn from_name(name: &str, value: Option<&str>) -> Option<Self> {
        let command = match name {
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "bold" => Command::Bold,
            "italic" => Command::Italic,
            "insertImage" => Command::InsertImage(value?.to_string()),
            "justifyLeft" => Command::Justify(Align::Left),
            "justifyCenter" => Command::Justify(Align::Center),
            "justifyRight" => Command::Justify(Align::Right),
            _ => return None,
        };
        Some(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Bold => "bold",
            Command::Italic => "italic",
            Command::InsertImage(_) => "insertImage",
            Command::Justify(Align::Left) => "justifyLeft",
            Command::Justify(Align::Center) => "justifyCenter",
            Command::Justify(Align::Right) => "justifyRight",
        }
    }

    /// Whether applying this command records an undo step
    pub fn is_edit(&self) -> bool {
        !matches!(self, Command::Undo | Command::Redo)
    }
}
