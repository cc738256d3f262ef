//! Rich text components (names, lore, book pages).

use uuid::Uuid;

use super::identifier::Identifier;

/// A text component tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    /// What this node displays.
    pub content: TextContent,
    /// Formatting applied to this node and inherited by children.
    pub style: Style,
    /// Child components appended after this one.
    pub extra: Vec<TextComponent>,
}

/// The content of a single text node.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    /// Literal text.
    Text(String),
    /// A translation key with an optional fallback.
    Translatable {
        /// Translation key.
        key: String,
        /// Text shown when the key is missing on the client.
        fallback: Option<String>,
    },
    /// A key binding name.
    Keybind(String),
    /// A scoreboard value.
    Score {
        /// Score holder.
        name: String,
        /// Objective name.
        objective: String,
    },
    /// An entity selector.
    Selector {
        /// Selector pattern.
        pattern: String,
        /// Separator between matched names.
        separator: Option<Box<TextComponent>>,
    },
    /// An NBT path lookup.
    Nbt {
        /// NBT path.
        path: String,
        /// Whether the resolved value is parsed as a component.
        interpret: bool,
        /// Separator between resolved values.
        separator: Option<Box<TextComponent>>,
    },
}

/// Formatting of a text node. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Text color.
    pub color: Option<TextColor>,
    /// Bold decoration state.
    pub bold: Option<bool>,
    /// Italic decoration state.
    pub italic: Option<bool>,
    /// Underlined decoration state.
    pub underlined: Option<bool>,
    /// Strikethrough decoration state.
    pub strikethrough: Option<bool>,
    /// Obfuscated decoration state.
    pub obfuscated: Option<bool>,
    /// Action on click.
    pub click_event: Option<ClickEvent>,
    /// Tooltip on hover.
    pub hover_event: Option<Box<HoverEvent>>,
    /// Text inserted into chat on shift-click.
    pub insertion: Option<String>,
    /// Font resource.
    pub font: Option<Identifier>,
}

impl Style {
    /// Whether no formatting is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// The sixteen named chat colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// Serialized color name.
    pub const fn as_str(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }
}

/// A text color: named, or a 24-bit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// One of the named colors.
    Named(NamedColor),
    /// `0xRRGGBB`.
    Rgb(u32),
}

impl TextColor {
    /// Serialized form: the color name, or `#rrggbb`.
    pub fn serialized(&self) -> String {
        match self {
            TextColor::Named(named) => named.as_str().to_string(),
            TextColor::Rgb(rgb) => format!("#{:06x}", rgb & 0x00FF_FFFF),
        }
    }
}

/// A click action and its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ClickEvent {
    OpenUrl(String),
    OpenFile(String),
    RunCommand(String),
    SuggestCommand(String),
    ChangePage(String),
    CopyToClipboard(String),
}

impl ClickEvent {
    /// Serialized action name.
    pub const fn action(&self) -> &'static str {
        match self {
            ClickEvent::OpenUrl(_) => "open_url",
            ClickEvent::OpenFile(_) => "open_file",
            ClickEvent::RunCommand(_) => "run_command",
            ClickEvent::SuggestCommand(_) => "suggest_command",
            ClickEvent::ChangePage(_) => "change_page",
            ClickEvent::CopyToClipboard(_) => "copy_to_clipboard",
        }
    }
}

/// A hover tooltip.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    /// Show a text component.
    ShowText(TextComponent),
    /// Show an item tooltip.
    ShowItem {
        /// Item key.
        id: Identifier,
        /// Stack size.
        count: i32,
    },
    /// Show an entity tooltip.
    ShowEntity {
        /// Entity type key.
        entity_type: Identifier,
        /// Entity UUID.
        uuid: Uuid,
        /// Custom name.
        name: Option<TextComponent>,
    },
}

impl HoverEvent {
    /// Serialized action name.
    pub const fn action(&self) -> &'static str {
        match self {
            HoverEvent::ShowText(_) => "show_text",
            HoverEvent::ShowItem { .. } => "show_item",
            HoverEvent::ShowEntity { .. } => "show_entity",
        }
    }
}

impl TextComponent {
    fn with_content(content: TextContent) -> Self {
        Self {
            content,
            style: Style::default(),
            extra: Vec::new(),
        }
    }

    /// A literal text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(TextContent::Text(text.into()))
    }

    /// A translatable node.
    pub fn translatable(key: impl Into<String>) -> Self {
        Self::with_content(TextContent::Translatable {
            key: key.into(),
            fallback: None,
        })
    }

    /// A translatable node with a fallback.
    pub fn translatable_with_fallback(key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::with_content(TextContent::Translatable {
            key: key.into(),
            fallback: Some(fallback.into()),
        })
    }

    /// A keybind node.
    pub fn keybind(key: impl Into<String>) -> Self {
        Self::with_content(TextContent::Keybind(key.into()))
    }

    /// Replace the style.
    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the color.
    pub fn color(mut self, color: TextColor) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Set the bold state.
    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = Some(bold);
        self
    }

    /// Set the italic state.
    pub fn italic(mut self, italic: bool) -> Self {
        self.style.italic = Some(italic);
        self
    }

    /// Append a child.
    pub fn append(mut self, child: TextComponent) -> Self {
        self.extra.push(child);
        self
    }

    /// Whether this node hashes as a bare string.
    pub fn is_plain_text(&self) -> bool {
        matches!(self.content, TextContent::Text(_)) && self.style.is_empty() && self.extra.is_empty()
    }
}
