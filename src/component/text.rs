//! Text component hashing.
//!
//! A literal text node with no style and no children hashes as a bare
//! string. Every other node hashes as a map of its content fields, its
//! style fields, and an `extra` list of children.

use crate::encoder::{HashCode, HashEncoder};
use crate::hasher::{self, HashError, Hasher};
use crate::map_hasher::{MapBuilder, MapHasher};
use crate::types::{ClickEvent, HoverEvent, Style, TextColor, TextComponent, TextContent};

static_hashers! {
    /// Any text component.
    pub fn text_component() -> TextComponent = Hasher::new(hash_component);

    /// A color name, or `#rrggbb`.
    pub fn text_color() -> TextColor = hasher::string().convert(TextColor::serialized);

    /// A click event, dispatched on `action`.
    pub fn click_event() -> ClickEvent = hasher::string().dispatch(
        "action",
        |event: &ClickEvent| event.action(),
        [
            ("open_url", click_field("url")),
            ("open_file", click_field("path")),
            ("run_command", click_field("command")),
            ("suggest_command", click_field("command")),
            ("change_page", click_field("page")),
            ("copy_to_clipboard", click_field("value")),
        ],
    );

    /// A hover event, dispatched on `action`.
    pub fn hover_event() -> HoverEvent = hasher::string().dispatch(
        "action",
        |event: &HoverEvent| event.action(),
        [
            ("show_text", MapBuilder::new(|b, event: &HoverEvent| {
                if let HoverEvent::ShowText(text) = event {
                    b.accept("value", text_component(), text);
                }
            })),
            // Item components are not part of the hover payload.
            ("show_item", MapBuilder::new(|b, event: &HoverEvent| {
                if let HoverEvent::ShowItem { id, count } = event {
                    b.accept("id", hasher::key(), id)
                        .accept("count", hasher::int(), count);
                }
            })),
            ("show_entity", MapBuilder::new(|b, event: &HoverEvent| {
                if let HoverEvent::ShowEntity { entity_type, uuid, name } = event {
                    b.accept("id", hasher::key(), entity_type)
                        .accept("uuid", hasher::uuid(), uuid)
                        .optional_nullable("name", text_component(), name.as_ref());
                }
            })),
        ],
    );
}

/// Every click action carries one string under `field`.
fn click_field(field: &'static str) -> MapBuilder<ClickEvent> {
    MapBuilder::new(move |b, event: &ClickEvent| {
        let (ClickEvent::OpenUrl(value)
        | ClickEvent::OpenFile(value)
        | ClickEvent::RunCommand(value)
        | ClickEvent::SuggestCommand(value)
        | ClickEvent::ChangePage(value)
        | ClickEvent::CopyToClipboard(value)) = event;
        b.accept(field, hasher::string(), value);
    })
}

fn write_style(map: &mut MapHasher<'_>, style: &Style) {
    let bool = hasher::bool();
    map.optional_nullable("color", text_color(), style.color.as_ref())
        .optional_nullable("bold", bool, style.bold.as_ref())
        .optional_nullable("italic", bool, style.italic.as_ref())
        .optional_nullable("underlined", bool, style.underlined.as_ref())
        .optional_nullable("strikethrough", bool, style.strikethrough.as_ref())
        .optional_nullable("obfuscated", bool, style.obfuscated.as_ref())
        .optional_nullable("click_event", click_event(), style.click_event.as_ref())
        .optional_nullable("hover_event", hover_event(), style.hover_event.as_deref())
        .optional_nullable("insertion", hasher::string(), style.insertion.as_deref())
        .optional_nullable("font", hasher::key(), style.font.as_ref());
}

fn hash_component(component: &TextComponent, encoder: &HashEncoder<'_>) -> Result<HashCode, HashError> {
    if let TextContent::Text(text) = &component.content {
        if component.style.is_empty() && component.extra.is_empty() {
            return Ok(encoder.string(text));
        }
    }

    let string = hasher::string();
    let mut map = MapHasher::new(encoder);
    match &component.content {
        TextContent::Text(text) => map.accept("text", string, text),
        TextContent::Translatable { key, fallback } => map
            .accept("translate", string, key)
            .optional_nullable("fallback", string, fallback.as_deref()),
        TextContent::Keybind(keybind) => map.accept("keybind", string, keybind),
        TextContent::Score { name, objective } => map
            .accept("name", string, name)
            .accept("objective", string, objective),
        TextContent::Selector { pattern, separator } => map
            .accept("selector", string, pattern)
            .optional_nullable("separator", text_component(), separator.as_deref()),
        TextContent::Nbt { path, interpret, separator } => map
            .accept("nbt", string, path)
            .optional("interpret", hasher::bool(), interpret, &false)
            .optional_nullable("separator", text_component(), separator.as_deref()),
    };
    write_style(&mut map, &component.style);
    map.optional_list("extra", text_component(), &component.extra);
    map.build()
}
