//! Case-insensitive keyword table.
//!
//! Maps reserved identifier text to structural [`TokenKind`]s. Lookup is on
//! the lower-cased lexeme; callers keep the original casing in the token
//! text.

use crate::tokens::TokenKind;

/// Classify identifier text against the reserved-word table.
///
/// Returns `None` for anything that should stay a plain identifier. The
/// `@endum` entry is a long-standing alias tolerated for truncated end
/// markers.
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    let lowered = text.to_ascii_lowercase();
    let kind = match lowered.as_str() {
        "@startuml" => TokenKind::StartUml,
        "@enduml" | "@endum" => TokenKind::EndUml,
        "title" => TokenKind::Title,
        "component" => TokenKind::Component,
        "database" => TokenKind::Database,
        "queue" => TokenKind::Queue,
        "actor" => TokenKind::Actor,
        "interface" => TokenKind::Interface,
        "package" => TokenKind::Package,
        "frame" => TokenKind::Frame,
        "node" => TokenKind::Node,
        "cloud" => TokenKind::Cloud,
        "folder" => TokenKind::Folder,
        "together" => TokenKind::Together,
        "rectangle" => TokenKind::Rectangle,
        "port" => TokenKind::Port,
        "portin" => TokenKind::PortIn,
        "portout" => TokenKind::PortOut,
        "note" => TokenKind::Note,
        "left" => TokenKind::Left,
        "right" => TokenKind::Right,
        "top" => TokenKind::Top,
        "bottom" => TokenKind::Bottom,
        "up" => TokenKind::Up,
        "down" => TokenKind::Down,
        "direction" => TokenKind::Direction,
        "to" => TokenKind::To,
        "of" => TokenKind::Of,
        "end" => TokenKind::End,
        "footer" => TokenKind::Footer,
        "skinparam" => TokenKind::SkinParam,
        "sprite" => TokenKind::Sprite,
        "as" => TokenKind::As,
        _ => return None,
    };
    Some(kind)
}
