//! Decoration, text, and interaction resolvers.
//!
//! These are patch producers: each takes the current values of its
//! prop group and returns `(property, value)` pairs. Absent intents
//! produce no patch at all; present intents always produce the full
//! current state (bold off writes a normal weight rather than writing
//! nothing), so toggling a flag reverts cleanly.

use crate::resolve::unit::Metrics;
use crate::style::SizeValue;
use crate::types::{Align, StyleProp, TextAttr};

/// The one shadow the engine knows how to draw.
const SHADOW: &str = "0 2px 8px rgba(0, 0, 0, 0.25)";

// =============================================================================
// Decoration
// =============================================================================

/// Current values of the decoration props.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecorQuery {
    pub round: Option<SizeValue>,
    pub shadow: Option<bool>,
    pub bg: Option<String>,
    pub bg_image: Option<String>,
}

/// Resolve decoration to style patches.
pub fn resolve_decor(query: &DecorQuery, metrics: &Metrics) -> Vec<(StyleProp, String)> {
    let mut patches = Vec::new();
    if let Some(round) = &query.round {
        patches.push((StyleProp::BorderRadius, metrics.length(round)));
    }
    if let Some(shadow) = query.shadow {
        let value = if shadow { SHADOW } else { "none" };
        patches.push((StyleProp::BoxShadow, value.to_string()));
    }
    if let Some(bg) = &query.bg {
        patches.push((StyleProp::Background, bg.clone()));
    }
    if let Some(image) = &query.bg_image {
        patches.push((StyleProp::BackgroundImage, image_value(image)));
        patches.push((StyleProp::BackgroundSize, "cover".to_string()));
        patches.push((StyleProp::BackgroundPosition, "center".to_string()));
    }
    patches
}

/// Bare URLs get wrapped in `url(...)`; anything already functional
/// (gradients, pre-wrapped urls) passes through.
fn image_value(image: &str) -> String {
    if image.contains('(') {
        image.to_string()
    } else {
        format!("url({image})")
    }
}

// =============================================================================
// Text
// =============================================================================

/// Current values of the text props.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextQuery {
    pub size: Option<SizeValue>,
    pub color: Option<String>,
    pub font: Option<String>,
    pub attrs: Option<TextAttr>,
    /// Explicit text alignment, if declared.
    pub align: Option<Align>,
    /// The container's resolved horizontal alignment. A centered
    /// container centers its text unless told otherwise.
    pub container_align_x: Align,
}

/// Resolve text styling to style patches.
pub fn resolve_text(query: &TextQuery, metrics: &Metrics) -> Vec<(StyleProp, String)> {
    let mut patches = Vec::new();
    if let Some(size) = &query.size {
        patches.push((StyleProp::FontSize, metrics.length(size)));
    }
    if let Some(color) = &query.color {
        patches.push((StyleProp::Color, color.clone()));
    }
    if let Some(font) = &query.font {
        patches.push((StyleProp::FontFamily, font.clone()));
    }
    if let Some(attrs) = query.attrs {
        let weight = if attrs.contains(TextAttr::BOLD) { "700" } else { "400" };
        patches.push((StyleProp::FontWeight, weight.to_string()));

        let style = if attrs.contains(TextAttr::ITALIC) { "italic" } else { "normal" };
        patches.push((StyleProp::FontStyle, style.to_string()));

        patches.push((StyleProp::TextDecoration, decoration_value(attrs)));
    }
    match query.align {
        Some(align) => patches.push((StyleProp::TextAlign, text_align_css(align).to_string())),
        None => {
            if query.container_align_x == Align::Center {
                patches.push((StyleProp::TextAlign, "center".to_string()));
            }
        }
    }
    patches
}

fn decoration_value(attrs: TextAttr) -> String {
    let underline = attrs.contains(TextAttr::UNDERLINE);
    let strike = attrs.contains(TextAttr::STRIKETHROUGH);
    match (underline, strike) {
        (true, true) => "underline line-through".to_string(),
        (true, false) => "underline".to_string(),
        (false, true) => "line-through".to_string(),
        (false, false) => "none".to_string(),
    }
}

/// Text alignment keywords differ from the flex ones; the space-*
/// distributions all read as justified text.
fn text_align_css(align: Align) -> &'static str {
    match align {
        Align::Start => "left",
        Align::Center => "center",
        Align::End => "right",
        Align::SpaceBetween | Align::SpaceAround | Align::SpaceEvenly => "justify",
    }
}

// =============================================================================
// Interaction
// =============================================================================

/// Current values of the interaction props.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionQuery {
    pub clickable: Option<bool>,
    pub disabled: Option<bool>,
    pub selectable: Option<bool>,
}

/// Resolve interaction affordances to style patches.
///
/// Order matters: disabled comes last so it overrides the clickable
/// cursor while disabled, and releases it when re-enabled.
pub fn resolve_interaction(query: &InteractionQuery) -> Vec<(StyleProp, String)> {
    let mut patches = Vec::new();
    if let Some(clickable) = query.clickable {
        let cursor = if clickable { "pointer" } else { "default" };
        patches.push((StyleProp::Cursor, cursor.to_string()));
    }
    if let Some(selectable) = query.selectable {
        let select = if selectable { "text" } else { "none" };
        patches.push((StyleProp::UserSelect, select.to_string()));
    }
    if let Some(disabled) = query.disabled {
        if disabled {
            patches.push((StyleProp::PointerEvents, "none".to_string()));
            patches.push((StyleProp::Cursor, "default".to_string()));
        } else {
            patches.push((StyleProp::PointerEvents, "auto".to_string()));
            if query.clickable == Some(true) {
                patches.push((StyleProp::Cursor, "pointer".to_string()));
            }
        }
    }
    patches
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(patches: &[(StyleProp, String)], prop: StyleProp) -> Option<&str> {
        // Last write wins, like the style map it feeds
        patches
            .iter()
            .rev()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_decor_empty_writes_nothing() {
        let patches = resolve_decor(&DecorQuery::default(), &Metrics::default());
        assert!(patches.is_empty());
    }

    #[test]
    fn test_decor_round_converts_units() {
        let q = DecorQuery {
            round: Some(SizeValue::Units(0.5)),
            ..Default::default()
        };
        let patches = resolve_decor(&q, &Metrics::default());
        assert_eq!(value_of(&patches, StyleProp::BorderRadius), Some("9px"));
    }

    #[test]
    fn test_decor_shadow_toggles() {
        let on = resolve_decor(
            &DecorQuery { shadow: Some(true), ..Default::default() },
            &Metrics::default(),
        );
        assert_eq!(value_of(&on, StyleProp::BoxShadow), Some(SHADOW));

        let off = resolve_decor(
            &DecorQuery { shadow: Some(false), ..Default::default() },
            &Metrics::default(),
        );
        assert_eq!(value_of(&off, StyleProp::BoxShadow), Some("none"));
    }

    #[test]
    fn test_decor_bg_image_wrapping() {
        let bare = DecorQuery {
            bg_image: Some("hero.png".into()),
            ..Default::default()
        };
        let patches = resolve_decor(&bare, &Metrics::default());
        assert_eq!(
            value_of(&patches, StyleProp::BackgroundImage),
            Some("url(hero.png)")
        );
        assert_eq!(value_of(&patches, StyleProp::BackgroundSize), Some("cover"));

        let gradient = DecorQuery {
            bg_image: Some("linear-gradient(#000, #fff)".into()),
            ..Default::default()
        };
        let patches = resolve_decor(&gradient, &Metrics::default());
        assert_eq!(
            value_of(&patches, StyleProp::BackgroundImage),
            Some("linear-gradient(#000, #fff)")
        );
    }

    #[test]
    fn test_text_attrs_write_full_state() {
        let q = TextQuery {
            attrs: Some(TextAttr::BOLD),
            ..Default::default()
        };
        let patches = resolve_text(&q, &Metrics::default());
        assert_eq!(value_of(&patches, StyleProp::FontWeight), Some("700"));
        // Present intent pins the rest to normal so toggles revert
        assert_eq!(value_of(&patches, StyleProp::FontStyle), Some("normal"));
        assert_eq!(value_of(&patches, StyleProp::TextDecoration), Some("none"));
    }

    #[test]
    fn test_text_decoration_combines() {
        let q = TextQuery {
            attrs: Some(TextAttr::UNDERLINE | TextAttr::STRIKETHROUGH),
            ..Default::default()
        };
        let patches = resolve_text(&q, &Metrics::default());
        assert_eq!(
            value_of(&patches, StyleProp::TextDecoration),
            Some("underline line-through")
        );
    }

    #[test]
    fn test_text_size_converts() {
        let q = TextQuery {
            size: Some(SizeValue::Units(1.0)),
            ..Default::default()
        };
        let patches = resolve_text(&q, &Metrics::default());
        assert_eq!(value_of(&patches, StyleProp::FontSize), Some("18px"));
    }

    #[test]
    fn test_text_align_follows_centered_container() {
        let q = TextQuery {
            container_align_x: Align::Center,
            ..Default::default()
        };
        let patches = resolve_text(&q, &Metrics::default());
        assert_eq!(value_of(&patches, StyleProp::TextAlign), Some("center"));

        // Explicit alignment wins over the container
        let q = TextQuery {
            align: Some(Align::End),
            container_align_x: Align::Center,
            ..Default::default()
        };
        let patches = resolve_text(&q, &Metrics::default());
        assert_eq!(value_of(&patches, StyleProp::TextAlign), Some("right"));
    }

    #[test]
    fn test_text_align_absent_for_start_container() {
        let patches = resolve_text(&TextQuery::default(), &Metrics::default());
        assert_eq!(value_of(&patches, StyleProp::TextAlign), None);
    }

    #[test]
    fn test_interaction_clickable() {
        let q = InteractionQuery {
            clickable: Some(true),
            ..Default::default()
        };
        let patches = resolve_interaction(&q);
        assert_eq!(value_of(&patches, StyleProp::Cursor), Some("pointer"));
    }

    #[test]
    fn test_interaction_disabled_overrides_cursor() {
        let q = InteractionQuery {
            clickable: Some(true),
            disabled: Some(true),
            ..Default::default()
        };
        let patches = resolve_interaction(&q);
        assert_eq!(value_of(&patches, StyleProp::PointerEvents), Some("none"));
        assert_eq!(value_of(&patches, StyleProp::Cursor), Some("default"));
    }

    #[test]
    fn test_interaction_reenable_restores_cursor() {
        let q = InteractionQuery {
            clickable: Some(true),
            disabled: Some(false),
            ..Default::default()
        };
        let patches = resolve_interaction(&q);
        assert_eq!(value_of(&patches, StyleProp::PointerEvents), Some("auto"));
        assert_eq!(value_of(&patches, StyleProp::Cursor), Some("pointer"));
    }

    #[test]
    fn test_interaction_selectable() {
        let q = InteractionQuery {
            selectable: Some(false),
            ..Default::default()
        };
        let patches = resolve_interaction(&q);
        assert_eq!(value_of(&patches, StyleProp::UserSelect), Some("none"));
    }
}
