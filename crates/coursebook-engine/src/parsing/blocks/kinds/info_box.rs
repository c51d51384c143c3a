use crate::parsing::blocks::types::InfoKind;

/// Call-out box type with owned prefix constants.
///
/// An info box is a single blockquote line whose first token is a kind
/// glyph, e.g. `> ⚠️ Indexes cost write throughput`.
pub struct InfoBox;

impl InfoBox {
    /// The blockquote prefix that precedes the glyph.
    pub const QUOTE: &'static str = "> ";
    /// Warning sign followed by the emoji variation selector.
    pub const WARNING_GLYPH: &'static str = "\u{26A0}\u{FE0F}";

    const KINDS: [InfoKind; 1] = [InfoKind::Warning];

    pub fn glyph(kind: InfoKind) -> &'static str {
        match kind {
            InfoKind::Warning => Self::WARNING_GLYPH,
        }
    }

    /// Detects an info box line, returning its kind and the trimmed message.
    pub fn detect(line: &str) -> Option<(InfoKind, &str)> {
        let rest = line.strip_prefix(Self::QUOTE)?;
        Self::KINDS.into_iter().find_map(|kind| {
            rest.strip_prefix(Self::glyph(kind))
                .map(|message| (kind, message.trim()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_warning() {
        assert_eq!(
            InfoBox::detect("> \u{26A0}\u{FE0F} **Note**: mind the gap"),
            Some((InfoKind::Warning, "**Note**: mind the gap"))
        );
    }

    #[test]
    fn message_without_space_after_glyph_is_kept_whole() {
        assert_eq!(
            InfoBox::detect("> \u{26A0}\u{FE0F}Careful"),
            Some((InfoKind::Warning, "Careful"))
        );
    }

    #[test]
    fn empty_message() {
        assert_eq!(
            InfoBox::detect("> \u{26A0}\u{FE0F}"),
            Some((InfoKind::Warning, ""))
        );
    }

    #[test]
    fn plain_blockquote_is_not_an_info_box() {
        assert_eq!(InfoBox::detect("> \"Program to an interface\""), None);
    }

    #[test]
    fn bare_warning_sign_without_selector_is_not_an_info_box() {
        assert_eq!(InfoBox::detect("> \u{26A0} text"), None);
    }
}
