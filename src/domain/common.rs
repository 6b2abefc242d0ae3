use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Clips free-form text to at most `max_chars` characters.
///
/// Operates on characters, not bytes, so multi-byte input never splits a
/// code point.
pub fn clip_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::clip_text;

    #[test]
    fn clip_text_keeps_short_input_intact() {
        assert_eq!(clip_text("lunch", 100), "lunch");
    }

    #[test]
    fn clip_text_cuts_at_character_boundaries() {
        assert_eq!(clip_text("crème brûlée", 5), "crème");
    }
}
