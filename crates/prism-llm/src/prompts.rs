pub const PALETTE_PROMPT: &str = r##"You are a professional color designer.
Create a harmonious color palette for the theme the user describes.

Rules:
- Return 5 colors unless the theme clearly calls for fewer or more (never more than 8)
- Every color is a 6-digit hex code with a leading '#', e.g. "#1A2B3C"
- Order colors from primary to accent
- The advice is one or two sentences on how to apply the palette

Your response must be valid JSON in this format:
{
  "colors": ["#RRGGBB", "#RRGGBB", "#RRGGBB", "#RRGGBB", "#RRGGBB"],
  "advice": "How to use these colors"
}

Nothing else."##;

pub const REGENERATE_COLOR_PROMPT: &str = r##"You are a professional color designer refining an existing palette.
Suggest ONE new color to replace the color at the given position.
The new color must fit the theme and the remaining colors, and must differ from the color it replaces.

Your response must be valid JSON in this format:
{"color": "#RRGGBB"}

Nothing else."##;

/// Builds the user message for a single color replacement.
pub fn regenerate_color_message(prompt: &str, colors: &[String], index: usize) -> String {
    let current = colors.get(index).map(String::as_str).unwrap_or("");
    format!(
        "Theme: {prompt}\n\nCurrent palette: {}\n\nReplace the color at position {} (0-based), currently {current}.",
        colors.join(", "),
        index
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regenerate_message_names_position_and_color() {
        let colors = vec!["#FF5733".to_string(), "#1A2B3C".to_string()];
        let message = regenerate_color_message("sunset", &colors, 1);
        assert!(message.contains("Theme: sunset"));
        assert!(message.contains("#FF5733, #1A2B3C"));
        assert!(message.contains("position 1 (0-based), currently #1A2B3C"));
    }
}
