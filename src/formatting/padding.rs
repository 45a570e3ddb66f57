use crate::language::Flags;

/// Fill `text` out to `width` characters with spaces, or zeros under the `0`
/// flag, on the left unless the `-` flag asks for left justification. Width
/// never truncates.
pub fn pad(text: &str, width: usize, flags: Flags) -> String {
    let fill = if flags.zero { '0' } else { ' ' };
    let count = width.saturating_sub(
        text.chars()
            .count(),
    );
    let filler: String = std::iter::repeat(fill)
        .take(count)
        .collect();

    if flags.minus {
        format!("{}{}", text, filler)
    } else {
        format!("{}{}", filler, text)
    }
}
