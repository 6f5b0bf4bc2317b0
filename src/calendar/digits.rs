/// Urdu (extended Arabic-Indic) digit glyphs, indexed by ASCII digit value.
const URDU_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace every ASCII decimal digit in `input` with its Urdu glyph.
/// All other characters pass through unchanged, so separators and
/// already-localized digits are left alone.
pub fn localize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                URDU_DIGITS[(c as usize) - ('0' as usize)]
            } else {
                c
            }
        })
        .collect()
}
