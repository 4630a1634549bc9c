use html_escape::encode_double_quoted_attribute;

const FALLBACK_PRIMARY: &str = "#888";
const FALLBACK_SECONDARY: &str = "#444";

/// Inline CSS for a team badge, safe to drop into a `style="..."` attribute.
pub fn team_style(color1: &str, color2: &str) -> String {
    let primary = if color1.trim().is_empty() {
        FALLBACK_PRIMARY
    } else {
        color1.trim()
    };
    let secondary = if color2.trim().is_empty() {
        FALLBACK_SECONDARY
    } else {
        color2.trim()
    };

    format!(
        "background: linear-gradient(90deg, {}, {}); color:#fff; border:1px solid rgba(0,0,0,.2);",
        encode_double_quoted_attribute(primary),
        encode_double_quoted_attribute(secondary)
    )
}
