use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|blockquote|pre)>").expect("block break pattern")
});
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li[^>]*>").expect("list item pattern"));
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>").expect("tag pattern")
});
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line pattern"));

/// Readable plain text for rich-text item content, used for card previews.
/// The stored content itself is never rewritten.
pub fn plain_text(content: &str) -> String {
    let with_breaks = BLOCK_BREAK.replace_all(content, "\n");
    let with_bullets = LIST_ITEM.replace_all(&with_breaks, "• ");
    let stripped = TAG.replace_all(&with_bullets, "");
    let decoded = decode_entities(&stripped);
    let lines: Vec<&str> = decoded.lines().map(str::trim_end).collect();
    BLANK_LINES
        .replace_all(lines.join("\n").trim(), "\n\n")
        .to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Guide text is stored as bullet lines; the editor lists them without bullets.
pub fn guide_lines(guide: &str) -> Vec<&str> {
    guide
        .lines()
        .map(|line| line.trim().trim_start_matches('•').trim())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{guide_lines, plain_text};

    #[test]
    fn plain_text_passes_through_unformatted_content() {
        assert_eq!(plain_text("Supplier X"), "Supplier X");
        assert_eq!(plain_text("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn plain_text_keeps_comparison_signs() {
        assert_eq!(plain_text("Margin < 5%, growth > 10%"), "Margin < 5%, growth > 10%");
        assert_eq!(plain_text("x<y, y>z"), "x<y, y>z");
        assert_eq!(plain_text("<p>Churn <3% & NPS >40</p>"), "Churn <3% & NPS >40");
        assert_eq!(
            plain_text("<p class=\"lead\">Price <em>x</em> < cost</p>"),
            "Price x < cost"
        );
    }

    #[test]
    fn plain_text_strips_markup_and_keeps_structure() {
        let html = "<h2>Partners</h2><p>Supplier <strong>X</strong></p><ul><li>Logistics</li><li>R&amp;D</li></ul>";
        assert_eq!(plain_text(html), "Partners\nSupplier X\n• Logistics\n• R&D");
    }

    #[test]
    fn plain_text_of_empty_editor_markup_is_empty() {
        assert_eq!(plain_text("<p><br></p>"), "");
    }

    #[test]
    fn guide_lines_drop_bullets() {
        let guide = "• Who are your key partners?\n• Who are your key suppliers?";
        assert_eq!(
            guide_lines(guide),
            vec!["Who are your key partners?", "Who are your key suppliers?"]
        );
    }
}
