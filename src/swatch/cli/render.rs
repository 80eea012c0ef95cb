//! Rendering of stored colors for places that understand them (terminals, CSS).

/// Parses `#rgb` or `#rrggbb` (leading `#` optional) into an RGB triple.
pub(super) fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut channels = digits.chars().map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 17
            });
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Canonical lowercase `#rrggbb` form.
pub(super) fn normalize(rgb: (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

/// The theme block a page can drop in to recolor its background and
/// articles.
pub(super) fn theme_css(rgb: (u8, u8, u8)) -> String {
    let color = normalize(rgb);
    format!(
        r#"<style id="color-theme">
    :root {{
        --bg-color: {color};
        --article-color: {color};
    }}
    body {{
        background-color: var(--bg-color);
    }}
    article {{
        background-color: var(--article-color);
    }}
</style>"#
    )
}
