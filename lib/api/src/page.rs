//! Server-rendered LibriX page: search control, trigger button, and the
//! five-wide card gallery. Styling only - no recommendation logic lives
//! here.

/// One rendered gallery card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub poster_url: String,
}

/// Cosmetic palette, toggled per request via the `theme` query parameter.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    bg: &'static str,
    text: &'static str,
    card_bg: &'static str,
    accent: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        name: "light",
        bg: "#fffdf5",
        text: "#1f2937",
        card_bg: "rgba(255,255,255,0.65)",
        accent: "#f5d76e",
    };

    pub const DARK: Theme = Theme {
        name: "dark",
        bg: "#0f172a",
        text: "#f8fafc",
        card_bg: "rgba(255,255,255,0.12)",
        accent: "#facc15",
    };

    /// Light unless explicitly asked for dark.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Theme {
        match name {
            Some("dark") => Theme::DARK,
            _ => Theme::LIGHT,
        }
    }

    #[must_use]
    fn other(&self) -> &'static Theme {
        if self.name == "dark" {
            &Theme::LIGHT
        } else {
            &Theme::DARK
        }
    }
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"
    body {{
        background-color: {bg};
        color: {text};
        font-family: "Segoe UI", system-ui, sans-serif;
        margin: 0;
        padding: 24px;
    }}

    h1 {{
        text-align: center;
        font-weight: 800;
        letter-spacing: 1px;
        color: {text};
    }}

    .controls {{
        display: flex;
        gap: 12px;
        justify-content: center;
        margin: 24px auto;
        max-width: 720px;
    }}

    select {{
        flex: 1;
        background-color: white;
        color: black;
        font-weight: 500;
        border-radius: 12px;
        border: 2px solid {accent};
        padding: 0 12px;
        height: 3em;
    }}

    button {{
        background-color: {accent};
        color: white;
        border-radius: 12px;
        height: 3em;
        padding: 0 20px;
        font-weight: 700;
        border: none;
        cursor: pointer;
    }}

    .theme-toggle {{
        display: block;
        text-align: center;
        color: {text};
        margin-bottom: 24px;
    }}

    .notice {{
        text-align: center;
        color: {text};
    }}

    .gallery {{
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 20px;
        max-width: 1080px;
        margin: 0 auto;
    }}

    .book-card {{
        background: {card_bg};
        backdrop-filter: blur(14px);
        -webkit-backdrop-filter: blur(14px);
        border-radius: 20px;
        padding: 15px;
        text-align: center;
        box-shadow: 0 8px 30px rgba(0,0,0,0.12);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }}

    .book-card:hover {{
        transform: translateY(-10px) scale(1.03);
        box-shadow: 0 20px 45px rgba(0,0,0,0.25);
    }}

    .book-title {{
        font-size: 14px;
        font-weight: 700;
        margin-bottom: 10px;
        color: {text};
    }}

    img {{
        border-radius: 14px;
        width: 100%;
    }}
"#,
        bg = theme.bg,
        text = theme.text,
        card_bg = theme.card_bg,
        accent = theme.accent,
    )
}

/// Render the full page.
///
/// `cards` is empty both before the first lookup and when no title was
/// selected - the gallery simply does not render. `unknown_title` adds a
/// notice instead of a gallery for the defensive not-found path.
pub fn render_page(
    catalog: &[String],
    selected: Option<&str>,
    cards: &[Card],
    unknown_title: bool,
    theme: &Theme,
) -> String {
    let mut html = String::with_capacity(4096 + catalog.len() * 64);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>LibriX</title>\n<style>");
    html.push_str(&stylesheet(theme));
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1>&#128218; LibriX</h1>\n");

    // Search select + trigger. Selection is nullable: the empty option keeps
    // a bare submit from invoking the pipeline.
    html.push_str("<form method=\"get\" action=\"/\" class=\"controls\">\n");
    html.push_str("<select name=\"book\">\n");
    html.push_str("<option value=\"\">Start typing a book name...</option>\n");
    for title in catalog {
        let escaped = escape(title);
        if selected == Some(title.as_str()) {
            html.push_str(&format!(
                "<option value=\"{escaped}\" selected>{escaped}</option>\n"
            ));
        } else {
            html.push_str(&format!("<option value=\"{escaped}\">{escaped}</option>\n"));
        }
    }
    html.push_str("</select>\n");
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"theme\" value=\"{}\">\n",
        theme.name
    ));
    html.push_str("<button type=\"submit\">&#10024; Show Recommendation</button>\n");
    html.push_str("</form>\n");

    let toggle = theme.other();
    let toggle_label = if toggle.name == "dark" {
        "&#127769; Dark Mode"
    } else {
        "&#9728;&#65039; Light Mode"
    };
    let mut toggle_href = format!("/?theme={}", toggle.name);
    if let Some(book) = selected {
        toggle_href.push_str("&book=");
        toggle_href.push_str(&escape(book));
    }
    html.push_str(&format!(
        "<a class=\"theme-toggle\" href=\"{toggle_href}\">{toggle_label}</a>\n"
    ));

    if unknown_title {
        if let Some(book) = selected {
            html.push_str(&format!(
                "<p class=\"notice\">No recommendations found for \"{}\".</p>\n",
                escape(book)
            ));
        }
    } else if !cards.is_empty() {
        html.push_str("<div class=\"gallery\">\n");
        for card in cards {
            html.push_str(&format!(
                "<div class=\"book-card\">\n<div class=\"book-title\">{}</div>\n<img src=\"{}\" alt=\"{}\">\n</div>\n",
                escape(&card.title),
                escape(&card.poster_url),
                escape(&card.title),
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        vec!["The Hobbit".to_string(), "Dune".to_string()]
    }

    #[test]
    fn test_no_selection_renders_no_gallery() {
        let html = render_page(&catalog(), None, &[], false, &Theme::LIGHT);
        assert!(!html.contains("class=\"book-card\""));
        assert!(html.contains("<select name=\"book\">"));
    }

    #[test]
    fn test_cards_render() {
        let cards = vec![
            Card {
                title: "Dune".to_string(),
                poster_url: "http://covers/dune.jpg".to_string(),
            },
            Card {
                title: "Foundation & Empire".to_string(),
                poster_url: "http://covers/f2.jpg".to_string(),
            },
        ];
        let html = render_page(&catalog(), Some("The Hobbit"), &cards, false, &Theme::DARK);
        assert_eq!(html.matches("class=\"book-card\"").count(), 2);
        assert!(html.contains("Foundation &amp; Empire"));
        assert!(html.contains("#0f172a"));
    }

    #[test]
    fn test_unknown_title_notice() {
        let html = render_page(&catalog(), Some("Ghost"), &[], true, &Theme::LIGHT);
        assert!(html.contains("No recommendations found"));
        assert!(!html.contains("class=\"gallery\""));
    }

    #[test]
    fn test_selected_option_marked() {
        let html = render_page(&catalog(), Some("Dune"), &[], false, &Theme::LIGHT);
        assert!(html.contains("<option value=\"Dune\" selected>"));
    }
}
