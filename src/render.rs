//! HTML rendering of the landing page.
//!
//! The renderer only lays out text it is handed; it never looks anything up
//! in the translation tables. All text is escaped before it lands in markup.

use crate::i18n::{DisplayRecord, Language, LanguageRegistry};

/// Target of the primary call to action (served by the routing layer)
pub const FLIGHTS_PATH: &str = "/flights";

/// Target of the secondary call to action (served by the routing layer)
pub const HOTELS_PATH: &str = "/hotels";

const BRAND: &str = "online_travel";

const BRAND_TAGLINE: &str = "Next.js + FastAPI + SQLite";

const FALLBACK_NOTE: &str = "Choose any language above. UI text falls back to English where a translation is not defined yet.";

// Page chrome, English in every language
const BADGES: [&str; 3] = [
    "✈️ Flights + hotels",
    "🔐 Secure booking",
    "🌍 Multi-language ready",
];

const TECH_STACK: [&str; 3] = [
    "Frontend: Next.js (TypeScript)",
    "Backend: FastAPI (Python)",
    "Database: SQLite",
];

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the complete landing page document.
pub fn render_page(language: Language, record: &DisplayRecord) -> String {
    let dir = if language.is_rtl() { "rtl" } else { "ltr" };

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\" dir=\"{}\">\n",
        language.code(),
        dir
    ));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} – Multilingual landing</title>\n",
        escape_html(BRAND)
    ));
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(&render_header(language));
    html.push_str(&render_hero(record));
    html.push_str(&render_features(record));

    html.push_str(&format!(
        "<footer>{} <span>{}</span></footer>\n",
        escape_html(record.footer),
        escape_html(FALLBACK_NOTE)
    ));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_header(selected: Language) -> String {
    let mut html = String::new();
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<span class=\"brand\">{}</span>\n<span class=\"tagline\">{}</span>\n",
        escape_html(BRAND),
        escape_html(BRAND_TAGLINE)
    ));

    // Plain GET form so the picker works without scripts
    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"language-select\">Language</label>\n");
    html.push_str(
        "<select id=\"language-select\" name=\"lang\" onchange=\"this.form.submit()\">\n",
    );
    for config in LanguageRegistry::get().list_all() {
        let selected_attr = if config.language == selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            config.code,
            selected_attr,
            escape_html(config.label)
        ));
    }
    html.push_str("</select>\n<noscript><button type=\"submit\">OK</button></noscript>\n");
    html.push_str("</form>\n</header>\n");
    html
}

fn render_hero(record: &DisplayRecord) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"hero\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(record.title)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(record.subtitle)));
    html.push_str(&format!(
        "<a class=\"cta-primary\" href=\"{}\">{}</a>\n",
        FLIGHTS_PATH,
        escape_html(record.cta_primary)
    ));
    html.push_str(&format!(
        "<a class=\"cta-secondary\" href=\"{}\">{}</a>\n",
        HOTELS_PATH,
        escape_html(record.cta_secondary)
    ));

    html.push_str("<div class=\"badges\">\n");
    for badge in BADGES {
        html.push_str(&format!("<span class=\"badge\">{}</span>\n", escape_html(badge)));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_features(record: &DisplayRecord) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"features\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(record.section_title)));
    html.push_str("<ul>\n");
    for feature in record.features {
        html.push_str(&format!("<li>{}</li>\n", escape_html(feature)));
    }
    html.push_str("</ul>\n");

    html.push_str("<div class=\"tech-stack\">\n<div class=\"tech-stack-title\">Tech stack</div>\n");
    for line in TECH_STACK {
        html.push_str(&format!("<div>{}</div>\n", escape_html(line)));
    }
    html.push_str("</div>\n</section>\n");
    html
}
