//! Server-rendered calculator page
//!
//! Every button is a submit button of one form, so each click posts the
//! button label back to the server and the whole page is rendered again.

use std::fmt::Write as _;

use crate::keypad::Keypad;

/// Page title
pub const PAGE_TITLE: &str = "Simple Calculator";

const STYLE: &str = "\
body{font-family:sans-serif;background:#f0f0f0;display:flex;justify-content:center;padding-top:40px}\
.calculator{background:#333;padding:16px;border-radius:8px;width:260px}\
#display{width:100%;box-sizing:border-box;font-size:28px;text-align:right;padding:8px;margin-bottom:12px;border:none;border-radius:4px}\
.keypad{display:grid;grid-template-columns:repeat(4,1fr);gap:8px}\
.keypad button{font-size:20px;padding:14px 0;border:none;border-radius:4px;cursor:pointer}\
.digit{background:#fff}\
.function{background:#d3d3d3}\
.operator{background:orange;color:#fff}\
.wide{grid-column:span 2}";

/// What the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Display text
    pub display: &'a str,
    /// Message for a client-side alert, if the last press failed
    pub alert: Option<&'a str>,
}

/// Escapes text for HTML content and attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Encodes a message as a JavaScript string literal safe inside `<script>`
fn script_string(message: &str) -> String {
    serde_json::to_string(message)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace('<', "\\u003c")
}

/// Renders the full page
#[must_use]
pub fn render_page(keypad: &Keypad, view: PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{PAGE_TITLE}</title>");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n");
    html.push_str("<form class=\"calculator\" method=\"post\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"display\" name=\"display\" value=\"{}\" readonly>",
        escape_html(view.display)
    );
    html.push_str("<div class=\"keypad\">\n");
    for btn in keypad.buttons() {
        let label = escape_html(btn.label);
        let wide = if btn.span > 1 { " wide" } else { "" };
        let _ = writeln!(
            html,
            "<button type=\"submit\" name=\"button\" value=\"{label}\" class=\"{}{wide}\">{label}</button>",
            btn.kind.css_class()
        );
    }
    html.push_str("</div>\n</form>\n");
    if let Some(message) = view.alert {
        let _ = writeln!(html, "<script>alert({});</script>", script_string(message));
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Reads the display value back out of a rendered page
#[must_use]
pub fn extract_display(html: &str) -> Option<String> {
    const MARKER: &str = "id=\"display\" name=\"display\" value=\"";
    let start = html.find(MARKER)? + MARKER.len();
    let end = start + html[start..].find('"')?;
    Some(unescape_html(&html[start..end]))
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
