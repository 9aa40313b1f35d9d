//! Markup rendering for the form and the cookie list.
//!
//! The output is plain HTML built off the current state; every state
//! change re-renders from scratch, so nothing here holds state of its own.

use std::fmt::Write;

use crumb_store::CookieMap;

use crate::form::FormState;

pub(crate) fn render_form(form: &FormState) -> String {
    let mut out = String::new();
    out.push_str("<h1>Cookie Manager</h1>\n");
    out.push_str("<form>\n");
    field(
        &mut out,
        "name",
        "Cookie Name",
        form.name(),
        "Enter cookie name",
    );
    field(
        &mut out,
        "value",
        "Cookie Value",
        form.value(),
        "Enter cookie value",
    );
    field(
        &mut out,
        "domain",
        "Domain (optional)",
        form.domain(),
        "e.g., .example.com",
    );
    out.push_str(
        "<p>Leave empty for current domain only, use .example.com for all subdomains</p>\n",
    );
    out.push_str("<button type=\"submit\">Set Cookie</button>\n");
    out.push_str("</form>\n");
    out
}

pub(crate) fn render_list(snapshot: &CookieMap) -> String {
    let mut out = String::new();
    out.push_str("<h2>Current Cookies</h2>\n");
    if snapshot.is_empty() {
        out.push_str("<p>No cookies found</p>\n");
        return out;
    }
    out.push_str("<ul>\n");
    for (name, value) in snapshot.iter() {
        let _ = writeln!(
            out,
            "<li><span>{}</span><span>{}</span><button data-remove=\"{}\">Remove</button></li>",
            escape(name),
            escape(value),
            escape(name),
        );
    }
    out.push_str("</ul>\n");
    out
}

fn field(out: &mut String, id: &str, label: &str, value: &str, placeholder: &str) {
    let _ = writeln!(
        out,
        "<label for=\"{id}\">{label}</label>\n\
         <input type=\"text\" id=\"{id}\" value=\"{}\" placeholder=\"{placeholder}\">",
        escape(value),
    );
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
