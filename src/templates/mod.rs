use crate::services::AdminContext;
use serde_json::Value;
use std::fmt::Write;

pub mod bets_template;
pub mod sportsbook_template;
pub mod withdrawals_template;

pub fn render_pagination(ctx: &AdminContext) -> String {
    let page = ctx.context.int("page").unwrap_or(1);
    let total_pages = ctx.context.int("total_pages").unwrap_or(0);
    let prev_disabled = if ctx.context.bool("has_previous") { "" } else { " disabled" };
    let next_disabled = if ctx.context.bool("has_next") { "" } else { " disabled" };

    let mut html = String::new();
    write!(
        html,
        "<div class=\"pagination\"><button class=\"page-btn\"{prev_disabled}>Previous</button><span>Page {page} of {total_pages}</span><button class=\"page-btn\"{next_disabled}>Next</button></div>",
    )
    .ok();
    html
}

pub fn render_notifications(notifications: &[Value]) -> String {
    if notifications.is_empty() {
        return String::new();
    }
    let mut html = String::from("<div class=\"notifications\">");
    for note in notifications {
        let kind = note.get("kind").and_then(Value::as_str).unwrap_or("info");
        let text = note.get("text").and_then(Value::as_str).unwrap_or("");
        writeln!(html, "<div class=\"toast toast-{kind}\">{text}</div>").ok();
    }
    html.push_str("</div>");
    html
}

pub(crate) fn rows(ctx: &AdminContext, key: &str) -> Vec<Value> {
    ctx.context
        .get(key)
        .and_then(|value| value.as_array().cloned())
        .unwrap_or_default()
}

pub(crate) fn field<'a>(row: &'a Value, key: &str) -> &'a str {
    row.get(key).and_then(Value::as_str).unwrap_or("")
}

pub(crate) fn int_field(row: &Value, key: &str) -> i64 {
    row.get(key).and_then(Value::as_i64).unwrap_or(0)
}
