//! Markup for each sidebar region.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use quickquote_core::view::{AffordanceView, FooterView, ItemListView, ItemRow};

const LIST_ICON: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M9 12h3.75M9 15h3.75M9 18h3.75m3 .75H18a2.25 2.25 0 002.25-2.25V6.108c0-1.135-.845-2.098-1.976-2.192a48.424 48.424 0 00-1.123-.08M8.25 8.25H4.875c-.621 0-1.125.504-1.125 1.125v11.25c0 .621.504 1.125 1.125 1.125h9.75c.621 0 1.125-.504 1.125-1.125V9.375c0-.621-.504-1.125-1.125-1.125H8.25z" />"#;
const CLOSE_ICON: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />"#;
const CHECK_ICON: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M4.5 12.75l6 6 9-13.5" />"#;
const PLUS_ICON: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M12 4.5v15m7.5-7.5h-15" />"#;
const SEND_ICON: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M6 12L3.269 3.126A59.768 59.768 0 0121.485 12 59.77 59.77 0 013.27 20.876L5.999 12zm0 0h7.5" />"#;

fn icon(class: Option<&str>, stroke_width: u8, path: &str) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    format!(
        r#"<svg{class_attr} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="{stroke_width}" stroke="currentColor">{path}</svg>"#
    )
}

/// The static sidebar structure, inserted once at the end of `<body>`.
/// Regions are filled in by later renders.
pub fn scaffold(toast_message: &str) -> String {
    format!(
        r#"<button class="quote-toggle" aria-label="Open quote builder">
  {toggle_icon}
  <span>Quote</span>
  <span class="quote-toggle__count"></span>
</button>
<div class="quote-backdrop"></div>
<aside class="quote-sidebar" aria-label="Quote builder">
  <div class="quote-sidebar__header">
    <h2 class="quote-sidebar__title">{title_icon} Quick Quote</h2>
    <button class="quote-sidebar__close" aria-label="Close quote builder">{close_icon}</button>
  </div>
  <div class="quote-sidebar__content"></div>
  <div class="quote-sidebar__footer"></div>
</aside>
<div class="quote-toast">
  {check_icon}
  <span class="quote-toast__message">{message}</span>
</div>
"#,
        toggle_icon = icon(Some("quote-toggle__icon"), 2, LIST_ICON),
        title_icon = icon(None, 2, LIST_ICON),
        close_icon = icon(None, 2, CLOSE_ICON),
        check_icon = icon(None, 2, CHECK_ICON),
        message = text(toast_message),
    )
}

pub fn item_list(view: &ItemListView) -> String {
    match view {
        ItemListView::Empty => empty_state(),
        ItemListView::Rows(rows) => rows.iter().map(item_row).collect(),
    }
}

fn empty_state() -> String {
    format!(
        r#"<div class="quote-empty">
  {}
  <div class="quote-empty__title">Your quote is empty</div>
  <div class="quote-empty__text">Browse our products and click "Add to Quote" to build your quote request.</div>
  <a href="index.html#products" class="btn btn--primary btn--sm">Browse Products</a>
</div>
"#,
        icon(Some("quote-empty__icon"), 1, LIST_ICON)
    )
}

fn item_row(row: &ItemRow) -> String {
    let mut out = String::new();
    let _ = writeln!(out, r#"<div class="quote-item" data-id="{}">"#, attr(&row.id));
    let _ = writeln!(
        out,
        r#"  <img src="{}" alt="{}" class="quote-item__image">"#,
        attr(&row.image),
        attr(&row.name)
    );
    let _ = writeln!(out, r#"  <div class="quote-item__info">"#);
    let _ = writeln!(out, r#"    <div class="quote-item__name">{}</div>"#, text(&row.name));
    let _ = writeln!(
        out,
        r#"    <div class="quote-item__details">{}</div>"#,
        text(&row.details)
    );
    let _ = writeln!(out, r#"    <div class="quote-item__quantity">"#);
    let _ = writeln!(
        out,
        r#"      <button class="quote-item__qty-btn" data-delta="-" aria-label="Decrease quantity">-</button>"#
    );
    let _ = writeln!(
        out,
        r#"      <span class="quote-item__qty-value">{}</span>"#,
        row.quantity
    );
    let _ = writeln!(
        out,
        r#"      <button class="quote-item__qty-btn" data-delta="+" aria-label="Increase quantity">+</button>"#
    );
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(
        out,
        r#"  <button class="quote-item__remove" aria-label="Remove item">{}</button>"#,
        icon(None, 2, CLOSE_ICON)
    );
    let _ = writeln!(out, "</div>");
    out
}

/// Footer markup; `None` means the footer is hidden.
pub fn footer(view: &FooterView) -> Option<String> {
    let FooterView::Summary { label, .. } = view else {
        return None;
    };
    Some(format!(
        r#"<div class="quote-summary">
  <span class="quote-summary__label">Total Items</span>
  <span class="quote-summary__value">{label}</span>
</div>
<div class="quote-sidebar__actions">
  <button class="quote-sidebar__submit">{send} Submit Quote Request</button>
  <button class="quote-sidebar__clear">Clear All</button>
</div>
"#,
        label = text(label),
        send = icon(None, 2, SEND_ICON),
    ))
}

/// Inner content of an "add" control.
pub fn affordance_label(view: &AffordanceView) -> String {
    let path = if view.in_quote { CHECK_ICON } else { PLUS_ICON };
    format!("{} {}", icon(None, 2, path), text(view.label))
}
