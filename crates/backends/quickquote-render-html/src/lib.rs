//! HTML surface for the quick quote sidebar.
//!
//! [`HtmlSurface`] keeps the current markup of every region the controller
//! writes to. A host that owns a real DOM copies these strings into the
//! matching elements; the CLI writes them out as a static page.

pub mod markup;

use std::fmt::Write;

use html_escape::encode_double_quoted_attribute as attr;
use quickquote_core::surface::{MissingRegion, Region, Surface};
use quickquote_core::view::{AffordanceView, BadgeView, FooterView, ItemListView};
use tracing::debug;

/// An "add to quote" control found on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub id: String,
    pub added: bool,
    pub inner_html: String,
}

/// Region markup for one page.
///
/// Region writes fail with [`MissingRegion`] until [`HtmlSurface::mount`]
/// has inserted the scaffold, mirroring a DOM lookup on a page without it.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    mounted: bool,
    content: String,
    footer: Option<String>,
    badge: String,
    affordances: Vec<Affordance>,
    panel_open: bool,
    scroll_locked: bool,
    toast: Option<String>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the add controls present on the page, in page order.
    pub fn with_affordances<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affordances = ids
            .into_iter()
            .map(|id| Affordance {
                id: id.into(),
                added: false,
                inner_html: String::new(),
            })
            .collect();
        self
    }

    /// Insert the sidebar scaffold and return its markup.
    pub fn mount(&mut self, toast_message: &str) -> String {
        self.mounted = true;
        markup::scaffold(toast_message)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn content_html(&self) -> &str {
        &self.content
    }

    /// `None` while the footer is hidden.
    pub fn footer_html(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn badge_text(&self) -> &str {
        &self.badge
    }

    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    /// A standalone page showing the current state of every region.
    pub fn document(&self, title: &str, stylesheet: Option<&str>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, r#"<html lang="en">"#);
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, r#"  <meta charset="UTF-8">"#);
        let _ = writeln!(out, "  <title>{}</title>", html_escape::encode_text(title));
        if let Some(href) = stylesheet {
            let _ = writeln!(out, r#"  <link rel="stylesheet" href="{}">"#, attr(href));
        }
        let _ = writeln!(out, "</head>");
        let _ = writeln!(out, "<body>");

        for a in &self.affordances {
            let class = if a.added { "btn added" } else { "btn" };
            let _ = writeln!(
                out,
                r#"<button class="{class}" data-add-quote data-id="{}">{}</button>"#,
                attr(&a.id),
                a.inner_html
            );
        }

        let open = if self.panel_open { " open" } else { "" };
        let visible = if self.panel_open { " visible" } else { "" };
        let footer_style = if self.footer.is_some() { "block" } else { "none" };
        let _ = writeln!(
            out,
            r#"<button class="quote-toggle"><span>Quote</span> <span class="quote-toggle__count">{}</span></button>"#,
            self.badge
        );
        let _ = writeln!(out, r#"<div class="quote-backdrop{visible}"></div>"#);
        let _ = writeln!(out, r#"<aside class="quote-sidebar{open}">"#);
        let _ = writeln!(out, r#"<div class="quote-sidebar__content">"#);
        out.push_str(&self.content);
        let _ = writeln!(out, "</div>");
        let _ = writeln!(
            out,
            r#"<div class="quote-sidebar__footer" style="display: {footer_style}">"#
        );
        out.push_str(self.footer.as_deref().unwrap_or_default());
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "</aside>");
        if let Some(message) = &self.toast {
            let _ = writeln!(
                out,
                r#"<div class="quote-toast show"><span class="quote-toast__message">{}</span></div>"#,
                html_escape::encode_text(message)
            );
        }
        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");
        out
    }

    fn require(&self, region: Region) -> Result<(), MissingRegion> {
        if self.mounted {
            Ok(())
        } else {
            Err(MissingRegion(region))
        }
    }
}

impl Surface for HtmlSurface {
    fn affordance_ids(&self) -> Vec<String> {
        self.affordances.iter().map(|a| a.id.clone()).collect()
    }

    fn set_item_list(&mut self, view: &ItemListView) -> Result<(), MissingRegion> {
        self.require(Region::ItemList)?;
        self.content = markup::item_list(view);
        Ok(())
    }

    fn set_footer(&mut self, view: &FooterView) -> Result<(), MissingRegion> {
        self.require(Region::Footer)?;
        self.footer = markup::footer(view);
        Ok(())
    }

    fn set_badge(&mut self, view: &BadgeView) -> Result<(), MissingRegion> {
        self.require(Region::Badge)?;
        self.badge = view.text.clone();
        Ok(())
    }

    /// Affordances live in page content, not the scaffold, so they are
    /// writable before mounting.
    fn set_affordance(&mut self, view: &AffordanceView) -> Result<(), MissingRegion> {
        let mut found = false;
        for a in self.affordances.iter_mut().filter(|a| a.id == view.id) {
            a.added = view.in_quote;
            a.inner_html = markup::affordance_label(view);
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(MissingRegion(Region::Affordance(view.id.clone())))
        }
    }

    fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn show_toast(&mut self, message: &str) {
        debug!(message, "toast shown");
        self.toast = Some(message.to_string());
    }

    fn hide_toast(&mut self) {
        self.toast = None;
    }
}
