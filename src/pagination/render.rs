//! HTML rendering of navigation entries

use maud::{html, Markup};

use super::navigation::{EdgeKind, NavEntry};

/// Text shown for edge links and gaps
#[derive(Debug, Clone)]
pub struct NavLabels {
    pub prev: String,
    pub next: String,
    pub last: String,
    pub ellipsis: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            prev: "\u{276e}".to_string(),
            next: "\u{276f}".to_string(),
            last: "\u{276f}\u{276f}".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Unobtrusive-AJAX attributes added to every enabled link
#[derive(Debug, Clone)]
pub struct AjaxOptions {
    /// CSS selector of the element to update with the response
    pub update_target: String,
    /// `replace`, `before` or `after`
    pub mode: String,
    pub method: String,
}

impl AjaxOptions {
    pub fn replace(update_target: impl Into<String>) -> Self {
        Self {
            update_target: update_target.into(),
            mode: "replace".to_string(),
            method: "GET".to_string(),
        }
    }
}

/// Rendering options for the navigation control
#[derive(Debug, Clone)]
pub struct NavConfig {
    pub labels: NavLabels,
    pub list_class: String,
    pub item_class: String,
    pub active_class: String,
    pub disabled_class: String,
    pub ellipsis_class: String,
    pub ajax: Option<AjaxOptions>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            labels: NavLabels::default(),
            list_class: "pagination-custom".to_string(),
            item_class: "page-item".to_string(),
            active_class: "active".to_string(),
            disabled_class: "disabled".to_string(),
            ellipsis_class: "dots".to_string(),
            ajax: None,
        }
    }
}

impl NavConfig {
    pub fn with_ajax(mut self, ajax: AjaxOptions) -> Self {
        self.ajax = Some(ajax);
        self
    }

    fn label(&self, entry: &NavEntry) -> String {
        match entry {
            NavEntry::Page { number, .. } => number.to_string(),
            NavEntry::Ellipsis => self.labels.ellipsis.clone(),
            NavEntry::Edge { edge, .. } => match edge {
                EdgeKind::Prev => self.labels.prev.clone(),
                EdgeKind::Next => self.labels.next.clone(),
                EdgeKind::Last => self.labels.last.clone(),
            },
        }
    }

    fn item_class(&self, entry: &NavEntry) -> String {
        let mut class = self.item_class.clone();
        if entry.is_active() {
            class.push(' ');
            class.push_str(&self.active_class);
        }
        if entry.is_disabled() {
            class.push(' ');
            class.push_str(&self.disabled_class);
        }
        class
    }
}

/// Render a single entry as an `<li>`.
pub fn render_entry(config: &NavConfig, entry: &NavEntry) -> Markup {
    let label = config.label(entry);

    if let NavEntry::Ellipsis = entry {
        return html! { li class=(config.ellipsis_class) { (label) } };
    }

    let ajax = config.ajax.as_ref();

    html! {
        li class=(config.item_class(entry)) {
            @if let Some(url) = entry.url() {
                a href=(url)
                    data-ajax=[ajax.map(|_| "true")]
                    data-ajax-method=[ajax.map(|a| a.method.as_str())]
                    data-ajax-mode=[ajax.map(|a| a.mode.as_str())]
                    data-ajax-update=[ajax.map(|a| a.update_target.as_str())]
                    { (label) }
            } @else {
                span { (label) }
            }
        }
    }
}

/// Render the full control as a `<ul>`.
pub fn render_navigation(config: &NavConfig, entries: &[NavEntry]) -> Markup {
    html! {
        ul class=(config.list_class) {
            @for entry in entries {
                (render_entry(config, entry))
            }
        }
    }
}
