//! Thin wrappers over the browser APIs the page behaviours need.
//! Listeners and observers detach themselves when dropped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::error::SiteError;

pub fn document() -> Result<Document, SiteError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::MissingElement("document".to_string()))
}

pub fn query(selector: &str) -> Result<Element, SiteError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// The element an event originated from, if it is an element at all.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls to the element a `#fragment` link points at.
pub fn scroll_to_fragment(href: &str) -> Result<(), SiteError> {
    let selector = fragment_selector(href)
        .ok_or_else(|| SiteError::MissingElement(href.to_string()))?;
    scroll_into_view_smooth(&query(selector)?);
    Ok(())
}

/// `"#section--1"` is a usable selector, a bare `"#"` or external link is not.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(href)
}

pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

/// Intersection observer rooted at the viewport.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new<F>(options: &ObserverOptions, mut handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_selectors() {
        assert_eq!(fragment_selector("#section--1"), Some("#section--1"));
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector(""), None);
        assert_eq!(fragment_selector("https://example.com"), None);
        assert_eq!(fragment_selector("#two words"), None);
    }
}
