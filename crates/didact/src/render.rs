// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The recursive walk that materializes an [`Element`] tree into live DOM
//! nodes under a caller-supplied parent.

use std::rc::Rc;

use gloo_events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::{Document, Node};

use crate::element::{Element, ElementType, PropValue, CHILDREN};

pub(crate) fn document() -> Document {
    web_sys::window()
        .expect_throw("no window")
        .document()
        .expect_throw("no document")
}

/// True iff the props key binds an event listener (case-sensitive `on` prefix).
pub fn is_listener(name: &str) -> bool {
    name.starts_with("on")
}

/// True iff the props key is a plain property to copy onto the node.
pub fn is_attribute(name: &str) -> bool {
    !is_listener(name) && name != CHILDREN
}

/// Event type a listener props key registers under: the lower-cased first
/// two characters of the key. `onClick` therefore yields `"on"`, not
/// `"click"`, and every listener shares the same event type.
// TODO: strip the `on` prefix and lower-case the remainder instead
// (`onClick` -> `click`); changing this re-targets every listener ever
// registered, so it has to land together with updated callers.
fn listener_event(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_lowercase()
}

/// Builds the DOM subtree for `element` and appends it to `parent`.
///
/// Depth-first and synchronous: the node is created and wired up (listeners
/// first, then the property copy), children render into it, and only then is
/// it appended to `parent`. Returns the appended node.
///
/// Host failures are not translated; an unknown tag name throws whatever
/// [`Document::create_element`] throws. Recursion depth equals tree depth.
pub fn render(element: &Element, parent: &Node) -> Node {
    let node: Node = match &element.ty {
        ElementType::Text => document().create_text_node("").into(),
        ElementType::Tag(tag) => document().create_element(tag).unwrap_throw().into(),
    };

    for (name, value) in element.props.iter() {
        if is_listener(name) {
            if let PropValue::Listener(callback) = value {
                let callback = Rc::clone(callback);

                EventListener::new(&node, listener_event(name), move |event| callback(event))
                    .forget();
            }
        } else if is_attribute(name) {
            if let Some(value) = value.to_js() {
                Reflect::set(node.as_ref(), &JsValue::from_str(name), &value).unwrap_throw();
            }
        }
    }

    for child in element.props.children() {
        render(child, &node);
    }

    parent.append_child(&node).unwrap_throw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_predicate_is_case_sensitive() {
        assert!(is_listener("onClick"));
        assert!(is_listener("onKeyDown"));
        assert!(is_listener("on"));

        assert!(!is_listener("On click"));
        assert!(!is_listener("href"));
        assert!(!is_listener(""));
    }

    #[test]
    fn attribute_predicate_excludes_listeners_and_children() {
        assert!(is_attribute("href"));
        assert!(is_attribute("id"));
        assert!(is_attribute("nodeValue"));
        // not a listener (case-sensitive), so a plain attribute
        assert!(is_attribute("On click"));

        assert!(!is_attribute("onClick"));
        assert!(!is_attribute("children"));
    }

    #[test]
    fn listener_event_is_the_first_two_characters_lower_cased() {
        // Documents the current mapping: every listener key collapses to
        // the event type "on" rather than the event it names.
        assert_eq!(listener_event("onClick"), "on");
        assert_eq!(listener_event("onKeyDown"), "on");
        assert_eq!(listener_event("onchange"), "on");
    }
}
