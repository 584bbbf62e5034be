// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The plain-data element tree consumed by [`render`](crate::render).

use std::borrow::Cow;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Event;

/// Props key under which an element's children are stored.
pub(crate) const CHILDREN: &str = "children";

/// Props key carrying the text of a text element.
pub(crate) const NODE_VALUE: &str = "nodeValue";

/// Shared event callback stored in [`PropValue::Listener`].
pub type Listener = Rc<dyn Fn(&Event)>;

/// One node of the tree: a tag name or the text sentinel, plus props.
///
/// Elements are built by the caller and read, never mutated, by
/// [`render`](crate::render).
pub struct Element {
    pub ty: ElementType,
    pub props: Props,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ElementType {
    /// A tagged element such as `div` or `a`.
    Tag(Cow<'static, str>),
    /// The sentinel marking a text node.
    Text,
}

/// A single props value.
///
/// Plain values cross into JS as properties of the created node, the two
/// reserved shapes carry children and event listeners.
pub enum PropValue {
    Str(Cow<'static, str>),
    Num(f64),
    Bool(bool),
    Children(Vec<Element>),
    Listener(Listener),
}

impl PropValue {
    /// The JS value assigned during the property copy. `None` for the
    /// reserved shapes, which never cross as plain properties.
    pub(crate) fn to_js(&self) -> Option<JsValue> {
        match self {
            PropValue::Str(value) => Some(JsValue::from_str(value)),
            PropValue::Num(value) => Some(JsValue::from_f64(*value)),
            PropValue::Bool(value) => Some(JsValue::from_bool(*value)),
            PropValue::Children(_) | PropValue::Listener(_) => None,
        }
    }
}

impl From<&'static str> for PropValue {
    fn from(value: &'static str) -> Self {
        PropValue::Str(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value.into())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Num(value)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Num(value.into())
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Num(value.into())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

/// String-keyed props map preserving insertion order.
#[derive(Default)]
pub struct Props {
    entries: Vec<(Cow<'static, str>, PropValue)>,
}

impl Props {
    pub fn new() -> Self {
        Props::default()
    }

    /// Assigns `value` under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: PropValue) {
        let key = key.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }

    /// The ordered child elements stored under `children`, empty if absent.
    pub fn children(&self) -> &[Element] {
        match self.get(CHILDREN) {
            Some(PropValue::Children(children)) => children,
            _ => &[],
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Element> {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k == CHILDREN)
            .unwrap_or_else(|| {
                self.entries
                    .push((CHILDREN.into(), PropValue::Children(Vec::new())));
                self.entries.len() - 1
            });

        let slot = &mut self.entries[index].1;

        // `children` set to a non-children value is discarded
        if !matches!(slot, PropValue::Children(_)) {
            *slot = PropValue::Children(Vec::new());
        }

        match slot {
            PropValue::Children(children) => children,
            _ => unreachable!(),
        }
    }
}

impl Element {
    /// A tagged element with no props, `createElement` style.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Element {
            ty: ElementType::Tag(tag.into()),
            props: Props::new(),
        }
    }

    /// A text element: the text sentinel with `value` under `nodeValue`.
    pub fn text(value: impl Into<Cow<'static, str>>) -> Self {
        let mut props = Props::new();
        props.set(NODE_VALUE, PropValue::Str(value.into()));

        Element {
            ty: ElementType::Text,
            props,
        }
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.props.set(name, value.into());
        self
    }

    /// Binds an event listener under `key`, e.g. `on("onClick", ..)`.
    pub fn on(mut self, key: impl Into<Cow<'static, str>>, callback: impl Fn(&Event) + 'static) -> Self {
        self.props.set(key, PropValue::Listener(Rc::new(callback)));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.props.children_mut().push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.props.children_mut().extend(children);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_element_stores_its_value_under_node_value() {
        let el = Element::text("hello");

        assert_eq!(el.ty, ElementType::Text);
        assert!(matches!(
            el.props.get(NODE_VALUE),
            Some(PropValue::Str(value)) if value == "hello"
        ));
    }

    #[test]
    fn children_default_to_empty_when_absent() {
        let el = Element::new("div");

        assert!(el.props.children().is_empty());
        assert!(el.props.get(CHILDREN).is_none());
    }

    #[test]
    fn children_preserve_insertion_order() {
        let el = Element::new("ul")
            .child(Element::new("li").attr("id", "a"))
            .child(Element::new("li").attr("id", "b"))
            .children([Element::new("li").attr("id", "c")]);

        let ids: Vec<_> = el
            .props
            .children()
            .iter()
            .map(|child| match child.props.get("id") {
                Some(PropValue::Str(id)) => &**id,
                _ => panic!("missing id"),
            })
            .collect();

        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn props_preserve_insertion_order_and_replace_in_place() {
        let mut props = Props::new();

        props.set("id", "x".into());
        props.set("href", "/a".into());
        props.set("id", "y".into());

        let keys: Vec<_> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["id", "href"]);

        assert!(matches!(
            props.get("id"),
            Some(PropValue::Str(value)) if value == "y"
        ));
    }
}
