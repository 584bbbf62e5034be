// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Didact
//!
//! A miniature [DOM](https://developer.mozilla.org/en-US/docs/Web/API/Document_Object_Model)
//! renderer: a plain `{ type, props }` element tree is walked once and
//! materialized into real DOM nodes, attaching properties and event
//! listeners along the way.
//!
//! There is no virtual DOM, no diffing against a previous tree, and no
//! component state. Each call to [`render`] appends a fresh subtree under
//! the parent it is given.
//!
//! ```no_run
//! use didact::Element;
//!
//! let app = Element::new("div")
//!     .child(
//!         Element::new("a")
//!             .attr("href", "https://developer.mozilla.org")
//!             .child(Element::text("MDN")),
//!     );
//!
//! didact::start(&app);
//! ```

use wasm_bindgen::UnwrapThrowExt;

mod element;
mod render;

pub use element::{Element, ElementType, Listener, PropValue, Props};
pub use render::{is_attribute, is_listener, render};

/// Renders `element` into the document body.
pub fn start(element: &Element) {
    init_panic_hook();

    let body = render::document().body().expect_throw("no body");

    render(element, &body);
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    {
        use std::cell::Cell;

        thread_local! {
            static INIT: Cell<bool> = Cell::new(false);
        }
        if !INIT.with(|init| init.get()) {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));

            INIT.with(|init| init.set(true));
        }
    }
}
