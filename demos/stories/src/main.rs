use didact::Element;
use wasm_bindgen::JsValue;

struct Story {
    name: &'static str,
    url: &'static str,
}

const STORIES: &[Story] = &[
    Story {
        name: "Rendering DOM elements",
        url: "https://developer.mozilla.org/en-US/docs/Web/API/Document/createElement",
    },
    Story {
        name: "Element creation",
        url: "https://developer.mozilla.org/en-US/docs/Web/API/Document/createTextNode",
    },
    Story {
        name: "Events and listeners",
        url: "https://developer.mozilla.org/en-US/docs/Web/API/EventTarget/addEventListener",
    },
];

/// Like counts come from the injected source so tests stay deterministic.
fn random_likes(rng: &mut impl FnMut() -> f64) -> u32 {
    (rng() * 100.0).ceil() as u32
}

fn story_element(story: &'static Story, likes: u32) -> Element {
    Element::new("div")
        .child(
            Element::new("button")
                .on("onClick", move |_| {
                    web_sys::console::log_1(&JsValue::from_str(story.name));
                })
                .child(Element::text(format!("{likes} ❤️"))),
        )
        .child(
            Element::new("a")
                .attr("href", story.url)
                .child(Element::text(story.name)),
        )
}

fn app_element(rng: &mut impl FnMut() -> f64) -> Element {
    Element::new("div").children(
        STORIES
            .iter()
            .map(|story| story_element(story, random_likes(rng))),
    )
}

fn lcg(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;

    move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);

        (state >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() {
    let mut rng = lcg(0x5eed);

    didact::start(&app_element(&mut rng));
}
