use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Class that marks an element for the scroll-in animation.
pub const REVEAL_CLASS: &str = "reveal";

/// Adds `visible` to every `.reveal` element the first time it scrolls into
/// view. Elements are unobserved after that, so they animate only once.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1("visible");
                            observer.unobserve(&target);
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(0.1));
            options.set_root_margin("0px 0px -50px 0px");

            let observer = match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    warn!("IntersectionObserver unavailable, showing sections statically: {:?}", e);
                    None
                }
            };

            let document = window().and_then(|w| w.document());
            if let Some(document) = document {
                match document.query_selector_all(&format!(".{}", REVEAL_CLASS)) {
                    Ok(nodes) => {
                        for i in 0..nodes.length() {
                            let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                                continue;
                            };
                            match &observer {
                                Some(observer) => observer.observe(&element),
                                None => {
                                    let _ = element.class_list().add_1("visible");
                                }
                            }
                        }
                    }
                    Err(e) => warn!("Failed to query reveal targets: {:?}", e),
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        (),
    );
}
