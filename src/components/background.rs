//! Animated background layer.
//!
//! Remounts the renderer whenever the mode, the active palette or the
//! selected effect changes. The script always tears down the previous
//! instance first, so only one renderer is ever live.

use dioxus::prelude::*;
use folio_core::effects::{mount_script, teardown_script, CONTAINER_ID};

use crate::context::use_appearance;

#[component]
pub fn Background() -> Element {
    let appearance = use_appearance();

    use_effect(move || {
        let guard = appearance.read();
        let Some(state) = guard.as_ref() else {
            return;
        };
        let effect = state.effect();
        let script = match effect.options(state.colors()) {
            Some(options) => {
                tracing::debug!(effect = %effect, mode = %state.mode(), "Mounting background");
                mount_script(effect, &options)
            }
            None => {
                if !effect.is_none() {
                    tracing::warn!(effect = %effect, "Background colors are not valid hex; effect disabled");
                }
                teardown_script()
            }
        };
        drop(guard);
        let _ = document::eval(&script);
    });

    use_drop(|| {
        let _ = document::eval(&teardown_script());
    });

    rsx! {
        div { id: CONTAINER_ID, class: "background-layer" }
    }
}
