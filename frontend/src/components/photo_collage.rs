use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::assets;
use crate::services::logging::Logger;

/// Ordered image list produced by `cargo run -p xtask`.
const IMAGES_JSON: &str = include_str!("../../data/images.json");

/// Milliseconds between photos stacking in.
const STACK_INTERVAL_MS: u32 = 320;

fn image_list() -> Vec<String> {
    match serde_json::from_str(IMAGES_JSON) {
        Ok(images) => images,
        Err(e) => {
            // A broken image list degrades to an empty collage, same as any
            // other media failure.
            Logger::warn_with_component("collage", &format!("image list unreadable: {}", e));
            Vec::new()
        }
    }
}

/// Stable tilt and offset for a photo, derived from its index so the pile
/// never reshuffles on re-render.
fn transform_for(index: usize) -> (i32, i32, i32) {
    let tilt = (index as i32 * 37 % 31) - 15; // -15..=15 degrees
    let dx = (index as i32 * 13 % 21) - 10; // -10..=10 px
    let dy = (index as i32 * 29 % 21) - 10;
    (tilt, dx, dy)
}

/// Birthday photo pile: photos stack in one by one, then a tap cycles the
/// top photo to the bottom.
#[function_component(PhotoCollage)]
pub fn photo_collage() -> Html {
    let images = use_memo((), |_| image_list());
    let visible = use_state(|| 0usize);
    let rotation = use_state(|| 0usize);
    let total = images.len();

    // Stack-in animation: one photo every STACK_INTERVAL_MS until all are
    // visible. The cancellation flag covers the view closing mid-stack.
    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();
            spawn_local(async move {
                let mut shown = 0usize;
                while shown < total {
                    TimeoutFuture::new(STACK_INTERVAL_MS).await;
                    if flag.get() {
                        return;
                    }
                    shown += 1;
                    visible.set(shown);
                }
            });
            move || cancelled.set(true)
        });
    }

    let stacking = *visible < total;
    let on_pile_click = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| {
            if !stacking && total > 0 {
                // Send the top photo to the bottom of the pile.
                rotation.set((*rotation + 1) % total);
            }
        })
    };

    if total == 0 {
        return html! {};
    }

    html! {
        <div class="collage">
            <h2 class="collage-heading">{"Per molts anys! ✨"}</h2>
            <div class="collage-pile" onclick={on_pile_click}>
                { for images.iter().enumerate().map(|(index, src)| {
                    let rotated_index = (index + total - *rotation) % total;
                    let (tilt, dx, dy) = transform_for(index);
                    let is_visible = rotated_index < *visible;
                    let style = format!(
                        "transform: rotate({}deg) translate({}px, {}px); z-index: {}; opacity: {};",
                        tilt,
                        dx,
                        dy,
                        rotated_index,
                        if is_visible { 1 } else { 0 },
                    );
                    html! {
                        <div key={index} class="collage-photo" {style}>
                            <img
                                src={assets::asset_url(src)}
                                alt={format!("Foto {}", index + 1)}
                                loading="lazy"
                            />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
