//! Artwork Carousel
//!
//! Horizontal slider over the visible artworks of a board, with arrow
//! buttons that step by a viewport or a fixed width.

use leptos::html::Div;
use leptos::*;

use artzy::gallery::{ArtworkBoard, Carousel, Step};
use artzy::model::ArtworkId;

use crate::components::ArtworkCard;

#[component]
pub fn ArtworkCarousel(
    board: RwSignal<ArtworkBoard>,
    step: Step,
    #[prop(into)]
    on_like: Callback<ArtworkId>,
) -> impl IntoView {
    let slider = create_node_ref::<Div>();
    let carousel = create_rw_signal(Carousel::new(step));

    let measure = move || {
        if let Some(el) = slider.get_untracked() {
            let left = el.scroll_left() as f64;
            carousel.update(|c| {
                c.resize(el.client_width() as f64, el.scroll_width() as f64);
                c.scrolled_to(left);
            });
        }
    };

    let scroll = move |forward: bool| {
        measure();
        let mut offset = 0.0;
        carousel.update(|c| offset = if forward { c.next() } else { c.prev() });
        if let Some(el) = slider.get_untracked() {
            el.set_scroll_left(offset as i32);
        }
    };

    // Filtering changes the content width
    create_effect(move |_| {
        board.with(|_| ());
        request_animation_frame(measure);
    });

    view! {
        <div class="relative w-full max-w-7xl mx-auto px-4">
            <button
                on:click=move |_| scroll(false)
                class=move || arrow_class("left-0", carousel.get().can_prev())
            >
                "‹"
            </button>

            <div
                node_ref=slider
                on:scroll=move |_| measure()
                class="flex gap-6 overflow-x-auto scroll-smooth snap-x snap-mandatory pb-6 no-scrollbar"
            >
                <For
                    each=move || {
                        board
                            .get()
                            .visible()
                            .into_iter()
                            .cloned()
                            .collect::<Vec<_>>()
                    }
                    key=|art| (art.id.clone(), art.like_count, art.is_liked)
                    children=move |art| view! { <ArtworkCard artwork=art on_like=on_like /> }
                />
            </div>

            <button
                on:click=move |_| scroll(true)
                class=move || arrow_class("right-0", carousel.get().can_next())
            >
                "›"
            </button>
        </div>
    }
}

fn arrow_class(side: &str, enabled: bool) -> String {
    let base = format!(
        "absolute {} top-1/2 -translate-y-1/2 z-10 w-10 h-10 rounded-full bg-[#442D1D] text-white text-2xl shadow",
        side
    );
    if enabled {
        base
    } else {
        format!("{} opacity-30 pointer-events-none", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_class() {
        assert!(!arrow_class("left-0", true).contains("opacity-30"));

        let disabled = arrow_class("right-0", false);
        assert!(disabled.contains("right-0"));
        assert!(disabled.ends_with("opacity-30 pointer-events-none"));
    }
}
