//! Genome preview: the sample genome on a controlled canvas with zoom controls.

use std::sync::Arc;

use leptos::prelude::*;

use genome_canvas::view::{ScaleBounds, ViewState};

use crate::components::genome_canvas::GenomeCanvas;
use crate::state::genome::sample_genome;
use crate::state::view_store::ViewStore;

const PREVIEW_WIDTH_PX: f64 = 900.0;
const PREVIEW_HEIGHT_PX: f64 = 240.0;

#[component]
pub fn PreviewPage() -> impl IntoView {
    let bounds = ScaleBounds::default();
    let store = RwSignal::new(ViewStore::new(ViewState::default(), bounds));
    let sample = match sample_genome() {
        Ok(data) => Some(Arc::new(data)),
        Err(err) => {
            log::error!("sample genome unavailable: {err}");
            None
        }
    };
    let genome = Signal::stored(sample);
    let view_state = Signal::derive(move || store.get().view);

    let zoom_label = move || store.get().zoom_label();
    let on_change = move |next: ViewState| store.update(|s| s.set(next));

    view! {
        <main class="preview">
            <div class="preview-toolbar">
                <button
                    on:click=move |_| store.update(ViewStore::zoom_out)
                    disabled=move || !store.get().can_zoom_out()
                >
                    "-"
                </button>
                <span class="preview-zoom">{zoom_label}</span>
                <button
                    on:click=move |_| store.update(ViewStore::zoom_in)
                    disabled=move || !store.get().can_zoom_in()
                >
                    "+"
                </button>
                <button on:click=move |_| store.update(ViewStore::reset)>"Reset"</button>
            </div>
            <GenomeCanvas
                genome=genome
                width=PREVIEW_WIDTH_PX
                height=PREVIEW_HEIGHT_PX
                min_scale=bounds.min()
                max_scale=bounds.max()
                view_state=view_state
                on_view_state_change=on_change
            />
        </main>
    }
}
