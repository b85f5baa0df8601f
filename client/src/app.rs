//! Root component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::preview::PreviewPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Genome canvas" />
        <PreviewPage />
    }
}
