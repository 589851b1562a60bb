use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::busy::BusyService;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::state::SelectionService;

#[component]
pub fn App() -> impl IntoView {
    // Provide ModalStackService for centralized modal management
    provide_context(ModalStackService::new());

    // In-flight request markers shared by all pages
    provide_context(BusyService::new());

    // Selection state, restored from durable storage
    provide_context(SelectionService::new());

    view! {
        <AppRoutes />
        <ModalHost />
    }
}
