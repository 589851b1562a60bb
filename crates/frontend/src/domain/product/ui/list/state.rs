use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        // Newest first, like the server's default ordering.
        Self {
            sort_field: "created_at".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
