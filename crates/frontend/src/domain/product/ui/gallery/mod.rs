pub mod review;

use contracts::checkout::SelectionEntry;
use contracts::domain::product::Product;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use self::review::SelectionReview;
use crate::domain::product::api;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::money::format_chf;
use crate::shared::state::SelectionService;

#[component]
#[allow(non_snake_case)]
pub fn GalleryPage() -> impl IntoView {
    let selection = use_context::<SelectionService>().expect("SelectionService not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(v) => {
                    set_products.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load catalog: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let open_review = move || {
        if selection.is_empty() {
            dialog::alert("No items selected");
            return;
        }
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("selection-modal".to_string()),
            move |handle| {
                view! { <SelectionReview handle=handle /> }.into_any()
            },
        );
    };

    fetch();

    view! {
        <div class="content gallery">
            <div class="header">
                <h2>{"Gallery"}</h2>
                <div class="header__actions">
                    <span class="selection-count">
                        {move || format!("{} selected", selection.count())}
                    </span>
                    <button
                        class="button button--primary"
                        on:click=move |_| open_review()
                        disabled=move || selection.is_empty()
                    >
                        {icon("cart")}
                        {"Review Selection"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="product-grid">
                {move || {
                    products
                        .get()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// One gallery card: price/stock info, option select, quantity, add button.
#[component]
#[allow(non_snake_case)]
fn ProductCard(product: Product) -> impl IntoView {
    let selection = use_context::<SelectionService>().expect("SelectionService not found");

    let options = product.options.clone().unwrap_or_default();
    let (option_value, set_option_value) = signal(String::new());
    let (quantity_raw, set_quantity_raw) = signal("1".to_string());
    // Short "Added!" feedback, the button is disabled while it shows.
    let (just_added, set_just_added) = signal(false);

    let image = api::image_url(&product);
    let price_label = product.price.map(format_chf);
    let stock_label = product.stock_status.label();

    let handle_add = {
        let product = product.clone();
        let options = options.clone();
        move |_| {
            let value = option_value.get();
            let label = options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| value.clone());
            // Invalid or empty quantity input falls back to 1.
            let quantity = quantity_raw.get().trim().parse::<u32>().unwrap_or(1);

            let entry = SelectionEntry::new(
                product.id,
                product.product_url.clone(),
                product.name.clone(),
                product.price.unwrap_or(0.0),
                quantity,
                value,
                label,
            );
            match selection.add(entry) {
                Ok(()) => {
                    set_just_added.set(true);
                    spawn_local(async move {
                        TimeoutFuture::new(1_000).await;
                        set_just_added.set(false);
                    });
                }
                Err(e) => dialog::alert(&e.to_string()),
            }
        }
    };

    view! {
        <div class="product-card">
            {image.map(|src| view! { <img class="product-card__image" src=src alt="" /> })}
            <div class="product-card__body">
                <strong class="product-name">{product.name.clone()}</strong>
                <div class="product-price">
                    {price_label.unwrap_or_else(|| "Price unknown".to_string())}
                </div>
                <div class="product-stock">{stock_label}</div>

                <select
                    class="product-card__option"
                    on:change=move |ev| set_option_value.set(event_target_value(&ev))
                >
                    <option value="">{"Select option..."}</option>
                    {options
                        .iter()
                        .map(|o| {
                            view! {
                                <option value=o.value.clone()>{o.label.clone()}</option>
                            }
                        })
                        .collect_view()}
                </select>

                <input
                    type="number"
                    class="product-card__quantity"
                    min="1"
                    prop:value=move || quantity_raw.get()
                    on:input=move |ev| set_quantity_raw.set(event_target_value(&ev))
                />

                <button
                    class="button button--primary add-to-selection"
                    on:click=handle_add
                    disabled=move || just_added.get()
                >
                    {move || if just_added.get() { "Added!" } else { "Add to Selection" }}
                </button>
            </div>
        </div>
    }
}
