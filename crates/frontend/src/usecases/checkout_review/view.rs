use contracts::checkout::{total_in_order, ConfirmCheckoutRequest, PricedItem};
use contracts::domain::order::Order;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::model::{self, CheckoutData, CONFIRM_BUSY_KEY};
use crate::shared::busy::BusyService;
use crate::shared::date_utils::format_timestamp;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::money::format_chf;
use crate::shared::navigate;

#[component]
#[allow(non_snake_case)]
pub fn CheckoutReviewPage() -> impl IntoView {
    let busy = use_context::<BusyService>().expect("BusyService not found in context");
    let (data, set_data) = signal(None::<CheckoutData>);
    let (priced, set_priced) = signal(Vec::<PricedItem>::new());
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    match model::load_checkout_data() {
        Some(d) => {
            set_data.set(Some(d.clone()));

            let items = d.items.clone();
            spawn_local(async move {
                let enriched = model::enrich(&items).await;
                set_priced.set(enriched);
                set_loading.set(false);
            });

            let user_id = d.user_id;
            spawn_local(async move {
                match api::fetch_orders(user_id).await {
                    Ok(list) => set_orders.set(list),
                    // The panel is informational; a failure just leaves it empty.
                    Err(e) => log::error!("Failed to load recent orders: {}", e),
                }
            });
        }
        None => {
            dialog::alert("No items selected. Redirecting to gallery...");
            navigate::goto("/");
        }
    }

    let handle_confirm = move |_| {
        let Some(d) = data.get_untracked() else {
            return;
        };
        if !dialog::confirm(
            "Are you sure you want to place this order? This will proceed with checkout on dampfi.ch",
        ) {
            return;
        }
        if !busy.begin(CONFIRM_BUSY_KEY) {
            return;
        }

        spawn_local(async move {
            let request = ConfirmCheckoutRequest {
                user_id: d.user_id,
                items: d.items,
            };
            let result = api::confirm_checkout(&request).await;
            busy.end(CONFIRM_BUSY_KEY);

            match result {
                Ok(outcome) if outcome.success => {
                    model::clear_checkout_session();
                    let total = outcome
                        .total_price
                        .map(format_chf)
                        .unwrap_or_else(|| "N/A".to_string());
                    let mut message = format!("Order placed successfully!\n\nTotal: {total}");
                    if let Some(number) = outcome
                        .confirmation_data
                        .as_ref()
                        .and_then(|c| c.order_number.as_deref())
                    {
                        message.push_str(&format!("\nOrder #: {number}"));
                    }
                    dialog::alert(&message);
                    navigate::goto("/");
                }
                Ok(outcome) => {
                    // Application-level failure: surface the server's text,
                    // leave everything retryable.
                    dialog::alert(&format!("Checkout failed: {}", outcome.failure_text()));
                }
                Err(e) => {
                    dialog::alert(&format!("Error: {}", e));
                }
            }
        });
    };

    let confirm_busy = move || busy.is_busy(CONFIRM_BUSY_KEY);

    view! {
        <div class="content checkout-review">
            <div class="header">
                <h2>{"Checkout Review"}</h2>
                {move || {
                    data.get().map(|d| {
                        view! { <span class="checkout-user">{format!("User {}", d.user_id)}</span> }
                    })
                }}
            </div>

            <div class="items-summary">
                {move || {
                    if loading.get() {
                        view! { <p>{"Loading product details..."}</p> }.into_any()
                    } else {
                        view! {
                            <>
                                {priced
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let line_total = item.line_total();
                                        view! {
                                            <div class="checkout-item">
                                                <div>
                                                    <strong>{item.product_name}</strong>
                                                    <p class="checkout-item__option">
                                                        {format!("Option: {} × {}", item.option_value, item.quantity)}
                                                    </p>
                                                </div>
                                                <div class="checkout-item__total">{format_chf(line_total)}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </>
                        }
                        .into_any()
                    }
                }}
            </div>

            <div class="total-section">
                <strong>
                    {move || format!("Total: {}", format_chf(total_in_order(&priced.get())))}
                </strong>
            </div>

            <div class="checkout-actions">
                <button
                    class="button button--primary"
                    on:click=handle_confirm
                    disabled=move || confirm_busy() || loading.get()
                >
                    {icon("cart")}
                    {move || if confirm_busy() { "Placing order..." } else { "Confirm Order" }}
                </button>
                <button class="button button--secondary" on:click=move |_| navigate::goto("/")>
                    {icon("cancel")}
                    {"Back to Gallery"}
                </button>
            </div>

            <Show when=move || !orders.get().is_empty()>
                <div class="recent-orders">
                    <h3>{"Recent Orders"}</h3>
                    {move || {
                        orders
                            .get()
                            .into_iter()
                            .map(|order| {
                                let total = order
                                    .total_price
                                    .map(format_chf)
                                    .unwrap_or_else(|| "-".to_string());
                                let when = order
                                    .timestamp
                                    .as_deref()
                                    .map(format_timestamp)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <div class="recent-orders__row">
                                        <span>{format!("#{}", order.id)}</span>
                                        <span>{order.status}</span>
                                        <span>{total}</span>
                                        <span>{when}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
