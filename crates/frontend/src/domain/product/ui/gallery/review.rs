//! Selection review modal: the last stop before the checkout handoff.

use contracts::checkout::UserId;
use leptos::prelude::*;

use crate::shared::dialog;
use crate::shared::handoff::CheckoutHandoff;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::money::format_chf;
use crate::shared::navigate;
use crate::shared::state::SelectionService;

#[component]
#[allow(non_snake_case)]
pub fn SelectionReview(handle: ModalHandle) -> impl IntoView {
    let selection = use_context::<SelectionService>().expect("SelectionService not found");
    let (user_raw, set_user_raw) = signal(String::new());

    let handle_clear = {
        let handle = handle.clone();
        move |_| {
            if dialog::confirm("Clear all selected items?") {
                selection.clear();
                handle.close();
            }
        }
    };

    let handle_proceed = move |_| {
        // The user must come from the small enumerated range; anything else
        // is rejected here, before any navigation.
        let user_id = match UserId::parse(&user_raw.get()) {
            Ok(id) => id,
            Err(e) => {
                dialog::alert(&e.to_string());
                return;
            }
        };

        let items = selection.snapshot().to_checkout_items();
        if items.is_empty() {
            dialog::alert("No items selected");
            return;
        }

        let handoff = CheckoutHandoff { user_id, items };
        navigate::goto(&format!("/checkout/review?{}", handoff.to_query()));
    };

    let handle_cancel = {
        let handle = handle.clone();
        move |_| handle.close()
    };

    view! {
        <div class="details-container selection-review">
            <div class="details-header">
                <h3>{"Your Selection"}</h3>
            </div>

            <div class="selection-list">
                {move || {
                    selection.with_entries(|sel| {
                        sel.entries()
                            .map(|e| {
                                view! {
                                    <div class="selection-item">
                                        <div>
                                            <strong>{e.product_name.clone()}</strong>
                                            <p>{format!("{} × {}", e.option_label, e.quantity)}</p>
                                        </div>
                                        <div>{format_chf(e.line_total())}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
                <div class="total-section">
                    <strong>{move || format!("Total: {}", format_chf(selection.total()))}</strong>
                </div>
            </div>

            <div class="form-group">
                <label for="user-id">{"Order as user"}</label>
                <select
                    id="user-id"
                    on:change=move |ev| set_user_raw.set(event_target_value(&ev))
                >
                    <option value="">{"Select user..."}</option>
                    {(1..=5)
                        .map(|n| view! { <option value=n.to_string()>{format!("User {n}")}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=handle_proceed>
                    {icon("cart")}
                    {"Proceed to Checkout"}
                </button>
                <button class="button button--secondary" on:click=handle_clear>
                    {icon("delete")}
                    {"Clear Selection"}
                </button>
                <button class="button button--secondary" on:click=handle_cancel>
                    {icon("cancel")}
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
