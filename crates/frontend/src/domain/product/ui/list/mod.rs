pub mod state;

use std::cmp::Ordering;

use contracts::domain::product::{Product, ProductId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use self::state::create_state;
use crate::domain::product::api;
use crate::domain::product::ui::details::ProductDetails;
use crate::shared::busy::BusyService;
use crate::shared::date_utils::format_timestamp;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::money::format_chf;
use crate::shared::navigate;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub product_url: String,
    pub price: Option<f64>,
    pub stock: &'static str,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            image_url: api::image_url(&p),
            stock: p.stock_status.label(),
            created_at: p
                .created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            name: p.name,
            product_url: p.product_url,
            price: p.price,
        }
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "product_url" => self
                .product_url
                .to_lowercase()
                .cmp(&other.product_url.to_lowercase()),
            "price" => self
                .price
                .unwrap_or(0.0)
                .partial_cmp(&other.price.unwrap_or(0.0))
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(other.stock),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductManagementPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let busy = use_context::<BusyService>().expect("BusyService not found in context");
    let state = create_state();
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(v) => {
                    let rows: Vec<ProductRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let open_details_modal = move |prefill: Option<Product>| {
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            Some("product-modal".to_string()),
            move |handle| {
                view! {
                    <ProductDetails
                        prefill=prefill.clone()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                navigate::reload();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let handle_create_new = move || {
        open_details_modal(None);
    };

    // Prefill from the server before opening, so the form never shows a
    // half-loaded record. The busy key stops a double click from firing
    // two fetches (and two modals).
    let handle_edit = move |id: ProductId| {
        let key = format!("product:{id}:edit");
        if !busy.begin(&key) {
            return;
        }
        spawn_local(async move {
            let result = api::fetch_product(id).await;
            busy.end(&key);
            match result {
                Ok(product) => open_details_modal(Some(product)),
                Err(e) => dialog::alert(&format!("Error loading product: {}", e)),
            }
        });
    };

    let handle_delete = move |id: ProductId| {
        if !dialog::confirm("Are you sure you want to delete this product?") {
            return;
        }
        let key = format!("product:{id}:delete");
        if !busy.begin(&key) {
            return;
        }
        spawn_local(async move {
            let result = api::delete_product(id).await;
            busy.end(&key);
            match result {
                Ok(()) => {
                    dialog::alert("Product deleted successfully");
                    navigate::reload();
                }
                Err(e) => dialog::alert(&format!("Error: {}", e)),
            }
        });
    };

    let handle_scrape = move |id: ProductId| {
        let key = format!("product:{id}:scrape");
        if !busy.begin(&key) {
            return;
        }
        spawn_local(async move {
            let result = api::scrape_product(id).await;
            busy.end(&key);
            match result {
                Ok(_) => {
                    dialog::alert("Metadata scraped successfully!");
                    navigate::reload();
                }
                Err(e) => dialog::alert(&format!("Error: {}", e)),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Product Management"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Add Product"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Image"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("product_url")>
                                "URL"
                                <span class={move || get_sort_class(&state.get().sort_field, "product_url")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "product_url", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("price")>
                                "Price"
                                <span class={move || get_sort_class(&state.get().sort_field, "price")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "price", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("stock")>
                                "Stock"
                                <span class={move || get_sort_class(&state.get().sort_field, "stock")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "stock", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Created"
                                <span class={move || get_sort_class(&state.get().sort_field, "created_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "created_at", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id = row.id;
                            let scrape_busy = move || busy.is_busy(&format!("product:{id}:scrape"));
                            let delete_busy = move || busy.is_busy(&format!("product:{id}:delete"));
                            let image_url = row.image_url.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        {match image_url {
                                            Some(src) => view! { <img src=src alt="" style="max-width: 48px; max-height: 48px;" /> }.into_any(),
                                            None => view! { <span>{"-"}</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.product_url}</td>
                                    <td class="table__cell">
                                        {row.price.map(format_chf).unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{row.stock}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--small" on:click=move |_| handle_edit(id)>
                                            {icon("edit")}
                                            {"Edit"}
                                        </button>
                                        <button
                                            class="button button--small"
                                            on:click=move |_| handle_delete(id)
                                            disabled=delete_busy
                                        >
                                            {icon("delete")}
                                            {"Delete"}
                                        </button>
                                        <button
                                            class="button button--small"
                                            on:click=move |_| handle_scrape(id)
                                            disabled=scrape_busy
                                        >
                                            {icon("download")}
                                            {move || if scrape_busy() { "Scraping..." } else { "Scrape Metadata" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Details is opened via ModalStackService
        </div>
    }
}
