use contracts::domain::product::Product;
use leptos::html;
use leptos::prelude::*;

use super::view_model::{ProductDetailsViewModel, SAVE_BUSY_KEY};
use crate::shared::busy::BusyService;
use crate::shared::dialog;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(
    prefill: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let busy = use_context::<BusyService>().expect("BusyService not found in context");
    let vm = ProductDetailsViewModel::new();
    if let Some(product) = prefill {
        vm.prefill(product);
    }

    let file_input: NodeRef<html::Input> = NodeRef::new();
    let (drag_over, set_drag_over) = signal(false);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    let attach = {
        let vm = vm.clone();
        move |file: web_sys::File| {
            if let Err(msg) = vm.attach_image(file) {
                dialog::alert(msg);
            }
        }
    };

    let handle_drop = {
        let attach = attach.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            set_drag_over.set(false);
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|f| f.get(0))
            {
                attach(file);
            }
        }
    };

    let handle_file_pick = {
        let attach = attach.clone();
        move |ev: leptos::ev::Event| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|f| f.get(0)) {
                attach(file);
            }
        }
    };

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Product" } else { "Add Product" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="product-url">{"Product URL *"}</label>
                    <input
                        type="text"
                        id="product-url"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().product_url
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.product_url = event_target_value(&ev));
                            }
                        }
                        placeholder="https://www.dampfi.ch/..."
                    />
                </div>

                <div class="form-group">
                    <label for="product-name">{"Name *"}</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Product name"
                    />
                </div>

                <div class="form-group">
                    <label>{"Image"}</label>
                    <div
                        class="image-upload-area"
                        class=("image-upload-area--active", move || drag_over.get())
                        on:click=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                input.click();
                            }
                        }
                        on:dragover=move |ev| {
                            ev.prevent_default();
                            set_drag_over.set(true);
                        }
                        on:dragleave=move |_| set_drag_over.set(false)
                        on:drop=handle_drop
                    >
                        {"Drop an image here or click to browse"}
                    </div>
                    <input
                        type="file"
                        accept="image/*"
                        style="display: none;"
                        node_ref=file_input
                        on:change=handle_file_pick
                    />
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.preview.get().map(|src| {
                                view! { <img class="image-preview" src=src alt="Preview" /> }
                            })
                        }
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(busy, on_saved)
                    }
                    disabled=move || busy.is_busy(SAVE_BUSY_KEY)
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save" } else { "Create" }
                    }
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
