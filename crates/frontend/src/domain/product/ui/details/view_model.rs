use contracts::domain::product::{Product, ProductId, SaveProductRequest};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::product::api;
use crate::shared::busy::BusyService;
use crate::shared::dialog;
use crate::shared::file_utils;

/// Busy key for the whole editor modal; create mode has no id yet, so the
/// guard is per modal rather than per record.
pub const SAVE_BUSY_KEY: &str = "product:save";

#[derive(Clone, Debug, Default)]
pub struct ProductForm {
    pub id: Option<ProductId>,
    pub product_url: String,
    pub name: String,
}

/// ViewModel for the product editor form.
///
/// The pending image is held as the picked `File` itself; the preview data
/// URL is derived from that same handle, so what the user sees is what the
/// upload step sends.
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    /// `data:` URL of the pending image, or the stored image URL in edit mode.
    pub preview: RwSignal<Option<String>>,
    pending_image: RwSignal<Option<web_sys::File>, LocalStorage>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            error: RwSignal::new(None),
            preview: RwSignal::new(None),
            pending_image: RwSignal::new_local(None),
        }
    }

    /// Edit mode: populate from the already-fetched record.
    pub fn prefill(&self, product: Product) {
        self.preview.set(api::image_url(&product));
        self.form.set(ProductForm {
            id: Some(product.id),
            product_url: product.product_url,
            name: product.name,
        });
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    fn validate_form(form: &ProductForm) -> Result<SaveProductRequest, &'static str> {
        let product_url = form.product_url.trim();
        let name = form.name.trim();
        if product_url.is_empty() || name.is_empty() {
            return Err("Please fill in all required fields");
        }
        Ok(SaveProductRequest {
            product_url: product_url.to_string(),
            name: name.to_string(),
        })
    }

    /// Register a picked/dropped file: preview it locally and queue it for
    /// the post-save upload.
    pub fn attach_image(&self, file: web_sys::File) -> Result<(), &'static str> {
        if !file_utils::is_image(&file) {
            return Err("Please select an image file");
        }

        self.pending_image.set(Some(file.clone()));
        let preview = self.preview;
        spawn_local(async move {
            match file_utils::read_as_data_url(&file).await {
                Ok(data_url) => preview.set(Some(data_url)),
                Err(e) => log::error!("Image preview failed: {}", e),
            }
        });
        Ok(())
    }

    /// Save the record, then upload the pending image if one is attached.
    ///
    /// The upload is the second phase of a two-phase write: by the time it
    /// runs the record is already saved, so its failure is reported as a
    /// warning and does not roll anything back.
    pub fn save_command(&self, busy: BusyService, on_saved: Callback<()>) {
        let request = match Self::validate_form(&self.form.get()) {
            Ok(r) => r,
            Err(msg) => {
                self.error.set(Some(msg.to_string()));
                return;
            }
        };

        if !busy.begin(SAVE_BUSY_KEY) {
            return;
        }

        let id = self.form.get_untracked().id;
        let pending_image = self.pending_image;
        let error = self.error;
        spawn_local(async move {
            let result = api::save_product(id, &request).await;
            let saved = match result {
                Ok(p) => p,
                Err(e) => {
                    busy.end(SAVE_BUSY_KEY);
                    // Leave the form as-is; the user can fix and resubmit.
                    error.set(Some(e));
                    return;
                }
            };

            if let Some(file) = pending_image.get_untracked() {
                if let Err(e) = api::upload_image(saved.id, &file).await {
                    log::warn!("Image upload failed after save: {}", e);
                    dialog::alert(&format!(
                        "Warning: Product saved but image upload failed: {}",
                        e
                    ));
                }
            }

            busy.end(SAVE_BUSY_KEY);
            dialog::alert("Product saved successfully!");
            on_saved.run(());
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        let form = ProductForm {
            id: None,
            product_url: "  ".to_string(),
            name: "Liquid".to_string(),
        };
        assert!(ProductDetailsViewModel::validate_form(&form).is_err());

        let form = ProductForm {
            id: None,
            product_url: "https://www.dampfi.ch/liquid".to_string(),
            name: "".to_string(),
        };
        assert!(ProductDetailsViewModel::validate_form(&form).is_err());
    }

    #[test]
    fn valid_form_is_trimmed() {
        let form = ProductForm {
            id: None,
            product_url: " https://www.dampfi.ch/liquid ".to_string(),
            name: " Liquid ".to_string(),
        };
        let req = ProductDetailsViewModel::validate_form(&form).unwrap();
        assert_eq!(req.product_url, "https://www.dampfi.ch/liquid");
        assert_eq!(req.name, "Liquid");
    }
}
