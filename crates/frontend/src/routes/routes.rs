use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::product::ui::gallery::GalleryPage;
use crate::domain::product::ui::list::ProductManagementPage;
use crate::layout::Shell;
use crate::usecases::checkout_review::CheckoutReviewPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="content">
            <h2>{"Page not found"}</h2>
            <a href="/">{"Back to gallery"}</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=GalleryPage />
                    <Route path=path!("/product-management") view=ProductManagementPage />
                    <Route path=path!("/checkout/review") view=CheckoutReviewPage />
                </Routes>
            </Shell>
        </Router>
    }
}
