use leptos::prelude::*;
use leptos_router::components::A;

/// Application shell: top navigation plus the routed page content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <div class="top-header__brand">{"Product Gallery"}</div>
                <nav class="top-header__nav">
                    <A href="/">{"Gallery"}</A>
                    <A href="/product-management">{"Product Management"}</A>
                </nav>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
