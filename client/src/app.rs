//! Root application component with routing and context providers.

use catalog::CatalogState;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    delete_dialog::DeleteDialog, notice_banner::NoticeBanner, product_modal::ProductModal, sidebar::Sidebar,
};
use crate::net::keycloak;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, low_stock::LowStockPage, products::ProductsPage,
};
use crate::state::auth::{AuthState, SessionHandle};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=keycloak::adapter_script_url()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, catalog and session contexts, starts the sign-in
/// handshake in the browser, and lays out sidebar + routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let catalog = RwSignal::new(CatalogState::default());
    let session: SessionHandle = StoredValue::new_local(None);

    provide_context(auth);
    provide_context(catalog);
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(sign_in(auth, catalog, session));

    view! {
        <Title text="HypeStore"/>

        <Router>
            <div class="app-layout">
                <Sidebar/>
                <main class="app-main">
                    <NoticeBanner/>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("produtos") view=ProductsPage/>
                        <Route path=StaticSegment("categorias") view=CategoriesPage/>
                        <Route path=StaticSegment("estoque-baixo") view=LowStockPage/>
                    </Routes>
                </main>
            </div>
            <ProductModal/>
            <DeleteDialog/>
        </Router>
    }
}

/// Run the login-required handshake, then load the catalog once signed in.
#[cfg(feature = "hydrate")]
async fn sign_in(auth: RwSignal<AuthState>, catalog: RwSignal<CatalogState>, session: SessionHandle) {
    match keycloak::connect(&keycloak::KeycloakConfig::from_build_env()).await {
        Ok(adapter) => {
            let snapshot = AuthState::from_gateway(&adapter);
            let backend = crate::state::auth::backend_for(&adapter);
            session.set_value(Some(adapter));
            let authenticated = snapshot.is_authenticated();
            auth.set(snapshot);
            if authenticated {
                crate::state::products::reload(catalog, &backend).await;
            }
        }
        Err(message) => {
            log::error!("keycloak sign-in failed: {message}");
            auth.set(AuthState::failed(message));
        }
    }
}
