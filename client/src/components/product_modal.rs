//! Create/edit product form in a modal dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visible while the catalog's edit session is open. The form text is reset
//! from the session each time one opens; per-field messages come from the
//! catalog's `field_errors`, which both number parsing here and catalog
//! validation write to.

use catalog::{CatalogState, EditSession, Field};
use leptos::prelude::*;

use crate::state::auth::{SessionHandle, current_backend};
use crate::state::products;
use crate::util::product_form::ProductForm;

#[component]
pub fn ProductModal() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let auth_session = expect_context::<SessionHandle>();
    let form = RwSignal::new(ProductForm::default());
    let saving = RwSignal::new(false);

    let session = Memo::new(move |_| catalog.with(|s| s.session.clone()));
    Effect::new(move || {
        let session = session.get();
        if session.is_open() {
            form.set(ProductForm::for_session(&session));
        }
    });

    let is_open = move || session.with(EditSession::is_open);
    let title = move || {
        if matches!(session.get(), EditSession::Editing(_)) { "Edit product" } else { "New product" }
    };
    // The form stays up until the request it sent has been answered.
    let on_cancel = move |_| {
        if !saving.get_untracked() {
            catalog.update(CatalogState::close_session);
        }
    };

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = match form.get_untracked().to_draft() {
            Ok(draft) => draft,
            Err(errors) => {
                catalog.update(|s| s.field_errors = errors);
                return;
            }
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let backend = current_backend(auth_session).await;
            // Failures are already recorded on the catalog state.
            let _ = products::save(catalog, &backend, draft).await;
            saving.set(false);
        });
    };

    view! {
        <Show when=is_open>
            <div class="dialog-backdrop" on:click=on_cancel>
                <form
                    class="dialog product-modal"
                    on:click=move |ev| ev.stop_propagation()
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <h2>{title}</h2>
                    <FormField
                        label="Name"
                        field=Field::Name
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    />
                    <FormField
                        label="Description"
                        field=Field::Description
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    />
                    <FormField
                        label="Price"
                        field=Field::Price
                        kind="text"
                        value=Signal::derive(move || form.with(|f| f.price.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.price = v))
                    />
                    <FormField
                        label="Category"
                        field=Field::Category
                        value=Signal::derive(move || form.with(|f| f.category_id.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.category_id = v))
                    />
                    <FormField
                        label="Stock"
                        field=Field::StockQuantity
                        kind="number"
                        value=Signal::derive(move || form.with(|f| f.stock_quantity.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.stock_quantity = v))
                    />
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_cancel disabled=move || saving.get()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

/// Labeled input with its validation message.
#[component]
fn FormField(
    label: &'static str,
    field: Field,
    #[prop(default = "text")] kind: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let error = move || catalog.with(|s| s.field_errors.message_for(field).map(ToOwned::to_owned));

    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                class:dialog__input--invalid=move || error().is_some()
                type=kind
                name=field.as_str()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error().is_some()>
                <span class="dialog__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
