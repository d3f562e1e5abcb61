//! Item Management Screen
//!
//! Paginated inventory table with create/edit modal.

use leptos::prelude::*;

use super::{status_class, use_screen, DeleteConfirmButton, PaginationBar, ScreenHandle};
use crate::context::use_config;
use crate::models::{Item, ItemStatus};
use crate::resource::Items;
use crate::screen::{Confirmation, ScreenState};

#[component]
pub fn ItemManagement() -> impl IntoView {
    let config = use_config();
    let handle = use_screen::<Items>(config.item_page_limit);

    let body = move || {
        let state = handle.screen.with(|s| s.state.clone());
        match state {
            ScreenState::Idle | ScreenState::Loading => {
                view! { <div class="loader">"Loading inventory..."</div> }.into_any()
            }
            ScreenState::Error(message) => view! {
                <div class="error-display">
                    <p>"⚠️ " {message}</p>
                    <button class="btn-retry" on:click=move |_| handle.reload()>
                        "Retry Connection"
                    </button>
                </div>
            }
            .into_any(),
            ScreenState::Loaded => {
                let items = handle.screen.with(|s| s.records.clone());
                if items.is_empty() {
                    view! { <div class="no-data">"No items found. Start by adding one!"</div> }.into_any()
                } else {
                    view! { <ItemTable items=items handle=handle /> }.into_any()
                }
            }
        }
    };

    view! {
        <div class="item-container">
            <header class="item-header">
                <h1>"Inventory Management"</h1>
                <button class="btn-add" on:click=move |_| handle.open_create()>
                    "+ Add New Item"
                </button>
            </header>

            <div class="table-container">{body}</div>

            <PaginationBar
                pagination=Signal::derive(move || handle.screen.with(|s| s.pagination))
                on_page=move |page: u32| handle.load(page)
            />

            <Show when=move || handle.is_form_open()>
                <ItemFormModal handle=handle />
            </Show>
        </div>
    }
}

#[component]
fn ItemTable(items: Vec<Item>, handle: ScreenHandle<Items>) -> impl IntoView {
    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th>"Item Name"</th>
                    <th>"Category"</th>
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|item| {
                        let id = item.id.clone();
                        let record = item.clone();
                        view! {
                            <tr>
                                <td>
                                    <div class="item-name-cell">{item.name.clone()}</div>
                                </td>
                                <td>
                                    <span class="category-pill">{item.category.clone()}</span>
                                </td>
                                <td class="price-cell">{item.display_price()}</td>
                                <td>
                                    <span class=status_class(item.status.as_str())>
                                        {item.status.as_str()}
                                    </span>
                                </td>
                                <td>
                                    <div class="table-actions">
                                        <button
                                            class="btn-edit-sm"
                                            on:click=move |_| handle.open_edit(&record)
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="btn-delete-sm"
                                            on_confirm=move |choice: Confirmation| handle.delete(id.clone(), choice)
                                        />
                                    </div>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ItemFormModal(handle: ScreenHandle<Items>) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.submit();
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-content">
                <h2>{move || if handle.is_editing() { "Edit Item" } else { "Add New Item" }}</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Item Name"</label>
                        <input
                            type="text"
                            name="itemName"
                            required=true
                            placeholder="e.g. Wireless Mouse"
                            prop:value=move || handle.form_value(|f| f.name.clone()).unwrap_or_default()
                            on:input=move |ev| handle.edit_form(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Category"</label>
                        <input
                            type="text"
                            name="itemCategory"
                            required=true
                            placeholder="e.g. Electronics"
                            prop:value=move || handle.form_value(|f| f.category.clone()).unwrap_or_default()
                            on:input=move |ev| handle.edit_form(|f| f.category = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Price ($)"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            name="itemPrice"
                            required=true
                            placeholder="0.00"
                            prop:value=move || handle.form_value(|f| f.price.clone()).unwrap_or_default()
                            on:input=move |ev| handle.edit_form(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            name="status"
                            on:change=move |ev| {
                                if let Some(status) = ItemStatus::parse(&event_target_value(&ev)) {
                                    handle.edit_form(|f| f.status = status);
                                }
                            }
                        >
                            {ItemStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            prop:selected=move || {
                                                handle.form_value(|f| f.status == status).unwrap_or(false)
                                            }
                                        >
                                            {status.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-cancel" on:click=move |_| handle.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-save" disabled=move || handle.is_submitting()>
                            {move || if handle.is_editing() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
