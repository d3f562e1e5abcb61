//! Screen Handle
//!
//! Reactive wrapper that binds a `ResourceScreen` to the HTTP gateway.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Gateway;
use crate::browser;
use crate::context::use_gateway;
use crate::error::ApiError;
use crate::resource::Resource;
use crate::screen::{self, Confirmation, ResourceScreen};

/// Copyable handle to one resource screen
pub struct ScreenHandle<R: Resource> {
    pub screen: RwSignal<ResourceScreen<R>>,
    gateway: StoredValue<Gateway>,
}

impl<R: Resource> Clone for ScreenHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ScreenHandle<R> {}

/// Create the screen state and request page 1
pub fn use_screen<R: Resource>(limit: u32) -> ScreenHandle<R> {
    let handle = ScreenHandle {
        screen: RwSignal::new(ResourceScreen::new(limit)),
        gateway: use_gateway(),
    };
    handle.load(1);
    handle
}

/// Mutation errors are shown in a blocking alert; a 401 has already ended
/// the session and the guard takes over.
fn report(err: ApiError) {
    if !err.is_unauthorized() {
        browser::alert(&format!("Error: {}", err.message()));
    }
}

impl<R: Resource> ScreenHandle<R> {
    pub fn load(self, page: u32) {
        let gateway = self.gateway.get_value();
        spawn_local(async move {
            let _ = screen::load_page(&self.screen, &gateway, page).await;
        });
    }

    /// Re-request the page currently shown
    pub fn reload(self) {
        let page = self.screen.with_untracked(|s| s.current_page());
        self.load(page);
    }

    pub fn submit(self) {
        let gateway = self.gateway.get_value();
        spawn_local(async move {
            if let Err(e) = screen::submit_form(&self.screen, &gateway).await {
                report(e);
            }
        });
    }

    pub fn delete(self, id: String, confirmation: Confirmation) {
        let gateway = self.gateway.get_value();
        spawn_local(async move {
            if let Err(e) = screen::delete_record(&self.screen, &gateway, id, confirmation).await {
                report(e);
            }
        });
    }

    pub fn open_create(self) {
        self.screen.update(|s| s.open_create());
    }

    pub fn open_edit(self, record: &R::Record) {
        self.screen.update(|s| s.open_edit(record));
    }

    pub fn close_form(self) {
        self.screen.update(|s| s.close_form());
    }

    pub fn edit_form(self, f: impl FnOnce(&mut R::Form)) {
        self.screen.update(|s| {
            if let Some(form) = s.form.as_mut() {
                f(&mut form.data);
            }
        });
    }

    /// Read a value from the open form (tracked)
    pub fn form_value<T>(self, f: impl FnOnce(&R::Form) -> T) -> Option<T> {
        self.screen.with(|s| s.form.as_ref().map(|form| f(&form.data)))
    }

    pub fn is_form_open(self) -> bool {
        self.screen.with(|s| s.form.is_some())
    }

    pub fn is_editing(self) -> bool {
        self.screen.with(|s| s.form.as_ref().is_some_and(|f| f.editing.is_some()))
    }

    pub fn is_submitting(self) -> bool {
        self.screen.with(|s| s.is_submitting())
    }
}
