//! Paginated Resource Screen
//!
//! List + form state for one collection, and the async flows that drive it
//! against a `ResourceBackend`. Every successful write is followed by a
//! refetch of the current page; the list is never patched locally.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::models::{Page, Pagination};
use crate::resource::{Mutation, Resource, ResourceBackend};

/// Screen lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Idle,
    Loading,
    Loaded,
    /// List fetch failed with this message
    Error(String),
}

/// Open create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm<F> {
    /// Id of the record being edited; `None` when creating
    pub editing: Option<String>,
    pub data: F,
    /// A create/update request is in flight
    pub submitting: bool,
}

/// Whether the user confirmed a destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

pub struct ResourceScreen<R: Resource> {
    /// Exactly the records of the last successful page response
    pub records: Vec<R::Record>,
    pub pagination: Pagination,
    pub state: ScreenState,
    pub form: Option<EditForm<R::Form>>,
}

impl<R: Resource> ResourceScreen<R> {
    pub fn new(limit: u32) -> Self {
        Self {
            records: Vec::new(),
            pagination: Pagination::initial(limit.max(1)),
            state: ScreenState::Idle,
            form: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.page
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.pagination.has_prev().then(|| self.pagination.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.pagination.has_next().then(|| self.pagination.page + 1)
    }

    /// Enter LOADING; returns the (page, limit) to request
    pub fn begin_list(&mut self, page: u32) -> (u32, u32) {
        self.state = ScreenState::Loading;
        (page.max(1), self.pagination.limit.max(1))
    }

    pub fn finish_list(&mut self, result: Result<Page<R::Record>, ApiError>) {
        match result {
            Ok(page) => {
                self.records = page.items;
                self.pagination = page.pagination;
                self.state = ScreenState::Loaded;
            }
            Err(e) => {
                self.state = ScreenState::Error(e.message());
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form = Some(EditForm { editing: None, data: R::Form::default(), submitting: false });
    }

    pub fn open_edit(&mut self, record: &R::Record) {
        self.form = Some(EditForm {
            editing: Some(R::id(record).to_string()),
            data: R::form_from(record),
            submitting: false,
        });
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.form.as_ref().is_some_and(|f| f.submitting)
    }

    /// Build the write for the open form and mark it in flight.
    ///
    /// `Ok(None)` when no form is open or a submit is already in flight.
    pub fn begin_submit(&mut self) -> Result<Option<Mutation>, ApiError> {
        let Some(form) = self.form.as_mut() else {
            return Ok(None);
        };
        if form.submitting {
            return Ok(None);
        }
        let payload = R::payload(&form.data, form.editing.is_some())?;
        form.submitting = true;
        Ok(Some(match &form.editing {
            Some(id) => Mutation::Update { id: id.clone(), payload },
            None => Mutation::Create(payload),
        }))
    }

    /// Settle a submit. On success the form closes and the page to refetch
    /// is returned; on failure the form stays open for correction.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) -> Option<u32> {
        match result {
            Ok(()) => {
                self.form = None;
                Some(self.current_page())
            }
            Err(_) => {
                if let Some(form) = self.form.as_mut() {
                    form.submitting = false;
                }
                None
            }
        }
    }
}

/// Mutable access to a screen held in some cell (a signal, a `RefCell`).
///
/// Returns `None` when the cell is gone, e.g. the view was unmounted.
pub trait ScreenCell {
    type Resource: Resource;

    fn with_screen<T>(&self, f: impl FnOnce(&mut ResourceScreen<Self::Resource>) -> T) -> Option<T>;
}

impl<R: Resource> ScreenCell for RwSignal<ResourceScreen<R>>
where
    ResourceScreen<R>: Send + Sync,
{
    type Resource = R;

    fn with_screen<T>(&self, f: impl FnOnce(&mut ResourceScreen<R>) -> T) -> Option<T> {
        self.try_update(f)
    }
}

impl<R: Resource> ScreenCell for RefCell<ResourceScreen<R>> {
    type Resource = R;

    fn with_screen<T>(&self, f: impl FnOnce(&mut ResourceScreen<R>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch `page` and replace the list with the response.
///
/// Failures land in `ScreenState::Error` and are also returned.
pub async fn load_page<S, B>(cell: &S, backend: &B, page: u32) -> Result<(), ApiError>
where
    S: ScreenCell,
    B: ResourceBackend<S::Resource>,
{
    let Some((page, limit)) = cell.with_screen(|s| s.begin_list(page)) else {
        return Ok(());
    };
    let key = <S::Resource as Resource>::LIST_KEY;
    log::debug!("[SCREEN] Loading {} page {} (limit {})", key, page, limit);
    let result = backend.list(page, limit).await;
    let outcome = result.as_ref().map(|_| ()).map_err(|e| e.clone());
    if let Err(e) = &outcome {
        log::warn!("[SCREEN] Failed to load {}: {}", key, e);
    }
    cell.with_screen(|s| s.finish_list(result));
    outcome
}

/// Submit the open form, then refetch the current page on success.
///
/// Returns `Ok(false)` when nothing was sent.
pub async fn submit_form<S, B>(cell: &S, backend: &B) -> Result<bool, ApiError>
where
    S: ScreenCell,
    B: ResourceBackend<S::Resource>,
{
    let Some(mutation) = cell.with_screen(|s| s.begin_submit()).transpose()?.flatten() else {
        return Ok(false);
    };
    let result = backend.apply(mutation).await;
    let refetch = cell.with_screen(|s| s.finish_submit(&result)).flatten();
    result?;
    if let Some(page) = refetch {
        let _ = load_page(cell, backend, page).await;
    }
    Ok(true)
}

/// Delete a record once confirmed, then refetch the current page.
///
/// A declined confirmation sends nothing and returns `Ok(false)`.
pub async fn delete_record<S, B>(
    cell: &S,
    backend: &B,
    id: String,
    confirmation: Confirmation,
) -> Result<bool, ApiError>
where
    S: ScreenCell,
    B: ResourceBackend<S::Resource>,
{
    if confirmation == Confirmation::Declined {
        return Ok(false);
    }
    backend.apply(Mutation::Delete(id)).await?;
    if let Some(page) = cell.with_screen(|s| s.current_page()) {
        let _ = load_page(cell, backend, page).await;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, UserStatus};
    use crate::resource::{ItemForm, Items, Resource, Users};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::marker::PhantomData;

    /// In-memory collection that stores raw documents like the real backend
    struct MemoryBackend<R> {
        docs: RefCell<Vec<Value>>,
        next_id: RefCell<u32>,
        calls: RefCell<Vec<String>>,
        fail_next: RefCell<Option<ApiError>>,
        _resource: PhantomData<R>,
    }

    impl<R> MemoryBackend<R> {
        fn new() -> Self {
            Self {
                docs: RefCell::new(Vec::new()),
                next_id: RefCell::new(1),
                calls: RefCell::new(Vec::new()),
                fail_next: RefCell::new(None),
                _resource: PhantomData,
            }
        }

        fn insert(&self, mut doc: Value) -> String {
            let id = {
                let mut next = self.next_id.borrow_mut();
                let id = format!("id{}", *next);
                *next += 1;
                id
            };
            doc["_id"] = Value::String(id.clone());
            self.docs.borrow_mut().push(doc);
            id
        }

        fn doc(&self, id: &str) -> Option<Value> {
            self.docs.borrow().iter().find(|d| d["_id"] == id).cloned()
        }

        fn fail_with(&self, err: ApiError) {
            *self.fail_next.borrow_mut() = Some(err);
        }

        fn take_failure(&self) -> Result<(), ApiError> {
            match self.fail_next.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl<R: Resource> ResourceBackend<R> for MemoryBackend<R> {
        async fn list(&self, page: u32, limit: u32) -> Result<Page<R::Record>, ApiError> {
            self.calls.borrow_mut().push(format!("list {} {}", page, limit));
            self.take_failure()?;
            let docs = self.docs.borrow();
            let total = docs.len() as u32;
            let total_pages = total.div_ceil(limit);
            let items = docs
                .iter()
                .skip(((page - 1) * limit) as usize)
                .take(limit as usize)
                .cloned()
                .collect::<Vec<_>>();
            let mut body = json!({
                "pagination": {"page": page, "limit": limit, "total": total, "totalPages": total_pages},
            });
            body[R::LIST_KEY] = Value::Array(items);
            Page::from_envelope(body, R::LIST_KEY)
        }

        async fn apply(&self, mutation: Mutation) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(match &mutation {
                Mutation::Create(_) => "create".to_string(),
                Mutation::Update { id, .. } => format!("update {}", id),
                Mutation::Delete(id) => format!("delete {}", id),
            });
            self.take_failure()?;
            match mutation {
                Mutation::Create(doc) => {
                    self.insert(doc);
                }
                Mutation::Update { id, payload } => {
                    let mut docs = self.docs.borrow_mut();
                    let doc = docs.iter_mut().find(|d| d["_id"] == id.as_str()).ok_or_else(|| {
                        ApiError::Status { status: 404, message: "Not found".to_string() }
                    })?;
                    if let (Some(target), Value::Object(fields)) = (doc.as_object_mut(), payload) {
                        target.extend(fields);
                    }
                }
                Mutation::Delete(id) => {
                    self.docs.borrow_mut().retain(|d| d["_id"] != id.as_str());
                }
            }
            Ok(())
        }
    }

    fn item_doc(n: u32) -> Value {
        json!({"itemName": format!("Item {}", n), "itemCategory": "Misc", "itemPrice": n, "status": "ACTIVE"})
    }

    fn seeded_items(count: u32) -> MemoryBackend<Items> {
        let backend = MemoryBackend::new();
        for n in 1..=count {
            backend.insert(item_doc(n));
        }
        backend
    }

    fn item_screen() -> RefCell<ResourceScreen<Items>> {
        RefCell::new(ResourceScreen::new(5))
    }

    #[test]
    fn test_twelve_items_first_page() {
        let backend = seeded_items(12);
        let screen = item_screen();

        block_on(load_page(&screen, &backend, 1)).unwrap();

        let s = screen.borrow();
        assert_eq!(s.state, ScreenState::Loaded);
        assert_eq!(s.records.len(), 5);
        assert_eq!(s.pagination.total_pages, 3);
        assert_eq!(s.prev_page(), None);
        assert_eq!(s.next_page(), Some(2));
    }

    #[test]
    fn test_every_page_respects_limit() {
        let backend = seeded_items(12);
        let screen = item_screen();
        block_on(load_page(&screen, &backend, 1)).unwrap();
        let total_pages = screen.borrow().pagination.total_pages;

        for p in 1..=total_pages {
            block_on(load_page(&screen, &backend, p)).unwrap();
            let s = screen.borrow();
            assert!(s.records.len() <= s.pagination.limit as usize);
            assert_eq!(s.current_page(), p);
        }
        let last = screen.borrow();
        assert_eq!(last.records.len(), 2);
        assert_eq!(last.next_page(), None);
        assert_eq!(last.prev_page(), Some(2));
    }

    #[test]
    fn test_list_replaces_previous_page() {
        let backend = seeded_items(7);
        let screen = item_screen();
        block_on(load_page(&screen, &backend, 1)).unwrap();
        block_on(load_page(&screen, &backend, 2)).unwrap();

        let names: Vec<String> = screen.borrow().records.iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["Item 6", "Item 7"]);
    }

    #[test]
    fn test_list_failure_sets_error_state() {
        let backend = seeded_items(3);
        backend.fail_with(ApiError::Status { status: 500, message: "Database offline".to_string() });
        let screen = item_screen();

        let result = block_on(load_page(&screen, &backend, 1));

        assert!(result.is_err());
        assert_eq!(screen.borrow().state, ScreenState::Error("Database offline".to_string()));

        // Retry succeeds
        block_on(load_page(&screen, &backend, 1)).unwrap();
        assert_eq!(screen.borrow().state, ScreenState::Loaded);
        assert_eq!(screen.borrow().records.len(), 3);
    }

    #[test]
    fn test_create_refetches_and_appears_once() {
        let backend = seeded_items(2);
        let screen = item_screen();
        block_on(load_page(&screen, &backend, 1)).unwrap();

        {
            let mut s = screen.borrow_mut();
            s.open_create();
            s.form.as_mut().unwrap().data = ItemForm {
                name: "Keyboard".to_string(),
                category: "Electronics".to_string(),
                price: "49.90".to_string(),
                status: ItemStatus::Active,
            };
        }
        let sent = block_on(submit_form(&screen, &backend)).unwrap();

        assert!(sent);
        let s = screen.borrow();
        assert!(s.form.is_none());
        assert_eq!(s.records.iter().filter(|i| i.name == "Keyboard").count(), 1);
        assert_eq!(*backend.calls.borrow(), vec!["list 1 5", "create", "list 1 5"]);
    }

    #[test]
    fn test_double_submit_is_ignored_while_in_flight() {
        let mut screen = ResourceScreen::<Items>::new(5);
        screen.open_create();
        screen.form.as_mut().unwrap().data = ItemForm {
            name: "Lamp".to_string(),
            category: "Home".to_string(),
            price: "10".to_string(),
            status: ItemStatus::Active,
        };

        assert!(matches!(screen.begin_submit(), Ok(Some(Mutation::Create(_)))));
        assert!(screen.is_submitting());
        assert_eq!(screen.begin_submit(), Ok(None));
    }

    #[test]
    fn test_failed_submit_keeps_form_open() {
        let backend = seeded_items(1);
        backend.fail_with(ApiError::Status { status: 409, message: "Duplicate item".to_string() });
        let screen = item_screen();
        {
            let mut s = screen.borrow_mut();
            s.open_create();
            s.form.as_mut().unwrap().data = ItemForm {
                name: "Item 1".to_string(),
                category: "Misc".to_string(),
                price: "1".to_string(),
                status: ItemStatus::Active,
            };
        }

        let err = block_on(submit_form(&screen, &backend)).unwrap_err();

        assert_eq!(err.message(), "Duplicate item");
        let s = screen.borrow();
        let form = s.form.as_ref().expect("form stays open");
        assert!(!form.submitting);
        assert_eq!(form.data.name, "Item 1");
        assert_eq!(*backend.calls.borrow(), vec!["create"]);
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let backend = seeded_items(1);
        let screen = item_screen();
        screen.borrow_mut().open_create();

        let err = block_on(submit_form(&screen, &backend)).unwrap_err();

        assert!(matches!(err, ApiError::Invalid(_)));
        assert!(backend.calls.borrow().is_empty());
        assert!(!screen.borrow().is_submitting());
    }

    #[test]
    fn test_update_with_blank_password_keeps_stored_password() {
        let backend = MemoryBackend::<Users>::new();
        let id = backend.insert(json!({
            "username": "ann", "password": "original", "email": "ann@example.com",
            "firstname": "Ann", "lastname": "Lee", "status": "ACTIVE"
        }));
        let screen = RefCell::new(ResourceScreen::<Users>::new(10));
        block_on(load_page(&screen, &backend, 1)).unwrap();

        {
            let mut s = screen.borrow_mut();
            let user = s.records[0].clone();
            s.open_edit(&user);
            let form = &mut s.form.as_mut().unwrap().data;
            assert!(form.password.is_empty());
            form.status = UserStatus::Suspended;
        }
        block_on(submit_form(&screen, &backend)).unwrap();

        let doc = backend.doc(&id).unwrap();
        assert_eq!(doc["password"], "original");
        assert_eq!(doc["status"], "SUSPENDED");
        assert_eq!(screen.borrow().records[0].status, UserStatus::Suspended);
    }

    #[test]
    fn test_delete_without_confirmation_leaves_list() {
        let backend = seeded_items(3);
        let screen = item_screen();
        block_on(load_page(&screen, &backend, 1)).unwrap();
        let id = screen.borrow().records[0].id.clone();

        let sent = block_on(delete_record(&screen, &backend, id, Confirmation::Declined)).unwrap();

        assert!(!sent);
        assert_eq!(screen.borrow().records.len(), 3);
        assert_eq!(*backend.calls.borrow(), vec!["list 1 5"]);
    }

    #[test]
    fn test_confirmed_delete_refetches_current_page() {
        let backend = seeded_items(7);
        let screen = item_screen();
        block_on(load_page(&screen, &backend, 2)).unwrap();
        let id = screen.borrow().records[0].id.clone();

        block_on(delete_record(&screen, &backend, id.clone(), Confirmation::Confirmed)).unwrap();

        let s = screen.borrow();
        assert_eq!(s.current_page(), 2);
        assert_eq!(s.records.len(), 1);
        assert!(backend.doc(&id).is_none());
        assert_eq!(s.pagination.total, 6);
    }

    #[test]
    fn test_failed_delete_leaves_list_untouched() {
        let backend = seeded_items(3);
        let screen = item_screen();
        block_on(load_page(&screen, &backend, 1)).unwrap();
        backend.fail_with(ApiError::Status { status: 403, message: "Forbidden".to_string() });
        let id = screen.borrow().records[1].id.clone();

        let err = block_on(delete_record(&screen, &backend, id, Confirmation::Confirmed)).unwrap_err();

        assert_eq!(err.message(), "Forbidden");
        assert_eq!(screen.borrow().records.len(), 3);
        assert_eq!(screen.borrow().state, ScreenState::Loaded);
    }
}
