//! Generic list page over a [`CrudResource`]
//!
//! Holds the fetched items, a client-side filter, and the current page.
//! Writes go through a [`Form`] first; invalid input never reaches the
//! network. Every successful write re-fetches the list.

use hms_client::CrudResource;

use crate::error::PageResult;
use crate::forms::{EditForm, Form};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side predicate over list items
pub trait ListFilter<T>: Default + Clone {
    fn matches(&self, item: &T) -> bool;
}

/// Filter that keeps everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<T> ListFilter<T> for NoFilter {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Case-insensitive substring match; blank needles match everything
pub fn text_matches(needle: Option<&str>, haystacks: &[&str]) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

pub struct CrudList<R: CrudResource, F: ListFilter<R::Item> = NoFilter> {
    resource: R,
    items: Vec<R::Item>,
    filter: F,
    page: usize,
    page_size: usize,
    loaded: bool,
}

impl<R, F> CrudList<R, F>
where
    R: CrudResource,
    F: ListFilter<R::Item>,
{
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            items: Vec::new(),
            filter: F::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            loaded: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Everything fetched, unfiltered
    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    /// Replace the items with the result of a server-side search
    pub fn replace_items(&mut self, items: Vec<R::Item>) {
        self.items = items;
        self.loaded = true;
        self.clamp_page();
    }

    // ========== Filtering ==========

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn visible(&self) -> Vec<&R::Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    // ========== Pagination ==========

    /// 1-based current page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Never less than 1, even for an empty list
    pub fn total_pages(&self) -> usize {
        self.visible().len().div_ceil(self.page_size).max(1)
    }

    pub fn page_items(&self) -> Vec<&R::Item> {
        self.visible()
            .into_iter()
            .skip((self.page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Returns whether the page changed
    pub fn next_page(&mut self) -> bool {
        let before = self.page;
        self.go_to_page(self.page + 1);
        self.page != before
    }

    pub fn prev_page(&mut self) -> bool {
        let before = self.page;
        self.go_to_page(self.page.saturating_sub(1));
        self.page != before
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    fn clamp_page(&mut self) {
        if self.page > self.total_pages() {
            self.page = 1;
        }
    }

    // ========== Remote operations ==========

    pub async fn load(&mut self) -> PageResult<usize> {
        let items = self.resource.list().await?;
        tracing::debug!(resource = R::NAME, count = items.len(), "List loaded");
        self.replace_items(items);
        Ok(self.items.len())
    }

    pub async fn get(&self, id: R::Id) -> PageResult<R::Item> {
        Ok(self.resource.get(id).await?)
    }

    pub async fn create<Fm>(&mut self, form: &Fm) -> PageResult<R::Item>
    where
        Fm: Form<Create = R::Create>,
    {
        let payload = form.to_create()?;
        let created = self.resource.create(&payload).await?;
        tracing::info!(resource = R::NAME, "Created");
        self.load().await?;
        Ok(created)
    }

    pub async fn update<Fm>(&mut self, id: R::Id, form: &Fm) -> PageResult<R::Item>
    where
        Fm: EditForm<Update = R::Update>,
    {
        let payload = form.to_update()?;
        let updated = self.resource.update(id, &payload).await?;
        tracing::info!(resource = R::NAME, %id, "Updated");
        self.load().await?;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: R::Id) -> PageResult<()> {
        self.resource.delete(id).await?;
        tracing::info!(resource = R::NAME, %id, "Deleted");
        self.load().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hms_client::ClientResult;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use validator::Validate;

    use crate::error::PageError;
    use crate::forms::FormErrors;

    #[derive(Default)]
    struct FakeResource {
        items: Mutex<Vec<u32>>,
        calls: AtomicUsize,
    }

    impl FakeResource {
        fn with(n: u32) -> Self {
            Self {
                items: Mutex::new((1..=n).collect()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CrudResource for FakeResource {
        type Item = u32;
        type Create = u32;
        type Update = u32;
        type Id = u32;

        const NAME: &'static str = "fake";

        async fn list(&self) -> ClientResult<Vec<u32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.lock().unwrap().clone())
        }

        async fn get(&self, id: u32) -> ClientResult<u32> {
            Ok(id)
        }

        async fn create(&self, data: &u32) -> ClientResult<u32> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.items.lock().unwrap().push(*data);
            Ok(*data)
        }

        async fn update(&self, _id: u32, data: &u32) -> ClientResult<u32> {
            Ok(*data)
        }

        async fn delete(&self, id: u32) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.items.lock().unwrap().retain(|i| *i != id);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct EvenOnly(bool);

    impl ListFilter<u32> for EvenOnly {
        fn matches(&self, item: &u32) -> bool {
            !self.0 || item % 2 == 0
        }
    }

    #[derive(Validate)]
    struct NumberForm {
        #[validate(range(min = 1))]
        value: u32,
    }

    impl Form for NumberForm {
        type Create = u32;

        fn to_create(&self) -> Result<u32, FormErrors> {
            self.check()?;
            Ok(self.value)
        }
    }

    #[tokio::test]
    async fn test_pagination_clamps() {
        let mut list: CrudList<FakeResource> =
            CrudList::new(FakeResource::with(25)).with_page_size(10);
        list.load().await.unwrap();

        assert_eq!(list.total_pages(), 3);
        assert_eq!(list.page_items(), vec![&1, &2, &3, &4, &5, &6, &7, &8, &9, &10]);

        list.go_to_page(99);
        assert_eq!(list.page(), 3);
        assert_eq!(list.page_items().len(), 5);
        assert!(!list.next_page());

        list.go_to_page(0);
        assert_eq!(list.page(), 1);
        assert!(!list.prev_page());
        assert!(list.next_page());
        assert_eq!(list.page(), 2);
    }

    #[tokio::test]
    async fn test_empty_list_has_one_page() {
        let mut list: CrudList<FakeResource> = CrudList::new(FakeResource::default());
        list.load().await.unwrap();
        assert_eq!(list.total_pages(), 1);
        assert!(list.page_items().is_empty());
    }

    #[tokio::test]
    async fn test_filter_resets_page_and_reload_clamps() {
        let mut list: CrudList<FakeResource, EvenOnly> =
            CrudList::new(FakeResource::with(30)).with_page_size(10);
        list.load().await.unwrap();
        list.go_to_page(3);

        list.set_filter(EvenOnly(true));
        assert_eq!(list.page(), 1);
        assert_eq!(list.visible().len(), 15);
        assert_eq!(list.total_pages(), 2);

        list.go_to_page(2);
        list.resource().items.lock().unwrap().truncate(4);
        list.load().await.unwrap();
        assert_eq!(list.page(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let mut list: CrudList<FakeResource> = CrudList::new(FakeResource::with(2));
        let err = list.create(&NumberForm { value: 0 }).await.unwrap_err();
        assert!(matches!(err, PageError::Validation(ref e) if e.contains("value")));
        assert_eq!(list.resource().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_and_delete_refetch() {
        let mut list: CrudList<FakeResource> = CrudList::new(FakeResource::with(2));
        list.create(&NumberForm { value: 7 }).await.unwrap();
        // create + list
        assert_eq!(list.resource().calls.load(Ordering::SeqCst), 2);
        assert_eq!(list.items(), &[1, 2, 7]);

        list.delete(1).await.unwrap();
        assert_eq!(list.items(), &[2, 7]);
        assert_eq!(list.resource().calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_text_matches() {
        assert!(text_matches(None, &["x"]));
        assert!(text_matches(Some("  "), &["x"]));
        assert!(text_matches(Some("HOA"), &["NV001", "Nguyen Hoa"]));
        assert!(!text_matches(Some("lan"), &["NV001", "Nguyen Hoa"]));
    }
}
