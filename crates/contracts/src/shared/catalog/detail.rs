use super::CatalogError;
use crate::domain::common::CatalogRecord;

/// Page surface whose background scrolling is locked while a detail is open
pub trait ScrollHost {
    /// Current vertical scroll offset in px
    fn offset(&self) -> f64;

    /// Freeze the page at `offset` (fix the body, hide overflow)
    fn lock(&self, offset: f64);

    /// Undo `lock` and scroll back to `offset`
    fn restore(&self, offset: f64);
}

/// Scoped scroll lock: acquired with the captured offset, released on drop.
///
/// Dropping happens on close and on teardown of the owning controller, so the
/// page is never left frozen.
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    offset: f64,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        let offset = host.offset();
        host.lock(offset);
        log::debug!("scroll lock acquired at {}", offset);
        Self { host, offset }
    }

    /// Offset captured when the lock was acquired
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.restore(self.offset);
        log::debug!("scroll lock released, restored {}", self.offset);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Semi-transparent overlay around the dialog
    Backdrop,
    /// Anything inside the dialog body
    Content,
}

/// Single-slot detail view: Closed (`None`) or Open with a record snapshot.
///
/// Opening while already open replaces the record and keeps the original
/// scroll lock, so closing returns to where the visitor was before the first
/// open.
pub struct DetailController<R, H: ScrollHost + Clone> {
    host: H,
    selected: Option<R>,
    lock: Option<ScrollLock<H>>,
}

impl<R, H: ScrollHost + Clone> DetailController<R, H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            selected: None,
            lock: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    pub fn open(&mut self, record: R) {
        if self.lock.is_none() {
            self.lock = Some(ScrollLock::acquire(self.host.clone()));
        }
        self.selected = Some(record);
    }

    /// Returns true if a record was open
    pub fn close(&mut self) -> bool {
        let was_open = self.selected.take().is_some();
        // dropping the guard restores the page
        self.lock = None;
        was_open
    }

    /// Keyboard handler; only Escape closes
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close()
        } else {
            false
        }
    }

    /// Overlay click handler; clicks inside the dialog never close it
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => false,
        }
    }
}

impl<R: CatalogRecord + Clone, H: ScrollHost + Clone> DetailController<R, H> {
    pub fn selected_id(&self) -> Option<R::Id> {
        self.selected.as_ref().map(|r| r.id())
    }

    /// Open the record with `id` from `records` (e.g. a related question)
    pub fn open_by_id(&mut self, records: &[R], id: &R::Id) -> Result<(), CatalogError> {
        let record = records
            .iter()
            .find(|r| &r.id() == id)
            .ok_or_else(|| CatalogError::UnknownRecord(format!("{:?}", id)))?;
        log::debug!("open {} {:?}", R::collection_name(), id);
        self.open(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_faq::{self, Faq};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct FakeBody {
        offset: f64,
        locked: bool,
        restores: Vec<f64>,
    }

    /// Models the browser: fixing the body resets the window scroll to 0
    #[derive(Clone, Default)]
    struct FakeHost(Rc<RefCell<FakeBody>>);

    impl FakeHost {
        fn at(offset: f64) -> Self {
            let host = Self::default();
            host.0.borrow_mut().offset = offset;
            host
        }

        fn scroll_to(&self, offset: f64) {
            self.0.borrow_mut().offset = offset;
        }
    }

    impl ScrollHost for FakeHost {
        fn offset(&self) -> f64 {
            self.0.borrow().offset
        }

        fn lock(&self, _offset: f64) {
            let mut body = self.0.borrow_mut();
            body.locked = true;
            body.offset = 0.0;
        }

        fn restore(&self, offset: f64) {
            let mut body = self.0.borrow_mut();
            body.locked = false;
            body.offset = offset;
            body.restores.push(offset);
        }
    }

    fn faq(id: u32) -> Faq {
        a001_faq::seed().into_iter().find(|f| f.id == id).unwrap()
    }

    #[test]
    fn test_open_locks_and_close_restores() {
        let host = FakeHost::at(250.0);
        let mut ctl = DetailController::new(host.clone());

        ctl.open(faq(1));
        assert!(ctl.is_open());
        assert!(host.0.borrow().locked);

        assert!(ctl.close());
        assert!(!ctl.is_open());
        assert!(!host.0.borrow().locked);
        assert_eq!(host.offset(), 250.0);
        assert!(!ctl.close());
    }

    #[test]
    fn test_modal_escape() {
        let host = FakeHost::at(420.0);
        let mut ctl = DetailController::new(host.clone());

        ctl.open(faq(5));
        assert_eq!(ctl.selected_id(), Some(5));

        assert!(!ctl.handle_key("Enter"));
        assert!(ctl.is_open());
        assert!(ctl.handle_key("Escape"));
        assert!(!ctl.is_open());
        assert_eq!(host.offset(), 420.0);
    }

    #[test]
    fn test_modal_exclusivity_restores_first_offset() {
        let host = FakeHost::at(100.0);
        let mut ctl = DetailController::new(host.clone());

        ctl.open(faq(1));
        host.scroll_to(35.0);
        ctl.open(faq(2));
        assert_eq!(ctl.selected_id(), Some(2));

        ctl.close();
        assert_eq!(host.offset(), 100.0);
        assert_eq!(host.0.borrow().restores, vec![100.0]);
    }

    #[test]
    fn test_backdrop_click_closes_content_click_does_not() {
        let host = FakeHost::at(0.0);
        let mut ctl = DetailController::new(host);

        ctl.open(faq(3));
        assert!(!ctl.handle_click(ClickTarget::Content));
        assert!(ctl.is_open());
        assert!(ctl.handle_click(ClickTarget::Backdrop));
        assert!(!ctl.is_open());
    }

    #[test]
    fn test_teardown_while_open_releases_lock() {
        let host = FakeHost::at(780.0);
        {
            let mut ctl = DetailController::new(host.clone());
            ctl.open(faq(4));
            assert!(host.0.borrow().locked);
        }
        assert!(!host.0.borrow().locked);
        assert_eq!(host.offset(), 780.0);
    }

    #[test]
    fn test_open_by_id_follows_related() {
        let faqs = a001_faq::seed();
        let host = FakeHost::at(10.0);
        let mut ctl = DetailController::new(host.clone());

        ctl.open_by_id(&faqs, &1).unwrap();
        let related = ctl.selected().unwrap().related.clone();
        ctl.open_by_id(&faqs, &related[0]).unwrap();
        assert_eq!(ctl.selected_id(), Some(2));

        assert_eq!(
            ctl.open_by_id(&faqs, &99),
            Err(CatalogError::UnknownRecord("99".to_string()))
        );
        // a failed lookup keeps the current record
        assert_eq!(ctl.selected_id(), Some(2));
        ctl.close();
        assert_eq!(host.0.borrow().restores, vec![10.0]);
    }
}
