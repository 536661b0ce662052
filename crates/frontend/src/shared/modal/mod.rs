use crate::shared::icons::icon;
use crate::shared::scroll_lock::BodyScrollHost;
use contracts::domain::common::CatalogRecord;
use contracts::shared::catalog::{Catalog, ClickTarget, DetailController, ScrollHost};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Detail controller of a page, locking the document body while open
pub type PageDetail<R, H = BodyScrollHost> = RwSignal<DetailController<R, H>>;

/// Create the page's detail controller.
///
/// Closing on cleanup releases the scroll lock if the page is left while
/// a record is still open.
pub fn use_detail<R: Send + Sync + 'static>() -> PageDetail<R> {
    use_detail_with(BodyScrollHost)
}

pub fn use_detail_with<R, H>(host: H) -> PageDetail<R, H>
where
    R: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    let detail = RwSignal::new(DetailController::new(host));
    on_cleanup(move || {
        apply_close(detail);
    });
    detail
}

/// Id of the open record.
///
/// Modal bodies are keyed on this so that updates which leave the selection
/// alone never remount them (and never wipe a form draft).
pub fn use_selected_id<R, H>(detail: PageDetail<R, H>) -> Memo<Option<R::Id>>
where
    R: CatalogRecord + Clone + Send + Sync + 'static,
    R::Id: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    Memo::new(move |_| detail.with(|d| d.selected_id()))
}

// The apply_* helpers notify subscribers only when the detail actually closed.

pub fn apply_key<R, H>(detail: PageDetail<R, H>, key: &str) -> bool
where
    R: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    if key != "Escape" {
        return false;
    }
    detail
        .try_maybe_update(|d| {
            let closed = d.handle_key(key);
            (closed, closed)
        })
        .unwrap_or(false)
}

pub fn apply_click<R, H>(detail: PageDetail<R, H>, target: ClickTarget) -> bool
where
    R: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    detail
        .try_maybe_update(|d| {
            let closed = d.handle_click(target);
            (closed, closed)
        })
        .unwrap_or(false)
}

pub fn apply_close<R, H>(detail: PageDetail<R, H>) -> bool
where
    R: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    detail
        .try_maybe_update(|d| {
            let closed = d.close();
            (closed, closed)
        })
        .unwrap_or(false)
}

/// Callbacks wiring `DetailModal` to a `PageDetail`
#[derive(Clone, Copy)]
pub struct DetailBindings {
    pub open: Signal<bool>,
    pub on_key: Callback<String>,
    pub on_click: Callback<ClickTarget>,
    pub on_close: Callback<()>,
}

pub fn bind_detail<R, H>(detail: PageDetail<R, H>) -> DetailBindings
where
    R: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    DetailBindings {
        open: Signal::derive(move || detail.with(|d| d.is_open())),
        on_key: Callback::new(move |key: String| {
            if key == "Escape" {
                defer(move || {
                    apply_key(detail, &key);
                })
            }
        }),
        on_click: Callback::new(move |target| {
            defer(move || {
                apply_click(detail, target);
            })
        }),
        on_close: Callback::new(move |_| {
            defer(move || {
                apply_close(detail);
            })
        }),
    }
}

/// Open record `id` of `catalog` in the page's detail modal
pub fn open_record<R, H>(detail: PageDetail<R, H>, catalog: RwSignal<Catalog<R>>, id: R::Id)
where
    R: CatalogRecord + Clone + Send + Sync + 'static,
    R::Id: Send + Sync + 'static,
    H: ScrollHost + Clone + Send + Sync + 'static,
{
    defer(move || {
        let opened =
            catalog.try_with_untracked(|c| detail.try_update(|d| d.open_by_id(c.records(), &id)));
        if let Some(Some(Err(e))) = opened {
            log::warn!("{}", e);
        }
    });
}

/// Run on the next tick.
///
/// Closing or switching the record unmounts the element whose listener is
/// still being dispatched.
fn defer(f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        f();
    });
}

#[component]
pub fn DetailModal(
    /// Whether a record is open
    #[prop(into)]
    open: Signal<bool>,
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Keyboard keys while open (Escape closes)
    on_key: Callback<String>,
    /// Clicks on the overlay, classified as backdrop or content
    on_click: Callback<ClickTarget>,
    /// Close button
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <ModalSurface title=title on_key=on_key on_click=on_click on_close=on_close>
                {children.with_value(|c| c())}
            </ModalSurface>
        </Show>
    }
}

#[component]
fn ModalSurface(
    title: Signal<String>,
    on_key: Callback<String>,
    on_click: Callback<ClickTarget>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    // Listener lives exactly as long as the surface is mounted
    let keydown = window_event_listener(ev::keydown, move |event| {
        on_key.run(event.key());
    });
    on_cleanup(move || keydown.remove());

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let on_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        on_click.run(if on_backdrop {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        });
    };

    // Clicks inside the dialog never reach the overlay
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Cerrar"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_faq::{self, Faq};
    use leptos::reactive::effect::ImmediateEffect;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct FakeBody {
        offset: f64,
        locked: bool,
        restores: Vec<f64>,
    }

    #[derive(Clone, Default)]
    struct FakeHost(Arc<Mutex<FakeBody>>);

    impl FakeHost {
        fn scrolled_to(offset: f64) -> Self {
            let host = Self::default();
            host.0.lock().unwrap().offset = offset;
            host
        }

        fn body<T>(&self, f: impl FnOnce(&FakeBody) -> T) -> T {
            f(&self.0.lock().unwrap())
        }
    }

    impl ScrollHost for FakeHost {
        fn offset(&self) -> f64 {
            self.0.lock().unwrap().offset
        }

        fn lock(&self, _offset: f64) {
            let mut body = self.0.lock().unwrap();
            body.locked = true;
            body.offset = 0.0;
        }

        fn restore(&self, offset: f64) {
            let mut body = self.0.lock().unwrap();
            body.locked = false;
            body.offset = offset;
            body.restores.push(offset);
        }
    }

    fn faq(index: usize) -> Faq {
        a001_faq::seed().swap_remove(index)
    }

    #[test]
    fn test_dispose_while_open_restores_scroll() {
        let host = FakeHost::scrolled_to(640.0);
        let owner = Owner::new();
        let detail = owner.with(|| use_detail_with::<Faq, _>(host.clone()));

        detail.update(|d| d.open(faq(0)));
        assert!(host.body(|b| b.locked));

        owner.cleanup();

        host.body(|b| {
            assert!(!b.locked);
            assert_eq!(b.restores, vec![640.0]);
            assert_eq!(b.offset, 640.0);
        });
    }

    #[test]
    fn test_other_keys_do_not_notify_subscribers() {
        let host = FakeHost::scrolled_to(120.0);
        let owner = Owner::new();
        let runs = Arc::new(AtomicUsize::new(0));

        let (detail, selected, _effect) = owner.with(|| {
            let detail = use_detail_with::<Faq, _>(host.clone());
            let selected = use_selected_id(detail);
            let counter = Arc::clone(&runs);
            let effect = ImmediateEffect::new(move || {
                detail.with(|_| ());
                counter.fetch_add(1, Ordering::SeqCst);
            });
            (detail, selected, effect)
        });
        let initial = runs.load(Ordering::SeqCst);

        let record = faq(0);
        let id = record.id;
        detail.update(|d| d.open(record));
        let after_open = runs.load(Ordering::SeqCst);
        assert_eq!(after_open, initial + 1);

        for key in ["a", "b", "Tab", "Enter"] {
            assert!(!apply_key(detail, key));
        }
        assert!(!apply_click(detail, ClickTarget::Content));
        assert_eq!(runs.load(Ordering::SeqCst), after_open);
        assert_eq!(selected.get_untracked(), Some(id));
        assert!(host.body(|b| b.locked));

        assert!(apply_key(detail, "Escape"));
        assert_eq!(runs.load(Ordering::SeqCst), after_open + 1);
        assert_eq!(selected.get_untracked(), None);

        // already closed: nothing to notify
        assert!(!apply_key(detail, "Escape"));
        assert!(!apply_close(detail));
        assert_eq!(runs.load(Ordering::SeqCst), after_open + 1);

        owner.cleanup();
    }

    #[test]
    fn test_backdrop_click_closes_content_click_does_not() {
        let host = FakeHost::scrolled_to(300.0);
        let owner = Owner::new();
        let detail = owner.with(|| use_detail_with::<Faq, _>(host.clone()));

        detail.update(|d| d.open(faq(1)));
        assert!(!apply_click(detail, ClickTarget::Content));
        assert!(detail.with_untracked(|d| d.is_open()));

        assert!(apply_click(detail, ClickTarget::Backdrop));
        assert!(!detail.with_untracked(|d| d.is_open()));
        host.body(|b| assert_eq!(b.restores, vec![300.0]));

        owner.cleanup();
    }

    #[test]
    fn test_selected_id_follows_switches() {
        let host = FakeHost::default();
        let owner = Owner::new();
        let (detail, selected) = owner.with(|| {
            let detail = use_detail_with::<Faq, _>(host.clone());
            (detail, use_selected_id(detail))
        });
        let records = a001_faq::seed();
        let first = records[0].id;
        let second = records[1].id;

        detail.update(|d| d.open_by_id(&records, &first).unwrap());
        assert_eq!(selected.get_untracked(), Some(first));

        detail.update(|d| d.open_by_id(&records, &second).unwrap());
        assert_eq!(selected.get_untracked(), Some(second));
        // switching keeps the single lock
        assert!(host.body(|b| b.locked && b.restores.is_empty()));

        apply_close(detail);
        assert_eq!(selected.get_untracked(), None);

        owner.cleanup();
    }
}
