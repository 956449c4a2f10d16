use dioxus::html::geometry::euclid::Rect;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{Bounds, ObserverToken, ProximityObserver, ProximityZone};

/// The scroll container the sentinel is measured against, provided as
/// context by the view that owns it.
#[derive(Clone, Copy)]
pub struct ScrollViewport {
    pub element: Signal<Option<Rc<MountedData>>>,
    pub scroll_tick: Signal<u64>,
}

/// Bumped by the root whenever the window is resized. Optional: without it
/// the sentinel is re-measured on mount and scroll only.
#[derive(Clone, Copy)]
pub struct LayoutTick(pub Signal<u64>);

/// One observer per view, shared with whichever sentinel is mounted.
#[derive(Clone)]
pub struct SharedObserver(Rc<RefCell<ProximityObserver>>);

impl SharedObserver {
    pub fn new(zone: ProximityZone) -> Self {
        Self(Rc::new(RefCell::new(ProximityObserver::new(zone))))
    }

    pub fn is_armed(&self) -> bool {
        self.0.borrow().is_armed()
    }

    pub fn armed_token(&self) -> Option<ObserverToken> {
        self.0.borrow().armed_token()
    }
}

/// Live registration of a mounted sentinel; disarms when dropped.
struct ArmedSentinel {
    observer: Rc<RefCell<ProximityObserver>>,
    token: ObserverToken,
}

impl ArmedSentinel {
    fn arm(shared: SharedObserver) -> Self {
        let token = shared.0.borrow_mut().arm();
        Self {
            observer: shared.0,
            token,
        }
    }

    fn observe(&self, viewport: Bounds, sentinel: Bounds) -> bool {
        self.observer.borrow_mut().observe(self.token, viewport, sentinel)
    }
}

impl Drop for ArmedSentinel {
    fn drop(&mut self) {
        if let Ok(mut observer) = self.observer.try_borrow_mut() {
            observer.disarm(self.token);
        }
    }
}

fn bounds_of(rect: &Rect<f64, f64>) -> Bounds {
    Bounds::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

/// Invisible marker after the last card. Fires `on_near_bottom` when it comes
/// within the observer's zone of the viewport. Mount it with a key that
/// changes whenever the browser state does, so each state gets a fresh arming.
#[component]
pub fn LoadMoreSentinel(on_near_bottom: EventHandler<()>) -> Element {
    let viewport = use_context::<ScrollViewport>();
    let shared = use_context::<SharedObserver>();
    let layout = try_use_context::<LayoutTick>();
    let armed = use_hook(move || Rc::new(ArmedSentinel::arm(shared)));
    let mut element = use_signal(|| None::<Rc<MountedData>>);

    use_effect(move || {
        // subscribe: re-measure on every scroll of the container and every resize
        let _tick = *viewport.scroll_tick.read();
        if let Some(LayoutTick(resized)) = layout {
            let _resized = *resized.read();
        }
        let (Some(sentinel), Some(container)) = (element.cloned(), viewport.element.cloned()) else {
            return;
        };
        let armed = armed.clone();
        spawn(async move {
            let (Ok(container_rect), Ok(sentinel_rect)) =
                (container.get_client_rect().await, sentinel.get_client_rect().await)
            else {
                tracing::debug!("could not measure load-more sentinel");
                return;
            };
            if armed.observe(bounds_of(&container_rect), bounds_of(&sentinel_rect)) {
                on_near_bottom.call(());
            }
        });
    });

    rsx! {
        div {
            class: "load-more-sentinel",
            style: "height: 40px;",
            onmounted: move |e| element.set(Some(e.data())),
        }
    }
}
