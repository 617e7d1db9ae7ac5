// src/pipeline/viewport.rs
//
// In-process model of the scroll trigger: a sentinel sits after the last
// rendered card and asks for the next window when it comes within the
// look-ahead margin of the viewport. The HTML surface gets the same contract
// from htmx (`intersect once`, see templates::components::sentinel).

use crate::domain::ContentRecord;
use crate::pipeline::reveal::RevealWindow;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Edge detector for one sentinel.
#[derive(Debug, Clone)]
pub struct ScrollSentinel {
    lookahead: i64,
    inside: bool,
}

impl ScrollSentinel {
    pub fn new(lookahead: u32) -> Self {
        Self {
            lookahead: i64::from(lookahead),
            inside: false,
        }
    }

    /// `distance` is how far (px) the sentinel is below the bottom of the
    /// viewport; zero or negative means it is on screen.
    ///
    /// Returns `true` only on the outside -> inside crossing. Staying inside
    /// never fires again; leaving re-arms.
    pub fn on_position(&mut self, distance: i64) -> bool {
        let now_inside = distance <= self.lookahead;
        let crossed = now_inside && !self.inside;
        self.inside = now_inside;
        crossed
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

type Callback = Rc<RefCell<dyn FnMut()>>;

struct Registration {
    id: u64,
    sentinel: ScrollSentinel,
    on_enter: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Registration>,
}

/// Delivers sentinel position reports to live observations.
#[derive(Default, Clone)]
pub struct Viewport {
    registry: Rc<RefCell<Registry>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing a sentinel. Drop the returned guard to stop.
    pub fn observe<F>(&self, lookahead: u32, on_enter: F) -> Observation
    where
        F: FnMut() + 'static,
    {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.entries.push(Registration {
            id,
            sentinel: ScrollSentinel::new(lookahead),
            on_enter: Rc::new(RefCell::new(on_enter)),
        });

        Observation {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Reports the sentinel position to every observation and runs the
    /// callbacks of those that just crossed in. Returns how many fired.
    pub fn dispatch(&self, distance: i64) -> usize {
        // Collect first so callbacks may observe or drop without a double borrow.
        let fired: Vec<Callback> = {
            let mut reg = self.registry.borrow_mut();
            reg.entries
                .iter_mut()
                .filter_map(|e| e.sentinel.on_position(distance).then(|| e.on_enter.clone()))
                .collect()
        };

        for callback in &fired {
            (&mut *callback.borrow_mut())();
        }
        fired.len()
    }

    pub fn observer_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// Live subscription for one sentinel. Unsubscribes on drop.
pub struct Observation {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

/// A reveal window wired to a viewport sentinel: the in-process counterpart of
/// the browse pages' infinite scroll.
pub struct InfiniteScroll {
    window: Rc<RefCell<RevealWindow>>,
    observation: Option<Observation>,
}

impl InfiniteScroll {
    pub fn new(page_size: usize) -> Self {
        Self {
            window: Rc::new(RefCell::new(RevealWindow::new(page_size))),
            observation: None,
        }
    }

    /// Sentinel mounted: start listening. Re-attaching replaces the old subscription.
    pub fn attach(&mut self, viewport: &Viewport, lookahead: u32) {
        let window = Rc::downgrade(&self.window);
        self.observation = Some(viewport.observe(lookahead, move || {
            if let Some(window) = window.upgrade() {
                window.borrow_mut().load_more();
            }
        }));
    }

    /// Sentinel unmounted.
    pub fn detach(&mut self) {
        self.observation = None;
    }

    pub fn is_attached(&self) -> bool {
        self.observation.is_some()
    }

    /// Must be called with the current collection before taking `visible`.
    pub fn sync<R: ContentRecord>(&self, collection: &[R]) -> bool {
        self.window.borrow_mut().sync(collection)
    }

    pub fn visible<'c, R>(&self, collection: &'c [R]) -> &'c [R] {
        self.window.borrow().visible(collection)
    }

    pub fn has_more(&self) -> bool {
        self.window.borrow().has_more()
    }

    pub fn visible_count(&self) -> usize {
        self.window.borrow().visible_count()
    }
}
