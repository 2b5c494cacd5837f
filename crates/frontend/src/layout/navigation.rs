use contracts::system::navigation::ViewKey;
use leptos::prelude::*;

/// State-based router for one area: the URL never changes, only the
/// selected view does.
///
/// Each area builds its own router on mount, so re-entering an area always
/// starts at `V::DEFAULT`.
#[derive(Clone, Copy)]
pub struct ViewRouter<V: ViewKey> {
    current: RwSignal<V>,
}

impl<V: ViewKey> ViewRouter<V> {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(V::DEFAULT),
        }
    }

    pub fn navigate(&self, view: V) {
        if self.current.get_untracked() != view {
            log::debug!("view {} -> {}", self.current.get_untracked().key(), view.key());
            self.current.set(view);
        }
    }

    pub fn current_view(&self) -> V {
        self.current.get()
    }

    #[cfg(test)]
    pub fn current_view_untracked(&self) -> V {
        self.current.get_untracked()
    }

    pub fn is_active(&self, view: V) -> bool {
        self.current.with(|current| *current == view)
    }
}

impl<V: ViewKey> Default for ViewRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell chrome shared by every area.
#[derive(Clone, Copy)]
pub struct LayoutState {
    pub sidebar_open: RwSignal<bool>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> LayoutState {
    use_context::<LayoutState>().expect("LayoutState not found in component tree")
}
