//! Scroll-spy for the safety page table of contents.
//!
//! [`SpyState`] holds the active section and the rules for updating it;
//! [`SectionObserver`] feeds it from an `IntersectionObserver` and owns the
//! browser resources; [`use_scroll_spy`] ties the observer to a component's
//! lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Introduction,
    CorePrinciples,
    TheFiveLevels,
    GettingStarted,
    Conclusion,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Introduction,
        SectionId::CorePrinciples,
        SectionId::TheFiveLevels,
        SectionId::GettingStarted,
        SectionId::Conclusion,
    ];

    /// Element id of the section, also used as its anchor.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Introduction => "introduction",
            SectionId::CorePrinciples => "core-principles",
            SectionId::TheFiveLevels => "the-five-levels",
            SectionId::GettingStarted => "getting-started",
            SectionId::Conclusion => "conclusion",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Introduction => "Introduction",
            SectionId::CorePrinciples => "Core Principles",
            SectionId::TheFiveLevels => "The Five Levels",
            SectionId::GettingStarted => "Getting Started",
            SectionId::Conclusion => "Conclusion",
        }
    }

    pub fn from_key(key: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpyError {
    #[error("IntersectionObserver is not available in this runtime")]
    Unsupported,
    #[error("no document to observe")]
    NoDocument,
}

#[derive(Debug, Default)]
pub struct SpyState {
    active: Option<SectionId>,
    torn_down: bool,
}

impl SpyState {
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Applies one batch of `(element id, is_intersecting)` reports.
    ///
    /// The last intersecting entry of the batch wins. Ids that are not
    /// sections and entries leaving the band are ignored, so once a section
    /// has been active the state never goes back to `None`. Returns the new
    /// section when the active one changed.
    pub fn record<'a, I>(&mut self, entries: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        if self.is_torn_down() {
            return None;
        }

        let before = self.active;
        for (id, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(section) = SectionId::from_key(id) {
                self.active = Some(section);
            }
        }

        if self.active != before {
            self.active
        } else {
            None
        }
    }

    pub fn tear_down(&mut self) {
        self.torn_down = true;
    }
}

/// Watches the section elements until dropped.
pub struct SectionObserver {
    observer: IntersectionObserver,
    state: Rc<RefCell<SpyState>>,
    // Dropped after `disconnect` runs in `Drop`.
    _callback: Closure<dyn FnMut(Array)>,
}

impl SectionObserver {
    pub fn observe<F>(elements: &[Element], on_change: F) -> Result<Self, SpyError>
    where
        F: Fn(SectionId) + 'static,
    {
        let state = Rc::new(RefCell::new(SpyState::default()));

        let callback = {
            let state = state.clone();
            Closure::wrap(Box::new(move |entries: Array| {
                let reports: Vec<(String, bool)> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target().id(), entry.is_intersecting()))
                    .collect();

                let changed = state
                    .borrow_mut()
                    .record(reports.iter().map(|(id, hit)| (id.as_str(), *hit)))
                    .is_some();

                if changed {
                    if let Some(section) = state.borrow().active() {
                        debug!("Active section: {}", section.key());
                        on_change(section);
                    }
                }
            }) as Box<dyn FnMut(Array)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(config::SPY_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(config::SPY_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|_| SpyError::Unsupported)?;

        for element in elements {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.state.borrow_mut().tear_down();
    }
}

fn section_elements(sections: &[SectionId]) -> Result<Vec<Element>, SpyError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(SpyError::NoDocument)?;

    Ok(sections
        .iter()
        .filter_map(|section| document.get_element_by_id(section.key()))
        .collect())
}

/// Smooth-scrolls so the section's top sits at the top of the content area.
/// The active section is left for the observer to update.
pub fn scroll_to_section(section: SectionId) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.key()));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Observes `sections` while the calling component is mounted and returns the
/// active one. Without intersection support this stays `None`.
#[hook]
pub fn use_scroll_spy(sections: &'static [SectionId]) -> Option<SectionId> {
    let active = use_state_eq(|| None::<SectionId>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let observer = section_elements(sections).and_then(|elements| {
                    SectionObserver::observe(&elements, move |section| active.set(Some(section)))
                });

                let observer = match observer {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("Scroll-spy disabled: {}", err);
                        None
                    }
                };

                move || drop(observer)
            },
            (),
        );
    }

    *active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_slugified_labels() {
        for section in SectionId::ALL {
            let slug = section.label().to_lowercase().replace(' ', "-");
            assert_eq!(section.key(), slug);
            assert_eq!(SectionId::from_key(section.key()), Some(section));
        }
        assert_eq!(SectionId::from_key("faq"), None);
    }

    #[test]
    fn starts_with_no_active_section() {
        let state = SpyState::default();
        assert_eq!(state.active(), None);
        assert!(!state.is_torn_down());
    }

    #[test]
    fn intersecting_entry_becomes_active() {
        let mut state = SpyState::default();
        let changed = state.record([("getting-started", true)]);
        assert_eq!(changed, Some(SectionId::GettingStarted));
        assert_eq!(state.active(), Some(SectionId::GettingStarted));
    }

    #[test]
    fn leaving_entries_do_not_clear_the_active_section() {
        let mut state = SpyState::default();
        state.record([("introduction", true)]);

        let changed = state.record([("introduction", false)]);
        assert_eq!(changed, None);
        assert_eq!(state.active(), Some(SectionId::Introduction));
    }

    #[test]
    fn last_intersecting_entry_in_a_batch_wins() {
        let mut state = SpyState::default();
        let changed = state.record([
            ("core-principles", true),
            ("the-five-levels", true),
            ("introduction", false),
        ]);
        assert_eq!(changed, Some(SectionId::TheFiveLevels));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = SpyState::default();
        state.record([("conclusion", true), ("footer", true)]);
        assert_eq!(state.active(), Some(SectionId::Conclusion));
    }

    #[test]
    fn repeating_the_active_section_reports_no_change() {
        let mut state = SpyState::default();
        state.record([("conclusion", true)]);
        assert_eq!(state.record([("conclusion", true)]), None);
    }

    #[test]
    fn nothing_changes_after_teardown() {
        let mut state = SpyState::default();
        state.record([("introduction", true)]);
        state.tear_down();

        assert_eq!(state.record([("getting-started", true)]), None);
        assert_eq!(state.active(), Some(SectionId::Introduction));
        assert!(state.is_torn_down());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SpyError::Unsupported.to_string(),
            "IntersectionObserver is not available in this runtime"
        );
    }
}
