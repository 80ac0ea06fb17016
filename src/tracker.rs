use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config::SCROLL_LOOKAHEAD;
use crate::section::Section;

/// Rendered vertical extent of a section, in CSS pixels from the document top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Finds the first section, in page order, whose bounds contain
/// `scroll_y + SCROLL_LOOKAHEAD`. Sections without bounds are skipped.
pub fn locate<F>(scroll_y: f64, mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<Bounds>,
{
    let position = scroll_y + SCROLL_LOOKAHEAD;
    Section::ALL
        .into_iter()
        .find(|&section| bounds_of(section).map_or(false, |b| b.contains(position)))
}

/// Like [`locate`], but keeps `current` when nothing matches.
pub fn next_active<F>(current: Section, scroll_y: f64, bounds_of: F) -> Section
where
    F: FnMut(Section) -> Option<Bounds>,
{
    locate(scroll_y, bounds_of).unwrap_or(current)
}

fn rendered_bounds(document: &Document, section: Section) -> Option<Bounds> {
    let element = document
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(Bounds {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

/// Smoothly scrolls the section's element to the top of the viewport.
pub fn scroll_to(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    let Some(element) = element else {
        debug!("No element for section {}, not scrolling", section);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Tracks which section is in view. Starts at [`Section::Home`] and updates
/// on every window scroll event; the listener is removed on unmount.
#[hook]
pub fn use_active_section() -> Section {
    let active = use_state_eq(Section::default);
    // Latest value for the listener, which outlives the render it was created in
    let latest = use_mut_ref(Section::default);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let Some(document) = scroll_window.document() else {
                            return;
                        };
                        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                        let current = *latest.borrow();
                        let next = next_active(current, scroll_y, |section| {
                            rendered_bounds(&document, section)
                        });
                        if next != current {
                            debug!("Active section -> {}", next);
                            *latest.borrow_mut() = next;
                            active.set(next);
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to register scroll listener: {:?}", err);
                    }

                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *active
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stacked layout: home [0, 100), about [100, 600), services [600, 1400),
    /// portfolio [1400, 2400), contact [2400, 3000).
    fn stacked(section: Section) -> Option<Bounds> {
        let (top, height) = match section {
            Section::Home => (0.0, 100.0),
            Section::About => (100.0, 500.0),
            Section::Services => (600.0, 800.0),
            Section::Portfolio => (1400.0, 1000.0),
            Section::Contact => (2400.0, 600.0),
        };
        Some(Bounds { top, height })
    }

    #[test]
    fn scroll_150_lands_in_about() {
        assert_eq!(locate(150.0, stacked), Some(Section::About));
    }

    #[test]
    fn interior_positions_report_their_section() {
        assert_eq!(locate(0.0, stacked), Some(Section::About));
        assert_eq!(locate(800.0, stacked), Some(Section::Services));
        assert_eq!(locate(1999.0, stacked), Some(Section::Portfolio));
        assert_eq!(locate(2600.0, stacked), Some(Section::Contact));
    }

    #[test]
    fn section_start_is_inclusive_and_end_exclusive() {
        // position 600 == services.top, and == about.top + about.height
        assert_eq!(locate(500.0, stacked), Some(Section::Services));
        assert_eq!(locate(499.5, stacked), Some(Section::About));
    }

    #[test]
    fn earlier_section_wins_overlap() {
        let overlapping = |section: Section| match section {
            Section::About => Some(Bounds { top: 0.0, height: 1000.0 }),
            Section::Services => Some(Bounds { top: 0.0, height: 1000.0 }),
            _ => None,
        };
        assert_eq!(locate(200.0, overlapping), Some(Section::About));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let partial = |section: Section| match section {
            Section::Home | Section::About => None,
            other => stacked(other),
        };
        assert_eq!(locate(700.0, partial), Some(Section::Services));
        assert_eq!(locate(150.0, partial), None);
    }

    #[test]
    fn no_match_keeps_the_previous_section() {
        assert_eq!(next_active(Section::default(), 0.0, |_| None), Section::Home);
        assert_eq!(next_active(Section::Portfolio, 5000.0, stacked), Section::Portfolio);
    }

    #[test]
    fn zero_height_sections_never_match() {
        let collapsed = |_| Some(Bounds { top: 100.0, height: 0.0 });
        assert_eq!(next_active(Section::Contact, 0.0, collapsed), Section::Contact);
    }

    #[test]
    fn scan_stops_at_first_match() {
        let mut visited = Vec::new();
        let found = locate(150.0, |section| {
            visited.push(section);
            stacked(section)
        });
        assert_eq!(found, Some(Section::About));
        assert_eq!(visited, [Section::Home, Section::About]);
    }
}
