use log::debug;
use web_sys::{
    window, Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::Callback;

/// Something the page can bring to the top of the viewport.
pub trait ScrollTarget {
    fn scroll_into_view_smooth(&self);
}

/// Resolves a section id to its element.
pub trait SectionLookup {
    type Target: ScrollTarget;

    fn find_section(&self, section_id: &str) -> Option<Self::Target>;
}

impl ScrollTarget for Element {
    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl SectionLookup for Document {
    type Target = Element;

    fn find_section(&self, section_id: &str) -> Option<Element> {
        self.get_element_by_id(section_id)
    }
}

/// Smoothly scrolls the section with the given id to the top of the viewport.
/// A missing section is ignored.
pub fn scroll_to(section_id: &str) {
    let document = window().and_then(|w| w.document());
    scroll_within(document.as_ref(), section_id);
}

/// Returns whether a scroll was started.
fn scroll_within<L: SectionLookup>(page: Option<&L>, section_id: &str) -> bool {
    let Some(target) = page.and_then(|p| p.find_section(section_id)) else {
        debug!("No section #{} to scroll to", section_id);
        return false;
    };

    target.scroll_into_view_smooth();
    true
}

pub fn scroll_callback(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(section_id);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::pages::portfolio::SECTION_IDS;

    struct FakeSection {
        id: &'static str,
        scrolled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ScrollTarget for FakeSection {
        fn scroll_into_view_smooth(&self) {
            self.scrolled.borrow_mut().push(self.id);
        }
    }

    #[derive(Default)]
    struct FakePage {
        scrolled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl SectionLookup for FakePage {
        type Target = FakeSection;

        fn find_section(&self, section_id: &str) -> Option<FakeSection> {
            SECTION_IDS
                .iter()
                .copied()
                .find(|id| *id == section_id)
                .map(|id| FakeSection { id, scrolled: self.scrolled.clone() })
        }
    }

    #[test]
    fn scrolls_to_existing_section() {
        let page = FakePage::default();
        assert!(scroll_within(Some(&page), "work"));
        assert_eq!(*page.scrolled.borrow(), vec!["work"]);
    }

    #[test]
    fn missing_section_is_a_silent_no_op() {
        let page = FakePage::default();
        assert!(!scroll_within(Some(&page), "pricing"));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn missing_document_is_a_silent_no_op() {
        assert!(!scroll_within::<FakePage>(None, "work"));
    }

    #[test]
    fn second_scroll_retargets() {
        let page = FakePage::default();
        scroll_within(Some(&page), "work");
        scroll_within(Some(&page), "contact");
        assert_eq!(*page.scrolled.borrow(), vec!["work", "contact"]);
    }
}
