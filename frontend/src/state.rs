//! UI state for the page. Plain values with no DOM access, so the
//! transitions can be exercised by native unit tests; components keep one of
//! these in a `use_state` handle.

use once_cell::sync::Lazy;

use crate::content::{NavLink, Project, PROJECTS};

/// The value of the work section's filter buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Tag(&'static str),
}

impl Filter {
    pub fn label(&self) -> &'static str {
        match *self {
            Filter::All => "All",
            Filter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => project.has_tag(tag),
        }
    }
}

static TAG_UNIVERSE: Lazy<Vec<Filter>> = Lazy::new(|| {
    let mut filters = vec![Filter::All];
    for tag in PROJECTS.iter().flat_map(|p| p.tags.iter()) {
        let filter = Filter::Tag(*tag);
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
});

/// `All` followed by every project tag, in first-seen order.
pub fn tag_universe() -> &'static [Filter] {
    &TAG_UNIVERSE
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkState {
    filter: Filter,
    active: Option<&'static Project>,
}

impl WorkState {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn active(&self) -> Option<&'static Project> {
        self.active
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug_assert!(
            tag_universe().contains(&filter),
            "filter {:?} is not a project tag",
            filter
        );
        self.filter = filter;
    }

    /// Projects matching the current filter, in content order.
    pub fn filtered(&self) -> Vec<&'static Project> {
        PROJECTS.iter().filter(|p| self.filter.matches(p)).collect()
    }

    pub fn open_detail(&mut self, project: &'static Project) {
        self.active = Some(project);
    }

    pub fn close_detail(&mut self) {
        self.active = None;
    }
}

/// Mobile navigation menu. The desktop nav is stateless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// The burger button only ever opens; closing goes through `close` or a
    /// link.
    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Closes the menu and hands back the section the link points at. The
    /// caller scrolls only after this returns.
    pub fn activate(&mut self, link: &NavLink) -> &'static str {
        self.close();
        link.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{project_by_id, CONTACT_LINK, NAV};

    fn titles(projects: &[&'static Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn universe_starts_with_all_then_first_seen_tags() {
        let labels: Vec<_> = tag_universe().iter().map(Filter::label).collect();
        assert_eq!(
            labels,
            vec![
                "All",
                "Local Service",
                "Tailwind",
                "Netlify",
                "Trades",
                "SEO",
                "Static",
                "Restaurant",
                "Mobile-first",
            ]
        );
    }

    #[test]
    fn universe_has_no_duplicates() {
        let universe = tag_universe();
        for (i, filter) in universe.iter().enumerate() {
            assert!(!universe[i + 1..].contains(filter), "{:?} repeated", filter);
        }
    }

    #[test]
    fn defaults_to_all_with_no_overlay() {
        let state = WorkState::default();
        assert_eq!(state.filter(), Filter::All);
        assert!(state.active().is_none());
        assert_eq!(state.filtered().len(), PROJECTS.len());
    }

    #[test]
    fn every_filter_yields_matching_subset_in_order() {
        for filter in tag_universe() {
            let mut state = WorkState::default();
            state.set_filter(*filter);
            let expected: Vec<&'static Project> = PROJECTS
                .iter()
                .filter(|p| *filter == Filter::All || p.tags.contains(&filter.label()))
                .collect();
            assert_eq!(state.filtered(), expected, "filter {:?}", filter);
            assert!(!state.filtered().is_empty());
        }
    }

    #[test]
    fn tailwind_matches_only_the_barbershop() {
        let mut state = WorkState::default();
        state.set_filter(Filter::Tag("Tailwind"));
        assert_eq!(titles(&state.filtered()), vec!["House of Fades — Barbershop"]);
    }

    #[test]
    fn seo_matches_only_masonry() {
        let mut state = WorkState::default();
        state.set_filter(Filter::Tag("SEO"));
        assert_eq!(titles(&state.filtered()), vec!["A-1 Masonry LLC — Trades"]);
    }

    #[test]
    fn setting_all_repeatedly_changes_nothing() {
        let mut state = WorkState::default();
        let before = state.filtered();
        state.set_filter(Filter::All);
        state.set_filter(Filter::All);
        assert_eq!(state, WorkState::default());
        assert_eq!(state.filtered(), before);
    }

    #[test]
    fn switching_back_to_all_restores_full_list() {
        let mut state = WorkState::default();
        state.set_filter(Filter::Tag("Restaurant"));
        assert_eq!(state.filtered().len(), 1);
        state.set_filter(Filter::All);
        assert_eq!(state.filtered().len(), PROJECTS.len());
    }

    #[test]
    fn filter_does_not_touch_overlay() {
        let mut state = WorkState::default();
        let project = project_by_id("a1-masonry").unwrap();
        state.open_detail(project);
        state.set_filter(Filter::Tag("Tailwind"));
        assert_eq!(state.active(), Some(project));
    }

    #[test]
    fn open_then_close_detail() {
        let mut state = WorkState::default();
        let before = state.clone();
        state.open_detail(project_by_id("Restaurant-example").unwrap());
        assert_eq!(state.active().map(|p| p.title), Some("Restaurant Example — Dining"));
        state.close_detail();
        assert!(state.active().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn opening_another_project_replaces_active() {
        let mut state = WorkState::default();
        state.open_detail(&PROJECTS[0]);
        state.open_detail(&PROJECTS[1]);
        assert_eq!(state.active().map(|p| p.id), Some("a1-masonry"));
    }

    #[test]
    fn menu_starts_closed_and_opens() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.open();
        assert!(menu.is_open());
    }

    #[test]
    fn burger_on_open_menu_keeps_it_open() {
        let mut menu = MenuState::Open;
        menu.open();
        assert_eq!(menu, MenuState::Open);
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn activating_link_closes_menu_and_targets_section() {
        for link in NAV {
            let mut menu = MenuState::Open;
            let target = menu.activate(link);
            assert_eq!(menu, MenuState::Closed);
            assert_eq!(target, link.id);
        }
    }

    #[test]
    fn book_a_call_targets_contact() {
        let mut menu = MenuState::Open;
        assert_eq!(menu.activate(&CONTACT_LINK), "contact");
        assert!(!menu.is_open());
    }

    #[test]
    fn explicit_close_is_idempotent() {
        let mut menu = MenuState::Open;
        menu.close();
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }
}
