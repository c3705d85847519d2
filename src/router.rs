//! Page Router
//!
//! The set of views, plus search-term routing and card filtering.

/// Views of the single-page app; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    Home,
    Tour,
    Food,
    Hotel,
    Transport,
    Map,
    Saved,
}

impl Page {
    /// Views listed in the navbar
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::Tour,
        Page::Food,
        Page::Hotel,
        Page::Transport,
        Page::Map,
        Page::Saved,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Signup => "Sign up",
            Page::Home => "Home",
            Page::Tour => "Explore",
            Page::Food => "Food",
            Page::Hotel => "Hotels",
            Page::Transport => "Transport",
            Page::Map => "Map",
            Page::Saved => "Saved",
        }
    }

    /// Landing view for a visitor with or without a session
    pub fn initial(logged_in: bool) -> Self {
        if logged_in { Page::Home } else { Page::Login }
    }
}

/// Navigation state: the active view and how many times any view was opened.
/// Re-opening the active view still bumps `visit`, which remounts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub visit: u32,
}

impl Route {
    pub fn new(page: Page) -> Self {
        Self { page, visit: 0 }
    }

    pub fn go(&mut self, page: Page) {
        self.page = page;
        self.visit = self.visit.wrapping_add(1);
    }
}

/// Pick the view a free-text search should open. Blank terms stay put.
pub fn route_for_search(term: &str) -> Option<Page> {
    let term = term.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| term.contains(w));
    if has(&["food", "cafe", "restaurant"]) {
        Some(Page::Food)
    } else if has(&["hotel", "stay"]) {
        Some(Page::Hotel)
    } else if has(&["metro", "bus", "tram", "taxi"]) {
        Some(Page::Transport)
    } else if !term.trim().is_empty() {
        Some(Page::Tour)
    } else {
        None
    }
}

/// Case-insensitive substring match used by the card filters
pub fn matches_filter(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_routing() {
        assert_eq!(route_for_search("Best CAFE nearby"), Some(Page::Food));
        assert_eq!(route_for_search("cheap stay"), Some(Page::Hotel));
        assert_eq!(route_for_search("metro map"), Some(Page::Transport));
        assert_eq!(route_for_search("taxi"), Some(Page::Transport));
        assert_eq!(route_for_search("temple"), Some(Page::Tour));
        assert_eq!(route_for_search("   "), None);
        assert_eq!(route_for_search(""), None);
    }

    #[test]
    fn test_food_wins_over_hotel() {
        assert_eq!(route_for_search("hotel restaurant"), Some(Page::Food));
    }

    #[test]
    fn test_revisit_bumps_counter() {
        let mut route = Route::new(Page::Login);
        route.go(Page::Food);
        route.go(Page::Food);
        assert_eq!(route.page, Page::Food);
        assert_eq!(route.visit, 2);
    }

    #[test]
    fn test_initial_page() {
        assert_eq!(Page::initial(true), Page::Home);
        assert_eq!(Page::initial(false), Page::Login);
    }

    #[test]
    fn test_filter() {
        assert!(matches_filter("Howrah Bridge\nCantilever", "bridge"));
        assert!(matches_filter("anything", ""));
        assert!(!matches_filter("Eco Park", "museum"));
    }
}
