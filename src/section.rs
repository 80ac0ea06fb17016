use std::fmt;

/// The anchorable regions of the landing page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    /// Declaration order is also the tracker's scan order: earlier sections win ties.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    /// Navigation label, the id with its first letter capitalized.
    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Home
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_order_is_fixed() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "services", "portfolio", "contact"]);
    }

    #[test]
    fn labels_capitalize_the_id() {
        assert_eq!(Section::Home.label(), "Home");
        assert_eq!(Section::Portfolio.label(), "Portfolio");
    }

    #[test]
    fn home_is_the_initial_section() {
        assert_eq!(Section::default(), Section::Home);
    }
}
