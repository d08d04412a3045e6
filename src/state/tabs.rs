// Tab catalogue.
// The fixed set of tabs the application shows, in tab strip order.

/// A tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Welcome,
    Authorization,
    AboutMe,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Welcome, Tab::Authorization, Tab::AboutMe];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Welcome => "Welcome",
            Tab::Authorization => "Authorization",
            Tab::AboutMe => "About me",
        }
    }

    /// Position of this tab in the tab strip.
    pub fn index(&self) -> usize {
        match self {
            Tab::Welcome => 0,
            Tab::Authorization => 1,
            Tab::AboutMe => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Welcome => Tab::Authorization,
            Tab::Authorization => Tab::AboutMe,
            Tab::AboutMe => Tab::Welcome,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Welcome => Tab::AboutMe,
            Tab::Authorization => Tab::Welcome,
            Tab::AboutMe => Tab::Authorization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(Tab::from_index(i), Some(*tab));
        }
        assert_eq!(Tab::from_index(3), None);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Tab::AboutMe.next(), Tab::Welcome);
        assert_eq!(Tab::Welcome.prev(), Tab::AboutMe);
        assert_eq!(Tab::Authorization.next().prev(), Tab::Authorization);
    }
}
