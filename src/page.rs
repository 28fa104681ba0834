/// Which of the two views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Contact,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Contact];

    /// Path appended to the API base.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Contact => "/contact",
        }
    }

    pub fn url(self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path())
    }

    /// Nav button text.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Contact => "Contact",
        }
    }

    /// Fixed heading, independent of what the server sends.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home Page",
            Page::Contact => "Contact Page",
        }
    }
}
