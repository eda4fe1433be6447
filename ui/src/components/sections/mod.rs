//! Site sections shown in the main pane.
//!
//! [`Section`] is the navigation order used by the header tabs and the
//! next/previous keys. The sample celebration data lives in [`content`];
//! [`SectionRenderer`] turns a section into themed, translated text.

pub mod content;
pub mod rendering;

pub use rendering::SectionRenderer;

use catalog::locale::keys;

/// Custom attribute carrying the displayed section as its index in [`Section::ALL`].
pub const ATTR_SECTION: &str = "section";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    OurStory,
    Ceremony,
    Timeline,
    Gallery,
    Traditions,
    WeddingParty,
    Rsvp,
    Guestbook,
    Registry,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 10] = [
        Section::Home,
        Section::OurStory,
        Section::Ceremony,
        Section::Timeline,
        Section::Gallery,
        Section::Traditions,
        Section::WeddingParty,
        Section::Rsvp,
        Section::Guestbook,
        Section::Registry,
    ];

    /// Translation key of the section heading.
    pub const fn nav_key(self) -> &'static str {
        match self {
            Section::Home => keys::WELCOME,
            Section::OurStory => keys::OUR_STORY,
            Section::Ceremony => keys::CEREMONY,
            Section::Timeline => keys::TIMELINE,
            Section::Gallery => keys::GALLERY,
            Section::Traditions => keys::TRADITIONS,
            Section::WeddingParty => keys::WEDDING_PARTY,
            Section::Rsvp => keys::RSVP,
            Section::Guestbook => keys::GUESTBOOK,
            Section::Registry => keys::REGISTRY,
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::OurStory => "📖",
            Section::Ceremony => "🪔",
            Section::Timeline => "🕰️",
            Section::Gallery => "📷",
            Section::Traditions => "🌺",
            Section::WeddingParty => "👥",
            Section::Rsvp => "✉️",
            Section::Guestbook => "🖋️",
            Section::Registry => "🎁",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following section, wrapping around after the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding section, wrapping around before the first.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
