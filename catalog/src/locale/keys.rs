//! Translation keys used by the UI.
//!
//! The default locale must define every key listed in [`ALL`].

pub const WELCOME: &str = "welcome";
pub const OUR_STORY: &str = "ourStory";
pub const CEREMONY: &str = "ceremony";
pub const TIMELINE: &str = "timeline";
pub const GALLERY: &str = "gallery";
pub const RSVP: &str = "rsvp";
pub const GUESTBOOK: &str = "guestbook";
pub const TRADITIONS: &str = "traditions";
pub const WEDDING_PARTY: &str = "weddingParty";
pub const REGISTRY: &str = "registry";
pub const SAVE_THE_DATE: &str = "saveTheDate";
pub const JOIN_US: &str = "joinUs";
pub const LEAVE_BLESSING: &str = "leaveBlessing";
pub const THANK_YOU: &str = "thankYou";
pub const ADMIN: &str = "admin";
pub const PREVIEW: &str = "preview";
pub const EDIT: &str = "edit";
pub const SAVE: &str = "save";
pub const PUBLISH: &str = "publish";

// UI chrome
pub const THEME: &str = "theme";
pub const LANGUAGE: &str = "language";
pub const HELP: &str = "help";
pub const QUIT: &str = "quit";
pub const LOGIN: &str = "login";
pub const LOGOUT: &str = "logout";
pub const DASHBOARD: &str = "dashboard";

pub const ALL: &[&str] = &[
    WELCOME,
    OUR_STORY,
    CEREMONY,
    TIMELINE,
    GALLERY,
    RSVP,
    GUESTBOOK,
    TRADITIONS,
    WEDDING_PARTY,
    REGISTRY,
    SAVE_THE_DATE,
    JOIN_US,
    LEAVE_BLESSING,
    THANK_YOU,
    ADMIN,
    PREVIEW,
    EDIT,
    SAVE,
    PUBLISH,
    THEME,
    LANGUAGE,
    HELP,
    QUIT,
    LOGIN,
    LOGOUT,
    DASHBOARD,
];
