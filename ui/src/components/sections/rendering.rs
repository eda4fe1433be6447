use super::Section;
use super::content::{
    BLESSINGS, BRIDE_SIDE, CEREMONIES, COUPLE, DIETARY_OPTIONS, FAMILY_STORIES, GALLERY,
    GROOM_SIDE, PartyMember, REGISTRY, RSVP_EVENTS, TIMELINE, TRADITIONS,
};
use crate::theme::ThemeManager;
use catalog::locale::keys;
use tuirealm::ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

/// Builds the themed, translated body of a section.
///
/// Colors are read from the active palette and headings from the active
/// locale on every call, so the output always reflects the current
/// selection.
pub struct SectionRenderer<'a> {
    theme: &'a ThemeManager,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(theme: &'a ThemeManager) -> Self {
        Self { theme }
    }

    pub fn render(&self, section: Section) -> Text<'static> {
        let mut lines = vec![self.heading(section), self.divider(), Line::from("")];

        lines.extend(match section {
            Section::Home => self.home(),
            Section::OurStory => self.our_story(),
            Section::Ceremony => self.ceremony(),
            Section::Timeline => self.timeline(),
            Section::Gallery => self.gallery(),
            Section::Traditions => self.traditions(),
            Section::WeddingParty => self.wedding_party(),
            Section::Rsvp => self.rsvp(),
            Section::Guestbook => self.guestbook(),
            Section::Registry => self.registry(),
        });

        Text::from(lines)
    }

    fn heading(&self, section: Section) -> Line<'static> {
        Line::from(Span::styled(
            format!("{}  {}", section.icon(), self.theme.t(section.nav_key())),
            self.style(self.theme.title_accent()).add_modifier(Modifier::BOLD),
        ))
    }

    fn divider(&self) -> Line<'static> {
        Line::from(Span::styled(
            "━".repeat(24),
            self.style(self.theme.primary_accent()),
        ))
    }

    fn home(&self) -> Vec<Line<'static>> {
        let motifs: Vec<&str> = self.theme.bundle().motifs().collect();
        let ornament = if motifs.is_empty() {
            "✦".to_string()
        } else {
            format!("✦ {} ✦", motifs.join(" · "))
        };

        vec![
            self.muted(ornament),
            Line::from(""),
            Line::from(Span::styled(
                COUPLE.bride.to_string(),
                self.style(self.theme.primary_accent())
                    .add_modifier(Modifier::BOLD),
            )),
            self.accent("&".to_string()),
            Line::from(Span::styled(
                COUPLE.groom.to_string(),
                self.style(self.theme.primary_accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            self.text(COUPLE.tagline),
            Line::from(""),
            self.subheading(self.theme.t(keys::SAVE_THE_DATE).to_string()),
            self.label_value("📅 ", COUPLE.date),
            self.label_value("📍 ", COUPLE.venue),
            Line::from(""),
            self.text(self.theme.t(keys::JOIN_US)),
        ]
    }

    fn our_story(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for family in FAMILY_STORIES {
            lines.push(self.subheading(family.name.to_string()));
            lines.push(self.muted(format!("📍 {}", family.origin)));
            lines.push(self.text(family.story));
            lines.push(self.accent(format!("✿ {}", family.traditions.join("  ✿ "))));
            lines.push(Line::from(""));
        }
        lines
    }

    fn ceremony(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for ceremony in CEREMONIES {
            lines.push(Line::from(vec![
                Span::styled(
                    ceremony.name.to_string(),
                    self.style(self.theme.header_accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", ceremony.native_name),
                    self.style(self.theme.title_accent()),
                ),
            ]));
            lines.push(self.muted(ceremony.when.to_string()));
            lines.push(self.text(ceremony.description));
            lines.push(Line::from(""));
        }
        lines
    }

    fn timeline(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for day in TIMELINE {
            lines.push(self.subheading(format!("{} · {}", day.label, day.date)));
            for event in day.events {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:>8}  ", event.time),
                        self.style(self.theme.shortcut_key())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        event.title.to_string(),
                        self.style(self.theme.text_primary())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(self.muted(format!("            📍 {}", event.location)));
                lines.push(self.muted(format!("            {}", event.description)));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn gallery(&self) -> Vec<Line<'static>> {
        GALLERY
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("  ▣ ", self.style(self.theme.primary_accent())),
                    Span::styled(item.title.to_string(), self.style(self.theme.text_primary())),
                    Span::styled(
                        format!("  #{}", item.category),
                        self.style(self.theme.text_muted()),
                    ),
                ])
            })
            .collect()
    }

    fn traditions(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for tradition in TRADITIONS {
            lines.push(self.subheading(tradition.title.to_string()));
            lines.push(self.text(tradition.description));
            for item in tradition.etiquette {
                lines.push(self.muted(format!("  • {item}")));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn wedding_party(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.subheading(format!("Bride's side · {}", COUPLE.bride))];
        lines.extend(BRIDE_SIDE.iter().map(|member| self.party_member(member)));
        lines.push(Line::from(""));
        lines.push(self.subheading(format!("Groom's side · {}", COUPLE.groom)));
        lines.extend(GROOM_SIDE.iter().map(|member| self.party_member(member)));
        lines
    }

    fn party_member(&self, member: &PartyMember) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<14}", member.name),
                self.style(self.theme.text_primary())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<15}", member.role),
                self.style(self.theme.header_accent()),
            ),
            Span::styled(
                format!("{:<13}", member.relation),
                self.style(self.theme.text_muted()),
            ),
            Span::styled(member.outfit.to_string(), self.style(self.theme.text_muted())),
        ])
    }

    fn rsvp(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            self.text(
                "Please let us know if you'll be joining us for our special celebration.",
            ),
            Line::from(""),
            self.subheading("Events".to_string()),
        ];
        for event in RSVP_EVENTS {
            lines.push(Line::from(vec![
                Span::styled("  ☐ ", self.style(self.theme.primary_accent())),
                Span::styled(
                    format!("{:<18}", event.name),
                    self.style(self.theme.text_primary()),
                ),
                Span::styled(event.date.to_string(), self.style(self.theme.text_muted())),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(self.subheading("Dietary preferences".to_string()));
        for option in DIETARY_OPTIONS {
            lines.push(self.muted(format!("  ○ {option}")));
        }
        lines
    }

    fn guestbook(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            self.accent(self.theme.t(keys::LEAVE_BLESSING).to_string()),
            Line::from(""),
        ];
        for blessing in BLESSINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    blessing.name.to_string(),
                    self.style(self.theme.text_primary())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} · {}", blessing.location, blessing.language),
                    self.style(self.theme.text_muted()),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  “{}”", blessing.message),
                self.style(self.theme.text_primary())
                    .add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }
        lines.push(self.accent(self.theme.t(keys::THANK_YOU).to_string()));
        lines
    }

    fn registry(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for category in REGISTRY {
            lines.push(self.subheading(category.name.to_string()));
            for item in category.items {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<24}", item.name),
                        self.style(self.theme.text_primary()),
                    ),
                    Span::styled(
                        item.price.to_string(),
                        self.style(self.theme.status_success())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn style(&self, fg: Color) -> Style {
        Style::default().fg(fg)
    }

    fn subheading(&self, text: String) -> Line<'static> {
        Line::from(Span::styled(
            text,
            self.style(self.theme.header_accent())
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn text(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_string(),
            self.style(self.theme.text_primary()),
        ))
    }

    fn muted(&self, text: String) -> Line<'static> {
        Line::from(Span::styled(text, self.style(self.theme.text_muted())))
    }

    fn accent(&self, text: String) -> Line<'static> {
        Line::from(Span::styled(text, self.style(self.theme.primary_accent())))
    }

    fn label_value(&self, label: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(label.to_string(), self.style(self.theme.primary_accent())),
            Span::styled(value.to_string(), self.style(self.theme.text_primary())),
        ])
    }
}
