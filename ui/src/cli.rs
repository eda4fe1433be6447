use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "unity-threads")]
#[command(about = "A multicultural wedding celebration in your terminal")]
#[command(version)]
pub struct Cli {
    /// Theme to start with (indian, asian, african, island)
    #[arg(long, short = 't')]
    pub theme: Option<String>,

    /// Language to start with (en, hi, zh)
    #[arg(long, short = 'l')]
    pub locale: Option<String>,

    /// Configuration file to use instead of the default locations
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Print the available languages and exit
    #[arg(long)]
    pub list_locales: bool,
}

impl Cli {
    /// Whether the run only prints catalog listings.
    pub fn is_listing(&self) -> bool {
        self.list_themes || self.list_locales
    }
}

/// Lines printed by `--list-themes`: id, display name and primary color.
pub fn theme_listing(selection: &catalog::SelectionContext) -> Vec<String> {
    let active = selection.active_bundle().id;
    selection
        .list_bundles()
        .map(|(id, bundle)| {
            let marker = if id == active { '*' } else { ' ' };
            format!(
                "{marker} {:<8} {:<20} {}",
                id.as_str(),
                bundle.display_name,
                bundle.colors.primary
            )
        })
        .collect()
}

/// Lines printed by `--list-locales`: code, label and translation coverage.
pub fn locale_listing(selection: &catalog::SelectionContext) -> Vec<String> {
    let active = selection.active_locale();
    selection
        .list_locales()
        .map(|meta| {
            let marker = if meta.code == active { '*' } else { ' ' };
            let coverage = selection.locales().coverage(meta.code);
            format!(
                "{marker} {:<3} {:<12} {:>3}%",
                meta.code.as_str(),
                meta.label(),
                coverage.percent()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{SelectionContext, ThemeId};

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "unity-threads",
            "--theme",
            "asian",
            "--locale",
            "zh-CN",
            "--config",
            "/tmp/unity.toml",
        ]);

        assert_eq!(cli.theme.as_deref(), Some("asian"));
        assert_eq!(cli.locale.as_deref(), Some("zh-CN"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/unity.toml")));
        assert!(!cli.is_listing());
    }

    #[test]
    fn test_listing_flags() {
        let cli = Cli::parse_from(["unity-threads", "--list-themes"]);
        assert!(cli.is_listing());
    }

    #[test]
    fn test_theme_listing_marks_active() {
        let selection = SelectionContext::builtin().unwrap();
        selection.select_bundle(ThemeId::African);

        let lines = theme_listing(&selection);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  indian"));
        assert!(lines[2].starts_with("* african"));
        assert!(lines[2].contains("#FF8C00"));
    }

    #[test]
    fn test_locale_listing_reports_coverage() {
        let selection = SelectionContext::builtin().unwrap();

        let lines = locale_listing(&selection);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("* en"));
        assert!(lines[0].ends_with("100%"));
    }
}
