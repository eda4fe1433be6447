use clap::Parser;
use ui::app::application_lifecycle::ApplicationLifecycle;
use ui::cli::{Cli, locale_listing, theme_listing};
use ui::logger::setup_logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ApplicationLifecycle::load_configuration(cli.config.as_deref())?;

    // Listings go to stdout, so keep the logger's startup line out of them
    if !cli.is_listing() {
        setup_logger(config.logging())?;
    }

    let selection = ApplicationLifecycle::load_catalog()?;
    let warnings = config
        .selection()
        .with_overrides(cli.theme.as_deref(), cli.locale.as_deref())
        .apply(&selection);

    if cli.is_listing() {
        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }
        if cli.list_themes {
            theme_listing(&selection).iter().for_each(|line| println!("{line}"));
        }
        if cli.list_locales {
            locale_listing(&selection).iter().for_each(|line| println!("{line}"));
        }
        return Ok(());
    }

    let mut model = ApplicationLifecycle::initialize(config, selection, warnings)?;
    ApplicationLifecycle::setup_terminal(&mut model)?;

    let loop_result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;
    loop_result
}
