use catalog::CatalogError;
use claims::assert_matches;
use std::sync::mpsc::{self, Sender};
use ui::AppError;
use ui::components::common::{Msg, PopupActivityMsg};
use ui::error::ErrorReporter;

/// Report an error the way handlers do and hand back what reached the model.
fn report_and_receive(report: impl FnOnce(&ErrorReporter)) -> Msg {
    let (tx, rx) = mpsc::channel();
    report(&ErrorReporter::new(tx));
    rx.try_recv().expect("reporter should queue a popup message")
}

fn report_error_simple(tx: &Sender<Msg>, error: AppError, component: &str, operation: &str) {
    let reporter = ErrorReporter::new(tx.clone());
    reporter.report_simple(error, component, operation);
}

#[test]
fn test_report_error_simple() {
    let (tx, rx) = mpsc::channel();

    report_error_simple(
        &tx,
        AppError::Component("header failed".to_string()),
        "Header",
        "mount",
    );

    match rx.recv().unwrap() {
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Component(message))) => {
            assert!(message.contains("header failed"));
        }
        other => panic!("Expected ShowError popup, got {other:?}"),
    }
}

#[test]
fn test_selection_warning_uses_warning_popup() {
    let msg = report_and_receive(|reporter| {
        reporter.report_selection_warning("apply_config", "Unknown theme 'nordic', using 'indian'")
    });

    match msg {
        Msg::PopupActivity(PopupActivityMsg::ShowWarning(message)) => {
            assert!(message.contains("nordic"));
        }
        other => panic!("Expected ShowWarning popup, got {other:?}"),
    }
}

#[test]
fn test_catalog_errors_keep_their_category() {
    let error = AppError::from(CatalogError::KeysOutsideDefault {
        locale: "hi".to_string(),
        keys: vec!["weddingParty".to_string()],
    });
    assert_matches!(error, AppError::Catalog(_));

    let msg = report_and_receive(|reporter| reporter.report_simple(error, "Catalog", "build"));
    assert_matches!(
        msg,
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Catalog(_)))
    );
}

#[test]
fn test_closed_channel_does_not_panic() {
    let (tx, rx) = mpsc::channel();
    drop(rx);

    report_error_simple(&tx, AppError::Channel("gone".to_string()), "Model", "send");
}

#[test]
fn test_picker_failures_share_one_popup_path() {
    for (component, operation) in [("Theme", "unmount"), ("Locale", "close")] {
        let msg = report_and_receive(|reporter| {
            reporter.report_simple(
                AppError::Component(format!("{component} picker is not mounted")),
                component,
                operation,
            )
        });

        match msg {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Component(message))) => {
                assert!(message.contains(&format!("{component} picker is not mounted")));
            }
            other => panic!("Expected ShowError popup, got {other:?}"),
        }
    }
}
