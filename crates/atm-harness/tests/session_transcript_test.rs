//! Snapshot of a complete session transcript.
//!
//! Drives a scripted session covering every screen and every notification,
//! renders one line per step, and compares the transcript against the
//! stored snapshot.

use std::fmt::Write;

use atm_app::{AccountKind, Amount, Intent, MenuTarget};
use atm_harness::SimDriver;

fn describe(sim: &SimDriver) -> String {
    let app = sim.app();
    let selected = app.selected_account().map_or_else(
        || "-".to_string(),
        |account| format!("{}={}", account.kind, account.balance),
    );
    format!(
        "screen={} auth={} pin={:?} selected={} current={} savings={}",
        app.screen(),
        app.is_authenticated(),
        app.masked_pin(),
        selected,
        app.balance(AccountKind::Current).unwrap_or_default(),
        app.balance(AccountKind::Savings).unwrap_or_default(),
    )
}

#[test]
fn full_session_transcript() {
    let script = [
        Intent::DigitPress(9),
        Intent::DigitPress(9),
        Intent::SubmitPin,
        Intent::DigitPress(1),
        Intent::DigitPress(2),
        Intent::DigitPress(3),
        Intent::DigitPress(4),
        Intent::DigitPress(5),
        Intent::SubmitPin,
        Intent::SelectAccount(AccountKind::Current),
        Intent::Navigate(MenuTarget::Withdrawal),
        Intent::Withdraw(Amount::from_units(200)),
        Intent::Navigate(MenuTarget::Deposit),
        Intent::UpdateDepositText("abc".into()),
        Intent::ConfirmDeposit,
        Intent::UpdateDepositText("50".into()),
        Intent::ConfirmDeposit,
        Intent::Navigate(MenuTarget::Account),
        Intent::SelectAccount(AccountKind::Savings),
        Intent::Navigate(MenuTarget::Withdrawal),
        Intent::Withdraw(Amount::from_units(6000)),
        Intent::Back,
        Intent::Navigate(MenuTarget::Balance),
        Intent::Back,
        Intent::Exit,
    ];

    let mut sim = SimDriver::default();
    let mut transcript = format!("start: {}\n", describe(&sim));

    for intent in script {
        let label = format!("{intent:?}");
        let actions = sim.step(intent);
        let notes: Vec<_> = actions
            .iter()
            .flatten()
            .filter_map(|action| match action {
                atm_app::AppAction::Notify(n) => Some(n.to_string()),
                atm_app::AppAction::Render | atm_app::AppAction::Quit => None,
            })
            .collect();

        let _ = write!(transcript, "{label}: {}", describe(&sim));
        if !notes.is_empty() {
            let _ = write!(transcript, " | {}", notes.join("; "));
        }
        transcript.push('\n');
    }

    insta::assert_snapshot!("full_session_transcript", transcript);
}
