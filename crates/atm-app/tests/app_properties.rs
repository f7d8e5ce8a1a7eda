//! Property-based tests for the session state machine.
//!
//! Each property drives the App through arbitrary inputs and checks one
//! behavioral rule: PIN length bound, authentication outcome, withdrawal and
//! deposit arithmetic, and exit semantics.

use atm_app::{AccountKind, Amount, App, AppAction, Intent, MenuTarget, Notification, Screen};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = AccountKind> {
    prop_oneof![Just(AccountKind::Current), Just(AccountKind::Savings)]
}

fn other(kind: AccountKind) -> AccountKind {
    match kind {
        AccountKind::Current => AccountKind::Savings,
        AccountKind::Savings => AccountKind::Current,
    }
}

fn login(app: &mut App) {
    for d in [1, 2, 3, 4] {
        app.digit_press(d);
    }
    app.submit_pin();
}

/// Logged-in app with `kind` selected, moved from the menu to `target`.
fn app_on(kind: AccountKind, target: MenuTarget) -> App {
    let mut app = App::default();
    login(&mut app);
    app.select_account(kind);
    app.navigate(target);
    app
}

proptest! {
    #[test]
    fn prop_pin_never_exceeds_four(
        ops in prop::collection::vec(prop_oneof![3 => (0u8..10).prop_map(Some), 1 => Just(None)], 0..40)
    ) {
        let mut app = App::default();
        for op in ops {
            match op {
                Some(d) => { app.digit_press(d); },
                None => { app.backspace(); },
            }
            prop_assert!(app.entered_pin().len() <= 4);
        }
    }

    #[test]
    fn prop_wrong_pin_never_authenticates(digits in prop::collection::vec(0u8..10, 0..=4)) {
        prop_assume!(digits != [1, 2, 3, 4]);

        let mut app = App::default();
        for d in digits {
            app.digit_press(d);
        }
        let actions = app.submit_pin();

        prop_assert!(actions.contains(&AppAction::Notify(Notification::InvalidPin)));
        prop_assert!(!app.is_authenticated());
        prop_assert_eq!(app.screen(), Screen::Pin);
        prop_assert_eq!(app.entered_pin(), "");
    }

    #[test]
    fn prop_covered_withdrawal_debits_exactly(kind in kind_strategy(), cents in 1u64..=100_000) {
        let mut app = app_on(kind, MenuTarget::Withdrawal);
        let amount = Amount::from_cents(cents);
        let before = app.balance(kind);
        let other_before = app.balance(other(kind));

        app.withdraw(amount);

        prop_assert_eq!(app.balance(kind), before.and_then(|b| b.checked_sub(amount)));
        prop_assert_eq!(app.balance(other(kind)), other_before);
        prop_assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn prop_overdraft_changes_nothing(kind in kind_strategy(), extra in 1u64..1_000_000) {
        let mut app = app_on(kind, MenuTarget::Withdrawal);
        let before = app.accounts().clone();
        let balance = app.balance(kind).unwrap_or_default();
        let amount = Amount::from_cents(balance.cents() + extra);

        let actions = app.withdraw(amount);

        prop_assert!(actions.contains(&AppAction::Notify(Notification::InsufficientFunds)));
        prop_assert_eq!(app.accounts(), &before);
        prop_assert_eq!(app.screen(), Screen::Withdrawal);
    }

    #[test]
    fn prop_numeric_deposit_credits_exactly(
        kind in kind_strategy(),
        units in 0u64..1_000_000,
        cents in 0u64..100,
    ) {
        prop_assume!(units > 0 || cents > 0);
        let text = format!("{units}.{cents:02}");
        let mut app = app_on(kind, MenuTarget::Deposit);
        let before = app.balance(kind).unwrap_or_default();

        app.apply(Intent::UpdateDepositText(text));
        app.confirm_deposit();

        let credited = Amount::from_cents(units * 100 + cents);
        prop_assert_eq!(app.balance(kind), before.checked_add(credited));
        prop_assert_eq!(app.pending_deposit(), "");
        prop_assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn prop_non_numeric_deposit_changes_nothing(
        kind in kind_strategy(),
        text in "[a-zA-Z !?-]{0,8}|-[0-9]{1,4}|0+(\\.0{1,2})?",
    ) {
        let mut app = app_on(kind, MenuTarget::Deposit);
        let before = app.accounts().clone();

        app.update_deposit_text(text);
        let actions = app.confirm_deposit();

        prop_assert!(actions.contains(&AppAction::Notify(Notification::InvalidAmount)));
        prop_assert_eq!(app.accounts(), &before);
        prop_assert_eq!(app.screen(), Screen::Deposit);
    }

    #[test]
    fn prop_exit_resets_session_only(
        kind in kind_strategy(),
        target in prop_oneof![
            Just(MenuTarget::Withdrawal),
            Just(MenuTarget::Deposit),
            Just(MenuTarget::Balance),
            Just(MenuTarget::Account),
        ],
        withdraw_units in 1u64..500,
    ) {
        let mut app = app_on(kind, MenuTarget::Withdrawal);
        app.withdraw(Amount::from_units(withdraw_units));
        app.navigate(target);
        let before = app.accounts().clone();

        app.exit();

        prop_assert_eq!(app.screen(), Screen::Pin);
        prop_assert!(!app.is_authenticated());
        prop_assert_eq!(app.entered_pin(), "");
        prop_assert_eq!(app.selected_kind(), None);
        prop_assert_eq!(app.accounts(), &before);
    }
}
