use fivedraw_engine::errors::GameError;
use fivedraw_engine::player::PlayerAction as A;
use fivedraw_engine::rules::{validate_action, ValidatedAction};

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(1000, 0, A::Bet(0)).unwrap_err();
    match err {
        GameError::InvalidBetAmount { .. } => {}
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn bet_over_stack_is_rejected() {
    let err = validate_action(20, 0, A::Bet(25)).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            needed: 25,
            available: 20
        }
    );
}

#[test]
fn bet_using_whole_stack_is_allowed() {
    let va = validate_action(25, 0, A::Bet(25)).unwrap();
    assert_eq!(va, ValidatedAction::Bet { pay: 25, increment: 25 });
    assert_eq!(va.status(), "Bet 25");
}

#[test]
fn call_pays_exactly_what_is_owed() {
    let va = validate_action(1000, 35, A::Call).unwrap();
    assert_eq!(va, ValidatedAction::Call { pay: 35 });
    assert_eq!(va.pay(), 35);
}

#[test]
fn call_beyond_stack_is_rejected() {
    assert_eq!(
        validate_action(5, 10, A::Call),
        Err(GameError::InsufficientChips {
            needed: 10,
            available: 5
        })
    );
}

#[test]
fn raise_pays_call_plus_increment() {
    let va = validate_action(990, 10, A::Raise(25)).unwrap();
    assert_eq!(va, ValidatedAction::Raise { pay: 35, increment: 25 });
    assert_eq!(va.status(), "Raise 25");
}

#[test]
fn raise_needs_a_wager_to_raise() {
    assert_eq!(validate_action(1000, 0, A::Raise(25)), Err(GameError::NothingToRaise));
}

#[test]
fn bet_while_facing_a_wager_is_rejected() {
    assert_eq!(
        validate_action(1000, 10, A::Bet(25)),
        Err(GameError::BetFacingWager { to_call: 10 })
    );
}

#[test]
fn check_only_when_nothing_is_owed() {
    assert_eq!(validate_action(1000, 0, A::Check), Ok(ValidatedAction::Check));
    assert_eq!(
        validate_action(1000, 10, A::Check),
        Err(GameError::CheckNotAllowed { to_call: 10 })
    );
}

#[test]
fn fold_is_always_valid() {
    assert_eq!(validate_action(0, 500, A::Fold), Ok(ValidatedAction::Fold));
    assert_eq!(ValidatedAction::Fold.status(), "Fold");
}
