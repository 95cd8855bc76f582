use headsup_engine::errors::IllegalReason;
use headsup_engine::player::PlayerAction as A;
use headsup_engine::rules::{legal_actions, validate_action, ValidatedAction};

#[test]
fn check_is_only_legal_when_nothing_is_owed() {
    assert_eq!(validate_action(1000, 0, 0, A::Check), Ok(ValidatedAction::Check));
    assert_eq!(validate_action(1000, 10, 10, A::Check), Ok(ValidatedAction::Check));
    assert_eq!(
        validate_action(1000, 0, 10, A::Check),
        Err(IllegalReason::CheckFacingBet { to_call: 10 })
    );
}

#[test]
fn call_pays_the_difference_and_needs_a_bet() {
    assert_eq!(validate_action(1000, 10, 20, A::Call), Ok(ValidatedAction::Call(10)));
    assert_eq!(
        validate_action(1000, 0, 0, A::Call),
        Err(IllegalReason::NothingToCall)
    );
}

#[test]
fn bet_opens_at_fixed_increment_only_once() {
    assert_eq!(validate_action(1000, 0, 0, A::Bet), Ok(ValidatedAction::Bet(10)));
    assert_eq!(
        validate_action(1000, 0, 10, A::Bet),
        Err(IllegalReason::BetAlreadyOpen { table_bet: 10 })
    );
}

#[test]
fn raise_adds_increment_to_table_bet() {
    assert_eq!(
        validate_action(1000, 10, 10, A::Raise),
        Ok(ValidatedAction::Raise { to: 20, cost: 10 })
    );
    // facing a bet: pays the call and the increment
    assert_eq!(
        validate_action(1000, 0, 10, A::Raise),
        Ok(ValidatedAction::Raise { to: 20, cost: 20 })
    );
    assert_eq!(
        validate_action(1000, 0, 0, A::Raise),
        Err(IllegalReason::NoBetToRaise)
    );
}

#[test]
fn action_costing_more_than_stack_is_rejected() {
    assert_eq!(
        validate_action(15, 0, 10, A::Raise),
        Err(IllegalReason::InsufficientChips {
            needed: 20,
            stack: 15
        })
    );
    assert_eq!(validate_action(0, 0, 10, A::Fold), Ok(ValidatedAction::Fold));
}

#[test]
fn legal_actions_lists_accepted_moves() {
    assert_eq!(legal_actions(1000, 0, 0), vec![A::Check, A::Bet, A::Fold]);
    assert_eq!(legal_actions(1000, 0, 10), vec![A::Call, A::Raise, A::Fold]);
    assert_eq!(legal_actions(10, 0, 10), vec![A::Call, A::Fold]);
}
