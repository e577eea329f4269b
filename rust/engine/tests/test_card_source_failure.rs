mod helpers;

use fivedraw_engine::config::TableConfig;
use fivedraw_engine::errors::{CardSourceError, GameError};
use fivedraw_engine::game::Phase;
use fivedraw_engine::player::PlayerAction as A;
use fivedraw_engine::table::Table;
use helpers::{cards, seats, BrokenSource, ScriptedSource};

#[test]
fn failed_deal_leaves_table_unchanged() {
    let mut t = Table::new(TableConfig::default(), seats(3), Box::new(BrokenSource)).unwrap();
    let err = t.start_round().unwrap_err();
    assert!(matches!(
        err,
        GameError::CardSource(CardSourceError::Unavailable(_))
    ));
    assert_eq!(t.phase(), Phase::Setup);
    assert_eq!(t.round_number(), 0);
    assert_eq!(t.pot(), 0);
    assert!(t.players().iter().all(|p| p.balance() == 1000 && p.hand().is_empty()));
}

#[test]
fn one_failure_is_retried_after_reshuffle() {
    let mut source = ScriptedSource::new("2c 3d 4h 5s 7c  8c 9d Jh Qs Kc");
    source.fail_next = 1;
    let mut t = Table::new(TableConfig::default(), seats(2), Box::new(source)).unwrap();
    t.start_round().unwrap();
    assert_eq!(t.phase(), Phase::PreDraw);
    assert_eq!(t.player(1).unwrap().hand(), cards("8c 9d Jh Qs Kc").as_slice());
}

#[test]
fn exhausted_draw_keeps_hand_and_abort_refunds_everyone() {
    // exactly enough cards for the deal, none for the draw
    let order = "2c 3d 4h 5s 7c  8c 9d Jh Qs Kc";
    let mut t = Table::new(
        TableConfig::default(),
        seats(2),
        Box::new(ScriptedSource::new(order)),
    )
    .unwrap();
    t.start_round().unwrap();
    t.apply_action(1, A::Raise(25)).unwrap();
    t.apply_action(0, A::Call).unwrap();
    assert_eq!(t.phase(), Phase::Draw);
    assert_eq!(t.pot(), 90);

    t.set_discards(0, &[0, 1]).unwrap();
    let err = t.complete_draw().unwrap_err();
    assert_eq!(
        err,
        GameError::CardSource(CardSourceError::Exhausted {
            requested: 2,
            available: 0
        })
    );
    assert_eq!(t.phase(), Phase::Draw);
    assert_eq!(t.player(0).unwrap().hand(), cards("2c 3d 4h 5s 7c").as_slice());
    assert_eq!(t.player(0).unwrap().discards().len(), 2);

    t.abort_round().unwrap();
    assert_eq!(t.phase(), Phase::Showdown);
    assert_eq!(t.pot(), 0);
    assert!(t.players().iter().all(|p| p.balance() == 1000));
    let out = t.outcome().unwrap();
    assert_eq!(out.winner, None);
    assert_eq!(out.amount, 0);
    assert_eq!(t.record().result.as_deref(), Some("aborted"));
}

#[test]
fn later_seat_failing_leaves_every_hand_untouched() {
    // seat 0's two replacements are there, seat 1's three are not
    let order = "2c 3d 4h 5s 7c  8c 9d Jh Qs Kc  Ah Ad";
    let mut t = Table::new(
        TableConfig::default(),
        seats(2),
        Box::new(ScriptedSource::new(order)),
    )
    .unwrap();
    t.start_round().unwrap();
    t.apply_action(1, A::Raise(25)).unwrap();
    t.apply_action(0, A::Call).unwrap();
    assert_eq!(t.phase(), Phase::Draw);

    t.set_discards(0, &[0, 1]).unwrap();
    t.set_discards(1, &[2, 3, 4]).unwrap();
    let err = t.complete_draw().unwrap_err();
    assert!(matches!(
        err,
        GameError::CardSource(CardSourceError::Exhausted { requested: 3, .. })
    ));
    assert_eq!(t.phase(), Phase::Draw);
    assert_eq!(t.player(0).unwrap().hand(), cards("2c 3d 4h 5s 7c").as_slice());
    assert_eq!(t.player(1).unwrap().hand(), cards("8c 9d Jh Qs Kc").as_slice());
    assert_eq!(t.player(0).unwrap().discards().len(), 2);
    assert_eq!(t.player(1).unwrap().discards().len(), 3);
    assert!(t.record().draws.is_empty());

    t.abort_round().unwrap();
    assert!(t.players().iter().all(|p| p.balance() == 1000));
}

#[test]
fn abort_mid_street_returns_uncollected_bets() {
    let mut t = Table::new(
        TableConfig::default(),
        seats(3),
        Box::new(ScriptedSource::new(
            "2c 3d 4h 5s 7c  8c 9d Jh Qs Kc  2d 3h 4s 6c 8h",
        )),
    )
    .unwrap();
    t.start_round().unwrap();
    t.apply_action(1, A::Raise(25)).unwrap();
    t.apply_action(2, A::Fold).unwrap();
    t.abort_round().unwrap();
    assert!(t.players().iter().all(|p| p.balance() == 1000));
    assert_eq!(t.total_chips(), 3000);
    assert_eq!(t.abort_round(), Err(GameError::NoRoundInProgress));
}
