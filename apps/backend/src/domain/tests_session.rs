use time::Duration;

use crate::domain::test_state_helpers::{match_info, player, ready_session, t0};
use crate::domain::{
    BallInput, BattingField, BowlingField, CelebrationKind, DismissalKind, ExtrasKind, InningsNo,
    NextStep, Overs, ScoreOutcome, ScorecardData, ScoringSession,
};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn validation_kind(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn full_over_scenario_with_wicket() {
    let mut s = ready_session();

    s.score_ball(BallInput::runs(1), t0()).unwrap();
    assert_eq!(s.live().striker_id.as_deref(), Some("b"));

    s.score_ball(BallInput::runs(4), t0()).unwrap();
    assert_eq!(s.live().striker_id.as_deref(), Some("b"));
    assert_eq!(s.active_celebration(t0()), Some(CelebrationKind::Four));

    s.score_ball(BallInput::extra(ExtrasKind::Wide, 2), t0()).unwrap();
    assert_eq!(s.data().current_innings().extras, 3);
    assert_eq!(s.data().current_innings().overs.to_string(), "0.2");
    assert_eq!(s.live().striker_id.as_deref(), Some("b"));

    let pending = s
        .score_ball(BallInput::runs(0).with_wicket(), t0())
        .unwrap();
    assert!(matches!(pending, ScoreOutcome::WicketPending(_)));
    assert_eq!(s.history_len(), 3, "pending wicket is not history");

    let event = s
        .confirm_wicket(DismissalKind::Bowled, None, t0())
        .unwrap();
    assert_eq!(event.striker, "Bea");
    assert!(event.is_wicket);

    let inn = s.data().current_innings();
    assert_eq!(inn.batter("b").unwrap().how_out, DismissalKind::Bowled);
    assert_eq!(inn.batter("a").unwrap().how_out, DismissalKind::NotOut);
    assert_eq!(inn.wickets, 1);
    assert_eq!(inn.bowler("c").unwrap().wickets, 1);
    assert_eq!(inn.total_runs, 8);
    assert_eq!(s.live().striker_id, None);
    assert_eq!(
        s.next_step(),
        NextStep::AwaitingNewBatsman {
            bowler_change_due: false
        }
    );
    assert_eq!(s.commentary().len(), 4);
    assert!(s.validation_issues().is_empty());

    let err = s.score_ball(BallInput::runs(1), t0()).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::SelectionPending);
}

#[test]
fn scoring_without_selection_is_rejected() {
    let mut s = ScoringSession::new(ScorecardData::new(match_info()));
    s.select_striker(&player("a", "Alice")).unwrap();

    let err = s.score_ball(BallInput::runs(1), t0()).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::MissingSelection);
    assert_eq!(s.history_len(), 0);
    assert!(s.commentary().is_empty());
    assert_eq!(s.data().current_innings().total_runs, 0);
}

#[test]
fn same_batter_cannot_take_both_ends() {
    let mut s = ScoringSession::new(ScorecardData::default());
    s.select_striker(&player("a", "Alice")).unwrap();
    let err = s.select_non_striker(&player("a", "Alice")).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::DuplicateBatter);
}

#[test]
fn dismissed_batter_cannot_return() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(0).with_wicket(), t0()).unwrap();
    s.confirm_wicket(DismissalKind::Lbw, None, t0()).unwrap();

    let err = s.select_striker(&player("a", "Alice")).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::BatterAlreadyOut);
    s.select_striker(&player("d", "Dee")).unwrap();
    assert_eq!(s.next_step(), NextStep::Ready);
    assert_eq!(s.data().current_innings().batting.len(), 3);
}

#[test]
fn cancelled_wicket_leaves_no_trace() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(2), t0()).unwrap();
    let before = s.data().clone();

    s.score_ball(BallInput::runs(1).with_wicket(), t0()).unwrap();
    assert!(s.wicket_flow().is_pending());
    assert!(s.cancel_wicket());

    assert!(!s.wicket_flow().is_pending());
    assert_eq!(s.data(), &before);
    assert_eq!(s.history_len(), 1);
    assert_eq!(s.commentary().len(), 1);
    assert!(!s.cancel_wicket(), "nothing left to cancel");
}

#[test]
fn pending_wicket_blocks_other_actions() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(0).with_wicket(), t0()).unwrap();

    let err = s.score_ball(BallInput::runs(1), t0()).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::WicketFlowMismatch);
    let err = s.select_bowler(&player("g", "Gia")).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::WicketFlowMismatch);
}

#[test]
fn rejected_dismissal_keeps_wicket_pending() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(0).with_wicket(), t0()).unwrap();

    let err = s
        .confirm_wicket(DismissalKind::RetiredHurt, None, t0())
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::InvalidDismissal);
    assert!(s.wicket_flow().is_pending());
    assert_eq!(s.history_len(), 0);

    s.confirm_wicket(DismissalKind::Stumped, Some("Kit".into()), t0())
        .unwrap();
    let alice = s.data().current_innings().batter("a").cloned().unwrap();
    assert_eq!(alice.fielder.as_deref(), Some("Kit"));
    assert_eq!(alice.bowler.as_deref(), Some("Cara"));
}

#[test]
fn confirm_without_pending_wicket_fails() {
    let mut s = ready_session();
    let err = s
        .confirm_wicket(DismissalKind::Bowled, None, t0())
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::WicketFlowMismatch);
}

#[test]
fn undo_restores_the_previous_ball() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(4), t0()).unwrap();
    let data = s.data().clone();
    let live = s.live().clone();

    s.score_ball(BallInput::runs(3), t0()).unwrap();
    assert!(s.undo());
    assert_eq!(s.data(), &data);
    assert_eq!(s.live(), &live);
    assert_eq!(s.commentary().len(), 1);
    assert_eq!(s.active_celebration(t0()), None);

    assert!(s.undo());
    assert_eq!(s.data().current_innings().total_runs, 0);
    assert!(!s.undo(), "empty history is a no-op");
    assert_eq!(s.data().current_innings().total_runs, 0);
}

#[test]
fn undo_after_wicket_restores_striker() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(0).with_wicket(), t0()).unwrap();
    s.confirm_wicket(DismissalKind::Caught, Some("Fay".into()), t0())
        .unwrap();
    assert!(s.undo());

    assert_eq!(s.live().striker_id.as_deref(), Some("a"));
    assert_eq!(s.next_step(), NextStep::Ready);
    assert_eq!(s.data().current_innings().wickets, 0);
    assert_eq!(
        s.data().current_innings().batter("a").unwrap().how_out,
        DismissalKind::NotOut
    );
}

#[test]
fn over_end_requires_new_bowler() {
    let mut s = ready_session();
    for _ in 0..6 {
        s.score_ball(BallInput::runs(0), t0()).unwrap();
    }
    assert_eq!(s.next_step(), NextStep::AwaitingNewBowler);
    let err = s.score_ball(BallInput::runs(1), t0()).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::SelectionPending);

    s.select_bowler(&player("g", "Gia")).unwrap();
    assert_eq!(s.next_step(), NextStep::Ready);
    assert_eq!(s.data().current_innings().bowling.len(), 2);
    assert_eq!(s.data().current_innings().overs, Overs::from_balls(6));
}

#[test]
fn wicket_on_last_ball_asks_for_batsman_then_bowler() {
    let mut s = ready_session();
    for _ in 0..5 {
        s.score_ball(BallInput::runs(0), t0()).unwrap();
    }
    s.score_ball(BallInput::runs(0).with_wicket(), t0()).unwrap();
    s.confirm_wicket(DismissalKind::Bowled, None, t0()).unwrap();
    assert_eq!(
        s.next_step(),
        NextStep::AwaitingNewBatsman {
            bowler_change_due: true
        }
    );

    assert_eq!(s.live().striker_id.as_deref(), Some("b"));
    assert_eq!(s.live().non_striker_id, None);

    s.select_striker(&player("d", "Dee")).unwrap();
    assert_eq!(s.next_step(), NextStep::AwaitingNewBowler);
    assert_eq!(s.live().bowler_id, None);
    assert_eq!(s.live().striker_id.as_deref(), Some("b"));
    assert_eq!(s.live().non_striker_id.as_deref(), Some("d"));

    s.select_bowler(&player("g", "Gia")).unwrap();
    assert_eq!(s.next_step(), NextStep::Ready);
}

#[test]
fn celebration_expires() {
    let mut s = ready_session().with_celebration_duration(Duration::seconds(2));
    s.score_ball(BallInput::runs(6), t0()).unwrap();

    assert_eq!(s.active_celebration(t0()), Some(CelebrationKind::Six));
    assert_eq!(
        s.active_celebration(t0() + Duration::seconds(1)),
        Some(CelebrationKind::Six)
    );
    assert_eq!(s.active_celebration(t0() + Duration::seconds(2)), None);
}

#[test]
fn over_credited_bowler_raises_one_issue() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(0).with_wicket(), t0()).unwrap();
    s.confirm_wicket(DismissalKind::Bowled, None, t0()).unwrap();

    s.edit_bowling(InningsNo::First, "c", BowlingField::Wickets, "3")
        .unwrap();
    let issues = s.validation_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].to_string(),
        "1st Innings: Bowlers credited with 3 wickets, but only 1 fell."
    );

    s.edit_bowling(InningsNo::First, "c", BowlingField::Wickets, "1")
        .unwrap();
    assert!(s.validation_issues().is_empty());
}

#[test]
fn manual_edits_coerce_and_reaggregate() {
    let mut s = ready_session();
    s.edit_batting(InningsNo::First, "a", BattingField::Runs, "27")
        .unwrap();
    s.edit_batting(InningsNo::First, "b", BattingField::Runs, "abc")
        .unwrap();
    s.edit_bowling(InningsNo::First, "c", BowlingField::Overs, "4.3")
        .unwrap();
    s.edit_bowling(InningsNo::First, "c", BowlingField::Wides, "-2")
        .unwrap();
    s.set_bye_runs(InningsNo::First, "5");

    let inn = s.data().current_innings();
    assert_eq!(inn.batter("b").unwrap().runs, 0);
    assert_eq!(inn.bowler("c").unwrap().wides, 0);
    assert_eq!(inn.overs.to_string(), "4.3");
    assert_eq!(inn.total_runs, 32);
    assert_eq!(s.history_len(), 0, "manual edits are not undoable");
}

#[test]
fn how_out_edit_parses_labels() {
    let mut s = ready_session();
    s.edit_batting(InningsNo::First, "a", BattingField::HowOut, "Run Out")
        .unwrap();
    assert_eq!(s.data().current_innings().wickets, 1);

    let err = s
        .edit_batting(InningsNo::First, "a", BattingField::HowOut, "Bribed")
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::InvalidDismissal);
}

#[test]
fn editing_missing_row_is_not_found() {
    let mut s = ready_session();
    let err = s
        .edit_batting(InningsNo::Second, "a", BattingField::Runs, "1")
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::LedgerRow, _)
    ));
}

#[test]
fn removing_selected_rows_clears_pointers() {
    let mut s = ready_session();
    s.remove_batting_row(InningsNo::First, "a").unwrap();
    s.remove_bowling_row(InningsNo::First, "c").unwrap();
    assert_eq!(s.live().striker_id, None);
    assert_eq!(s.live().bowler_id, None);
    assert_eq!(s.live().non_striker_id.as_deref(), Some("b"));
}

#[test]
fn second_innings_scores_separately() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(4), t0()).unwrap();
    s.switch_innings(InningsNo::Second);
    assert_eq!(s.live(), &Default::default());

    s.select_striker(&player("x", "Xan")).unwrap();
    s.select_non_striker(&player("y", "Yas")).unwrap();
    s.select_bowler(&player("a", "Alice")).unwrap();
    let event = s.score_ball(BallInput::runs(2), t0()).unwrap();
    assert!(matches!(event, ScoreOutcome::Scored(ref e) if e.inning == 2));

    assert_eq!(s.data().innings(InningsNo::First).total_runs, 4);
    assert_eq!(s.data().innings(InningsNo::Second).total_runs, 2);
}

#[test]
fn restore_derives_next_step_from_live_pointers() {
    let data = ScorecardData::new(match_info());
    let live = crate::domain::LiveState {
        striker_id: None,
        non_striker_id: Some("b".into()),
        bowler_id: Some("c".into()),
    };
    let s = ScoringSession::restore(data, Vec::new(), live);
    assert_eq!(
        s.next_step(),
        NextStep::AwaitingNewBatsman {
            bowler_change_due: false
        }
    );
    assert_eq!(s.history_len(), 0);
}

#[test]
fn view_carries_display_rates() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(4), t0()).unwrap();
    s.score_ball(BallInput::runs(0), t0()).unwrap();

    let view = s.view(t0());
    let first = &view.innings[0];
    assert_eq!(first.label, "1st Innings");
    assert_eq!(first.batting[0].strike_rate, "200.00");
    assert_eq!(first.bowling[0].economy, "12.00");
    assert_eq!(first.bowling[0].average, "-");
    assert!(view.can_undo);
    assert_eq!(view.celebration, Some(CelebrationKind::Four));
    assert_eq!(view.commentary.len(), 2);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["innings"][0]["batting"][0]["strikeRate"], "200.00");
    assert_eq!(json["nextStep"]["step"], "ready");
}

#[test]
fn oversized_runs_are_rejected_before_anything_changes() {
    let mut s = ready_session();
    let err = s
        .score_ball(BallInput::extra(ExtrasKind::Wide, u32::MAX), t0())
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::InvalidRuns);

    let err = s
        .score_ball(BallInput::runs(9).with_wicket(), t0())
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::InvalidRuns);
    assert!(!s.wicket_flow().is_pending());
    assert_eq!(s.history_len(), 0);
    assert_eq!(s.data().current_innings().total_runs, 0);
}

#[test]
fn max_value_edits_do_not_overflow_totals() {
    let mut s = ready_session();
    s.edit_batting(InningsNo::First, "a", BattingField::Runs, "4294967295")
        .unwrap();
    s.edit_batting(InningsNo::First, "b", BattingField::Runs, "4294967295")
        .unwrap();
    assert_eq!(s.data().current_innings().total_runs, u32::MAX);

    s.edit_bowling(InningsNo::First, "c", BowlingField::Overs, "99999999999")
        .unwrap();
    s.score_ball(BallInput::runs(1), t0()).unwrap();
    assert_eq!(s.data().current_innings().total_runs, u32::MAX);
}

#[test]
fn switching_innings_clears_celebration() {
    let mut s = ready_session();
    s.score_ball(BallInput::runs(4), t0()).unwrap();
    assert_eq!(s.active_celebration(t0()), Some(CelebrationKind::Four));

    s.switch_innings(InningsNo::Second);
    assert_eq!(s.active_celebration(t0()), None);
}
