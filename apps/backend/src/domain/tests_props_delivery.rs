//! Property tests for ball application and undo.

use proptest::prelude::*;

use crate::domain::test_state_helpers::{player, ready_session, t0};
use crate::domain::{
    apply_delivery, test_gens, test_prelude, BallInput, BallKind, DismissalKind, NextStep,
    ScoreOutcome,
};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Odd runs swap ends, and an over boundary swaps them once more.
    #[test]
    fn prop_strike_rotation(input in test_gens::ball_input(), prior in 0u32..=5) {
        let mut session = ready_session();
        for _ in 0..prior {
            session.score_ball(BallInput::runs(0), t0()).unwrap();
        }
        let before = session.live().clone();
        let out = apply_delivery(session.data(), &before, &input, None).unwrap();

        let over_done = input.kind().counts_toward_over() && prior == 5;
        let swaps = u32::from(input.runs % 2 == 1) + u32::from(over_done);
        if swaps % 2 == 1 {
            prop_assert_eq!(&out.live.striker_id, &before.non_striker_id);
            prop_assert_eq!(&out.live.non_striker_id, &before.striker_id);
        } else {
            prop_assert_eq!(&out.live.striker_id, &before.striker_id);
            prop_assert_eq!(&out.live.non_striker_id, &before.non_striker_id);
        }
        if over_done {
            prop_assert_eq!(out.next_step, NextStep::AwaitingNewBowler);
            prop_assert_eq!(out.live.bowler_id, None);
        }
    }

    /// Wides and no-balls never advance the over count.
    #[test]
    fn prop_illegal_balls_do_not_count(input in test_gens::ball_input()) {
        let session = ready_session();
        let out = apply_delivery(session.data(), session.live(), &input, None).unwrap();
        let before = session.data().current_innings().overs.total_balls();
        let after = out.data.current_innings().overs.total_balls();
        match input.kind() {
            BallKind::Wide | BallKind::NoBall => prop_assert_eq!(after, before),
            _ => prop_assert_eq!(after, before + 1),
        }
    }

    /// Total runs grow by exactly the runs the ball was worth.
    #[test]
    fn prop_total_tracks_ball_value(input in test_gens::ball_input()) {
        let session = ready_session();
        let out = apply_delivery(session.data(), session.live(), &input, None).unwrap();
        let penalty = match input.kind() {
            BallKind::Wide | BallKind::NoBall => 1,
            _ => 0,
        };
        prop_assert_eq!(
            out.data.current_innings().total_runs,
            session.data().current_innings().total_runs + input.runs + penalty
        );
    }

    /// Only bowler-credited dismissals add to the bowler's wickets.
    #[test]
    fn prop_wicket_credit(kind in test_gens::selectable_dismissal(), runs in 0u32..=3) {
        let mut session = ready_session();
        let outcome = session.score_ball(BallInput::runs(runs).with_wicket(), t0()).unwrap();
        prop_assert!(matches!(outcome, ScoreOutcome::WicketPending(_)));
        session.confirm_wicket(kind, Some("Fay".into()), t0()).unwrap();

        let inn = session.data().current_innings();
        let credited = inn.bowler("c").unwrap().wickets;
        let expected = u32::from(!matches!(
            kind,
            DismissalKind::RunOut | DismissalKind::ObstructingField | DismissalKind::TimedOut
        ));
        prop_assert_eq!(credited, expected);
        prop_assert_eq!(inn.wickets, 1);
        prop_assert!(session.live().striker_id.is_none());
    }

    /// Undo after any ball sequence restores the exact prior state.
    #[test]
    fn prop_undo_restores_snapshot(
        first in proptest::collection::vec(test_gens::ball_input(), 0..8),
        last in test_gens::ball_input(),
    ) {
        let mut session = ready_session();
        for input in first {
            if session.next_step() == NextStep::AwaitingNewBowler {
                session.select_bowler(&player("c", "Cara")).unwrap();
            }
            session.score_ball(input, t0()).unwrap();
        }
        if session.next_step() == NextStep::AwaitingNewBowler {
            session.select_bowler(&player("g", "Gia")).unwrap();
        }

        let data = session.data().clone();
        let commentary = session.commentary().to_vec();
        let live = session.live().clone();
        let depth = session.history_len();

        session.score_ball(last, t0()).unwrap();
        prop_assert!(session.undo());

        prop_assert_eq!(session.data(), &data);
        prop_assert_eq!(session.commentary(), commentary.as_slice());
        prop_assert_eq!(session.live(), &live);
        prop_assert_eq!(session.history_len(), depth);
    }
}
