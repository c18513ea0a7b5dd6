// Proptest generators for domain types.
// Ledgers are generated valid by construction (unique ids, normalised overs).

use proptest::prelude::*;

use crate::domain::{BallInput, BattingEntry, BowlingEntry, DismissalKind, ExtrasKind, Innings, Overs};

/// Any dismissal kind, including the non-wicket statuses.
pub fn dismissal() -> impl Strategy<Value = DismissalKind> {
    proptest::sample::select(DismissalKind::ALL.to_vec())
}

/// Dismissal kinds offered by the wicket confirmation flow.
pub fn selectable_dismissal() -> impl Strategy<Value = DismissalKind> {
    proptest::sample::select(
        DismissalKind::ALL
            .iter()
            .copied()
            .filter(DismissalKind::is_selectable_dismissal)
            .collect::<Vec<_>>(),
    )
}

pub fn extras_kind() -> impl Strategy<Value = ExtrasKind> {
    proptest::sample::select(ExtrasKind::ALL.to_vec())
}

/// Runs off one ball (0..=6).
pub fn runs() -> impl Strategy<Value = u32> {
    0u32..=6
}

/// A non-wicket ball of any type.
pub fn ball_input() -> impl Strategy<Value = BallInput> {
    prop_oneof![
        3 => runs().prop_map(BallInput::runs),
        1 => (extras_kind(), 0u32..=4).prop_map(|(kind, r)| BallInput::extra(kind, r)),
    ]
}

/// A legal (over-counting) standard delivery.
pub fn standard_ball() -> impl Strategy<Value = BallInput> {
    runs().prop_map(BallInput::runs)
}

pub fn overs() -> impl Strategy<Value = Overs> {
    (0u32..=120).prop_map(Overs::from_balls)
}

pub fn batting_entry(idx: usize) -> impl Strategy<Value = BattingEntry> {
    (0u32..=150, 0u32..=120, 0u32..=15, 0u32..=8, dismissal()).prop_map(
        move |(runs, balls, fours, sixes, how_out)| BattingEntry {
            id: format!("bat-{idx}"),
            name: format!("Batter {idx}"),
            runs,
            balls,
            fours,
            sixes,
            how_out,
            fielder: None,
            bowler: None,
        },
    )
}

pub fn bowling_entry(idx: usize) -> impl Strategy<Value = BowlingEntry> {
    (overs(), 0u32..=60, 0u32..=5, 0u32..=6, 0u32..=4, 0u32..=4).prop_map(
        move |(overs, runs, wickets, wides, no_balls, leg_byes)| BowlingEntry {
            id: format!("bowl-{idx}"),
            name: format!("Bowler {idx}"),
            overs,
            maidens: 0,
            runs,
            wickets,
            wides,
            no_balls,
            leg_byes,
            dots: 0,
        },
    )
}

/// Arbitrary (unaggregated) innings ledger with 0..=11 batters and 0..=6 bowlers.
pub fn innings_ledger() -> impl Strategy<Value = Innings> {
    (0usize..=11, 0usize..=6, 0u32..=20).prop_flat_map(|(n_bat, n_bowl, bye_runs)| {
        let batting: Vec<_> = (0..n_bat).map(batting_entry).collect();
        let bowling: Vec<_> = (0..n_bowl).map(bowling_entry).collect();
        (batting, bowling).prop_map(move |(batting, bowling)| Innings {
            batting,
            bowling,
            bye_runs,
            ..Innings::default()
        })
    })
}
