use crate::domain::{
    aggregate_innings, aggregate_scorecard, validate_scorecard, BattingEntry, BowlingEntry,
    DismissalKind, Innings, InningsNo, Overs, ScorecardData,
};

fn ledger() -> Innings {
    Innings {
        batting: vec![
            BattingEntry {
                runs: 34,
                how_out: DismissalKind::Caught,
                ..BattingEntry::new("a", "Alice")
            },
            BattingEntry {
                runs: 12,
                how_out: DismissalKind::RetiredHurt,
                ..BattingEntry::new("b", "Bea")
            },
            BattingEntry {
                runs: 5,
                how_out: DismissalKind::NotOut,
                ..BattingEntry::new("d", "Dee")
            },
            BattingEntry {
                how_out: DismissalKind::DidNotBat,
                ..BattingEntry::new("e", "Eve")
            },
        ],
        bowling: vec![
            BowlingEntry {
                overs: Overs::from_decimal(3.4),
                wides: 2,
                no_balls: 1,
                leg_byes: 0,
                wickets: 1,
                ..BowlingEntry::new("c", "Cara")
            },
            BowlingEntry {
                overs: Overs::from_decimal(2.4),
                wides: 0,
                no_balls: 0,
                leg_byes: 3,
                ..BowlingEntry::new("f", "Fay")
            },
        ],
        bye_runs: 4,
        ..Innings::default()
    }
}

#[test]
fn totals_follow_the_ledgers() {
    let inn = aggregate_innings(&ledger());

    assert_eq!(inn.extras, 2 + 1 + 3 + 4);
    assert_eq!(inn.total_runs, 34 + 12 + 5 + inn.extras);
    assert_eq!(inn.wickets, 1, "retired hurt, not out and dnb are not wickets");
    // 22 + 16 balls
    assert_eq!(inn.overs.to_string(), "6.2");
}

#[test]
fn stale_aggregates_are_overwritten() {
    let stale = Innings {
        extras: 999,
        total_runs: 999,
        wickets: 9,
        overs: Overs::from_decimal(49.0),
        ..ledger()
    };
    assert_eq!(aggregate_innings(&stale), aggregate_innings(&ledger()));
}

#[test]
fn aggregation_is_idempotent() {
    let once = aggregate_innings(&ledger());
    assert_eq!(aggregate_innings(&once), once);
}

#[test]
fn empty_innings_aggregates_to_zero() {
    let inn = aggregate_innings(&Innings::default());
    assert_eq!(
        (inn.extras, inn.total_runs, inn.wickets, inn.overs),
        (0, 0, 0, Overs::ZERO)
    );
}

#[test]
fn scorecard_aggregates_both_innings() {
    let data = ScorecardData::default()
        .with_innings(InningsNo::First, ledger())
        .with_innings(InningsNo::Second, ledger());
    let out = aggregate_scorecard(&data);
    assert_eq!(out.innings(InningsNo::First).total_runs, 61);
    assert_eq!(out.innings(InningsNo::Second).total_runs, 61);
}

#[test]
fn validation_flags_over_credited_bowlers() {
    let mut inn = ledger();
    inn.bowling[0].wickets = 3;
    let data = aggregate_scorecard(&ScorecardData::default().with_innings(InningsNo::Second, inn));

    let issues = validate_scorecard(&data);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].innings, InningsNo::Second);
    assert_eq!(
        issues[0].to_string(),
        "2nd Innings: Bowlers credited with 3 wickets, but only 1 fell."
    );
}

#[test]
fn validation_accepts_fewer_credited_wickets() {
    // run outs fall without bowler credit
    let mut inn = ledger();
    inn.bowling[0].wickets = 0;
    let data = aggregate_scorecard(&ScorecardData::default().with_innings(InningsNo::First, inn));
    assert!(validate_scorecard(&data).is_empty());
}

#[test]
fn huge_hand_typed_figures_clamp() {
    let innings = Innings {
        batting: vec![
            BattingEntry {
                runs: u32::MAX,
                ..BattingEntry::new("a", "Alice")
            },
            BattingEntry {
                runs: u32::MAX,
                ..BattingEntry::new("b", "Bea")
            },
        ],
        bowling: vec![
            BowlingEntry {
                wides: u32::MAX,
                wickets: u32::MAX,
                overs: Overs::from_decimal(1e12),
                ..BowlingEntry::new("c", "Cara")
            },
            BowlingEntry {
                wickets: 1,
                overs: Overs::from_decimal(1e12),
                ..BowlingEntry::new("d", "Dev")
            },
        ],
        bye_runs: 5,
        ..Innings::default()
    };

    let agg = aggregate_innings(&innings);
    assert_eq!(agg.extras, u32::MAX);
    assert_eq!(agg.total_runs, u32::MAX);
    assert!(agg.overs.total_balls() > 0);

    let data = ScorecardData::default().with_innings(InningsNo::First, agg);
    let issues = validate_scorecard(&data);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].credited, u32::MAX);
}
