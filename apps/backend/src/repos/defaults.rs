//! Built-in catalog written on first read of an empty store.

use crate::domain::RosterEntry;
use crate::entities::fielding::FieldPosition;
use crate::entities::matches::MatchStatus;
use crate::entities::players::Role;
use crate::entities::{FieldingStrategy, Opponent, Player, ScheduledMatch};

fn player(id: &str, name: &str, role: Role, batting: &str, bowling: &str, number: u32) -> Player {
    Player {
        id: id.to_owned(),
        name: name.to_owned(),
        role,
        batting_style: batting.to_owned(),
        bowling_style: bowling.to_owned(),
        jersey_number: Some(number),
    }
}

pub fn players() -> Vec<Player> {
    vec![
        player("p1", "Sam Patel", Role::Batsman, "Right-hand bat", "", 7),
        player("p2", "Owen Clarke", Role::Batsman, "Left-hand bat", "", 12),
        player("p3", "Ravi Menon", Role::AllRounder, "Right-hand bat", "Right-arm off-spin", 18),
        player("p4", "Tom Hughes", Role::WicketKeeper, "Right-hand bat", "", 1),
        player("p5", "Jack Reid", Role::Batsman, "Right-hand bat", "Right-arm medium", 23),
        player("p6", "Imran Qureshi", Role::AllRounder, "Left-hand bat", "Left-arm orthodox", 10),
        player("p7", "Dan Foster", Role::Bowler, "Right-hand bat", "Right-arm fast", 33),
        player("p8", "Liam Byrne", Role::Bowler, "Right-hand bat", "Right-arm fast-medium", 44),
        player("p9", "Nikhil Rao", Role::Bowler, "Right-hand bat", "Leg-break", 27),
        player("p10", "Chris Walsh", Role::Bowler, "Left-hand bat", "Left-arm fast-medium", 9),
        player("p11", "Ben Adams", Role::AllRounder, "Right-hand bat", "Right-arm medium", 15),
    ]
}

fn squad(prefix: &str, names: &[&str]) -> Vec<RosterEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| RosterEntry::new(format!("{prefix}-{}", i + 1), *name))
        .collect()
}

pub fn opponents() -> Vec<Opponent> {
    vec![
        Opponent {
            id: "o1".into(),
            name: "Hillcrest CC".into(),
            home_ground: "Hillcrest Rec".into(),
            players: squad(
                "o1",
                &[
                    "A. Shah", "M. Doyle", "K. Fernando", "P. Grant", "R. Iyer", "S. Kelly",
                    "T. Lowe", "J. Moss", "H. Nair", "G. Price", "D. Quinn",
                ],
            ),
        },
        Opponent {
            id: "o2".into(),
            name: "Eastfield Strikers".into(),
            home_ground: "Eastfield Oval".into(),
            players: squad(
                "o2",
                &[
                    "L. Ahmed", "C. Bell", "V. Das", "E. Evans", "N. Fox", "W. Gill",
                    "Y. Hart", "B. Jain", "F. King", "O. Lamb", "U. Malik",
                ],
            ),
        },
    ]
}

pub fn matches() -> Vec<ScheduledMatch> {
    vec![
        ScheduledMatch {
            id: "m1".into(),
            opponent: "Hillcrest CC".into(),
            date: "2024-05-18".into(),
            time: "13:00".into(),
            venue: "Riverside Park".into(),
            tournament: "Sunday League".into(),
            status: MatchStatus::Scheduled,
        },
        ScheduledMatch {
            id: "m2".into(),
            opponent: "Eastfield Strikers".into(),
            date: "2024-05-25".into(),
            time: "10:30".into(),
            venue: "Eastfield Oval".into(),
            tournament: "County T20 Cup".into(),
            status: MatchStatus::Scheduled,
        },
    ]
}

fn pos(label: &str, x: f64, y: f64) -> FieldPosition {
    FieldPosition {
        label: label.to_owned(),
        x,
        y,
        player_id: None,
    }
}

pub fn fielding_strategies() -> Vec<FieldingStrategy> {
    vec![FieldingStrategy {
        id: "f1".into(),
        name: "Standard attacking".into(),
        positions: vec![
            pos("Wicket-keeper", 50.0, 58.0),
            pos("First slip", 56.0, 60.0),
            pos("Second slip", 60.0, 61.0),
            pos("Gully", 66.0, 58.0),
            pos("Point", 75.0, 48.0),
            pos("Cover", 70.0, 35.0),
            pos("Mid-off", 58.0, 22.0),
            pos("Mid-on", 42.0, 22.0),
            pos("Square leg", 25.0, 48.0),
            pos("Fine leg", 30.0, 80.0),
        ],
    }]
}
