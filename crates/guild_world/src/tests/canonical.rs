//! Canonical serialization, round trips, and hashing.

use super::*;
use crate::canonical::{state_from_json, state_to_canonical_json, SaveError};
use crate::event::EventKind;
use crate::hash::{hash_events, hash_state};

const INITIAL_42_JSON: &str = concat!(
    r#"{"meta":{"saveVersion":1,"seed":42,"dayIndex":0,"revision":0,"#,
    r#""ids":{"nextContractId":1,"nextHeroId":1,"nextActiveContractId":1},"#,
    r#""taxDueDay":7,"taxAmountDue":50,"taxPenalty":0,"taxMissedCount":0},"#,
    r#""guild":{"guildRank":1,"reputation":50,"completedContractsTotal":0,"#,
    r#""contractsForNextRank":5,"proofPolicy":"FAST"},"#,
    r#""region":{"stability":50},"#,
    r#""economy":{"moneyCopper":100,"reservedCopper":0,"trophiesStock":0},"#,
    r#""contracts":{"inbox":[],"board":[],"active":[],"returns":[],"archive":[]},"#,
    r#""heroes":{"roster":[]}}"#
);

#[test]
fn initial_state_bytes_are_locked() {
    let state = initial_state(42);
    assert_eq!(state_to_canonical_json(&state), INITIAL_42_JSON);
}

#[test]
fn initial_state_hash_is_stable() {
    let a = hash_state(&initial_state(42));
    let b = hash_state(&initial_state(42));
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_ne!(a, hash_state(&initial_state(43)));
}

#[test]
fn round_trip_after_simulation_resets_arrivals() {
    let mut rng = Rng::new(100);
    let (state, events) = advance_days(initial_state(42), &mut rng, 3, 1);
    assert_no_violations(&events);
    assert!(!state.heroes.arrivals_today.is_empty());

    let json = state_to_canonical_json(&state);
    let loaded = state_from_json(&json).expect("round trip");

    let mut expected = state.clone();
    expected.heroes.arrivals_today.clear();
    assert_eq!(loaded, expected);
    assert_eq!(hash_state(&loaded), hash_state(&state));
    assert_eq!(state_to_canonical_json(&loaded), json);
}

#[test]
fn unsupported_save_version_is_refused() {
    let json = state_to_canonical_json(&initial_state(42)).replace(
        "\"saveVersion\":1",
        "\"saveVersion\":2",
    );
    let err = state_from_json(&json).unwrap_err();
    assert_eq!(
        err,
        SaveError::UnsupportedSaveVersion {
            found: 2,
            expected: 1
        }
    );
}

#[test]
fn malformed_json_is_a_boundary_error() {
    assert!(matches!(
        state_from_json("not json"),
        Err(SaveError::Malformed(_))
    ));
    assert!(matches!(
        state_from_json("{\"guild\":{}}"),
        Err(SaveError::Malformed(_))
    ));
}

#[test]
fn string_escapes_survive_round_trip() {
    let mut state = initial_state(1);
    let (next, _) = {
        let mut rng = Rng::new(5);
        super::step(
            state,
            1,
            crate::command::Command::CreateContract {
                title: "Line\none\t\"quoted\" \\slash".to_string(),
                rank: 1,
                difficulty: 10,
                reward: 5,
                salvage: SalvagePolicy::Guild,
            },
            &mut rng,
        )
    };
    state = next;
    let json = state_to_canonical_json(&state);
    assert!(json.contains("Line\\none\\t\\\"quoted\\\" \\\\slash"));
    let loaded = state_from_json(&json).expect("round trip");
    assert_eq!(loaded.contracts.inbox[0].title, "Line\none\t\"quoted\" \\slash");
}

#[test]
fn single_event_canonical_bytes() {
    let event = Event {
        seq: 1,
        day: 0,
        revision: 3,
        cmd_id: 5,
        kind: EventKind::TrophySold {
            amount: 2,
            money_gained: 2,
        },
    };
    assert_eq!(
        crate::canonical::event_to_canonical_json(&event),
        r#"{"type":"TrophySold","day":0,"revision":3,"cmdId":5,"seq":1,"amount":2,"moneyGained":2}"#
    );
}

#[test]
fn event_hash_is_order_sensitive() {
    let mut rng = Rng::new(100);
    let (_, events) = advance_days(initial_state(42), &mut rng, 1, 1);
    assert!(events.len() >= 2);

    let mut swapped = events.clone();
    swapped.swap(0, 1);
    assert_ne!(hash_events(&events), hash_events(&swapped));
}

#[test]
fn events_array_is_compact_json() {
    let mut rng = Rng::new(100);
    let (_, events) = advance_days(initial_state(42), &mut rng, 1, 1);
    let json = crate::canonical::events_to_canonical_json(&events);
    assert!(json.starts_with("[{\"type\":\"DayStarted\""));
    assert!(json.ends_with("}]"));
    assert!(!json.contains(' '), "canonical form carries no whitespace");
}
