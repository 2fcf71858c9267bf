use rand::{Rng, seq::SliceRandom};
use rustc_hash::FxHashSet;

use swiss_tournament::{
    Error, Id,
    pairing::swiss_pairings,
    standings::{StandingsEntry, compute_standings, player_draw_count},
    store::{MemoryStore, Store},
    tournament::Round,
};

fn register(store: &mut impl Store, count: usize) -> anyhow::Result<Vec<Id>> {
    (1..=count)
        .map(|n| Ok(store.add_player(&format!("Player {n}"))?))
        .collect()
}

fn pairs(round: &Round) -> Vec<(Id, Id)> {
    round.pairings.iter().map(|pairing| pairing.ids()).collect()
}

fn summary(standings: &[StandingsEntry]) -> Vec<(Id, u32, u32)> {
    standings
        .iter()
        .map(|entry| (entry.id, entry.wins, entry.matches))
        .collect()
}

/// Records every pairing as won by the first player, and the bye.
fn play(store: &mut impl Store, round: &Round) -> anyhow::Result<()> {
    for pairing in &round.pairings {
        let (winner, loser) = pairing.ids();
        store.record_match(winner, Some(loser), false)?;
    }
    if let Some(bye) = &round.bye {
        store.record_match(bye.id, None, false)?;
    }

    Ok(())
}

#[test]
fn four_new_players() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 4)?;

    let standings = compute_standings(&store)?;
    assert_eq!(
        summary(&standings),
        vec![(1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)]
    );

    let round = swiss_pairings(&store)?;
    assert_eq!(pairs(&round), vec![(1, 2), (3, 4)]);
    assert_eq!(round.bye, None);

    Ok(())
}

#[test]
fn winners_play_winners() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 4)?;
    store.record_match(1, Some(2), false)?;
    store.record_match(3, Some(4), false)?;

    let standings = compute_standings(&store)?;
    assert_eq!(
        summary(&standings),
        vec![(1, 1, 1), (3, 1, 1), (2, 0, 1), (4, 0, 1)]
    );

    let round = swiss_pairings(&store)?;
    assert_eq!(pairs(&round), vec![(1, 3), (2, 4)]);

    Ok(())
}

#[test]
fn five_players_one_bye() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 5)?;

    let round = swiss_pairings(&store)?;
    assert_eq!(pairs(&round), vec![(1, 2), (3, 4)]);
    assert_eq!(round.bye.as_ref().map(|bye| bye.id), Some(5));
    assert_eq!(round.bye.map(|bye| bye.name), Some("Player 5".to_string()));

    Ok(())
}

#[test]
fn duplicate_report_is_rejected() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 2)?;
    store.record_match(1, Some(2), false)?;

    assert_eq!(
        store.record_match(1, Some(2), false),
        Err(Error::DuplicateMatch {
            winner: 1,
            loser: 2
        })
    );
    assert_eq!(store.matches()?.len(), 1);

    Ok(())
}

#[test]
fn no_second_bye() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 1)?;

    let round = swiss_pairings(&store)?;
    assert_eq!(round.bye.as_ref().map(|bye| bye.id), Some(1));
    play(&mut store, &round)?;

    assert_eq!(swiss_pairings(&store), Err(Error::NoEligiblePlayerForBye));
    assert_eq!(store.matches()?.len(), 1);

    Ok(())
}

#[test]
fn bye_moves_up_the_standings() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 3)?;

    // 3 sits out round one and wins by bye, 1 beats 2.
    let first = swiss_pairings(&store)?;
    assert_eq!(first.bye.as_ref().map(|bye| bye.id), Some(3));
    play(&mut store, &first)?;

    // Standings are now 1, 3, 2 so 2 is lowest and hasn't had a bye.
    let second = swiss_pairings(&store)?;
    assert_eq!(pairs(&second), vec![(1, 3)]);
    assert_eq!(second.bye.as_ref().map(|bye| bye.id), Some(2));
    play(&mut store, &second)?;

    // 1 has two wins, 2 and 3 one each; only 1 is still without a bye.
    let third = swiss_pairings(&store)?;
    assert_eq!(third.bye.as_ref().map(|bye| bye.id), Some(1));
    assert_eq!(pairs(&third), vec![(2, 3)]);

    Ok(())
}

#[test]
fn standings_are_repeatable() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 6)?;
    store.record_match(6, Some(1), false)?;
    store.record_match(2, Some(5), true)?;

    assert_eq!(compute_standings(&store)?, compute_standings(&store)?);
    assert_eq!(swiss_pairings(&store)?, swiss_pairings(&store)?);

    Ok(())
}

#[test]
fn clear_matches_resets_standings() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    register(&mut store, 2)?;
    store.record_match(2, Some(1), true)?;
    store.clear_matches()?;

    assert_eq!(store.count_players()?, 2);
    assert_eq!(player_draw_count(&store, 1)?, 0);
    assert_eq!(summary(&compute_standings(&store)?), vec![(1, 0, 0), (2, 0, 0)]);

    Ok(())
}

#[test]
fn random_tournaments_keep_their_invariants() -> anyhow::Result<()> {
    let mut rng = rand::rng();

    for _ in 0..25 {
        let mut store = MemoryStore::new();
        let count = rng.random_range(1..40);
        register(&mut store, count)?;

        for _ in 0..rng.random_range(0..6) {
            let mut round = match swiss_pairings(&store) {
                Ok(round) => round,
                Err(Error::NoEligiblePlayerForBye) => break,
                Err(error) => return Err(error.into()),
            };

            assert_eq!(round.pairings.len(), count / 2);
            assert_eq!(round.bye.is_some(), count % 2 == 1);

            let mut seen = FxHashSet::default();
            for id in round.players() {
                assert!(seen.insert(id), "{id} is scheduled twice");
            }

            round.pairings.shuffle(&mut rng);
            for pairing in &round.pairings {
                let (player1, player2) = pairing.ids();
                let (winner, loser) = if rng.random_bool(0.5) {
                    (player1, player2)
                } else {
                    (player2, player1)
                };

                match store.record_match(winner, Some(loser), rng.random_bool(0.2)) {
                    Ok(()) | Err(Error::DuplicateMatch { .. }) => {}
                    Err(error) => return Err(error.into()),
                }
            }
            if let Some(bye) = &round.bye {
                store.record_match(bye.id, None, false)?;
            }
        }

        let matches = store.matches()?;
        let byes = matches.iter().filter(|record| record.is_bye()).count();
        let played: u32 = compute_standings(&store)?
            .iter()
            .map(|entry| entry.matches)
            .sum();

        assert_eq!(usize::try_from(played)?, 2 * (matches.len() - byes) + byes);
    }

    Ok(())
}
