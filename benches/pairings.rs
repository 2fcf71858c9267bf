use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};

use swiss_tournament::{
    pairing::swiss_pairings,
    store::{MemoryStore, Store},
};

/// A tournament of `players` players after one round of pairings was played.
fn one_round_played(players: usize) -> anyhow::Result<MemoryStore> {
    let mut store = MemoryStore::new();
    for n in 0..players {
        store.add_player(&format!("Player {n}"))?;
    }

    let round = swiss_pairings(&store)?;
    for pairing in &round.pairings {
        store.record_match(pairing.player1_id, Some(pairing.player2_id), false)?;
    }
    if let Some(bye) = round.bye {
        store.record_match(bye.id, None, false)?;
    }

    Ok(store)
}

fn pairings(c: &mut Criterion) {
    let store = one_round_played(10_001).unwrap();
    c.bench_function("swiss_pairings_10_001", move |b| {
        b.iter(|| swiss_pairings(&store).unwrap());
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = pairings
}

criterion_main!(benches);
