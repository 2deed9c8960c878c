use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rogue_goose::{
    lobby::Lobby,
    store::{Document, DocumentId, FromDocument},
};
use serde_json::json;

/// Benchmark plain and bouncing move resolution
fn bench_resolve_move(c: &mut Criterion) {
    c.bench_function("resolve_move_plain", |b| {
        b.iter(|| rogue_goose::resolve_move(black_box(30), black_box(4)));
    });

    c.bench_function("resolve_move_bounce", |b| {
        b.iter(|| rogue_goose::resolve_move(black_box(61), black_box(6)));
    });
}

/// Benchmark decoding a lobby document snapshot
fn bench_lobby_decode(c: &mut Criterion) {
    let doc = Document {
        id: DocumentId::new_v4(),
        data: json!({
            "name": "Foo",
            "status": "in-progress",
            "maxPlayers": 4,
            "createdAt": "2026-01-01T00:00:00Z",
            "gameState": {
                "currentPlayerTurn": DocumentId::new_v4(),
                "lastDiceRoll": 4,
                "winner": null,
            },
        }),
    };

    c.bench_function("lobby_decode", |b| {
        b.iter(|| Lobby::from_document(black_box(&doc)).unwrap());
    });
}

criterion_group!(benches, bench_resolve_move, bench_lobby_decode);
criterion_main!(benches);
