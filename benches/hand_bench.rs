use card_hand::app::{DragState, HandLayout};
use card_hand::{Card, CardId, HandController, HandOptions, PointerInput, ViewCamera};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use std::hint::black_box;

fn camera() -> ViewCamera {
    ViewCamera::orthographic(Vec3::new(0.0, 0.0, -10.0), 2.25, Vec2::new(1600.0, 900.0))
}

fn build_controller(card_count: usize) -> HandController {
    let cards = (0..card_count).map(|i| Card::new(CardId(i as u64 + 1), (i % 4) as u32));
    HandController::new(HandOptions::default(), cards)
}

/// Zeiger pendelt über der Hand hin und her.
fn build_pointer_path(frames: usize) -> Vec<PointerInput> {
    (0..frames)
        .map(|i| {
            let phase = i as f32 / frames as f32 * std::f32::consts::TAU;
            let x = 800.0 + phase.sin() * 600.0;
            PointerInput::new(Vec2::new(x, 530.0), (i / 40) % 2 == 1)
        })
        .collect()
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("hand_tick");
    let cam = camera();
    let path = build_pointer_path(240);

    for &card_count in &[5usize, 10, 40] {
        group.bench_with_input(
            BenchmarkId::new("tick_240_frames", card_count),
            &card_count,
            |b, &card_count| {
                b.iter(|| {
                    let mut controller = build_controller(card_count);
                    for input in &path {
                        black_box(controller.tick(1.0 / 60.0, *input, &cam));
                    }
                    black_box(controller.hand().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_card");
    let layout = HandLayout::from_options(&HandOptions::default());

    for &card_count in &[10usize, 100] {
        let samples = layout.sample_all(card_count, Some(card_count / 2), true);
        group.bench_with_input(
            BenchmarkId::new("resolve_nearest", card_count),
            &samples,
            |b, samples| {
                let mut state = DragState::new();
                b.iter(|| {
                    black_box(state.resolve_nearest(
                        black_box(samples),
                        black_box(Vec3::new(0.4, -0.4, 0.0)),
                        true,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_nearest);
criterion_main!(benches);
