// Criterion benchmarks for LaneMatch Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanematch_algo::core::{calculate_match_score, Recommender};
use lanematch_algo::models::{Ball, BowlerSpecs, OilPattern};

fn create_ball(id: i32) -> Ball {
    Ball {
        id,
        name: format!("Ball {}", id),
        brand: "Apex".to_string(),
        coverstock: Some("Solid Reactive".to_string()),
        hook_potential: (id % 11) as f64 * 0.5,
        length: (id % 10) as f64,
        backend: Some((id % 10) as f64),
        surface: if id % 3 == 0 { "4000" } else { "1500" }.to_string(),
    }
}

fn create_specs() -> BowlerSpecs {
    BowlerSpecs {
        rev_rate: 400.0,
        ball_speed: 16.0,
        axis_tilt: None,
        axis_rotation: None,
        pap_horizontal: None,
        pap_vertical: None,
    }
}

fn create_pattern() -> OilPattern {
    OilPattern {
        id: Some(1),
        name: "House".to_string(),
        category: Some("House".to_string()),
        length: 39.0,
        volume: 22.0,
        ratio: Some(10.0),
        forward_oil: Some(19.5),
        description: None,
        difficulty: None,
    }
}

fn bench_match_score(c: &mut Criterion) {
    let ball = create_ball(1);
    let specs = create_specs();
    let pattern = create_pattern();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(black_box(&ball), black_box(&specs), black_box(&pattern))
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_limit();
    let specs = create_specs();
    let pattern = create_pattern();

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Ball> = (0..*catalog_size).map(create_ball).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_catalog", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(&specs),
                        black_box(&pattern),
                        black_box(&catalog),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_recommend);
criterion_main!(benches);
