// Criterion benchmarks for Fitmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitmatch::core::{calculate_compatibility, haversine_distance, Matcher};
use fitmatch::models::{Candidate, Coordinates, FitnessLevel, Profile};

fn create_profile(id: usize) -> Profile {
    let workouts = ["Running", "Yoga", "Cycling", "Boxing", "Swimming"];
    let goals = ["Weight Loss", "Strength", "Endurance", "General Fitness"];
    let diets = ["Vegan", "Keto", "Balanced", "Paleo"];
    let slot = if id % 2 == 0 { "Morning" } else { "Evening" };
    let gym = if id % 5 == 0 { "Planet Fitness Midtown" } else { "" };

    Profile {
        workout_types: workouts
            .iter()
            .skip(id % 3)
            .take(2)
            .map(|w| w.to_string())
            .collect(),
        interests: ["Music", "Travel"].iter().map(|i| i.to_string()).collect(),
        fitness_level: Some(FitnessLevel::ALL[id % 4]),
        fitness_goal: Some(goals[id % goals.len()].to_string()),
        preferred_times: [slot.to_string()].into_iter().collect(),
        gym_name: gym.to_string(),
        location: Some(Coordinates::new(
            40.7128 + (id as f64 * 0.001) % 0.5,
            -74.0060 + (id as f64 * 0.001) % 0.5,
        )),
        diet_type: Some(diets[id % diets.len()].to_string()),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.72),
                black_box(-74.01),
            )
        });
    });
}

fn bench_pairwise_score(c: &mut Criterion) {
    let a = create_profile(0);
    let b = create_profile(7);

    c.bench_function("calculate_compatibility", |bench| {
        bench.iter(|| calculate_compatibility(black_box(&a), black_box(&b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::default();
    let seeker = create_profile(0);

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count)
            .map(|i| Candidate::new(i.to_string(), create_profile(i)))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank(
                        black_box(&seeker),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_pairwise_score,
    bench_ranking
);

criterion_main!(benches);
