use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use video_poker::cards::{parse_cards, Card};
use video_poker::deck::Deck;
use video_poker::evaluator::evaluate_five;
use video_poker::strategy::{Analyzer, SearchConfig};

fn five(s: &str) -> [Card; 5] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let mut g = c.benchmark_group("evaluate_five");
    for (name, hand) in [
        ("high_card", "Ah Kd 7s 5c 2d"),
        ("two_pair", "Jc Jd 9c 9h 2s"),
        ("royal", "Ts Js Qs Ks As"),
    ] {
        let cards = five(hand);
        g.bench_with_input(BenchmarkId::new(name, hand), &cards, |b, input| {
            b.iter(|| evaluate_five(black_box(input)))
        });
    }
    g.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut g = c.benchmark_group("analyze");
    g.sample_size(10);
    for (name, hand) in [("low_pair", "7h 7d Kc 2s 9h"), ("garbage", "2c 7d 9h Js Kh")] {
        let cards = parse_cards(hand).unwrap();
        let population = Deck::population_for(&cards);
        let analyzer =
            Analyzer::default().with_config(SearchConfig::default().with_seed(1).with_sample_size(2_000));
        g.bench_with_input(BenchmarkId::new(name, hand), &cards, |b, input| {
            b.iter(|| analyzer.analyze(black_box(input), &population).unwrap())
        });
    }
    g.finish();
}

criterion_group!(benches, bench_evaluate_five, bench_analyze);
criterion_main!(benches);
