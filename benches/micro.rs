use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kwix::core::{Occurrence, Occurrences};

fn frequencies(count: usize) -> Vec<usize> {
    let mut state = 0x2545F4914F6CDD1Dusize;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) % 1_000 + 1
        })
        .collect()
}

fn ordered_inserts(frequencies: &[usize]) -> Occurrences {
    let mut list = Occurrences::new();
    for (document, &frequency) in frequencies.iter().enumerate() {
        list.push(Occurrence::new(document, frequency));
        list.insert_last();
    }
    list
}

fn sorted_at_once(frequencies: &[usize]) -> Vec<Occurrence> {
    let mut list = frequencies
        .iter()
        .enumerate()
        .map(|(document, &frequency)| Occurrence::new(document, frequency))
        .collect::<Vec<_>>();
    list.sort_by(|a, b| b.get_frequency().cmp(&a.get_frequency()));
    list
}

fn bench_posting_insertion(c: &mut Criterion) {
    let frequencies = black_box(frequencies(512));

    c.bench_function("posting-insert-last", |b| {
        b.iter(|| ordered_inserts(&frequencies))
    });

    c.bench_function("posting-sort-at-once", |b| {
        b.iter(|| sorted_at_once(&frequencies))
    });
}

criterion_group!(benches, bench_posting_insertion);
criterion_main!(benches);
