use prefind::trie::{Trie, TrieAtom, TrieString};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{
    distributions::{Alphanumeric, Uniform},
    thread_rng, Rng,
};

fn random_words(population: usize, size: usize) -> Vec<String> {
    (0..population)
        .map(|_| {
            thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=size))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn make_trie(words: &[String]) -> TrieString {
    words.iter().map(|w| w.chars()).collect()
}

fn trie_insert(b: &mut Criterion) {
    let words = random_words(10000, 16);
    b.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_contains(b: &mut Criterion) {
    let words = random_words(10000, 16);
    let trie = make_trie(&words);
    b.bench_function("trie contains", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| trie.contains(w.chars()))
                .collect::<Vec<bool>>()
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut trie = TrieString::new();
    c.bench_function("inserting: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(thread_rng().gen_range(1..=512))
                    .map(char::from)
            },
            |input| insert_trie(&mut trie, input),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("contains: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(thread_rng().gen_range(1..=512))
                    .map(char::from)
            },
            |input| contains_trie(&trie, input),
            BatchSize::SmallInput,
        )
    });
}

fn find_by_prefix(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("find_by_prefix");
    for prefix_len in [1usize, 2, 3, 4].iter() {
        let words = random_words(POPULATION_SIZE, 16);
        let trie = make_trie(&words);
        group.bench_with_input(
            BenchmarkId::new("present prefix (char)", prefix_len),
            prefix_len,
            |b, &prefix_len| {
                b.iter_batched(
                    || {
                        words[thread_rng().gen_range(0..POPULATION_SIZE)]
                            .chars()
                            .take(prefix_len)
                    },
                    |input| trie.find_by_prefix(input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn iterate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("iterate");
    for size in [
        BASE_SIZE,
        2 * BASE_SIZE,
        4 * BASE_SIZE,
        8 * BASE_SIZE,
        16 * BASE_SIZE,
    ]
    .iter()
    {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("consuming iteration (char)", size),
            size,
            |b, &size| {
                let trie = make_trie(&random_words(POPULATION_SIZE, size));
                b.iter_batched(|| trie.clone(), iterate_trie, BatchSize::SmallInput)
            },
        );
        group.bench_with_input(
            BenchmarkId::new("reference iteration (char)", size),
            size,
            |b, &size| {
                let trie = make_trie(&random_words(POPULATION_SIZE, size));
                b.iter_batched(|| {}, |_| iterate_trie_ref(&trie), BatchSize::SmallInput)
            },
        );
    }
    group.finish();
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE].iter() {
        let range = Uniform::new_inclusive(1, *size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("random find (usize)", size),
            size,
            |b, &size| {
                let mut trie = Trie::<usize>::new();
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<usize> = thread_rng()
                        .sample_iter(range)
                        .take(thread_rng().gen_range(1..=size))
                        .collect();
                    trie.insert(entry);
                }
                b.iter_batched(
                    || {
                        thread_rng()
                            .sample_iter(range)
                            .take(thread_rng().gen_range(1..=size))
                    },
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    trie_insert,
    trie_contains,
    criterion_benchmark,
    find_by_prefix,
    search,
    iterate
);
criterion_main!(benches);

fn insert_trie<S: IntoIterator<Item = A>, A: TrieAtom>(trie: &mut Trie<A>, input: S) {
    trie.insert(input);
}

fn contains_trie<S: IntoIterator<Item = A>, A: TrieAtom>(trie: &Trie<A>, input: S) {
    trie.contains(input);
}

fn iterate_trie<A: TrieAtom>(trie: Trie<A>) {
    trie.into_iter().for_each(|_x| ());
}

fn iterate_trie_ref<A: TrieAtom>(trie: &Trie<A>) {
    trie.iter().for_each(|_x| ());
}
