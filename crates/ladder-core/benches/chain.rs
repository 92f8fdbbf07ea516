use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ladder_core::vocab::VocabRules;
use ladder_core::{build_chain, MemoryVocabulary, RandomPicker, MAX_CHAIN_LENGTH};

const GOJUON: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわ";

/// Every two- and three-kana combination of the basic syllabary.
fn bench_vocab() -> MemoryVocabulary {
    let kana: Vec<char> = GOJUON.chars().collect();
    let mut words = Vec::new();
    for &a in &kana {
        for &b in &kana {
            words.push(format!("{a}{b}"));
            for &c in kana.iter().step_by(7) {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    MemoryVocabulary::from_words(words, &VocabRules::default()).0
}

fn bench_build_chain(c: &mut Criterion) {
    let vocab = bench_vocab();
    let mut group = c.benchmark_group("build_chain");
    for length in [1, 5, MAX_CHAIN_LENGTH] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &len| {
            let mut picker = RandomPicker::seeded(1);
            b.iter(|| build_chain(&vocab, "すいか", "かい", len, &mut picker))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_chain);
criterion_main!(benches);
