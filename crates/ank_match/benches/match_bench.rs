use ank_core::{ProfileInput, ReducedNumber, calendar_date};
use ank_match::{
    GroupMember, RelationshipType, calculate_compatibility, compatibility_score,
    detailed_compatibility, group_harmony,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn input(name: &str, y: i32, m: u32, d: u32) -> ProfileInput {
    ProfileInput::new(name, calendar_date(y, m, d).unwrap()).unwrap()
}

fn matrix_bench(c: &mut Criterion) {
    let a = ReducedNumber::new(6).unwrap();
    let b = ReducedNumber::new(33).unwrap();
    c.bench_function("compatibility_score", |bench| {
        bench.iter(|| compatibility_score(black_box(a), black_box(b)))
    });
}

fn pair_bench(c: &mut Criterion) {
    let a = input("Maria Elena Popescu", 1990, 11, 15);
    let b = input("Andrei Ionescu", 1985, 7, 4);

    let mut group = c.benchmark_group("pair");
    group.bench_function("base", |bench| {
        bench.iter(|| calculate_compatibility(black_box(&a), black_box(&b)))
    });
    group.bench_function("romantic", |bench| {
        bench.iter(|| detailed_compatibility(black_box(&a), black_box(&b), RelationshipType::Romantic))
    });
    group.finish();
}

fn group_bench(c: &mut Criterion) {
    let people = vec![
        GroupMember::new("a", input("Maria Elena Popescu", 1990, 11, 15)),
        GroupMember::new("b", input("Andrei Ionescu", 1985, 7, 4)),
        GroupMember::new("c", input("Elena Vasile", 1979, 2, 28)),
        GroupMember::new("d", input("Ana Maria Rusu", 2001, 9, 9)),
        GroupMember::new("e", input("Ion Popescu", 1988, 3, 21)),
    ];
    c.bench_function("group_harmony_5", |bench| {
        bench.iter(|| group_harmony(black_box(&people)))
    });
}

criterion_group!(benches, matrix_bench, pair_bench, group_bench);
criterion_main!(benches);
