//! Performance benchmarks for the reporting core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

use gradebook::grading::LetterGrade;
use gradebook::models::GradeEntry;
use gradebook::reports::{average_grades, grade_distribution, top_students};

/// Deterministic grade set spread over `students` students
fn create_entries(count: usize, students: i64) -> Vec<GradeEntry> {
    (0..count)
        .map(|i| {
            let student_id = (i as i64 * 7919) % students + 1;
            GradeEntry::new(student_id, LetterGrade::ALL[(i * 31) % LetterGrade::ALL.len()])
        })
        .collect()
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    for size in [100, 10_000, 100_000].iter() {
        let entries = create_entries(*size, 500);
        let letters: Vec<LetterGrade> = entries.iter().map(|e| e.grade).collect();

        group.bench_with_input(BenchmarkId::new("average", size), &entries, |b, entries| {
            b.iter(|| average_grades(black_box(entries)))
        });
        group.bench_with_input(BenchmarkId::new("top_students", size), &entries, |b, entries| {
            b.iter(|| top_students(black_box(entries)))
        });
        group.bench_with_input(
            BenchmarkId::new("distribution", size),
            &letters,
            |b, letters| b.iter(|| grade_distribution(black_box(letters))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
