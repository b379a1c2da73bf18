//! # Metrics Benchmarks
//!
//! Cost of deriving permissions, metrics and views over catalogs of
//! increasing size.
//!
//! Run with: `cargo bench -p eduplatform-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use eduplatform_core::{
    Catalog, Course, CourseId, CourseStatus, DashboardMetrics, Percent, Role, Section,
    SectionView, Student, StudentId, TestResult,
};
use std::hint::black_box;

/// Build a catalog with `size` courses, results and students.
fn create_catalog(size: usize) -> Catalog {
    let statuses = [
        CourseStatus::Active,
        CourseStatus::Completed,
        CourseStatus::Available,
    ];

    let courses = (0..size)
        .map(|i| Course {
            id: CourseId(i as u32),
            title: format!("Course {}", i),
            description: String::new(),
            progress: Percent::saturating((i % 101) as u64),
            status: statuses[i % 3],
            tests_completed: (i % 5) as u32,
            total_tests: 5,
            instructor: format!("Instructor {}", i % 10),
            category: format!("Category {}", i % 8),
        })
        .collect();

    let results = (0..size)
        .map(|i| TestResult {
            course: format!("Course {}", i),
            score: Percent::saturating((i * 7 % 101) as u64),
            date: "2024-08-10".to_string(),
            passed: i % 2 == 0,
        })
        .collect();

    let students = (0..size)
        .map(|i| Student {
            id: StudentId(i as u32),
            name: format!("Student {}", i),
            email: format!("student{}@example.com", i),
            active: i % 3 != 0,
            expires_at: "2024-12-31".to_string(),
            progress: Percent::saturating((i % 101) as u64),
        })
        .collect();

    Catalog::new(courses, results, students).expect("valid catalog")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_permissions(c: &mut Criterion) {
    c.bench_function("permissions/all_roles", |b| {
        b.iter(|| {
            for role in Role::ALL {
                black_box(role.permissions());
            }
        });
    });
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for size in [10, 1000, 100_000].iter() {
        let catalog = create_catalog(*size);
        group.bench_with_input(BenchmarkId::new("student", size), &catalog, |b, catalog| {
            b.iter(|| black_box(DashboardMetrics::compute(Role::Student, catalog)));
        });
        group.bench_with_input(BenchmarkId::new("staff", size), &catalog, |b, catalog| {
            b.iter(|| black_box(DashboardMetrics::compute(Role::Admin, catalog)));
        });
    }

    group.finish();
}

fn bench_results_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("results_view");
    let permissions = Role::Teacher.permissions();

    for size in [10, 1000].iter() {
        let catalog = create_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(SectionView::build(Section::Results, &permissions, catalog)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_permissions, bench_metrics, bench_results_view);
criterion_main!(benches);
