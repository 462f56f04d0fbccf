//! Performance benchmarks for the compliance engine.
//!
//! Targets:
//! - Single entry check: < 20μs mean
//! - Full sheet (20 entries) check: < 100μs mean
//! - Batch of 100 sheets: < 10ms mean
//!
//! Holidays come from an in-memory table so no network time is measured.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use milog_engine::config::{ConfigLoader, ExportFormat, RuleSet};
use milog_engine::holiday::FixedHolidays;
use milog_engine::models::{
    ClockTime, Duration, Employee, Entry, Holiday, Profession, TimeSheet, WorkingArea, YearMonth,
};
use milog_engine::validation::Validator;

/// Working days of November 2019.
const WORKDAYS: [u32; 20] = [
    4, 5, 6, 7, 8, 11, 12, 13, 14, 15, 18, 19, 20, 21, 22, 25, 26, 27, 28, 29,
];

fn create_validator() -> Validator<FixedHolidays> {
    let rules = RuleSet::default();
    let max_rows = rules.max_rows(ExportFormat::Latex);
    let holidays = FixedHolidays::new([Holiday::new(
        NaiveDate::from_ymd_opt(2019, 11, 1).unwrap(),
        "Allerheiligen",
    )]);
    Validator::new(rules, max_rows, holidays)
}

/// Creates a November 2019 sheet with one 2-hour entry per working day.
fn create_sheet(entry_count: usize, staff_id: u64) -> TimeSheet {
    let entries = WORKDAYS
        .iter()
        .cycle()
        .take(entry_count)
        .map(|day| {
            Entry::new(
                "Tutorium",
                NaiveDate::from_ymd_opt(2019, 11, *day).unwrap(),
                ClockTime::hm(9, 0),
                ClockTime::hm(11, 0),
                Duration::ZERO,
                false,
            )
            .unwrap()
        })
        .collect();

    TimeSheet::new(
        Employee::new("Max Mustermann", staff_id),
        Profession::new("ITI", WorkingArea::Ub, Duration::hm(40, 0), Decimal::new(1240, 2)),
        YearMonth::new(2019, 11).unwrap(),
        entries,
        Duration::ZERO,
        Duration::ZERO,
    )
    .unwrap()
}

/// Benchmark: Single entry.
///
/// Target: < 20μs mean
fn bench_single_entry(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let validator = create_validator();
    let sheet = create_sheet(1, 1);

    c.bench_function("single_entry", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(validator.check(&sheet).await.unwrap()) })
    });
}

/// Benchmark: A full sheet of 20 entries.
///
/// Target: < 100μs mean
fn bench_full_sheet(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let validator = create_validator();
    let sheet = create_sheet(20, 1);

    c.bench_function("full_sheet", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(validator.check(&sheet).await.unwrap()) })
    });
}

/// Benchmark: Batch of 100 sheets.
///
/// Target: < 10ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let validator = create_validator();
    let sheets: Vec<TimeSheet> = (0..100).map(|i| create_sheet(20, 1000 + i)).collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(100));
    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            for sheet in &sheets {
                black_box(validator.check(sheet).await.unwrap());
            }
        })
    });
    group.finish();
}

/// Benchmark: Rendering every violation of an invalid sheet.
fn bench_render_messages(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/milog").expect("Failed to load config");
    let catalog = config.default_catalog();
    let validator = Validator::new(RuleSet::default(), 5, FixedHolidays::none());
    let report = rt.block_on(validator.check(&create_sheet(40, 1))).unwrap();

    c.bench_function("render_messages", |b| {
        b.iter(|| {
            for violation in report.violations() {
                black_box(catalog.render(violation));
            }
        })
    });
}

/// Benchmark: Various entry counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let validator = create_validator();

    let mut group = c.benchmark_group("scaling");

    for entry_count in [1, 5, 10, 20, 40].iter() {
        let sheet = create_sheet(*entry_count, 1);

        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            entry_count,
            |b, _| {
                b.to_async(&rt)
                    .iter(|| async { black_box(validator.check(&sheet).await.unwrap()) })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_entry,
    bench_full_sheet,
    bench_batch_100,
    bench_render_messages,
    bench_scaling,
);
criterion_main!(benches);
