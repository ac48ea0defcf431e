//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure payroll pipeline, the validated calculation with its
//! audit trail, and the full HTTP path through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{calculate_payroll, compute_payroll};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::PayrollInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Loads the shipped configuration.
fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/el_salvador").expect("Failed to load config")
}

/// The reference input: base 2500, 8 overtime hours, 100 bonus.
fn reference_input() -> PayrollInput {
    let mut input = PayrollInput::new(Decimal::new(2500, 0));
    input.ordinary_hours = Decimal::new(176, 0);
    input.overtime_hours = Decimal::new(8, 0);
    input.bonifications = Decimal::new(100, 0);
    input
}

/// Creates a calculation request body for the given employee and salary.
fn request_body(employee_id: &str, salary: Decimal) -> String {
    serde_json::json!({
        "employee": {
            "id": employee_id,
            "first_name": "Ana",
            "last_name": "Martinez",
            "salary": salary.to_string()
        },
        "period": { "month": 1, "year": 2025 },
        "input": {
            "ordinary_hours": "176",
            "overtime_hours": "8",
            "bonifications": "100"
        }
    })
    .to_string()
}

/// Benchmark: pure pipeline without validation or audit.
fn bench_compute_payroll(c: &mut Criterion) {
    let loader = load_config();
    let input = reference_input();

    c.bench_function("compute_payroll", |b| {
        b.iter(|| black_box(compute_payroll(black_box(&input), loader.config())))
    });
}

/// Benchmark: validated calculation with audit steps and warnings.
fn bench_calculate_payroll(c: &mut Criterion) {
    let loader = load_config();
    let input = reference_input();

    c.bench_function("calculate_payroll", |b| {
        b.iter(|| black_box(calculate_payroll(black_box(&input), loader.config())))
    });
}

/// Benchmark: one salary per Renta bracket.
fn bench_brackets(c: &mut Criterion) {
    let loader = load_config();
    let mut group = c.benchmark_group("rent_tax_brackets");

    for salary in [400, 800, 1500, 5000] {
        let input = PayrollInput::new(Decimal::from(salary));
        group.bench_with_input(BenchmarkId::new("salary", salary), &input, |b, input| {
            b.iter(|| black_box(compute_payroll(input, loader.config())))
        });
    }

    group.finish();
}

/// Benchmark: single request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = request_body("emp_bench_001", Decimal::new(2500, 0));

    c.bench_function("http_single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: a 100-employee payroll run through the router.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config());

    let requests: Vec<String> = (0..100)
        .map(|i| request_body(&format!("emp_batch_{:03}", i), Decimal::from(400 + i * 50)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_payroll,
    bench_calculate_payroll,
    bench_brackets,
    bench_single_request,
    bench_batch_100,
);
criterion_main!(benches);
