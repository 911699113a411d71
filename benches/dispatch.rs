//! Performance benchmarks for analytics-hub
//!
//! Run with: cargo bench

use analytics_hub::provider::memory::MemoryProvider;
use analytics_hub::{AnalyticsEvent, AnalyticsHub, ProviderConfig};
use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn bench_event_creation(c: &mut Criterion) {
    c.bench_function("AnalyticsEvent::new", |b| {
        b.iter(|| AnalyticsEvent::new("purchase"));
    });

    c.bench_function("AnalyticsEvent with params", |b| {
        b.iter(|| {
            AnalyticsEvent::new("purchase")
                .with_param("sku", "A1")
                .with_param("quantity", 2)
                .with_action("tap")
        });
    });
}

fn bench_event_serialization(c: &mut Criterion) {
    let event = AnalyticsEvent::new("purchase")
        .with_param("sku", "A1")
        .with_param("quantity", 2)
        .with_action("tap");

    c.bench_function("AnalyticsEvent serialize", |b| {
        b.iter(|| serde_json::to_vec(&event).unwrap());
    });

    let bytes = serde_json::to_vec(&event).unwrap();
    c.bench_function("AnalyticsEvent deserialize", |b| {
        b.iter(|| serde_json::from_slice::<AnalyticsEvent>(&bytes).unwrap());
    });
}

fn bench_broadcast(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("broadcast");
    for count in [1, 4, 16] {
        // Pre-register `count` providers
        let hub = rt.block_on(async {
            let hub = AnalyticsHub::new();
            for i in 0..count {
                hub.register(
                    Arc::new(MemoryProvider::new(format!("p{}", i))),
                    &ProviderConfig::default(),
                )
                .await;
            }
            hub
        });

        group.bench_function(format!("{} providers", count), |b| {
            b.to_async(&rt).iter(|| async {
                hub.track(AnalyticsEvent::new("purchase").with_param("sku", "A1"))
                    .await
            });
        });
    }
    group.finish();
}

fn bench_registration(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("register + unregister", |b| {
        b.to_async(&rt).iter(|| async {
            let hub = AnalyticsHub::new();
            hub.register(
                Arc::new(MemoryProvider::new("p1")),
                &ProviderConfig::default(),
            )
            .await;
            hub.unregister("p1").await;
        });
    });
}

criterion_group!(
    benches,
    bench_event_creation,
    bench_event_serialization,
    bench_broadcast,
    bench_registration,
);
criterion_main!(benches);
