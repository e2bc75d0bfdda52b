use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rolegate_core::dashboard::{enabled_tabs, DashboardView};
use rolegate_core::fixtures;
use rolegate_core::{CapabilityResolver, GateMode, Role};

fn resolver_benchmarks(c: &mut Criterion) {
    let resolver = CapabilityResolver::default();
    let data = fixtures::dashboard_data();

    c.bench_function("has", |b| {
        b.iter(|| resolver.has(black_box(Role::Editor), black_box("content-edit")))
    });

    c.bench_function("is_tab_enabled_any", |b| {
        b.iter(|| resolver.is_tab_enabled(black_box(Role::Viewer), ["content-edit", "content-view"], GateMode::Any))
    });

    c.bench_function("filter_visible_users", |b| {
        b.iter(|| resolver.filter_visible(black_box(Role::Admin), &data.users))
    });

    c.bench_function("enabled_tabs", |b| {
        b.iter(|| enabled_tabs(&resolver, black_box(Role::Viewer)))
    });

    c.bench_function("dashboard_view", |b| {
        b.iter(|| DashboardView::for_role(&resolver, black_box(Role::Admin), &data))
    });
}

criterion_group!(benches, resolver_benchmarks);
criterion_main!(benches);
