use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nuclear_navigator::{NavigateOptions, Navigator, Router};

fn ranked_router() -> Router<usize> {
    let mut router: Router<usize> = Router::new();
    router
        .insert("/", 0)
        .insert("/groups", 1)
        .insert("/groups/:groupId", 2)
        .insert("/groups/mine", 3)
        .insert("/groups/:groupId/users/*", 4)
        .insert("/groups/:groupId/users/:userId", 5)
        .nest("/dash", 6, |dash| {
            dash.nest("reports", 7, |reports| {
                reports.insert("annual", 8);
            });
        });
    router
}

fn router_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-resolve");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("/hello/:name", 1);
        b.iter_with_large_drop(|| router.resolve("/hello/world"))
    });

    group.bench_function("ranked", |b| {
        let router = ranked_router();
        b.iter_with_large_drop(|| router.resolve("/groups/123/users/456"))
    });

    group.bench_function("nested", |b| {
        let router = ranked_router();
        b.iter_with_large_drop(|| router.resolve("/dash/reports/annual"))
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.insert("/hello/:name", 1);
            },
            BatchSize::SmallInput,
        )
    });
}

fn navigator_navigate(c: &mut Criterion) {
    let router = ranked_router();
    let mut nav = Navigator::memory(&router, "/");

    c.bench_function("navigator-navigate-commit", |b| {
        b.iter(|| {
            let t = nav
                .navigate(
                    "/groups/mine",
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                )
                .unwrap();
            nav.commit(t)
        })
    });
}

criterion_group!(benches, router_resolve, router_insert, navigator_navigate);
criterion_main!(benches);
