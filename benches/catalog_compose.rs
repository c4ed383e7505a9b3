//! Benchmark landing page composition, rendering and ranked queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use streamflix::catalog::compose::{compose, RankedSlices};
use streamflix::catalog::media::TmdbImageResolver;
use streamflix::catalog::view::PageRenderer;
use streamflix_common::RankedQuery;
use streamflix_db::models::Movie;
use streamflix_db::pool::init_memory_pool;
use streamflix_db::queries::movies;

fn make_movie(id: i64) -> Movie {
    let mut movie = Movie::new(id, format!("Benchmark Movie {id}"));
    movie.slug = (id % 2 == 0).then(|| format!("benchmark-movie-{id}"));
    movie.overview = "A movie used for benchmarking catalog composition".into();
    movie.poster_path = (id % 3 != 0).then(|| format!("/poster-{id}.jpg"));
    movie.vote_average = (id % 100) as f64 / 10.0;
    movie.vote_count = (id * 37 % 10_000) as u32;
    movie.runtime_minutes = Some(90 + (id % 60) as u32);
    movie
}

fn slices() -> RankedSlices {
    RankedSlices {
        featured: (1..=5).map(make_movie).collect(),
        recent: (10..22).map(make_movie).collect(),
        popular: (30..42).map(make_movie).collect(),
    }
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    let input = slices();
    group.bench_function("compose", |b| {
        b.iter(|| compose(black_box(input.clone())));
    });

    let view = compose(slices());
    let resolver = TmdbImageResolver::new("https://image.tmdb.org/t/p", "w500", "original");
    let renderer = PageRenderer::new(&resolver, "/placeholder.svg");
    group.bench_function("render_home", |b| {
        b.iter(|| renderer.render_home(black_box(&view)));
    });

    let page = renderer.render_home(&view);
    group.bench_function("serialize_home", |b| {
        b.iter(|| serde_json::to_string(black_box(&page)).unwrap());
    });

    group.finish();
}

fn bench_ranked_queries(c: &mut Criterion) {
    let pool = init_memory_pool().expect("pool");
    let conn = pool.get().expect("conn");
    for id in 1..=1_000 {
        movies::upsert_movie(&conn, &make_movie(id)).unwrap();
    }

    let mut group = c.benchmark_group("ranked_query");
    for query in RankedQuery::ALL {
        group.bench_function(query.to_string(), |b| {
            b.iter(|| movies::list_ranked(&conn, black_box(query), query.limit()).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose, bench_ranked_queries);
criterion_main!(benches);
