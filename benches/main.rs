use criterion::criterion_main;


criterion_main!(
    bench_erase::benches,
    bench_insert::benches,
    bench_query_range::benches
);
