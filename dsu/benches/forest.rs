use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsu::encode::grid::{count_islands, Grid, LAND};
use dsu::mst::min_cost_connect_points;
use dsu::{DisjointSets, UnionPolicy};

/// Deterministic pseudo-random pairs (xorshift).
fn pairs(n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % n as u64) as usize
    };
    (0..count).map(|_| (next(), next())).collect()
}

fn bench_unions(c: &mut Criterion) {
    let n = 100_000;
    let ops = pairs(n, 200_000);

    let mut group = c.benchmark_group("random-unions");
    for policy in [UnionPolicy::ByRank, UnionPolicy::BySize, UnionPolicy::ByKey] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{policy:?}")),
            &policy,
            |b, &policy| {
                b.iter(|| {
                    let mut uf = DisjointSets::with_policy(n, policy);
                    for &(x, y) in &ops {
                        uf.union(x, y).unwrap();
                    }
                    black_box(uf.component_count())
                });
            },
        );
    }
    group.finish();
}

fn bench_chain_find(c: &mut Criterion) {
    let n = 100_000;
    c.bench_function("chain-then-find", |b| {
        b.iter(|| {
            // largest index always wins, so the chain is as deep as possible
            let mut uf = DisjointSets::with_policy(n, UnionPolicy::ByKey);
            for i in 0..n - 1 {
                uf.union_by(i, i + 1, |a, b| b.cmp(&a)).unwrap();
            }
            black_box(uf.find(0).unwrap())
        });
    });
}

fn bench_islands(c: &mut Criterion) {
    let mut grid = Grid::new(512, 512).unwrap();
    for (i, (r, col)) in pairs(512, 120_000).into_iter().enumerate() {
        if i % 3 != 0 {
            grid.set(r, col, LAND);
        }
    }
    c.bench_function("islands-512", |b| {
        b.iter(|| black_box(count_islands(&grid).unwrap()));
    });
}

fn bench_connect_points(c: &mut Criterion) {
    let points: Vec<[i64; 2]> = pairs(10_000, 500)
        .into_iter()
        .map(|(x, y)| [x as i64 - 5_000, y as i64 - 5_000])
        .collect();
    c.bench_function("connect-points-500", |b| {
        b.iter(|| black_box(min_cost_connect_points(&points).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_unions,
    bench_chain_find,
    bench_islands,
    bench_connect_points
);
criterion_main!(benches);
