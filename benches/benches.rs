use algograph::graph::*;
use criterion::*;
use link_rank::page_rank::{iterated, sampled, PageRank};
use rand::{prelude::*, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, cycle, random_graph);

fn cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cycle");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    for n in SIZES.iter() {
        let g = gen_cycle(*n);
        group.bench_with_input(BenchmarkId::new("SampledPR", n), n, |b, _| {
            let cfg = sampled::Config {
                samples: 1000,
                seed: Some(3407),
                ..Default::default()
            };
            let spr = sampled::SampledPageRank::new(&g, &cfg).unwrap();
            b.iter(|| black_box(spr.calc().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("IteratedPR", n), n, |b, _| {
            let ipr = iterated::IteratedPageRank::new(&g, &iterated::Config::default()).unwrap();
            b.iter(|| black_box(ipr.calc().unwrap()))
        });
    }
    group.finish();
}

fn random_graph(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 20usize, 40usize, 80usize];
    const E_POW: &[f64] = &[1.0, 1.25, 1.5];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for e_m in E_POW.iter() {
        let mut group = c.benchmark_group(format!("RandomGraph_{e_m:.2}"));
        group.plot_config(plot_config.clone());
        for v_n in V_SIZE.iter() {
            let e_n = (*v_n as f64).powf(*e_m) as usize;
            let g = gen_random_graph(&mut rng, *v_n, e_n);
            group.bench_with_input(BenchmarkId::new("SampledPR", v_n), v_n, |b, _| {
                let cfg = sampled::Config {
                    samples: 1000,
                    seed: Some(3407),
                    ..Default::default()
                };
                let spr = sampled::SampledPageRank::new(&g, &cfg).unwrap();
                b.iter(|| black_box(spr.calc().unwrap()))
            });
            group.bench_with_input(BenchmarkId::new("IteratedPR", v_n), v_n, |b, _| {
                let ipr =
                    iterated::IteratedPageRank::new(&g, &iterated::Config::default()).unwrap();
                b.iter(|| black_box(ipr.calc().unwrap()))
            });
        }
        group.finish();
    }
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn gen_cycle(n: usize) -> directed::TreeBackedGraph {
    assert!(n > 0, "{n}");
    let mut g = directed::TreeBackedGraph::new();
    let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
    for (u, v) in vs.iter().zip(vs.iter().cycle().skip(1)).take(n) {
        g.add_edge(*u, *v);
    }
    g
}

fn gen_random_graph<R>(rng: &mut R, v_n: usize, e_n: usize) -> directed::TreeBackedGraph
where
    R: SeedableRng + Rng,
{
    let mut g = directed::TreeBackedGraph::new();
    let vs: Vec<_> = (0..v_n).map(|_| g.add_vertex()).collect();
    for _ in 0..e_n {
        let u = *vs.choose(rng).unwrap();
        let v = *vs.choose(rng).unwrap();
        if u != v {
            g.add_edge(u, v);
        }
    }
    g
}
