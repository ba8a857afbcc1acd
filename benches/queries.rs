use std::hint::black_box;

use clap::Parser;
use country_stats::{app, args::Args, config::Config};
use country_stats_domain::options::AreaNullPolicy;
use country_stats_infra::BundledCountryRepository;
use country_stats_usecase::CountryManager;
use criterion::{Criterion, criterion_group, criterion_main};

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["country_stats", "max-population", "--region", "asia"])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let manager = CountryManager::from_repository(&BundledCountryRepository::new()).unwrap();

    c.bench_function("least_populous", |b| b.iter(|| black_box(manager.least_populous(black_box(10)).len())));
    c.bench_function("most_populous_by_region", |b| b.iter(|| black_box(manager.most_populous_by_region())));
    c.bench_function("area_stats", |b| b.iter(|| black_box(manager.area_stats(AreaNullPolicy::TreatAsZero))));

    let config = Config::try_from(Args::try_parse_from(["country_stats"]).unwrap()).unwrap();
    c.bench_function("all_reports", |b| b.iter(|| black_box(app::build_reports(&manager, &config).unwrap())));
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_queries);
criterion_main!(benches);
