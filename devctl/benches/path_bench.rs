use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use devctl::env::MapEnv;
use devctl::path::{normalize_prefix, FixedHomeDir, InstallLayout, Pather};
use devctl::system::{Os, StaticRuntimeInfo};
use std::path::PathBuf;

fn pather(env: MapEnv, os: Os) -> Pather {
    Pather::builder()
        .with_app_prefix("devctl")
        .with_environment(env)
        .with_runtime_info(StaticRuntimeInfo::os(os))
        .with_home_lookup(FixedHomeDir(Some(PathBuf::from("/home/bench"))))
        .build()
}

fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix");

    group.bench_function("plain", |b| {
        b.iter(|| normalize_prefix(black_box("devctl")));
    });

    group.bench_function("dotted_upper", |b| {
        b.iter(|| normalize_prefix(black_box("...DEVCTL")));
    });

    group.finish();
}

fn bench_config_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_root");

    // Each precedence level, from the cheapest to the full fallback
    let cases = [
        (
            "override",
            Pather::builder()
                .with_config_root_fn(|| PathBuf::from("/etc/devctl"))
                .build(),
        ),
        (
            "devctl_config_home",
            pather(MapEnv::new().with("DEVCTL_CONFIG_HOME", "/custom/root"), Os::Linux),
        ),
        (
            "xdg_config_home",
            pather(MapEnv::new().with("XDG_CONFIG_HOME", "/xdg"), Os::Linux),
        ),
        ("linux_home", pather(MapEnv::new(), Os::Linux)),
        ("darwin_home", pather(MapEnv::new(), Os::Darwin)),
    ];

    for (name, pather) in &cases {
        group.bench_with_input(BenchmarkId::new("resolve", name), pather, |b, pather| {
            b.iter(|| pather.config_root(black_box::<&[&str]>(&[])));
        });
    }

    group.finish();
}

fn bench_sub_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_paths");
    let pather = pather(MapEnv::new(), Os::Linux);

    group.bench_function("sdk", |b| {
        b.iter(|| pather.sdk(black_box(&["go", "1.22.0", "bin"])));
    });

    group.bench_function("plugin", |b| {
        b.iter(|| pather.plugin(black_box(&["kubectl"])));
    });

    group.bench_function("cache", |b| {
        b.iter(|| pather.cache(black_box(&["index", "default"])));
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("install_layout");
    let layout = InstallLayout::new("/home/bench/.devctl");

    group.bench_function("plugin_manifest", |b| {
        b.iter(|| layout.index_plugin_manifest_path(black_box("default"), black_box("kubectl")));
    });

    group.bench_function("plugin_version", |b| {
        b.iter(|| layout.plugin_version_install_path(black_box("kubectl"), black_box("1.29.0")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_prefix,
    bench_config_root,
    bench_sub_paths,
    bench_layout
);
criterion_main!(benches);
