//! Performance benchmarks for component and stack hashing.
//!
//! Run with: `cargo bench --bench hashing`
//!
//! ## Performance Targets
//!
//! | Operation | Target | Notes |
//! |-----------|--------|-------|
//! | Scalar component | <1µs | One CRC pass |
//! | Full stack | <50µs | Text, nested stacks, registry lookups |
//! | Shared catalog | Linear scaling | Read-only access from many threads |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use std::thread;

use stack_hash::types::{
    DataComponents, FoodProperties, Identifier, ItemStack, NamedColor, Rarity, TextColor, TextComponent,
};
use stack_hash::{ComponentCatalog, DataComponent, HashingConfig, InMemoryRegistries, Registry};

fn make_registries() -> InMemoryRegistries {
    InMemoryRegistries::new().with_entries(
        Registry::Item,
        ["air", "melon", "pumpkin", "potato"].into_iter().map(Identifier::minecraft),
    )
}

/// A stack with `extra_lore` lore lines and a nested remainder.
fn make_stack(extra_lore: usize) -> ItemStack {
    let name = TextComponent::text("magic potato!")
        .color(TextColor::Named(NamedColor::Gold))
        .italic(false);
    let lore = (0..extra_lore)
        .map(|line| TextComponent::text(format!("line {line}")))
        .collect();
    let remainder = ItemStack::new(1, 1).with_components(DataComponents::new().with(DataComponent::MaxStackSize(16)));

    let patch = DataComponents::new()
        .with(DataComponent::CustomName(name))
        .with(DataComponent::Lore(lore))
        .with(DataComponent::Rarity(Rarity::Epic))
        .with(DataComponent::Food(FoodProperties {
            nutrition: 4,
            saturation: 2.4,
            can_always_eat: true,
        }))
        .with(DataComponent::UseRemainder(remainder));
    ItemStack::new(3, 30).with_components(patch)
}

/// Benchmark single scalar and text components.
fn bench_components(c: &mut Criterion) {
    let catalog = ComponentCatalog::vanilla(&HashingConfig::default()).unwrap();
    let registries = make_registries();

    let mut group = c.benchmark_group("component");
    let cases = [
        ("max_stack_size", DataComponent::MaxStackSize(64)),
        ("custom_name", DataComponent::CustomName(TextComponent::text("simple component test!"))),
        ("rarity", DataComponent::Rarity(Rarity::Rare)),
    ];
    for (name, component) in &cases {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), component, |b, component| {
            b.iter(|| catalog.hash(black_box(component), &registries).unwrap())
        });
    }
    group.finish();
}

/// Benchmark whole stacks by lore length.
fn bench_stacks(c: &mut Criterion) {
    let catalog = ComponentCatalog::vanilla(&HashingConfig::default()).unwrap();
    let registries = make_registries();

    let mut group = c.benchmark_group("hash_stack");
    for lore_lines in [0, 4, 16, 64] {
        let stack = make_stack(lore_lines);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("lore_lines", lore_lines), &stack, |b, stack| {
            b.iter(|| catalog.hash_stack(black_box(stack), &registries).unwrap())
        });
    }
    group.finish();
}

/// Benchmark one catalog shared by several threads.
fn bench_shared_catalog(c: &mut Criterion) {
    let catalog = Arc::new(ComponentCatalog::vanilla(&HashingConfig::default()).unwrap());
    let registries = Arc::new(make_registries());
    let stack = Arc::new(make_stack(4));

    let mut group = c.benchmark_group("shared_catalog");
    for num_threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements(num_threads as u64 * 100));
        group.bench_with_input(BenchmarkId::new("threads", num_threads), &num_threads, |b, &n| {
            b.iter(|| {
                let handles: Vec<_> = (0..n)
                    .map(|_| {
                        let catalog = Arc::clone(&catalog);
                        let registries = Arc::clone(&registries);
                        let stack = Arc::clone(&stack);
                        thread::spawn(move || {
                            for _ in 0..100 {
                                black_box(catalog.hash_stack(&stack, registries.as_ref()).unwrap());
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            })
        });
    }
    group.finish();
}

/// Benchmark building the vanilla catalog.
fn bench_catalog_build(c: &mut Criterion) {
    let config = HashingConfig::default();
    c.bench_function("catalog_build", |b| {
        b.iter(|| ComponentCatalog::vanilla(black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_components,
    bench_stacks,
    bench_shared_catalog,
    bench_catalog_build,
);
criterion_main!(benches);
