use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shorttid::{
    BASE16_LOWER_ALPHABET, CROCKFORD_BASE32_ALPHABET, Config, Generator, SECOND, TimeSource,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A fixed clock so the time segment's encoding cost is stable across runs.
struct FixedMockTime {
    now: SystemTime,
}

impl TimeSource for FixedMockTime {
    fn now(&self) -> SystemTime {
        self.now
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn bench_generate(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> Generator) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        let generator = generator_factory();
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.generate());
            }
        })
    });

    group.finish();
}

fn bench_default(c: &mut Criterion) {
    bench_generate(c, "generate/default", || {
        Generator::new(Config::default())
    });
}

fn bench_random_only(c: &mut Criterion) {
    bench_generate(c, "generate/random_only", || {
        Generator::new(Config::new().tick_size(Duration::ZERO).random_chars(21))
    });
}

fn bench_crockford_seconds(c: &mut Criterion) {
    bench_generate(c, "generate/crockford_seconds", || {
        Generator::new(
            Config::new()
                .epoch(UNIX_EPOCH + Duration::from_secs(1_735_689_600))
                .tick_size(SECOND)
                .alphabet(CROCKFORD_BASE32_ALPHABET)
                .random_chars(6),
        )
    });
}

/// Isolates the encoder: fixed clock, no random segment.
fn bench_time_segment_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/time_segment_only");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let generator = Generator::new(
        Config::new()
            .alphabet(BASE16_LOWER_ALPHABET)
            .random_chars(0)
            .time_source(FixedMockTime {
                now: UNIX_EPOCH + Duration::from_secs(1_735_689_600),
            }),
    );

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.generate());
            }
        })
    });

    group.finish();
}

fn bench_shorttid(c: &mut Criterion) {
    bench_default(c);
    bench_random_only(c);
    bench_crockford_seconds(c);
}

criterion_group!(benches, bench_shorttid, bench_time_segment_only);
criterion_main!(benches);
