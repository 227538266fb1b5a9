use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use unicoderange::font::{FontStore, SfntFont};
use unicoderange::ranges::{classify, pack, unpack};
use unicoderange::reconcile::reconcile;

/// Pseudo-random code points, biased towards the BMP like real fonts.
fn gen_codepoints(count: usize, seed: u64) -> Vec<u32> {
    let mut s = seed;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = (s >> 33) as u32;
        let cp = if r % 8 == 0 { r % 0x11_0000 } else { r % 0x1_0000 };
        out.push(cp);
    }
    out
}

fn bench_classify(c: &mut Criterion) {
    let mut g = c.benchmark_group("classify_codepoints");
    for count in [256usize, 4096, 65536] {
        let cps = gen_codepoints(count, count as u64);
        g.throughput(Throughput::Elements(count as u64));
        g.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(classify(black_box(&cps).iter().copied())));
        });
    }
    g.finish();
}

#[cfg(feature = "parallel")]
fn bench_classify_par(c: &mut Criterion) {
    use unicoderange::ranges::classify::classify_par;
    let mut g = c.benchmark_group("classify_codepoints_par");
    for count in [4096usize, 65536, 1 << 20] {
        let cps = gen_codepoints(count, count as u64);
        g.throughput(Throughput::Elements(count as u64));
        g.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(classify_par(black_box(&cps))));
        });
    }
    g.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_classify_par(_: &mut Criterion) {}

fn bench_codec(c: &mut Criterion) {
    c.bench_function("pack_unpack", |b| {
        let mut v = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
        b.iter(|| {
            v = pack(unpack(black_box(v))).rotate_left(1);
            black_box(v);
        });
    });
}

fn bench_reconcile_font(c: &mut Criterion) {
    // Same shape as a pan-European text face: Latin, Greek, Cyrillic, punctuation.
    let cps: Vec<u32> = (0x20..0x250).chain(0x370..0x530).chain(0x2000..0x206F).collect();
    c.bench_function("reconcile_european_face", |b| {
        b.iter(|| black_box(reconcile(black_box(&cps).iter().copied(), [0; 4])));
    });
}

fn bench_open_font(c: &mut Criterion) {
    let path = std::env::var_os("UNICODERANGE_BENCH_FONT");
    let Some(path) = path else {
        return;
    };
    let Ok(data) = std::fs::read(&path) else {
        return;
    };
    c.bench_function("best_character_map_real_font", |b| {
        b.iter(|| {
            let font = SfntFont::from_bytes(data.clone()).unwrap();
            black_box(font.best_character_map().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_classify_par,
    bench_codec,
    bench_reconcile_font,
    bench_open_font
);
criterion_main!(benches);
