use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cordic::{
    emit_angle_table, gain, phase_quantization_variance, select,
};

fn select_bench(c: &mut Criterion) {
    c.bench_function("select::phase_bits(24)", |b| {
        b.iter(|| select::phase_bits(black_box(24)))
    });
    c.bench_function("select::stages(28)", |b| {
        b.iter(|| select::stages(black_box(28)))
    });
}

fn model_bench(c: &mut Criterion) {
    c.bench_function("gain(28)", |b| b.iter(|| gain(black_box(28))));
    c.bench_function("phase_quantization_variance(28, 32)", |b| {
        b.iter(|| phase_quantization_variance(black_box(28), black_box(32)))
    });
}

fn emit_bench(c: &mut Criterion) {
    let mut buf = Vec::with_capacity(4096);
    c.bench_function("emit_angle_table(28, 32)", |b| {
        b.iter(|| {
            buf.clear();
            emit_angle_table(&mut buf, black_box(28), black_box(32))
        })
    });
}

criterion_group!(benches, select_bench, model_bench, emit_bench);
criterion_main!(benches);
