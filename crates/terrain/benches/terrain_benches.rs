//! Benchmarks for the evaluator hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{vec2, Vec3};
use terrain::{
    build_ray, cast_ray, noise::value_noise, sample_terrain, shade_pixel, FrameUniforms,
    MarchParams, SceneParams, TerrainParams,
};

fn bench_noise(c: &mut Criterion) {
    c.bench_function("value_noise", |b| {
        b.iter(|| value_noise(black_box(vec2(1.234, 5.678))))
    });
}

fn bench_terrain(c: &mut Criterion) {
    let params = TerrainParams::default();
    c.bench_function("sample_terrain_10oct", |b| {
        b.iter(|| sample_terrain(black_box(vec2(812.3, -451.7)), &params))
    });
    let shallow = TerrainParams {
        octaves: 4,
        ..params
    };
    c.bench_function("sample_terrain_4oct", |b| {
        b.iter(|| sample_terrain(black_box(vec2(812.3, -451.7)), &shallow))
    });
}

fn bench_march(c: &mut Criterion) {
    let terrain = TerrainParams::default();
    let march = MarchParams::default();
    let uniforms = FrameUniforms::new(0.0, 1920.0, 1080.0);
    let valley = build_ray(vec2(0.5, 0.75), &uniforms, &terrain);
    c.bench_function("cast_ray_valley", |b| {
        b.iter(|| cast_ray(black_box(&valley), &terrain, &march))
    });
    let sky = terrain::Ray {
        origin: Vec3::new(0.0, 1000.0, 0.0),
        direction: Vec3::Y,
    };
    c.bench_function("cast_ray_sky", |b| {
        b.iter(|| cast_ray(black_box(&sky), &terrain, &march))
    });
}

fn bench_pixel(c: &mut Criterion) {
    let scene = SceneParams::default();
    let uniforms = FrameUniforms::new(0.0, 1920.0, 1080.0);
    c.bench_function("shade_pixel", |b| {
        b.iter(|| shade_pixel(black_box(vec2(0.5, 0.75)), &uniforms, &scene))
    });
}

criterion_group!(benches, bench_noise, bench_terrain, bench_march, bench_pixel);
criterion_main!(benches);
