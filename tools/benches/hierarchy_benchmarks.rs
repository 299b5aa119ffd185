use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use sceneflat_core::math::{self, Mat3, Mat4, Vec2, Vec3};
use sceneflat_core::scene::{SceneData, SceneDimensions, SceneField, SceneFieldData};
use sceneflat_tools::{
    absolute_field_transformations_2d, absolute_field_transformations_3d_into,
    order_cluster_parents,
};

const SIZES: [u32; 3] = [1_000, 10_000, 100_000];

// ---------------------------------------------------------------------------
// Scene shapes
// ---------------------------------------------------------------------------

/// Single chain, each object the parent of the next.
fn chain(n: u32) -> Vec<(u32, Option<u32>)> {
    (0..n).map(|o| (o, o.checked_sub(1))).collect()
}

/// One root with every other object as its direct child.
fn wide(n: u32) -> Vec<(u32, Option<u32>)> {
    (0..n).map(|o| (o, (o > 0).then_some(0))).collect()
}

/// Balanced binary tree, listed leaves first.
fn balanced(n: u32) -> Vec<(u32, Option<u32>)> {
    (0..n)
        .rev()
        .map(|o| (o, (o > 0).then(|| (o - 1) / 2)))
        .collect()
}

fn scene_3d(parents: Vec<(u32, Option<u32>)>) -> SceneData {
    let n = parents.len();
    let locals = (0..n as u32).map(|o| {
        (
            o,
            math::mat4_from_translation(Vec3::new(1.0, 0.0, 0.0))
                * math::mat4_from_scale_rotation_translation(
                    Vec3::new(1.0, 1.0, 1.0),
                    math::quat_from_rotation_y(0.01),
                    Vec3::zeros(),
                ),
        )
    });
    let meshes = (0..n as u32).rev().map(|o| (o, o));
    let fields = vec![
        SceneFieldData::parents(parents),
        SceneFieldData::transformations_3d(locals),
        SceneFieldData::indices(SceneField::Mesh, meshes),
    ];
    SceneData::new(SceneDimensions::Three, n, fields).expect("valid benchmark scene")
}

fn scene_2d(parents: Vec<(u32, Option<u32>)>) -> SceneData {
    let n = parents.len();
    let locals = (0..n as u32).map(|o| {
        (
            o,
            math::mat3_from_translation_rotation_scaling(
                Vec2::new(1.0, 0.0),
                0.01,
                Vec2::new(1.0, 1.0),
            ),
        )
    });
    let fields = vec![
        SceneFieldData::parents(parents),
        SceneFieldData::transformations_2d(locals),
    ];
    SceneData::new(SceneDimensions::Two, n, fields).expect("valid benchmark scene")
}

// ---------------------------------------------------------------------------
// Parent ordering
// ---------------------------------------------------------------------------

fn bench_order_cluster_parents(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_cluster_parents");
    for n in SIZES {
        let scene = scene_3d(balanced(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &scene, |b, scene| {
            b.iter(|| order_cluster_parents(black_box(scene)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Absolute transformations
// ---------------------------------------------------------------------------

fn bench_absolute_3d(c: &mut Criterion) {
    let shapes: [(&str, fn(u32) -> Vec<(u32, Option<u32>)>); 3] =
        [("chain", chain), ("wide", wide), ("balanced", balanced)];
    for (name, shape) in shapes {
        let mut group = c.benchmark_group(format!("absolute_3d_{name}"));
        for n in SIZES {
            let scene = scene_3d(shape(n));
            let mut out = vec![Mat4::identity(); n as usize];
            group.bench_with_input(BenchmarkId::from_parameter(n), &scene, |b, scene| {
                b.iter(|| {
                    absolute_field_transformations_3d_into(
                        black_box(scene),
                        SceneField::Mesh,
                        &mut out,
                        Mat4::identity(),
                    )
                });
            });
        }
        group.finish();
    }
}

fn bench_absolute_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolute_2d_balanced");
    for n in SIZES {
        let scene = scene_2d(balanced(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &scene, |b, scene| {
            b.iter(|| {
                absolute_field_transformations_2d(
                    black_box(scene),
                    SceneField::Transformation,
                    Mat3::identity(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_order_cluster_parents,
    bench_absolute_3d,
    bench_absolute_2d,
);
criterion_main!(benches);
