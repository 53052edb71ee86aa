use super::super::{Dct2d, WholeImageDct};
use crate::core::types::GrayscaleGrid;
use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rustdct::DctPlanner;

fn 랜덤_블록(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0.0..255.0)).collect()
}

#[test]
fn 블록_DCT_왕복_테스트() {
    let mut planner = DctPlanner::new();
    for &(rows, cols) in &[(8, 8), (4, 8), (5, 3), (1, 1)] {
        let dct = Dct2d::new(&mut planner, rows, cols);
        let original = 랜덤_블록(rows * cols, 11);
        let mut data = original.clone();
        dct.forward(&mut data);
        dct.inverse(&mut data);
        for (a, b) in original.iter().zip(data.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }
    println!("✅ 블록 DCT 왕복 테스트 통과");
}

#[test]
fn 직교_정규화_에너지_보존_테스트() {
    let mut planner = DctPlanner::new();
    let dct = Dct2d::new(&mut planner, 8, 8);
    let original = 랜덤_블록(64, 5);
    let mut coeffs = original.clone();
    dct.forward(&mut coeffs);

    let spatial: f64 = original.iter().map(|v| v * v).sum();
    let spectral: f64 = coeffs.iter().map(|v| v * v).sum();
    assert_abs_diff_eq!(spatial, spectral, epsilon = 1e-6 * spatial);
}

#[test]
fn DC_계수_평균_테스트() {
    let mut planner = DctPlanner::new();
    let dct = Dct2d::new(&mut planner, 8, 8);
    let original = 랜덤_블록(64, 9);
    let mean = original.iter().sum::<f64>() / 64.0;
    let mut coeffs = original.clone();
    dct.forward(&mut coeffs);
    // 직교 정규화에서 DC = 평균 × sqrt(64)
    assert_abs_diff_eq!(coeffs[0], mean * 8.0, epsilon = 1e-9);
}

#[test]
fn 전체_이미지_DCT_테스트() {
    let grid = GrayscaleGrid::from_fn(12, 20, |(r, c)| ((r * 7 + c * 3) % 256) as f64).unwrap();
    let dct = WholeImageDct::forward(&grid);
    assert_eq!(dct.coefficients().dim(), (12, 20));

    let restored = dct.inverse();
    for (a, b) in grid.iter().zip(restored.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }

    let summary = dct.summary();
    assert_eq!((summary.height, summary.width), (12, 20));
    assert!(summary.max >= summary.min);
    assert!(summary.std > 0.0);

    let log = dct.log_magnitude();
    assert!(log.iter().all(|&v| v >= 0.0));
    println!("✅ 전체 이미지 DCT: {:?}", summary);
}
