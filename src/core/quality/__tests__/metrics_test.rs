use super::super::{
    difference_map, frequency_energy, mse, psnr, psnr_from_mse, simplified_similarity,
    spectral_energy_retained,
};
use crate::core::error::SpectralError;
use crate::core::filter::{filter_grid, Band, FilterParams};
use crate::core::types::GrayscaleGrid;
use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};

fn 랜덤_그리드(height: usize, width: usize, seed: u64) -> GrayscaleGrid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    GrayscaleGrid::from_fn(height, width, |_| rng.gen_range(20.0..230.0)).unwrap()
}

#[test]
fn 동일_그리드_MSE_PSNR_테스트() {
    let grid = 랜덤_그리드(12, 12, 1);
    assert_eq!(mse(&grid, &grid).unwrap(), 0.0);
    assert_eq!(psnr(&grid, &grid).unwrap(), f64::INFINITY);
    println!("✅ 동일 그리드: MSE=0, PSNR=+inf");
}

#[test]
fn 상수_오프셋_MSE_테스트() {
    let grid = 랜덤_그리드(9, 13, 2);
    for k in [1.0, 3.0, 12.5] {
        let shifted = grid.map(|v| v + k);
        assert_abs_diff_eq!(mse(&grid, &shifted).unwrap(), k * k, epsilon = 1e-9);
        let expected_psnr = 20.0 * (255.0 / k).log10();
        assert_abs_diff_eq!(psnr(&grid, &shifted).unwrap(), expected_psnr, epsilon = 1e-9);
    }
}

#[test]
fn PSNR_정의_테스트() {
    assert_eq!(psnr_from_mse(0.0), f64::INFINITY);
    assert_abs_diff_eq!(psnr_from_mse(255.0 * 255.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(psnr_from_mse(1.0), 20.0 * 255.0f64.log10(), epsilon = 1e-12);
    // 아주 작은 MSE도 유한
    assert!(psnr_from_mse(1e-300).is_finite());
}

#[test]
fn 형태_불일치_테스트() {
    let a = 랜덤_그리드(8, 8, 3);
    let b = 랜덤_그리드(8, 9, 3);
    let expected = SpectralError::DimensionMismatch { expected: (8, 8), actual: (8, 9) };
    assert_eq!(mse(&a, &b).unwrap_err(), expected);
    assert!(psnr(&a, &b).is_err());
    assert!(simplified_similarity(&a, &b).is_err());
    assert!(spectral_energy_retained(&a, &b).is_err());
    assert!(difference_map(&a, &b).is_err());
}

#[test]
fn 단순_SSIM_동일_테스트() {
    let grid = 랜덤_그리드(16, 16, 4);
    assert_abs_diff_eq!(simplified_similarity(&grid, &grid).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn 단순_SSIM_상수_그리드_유한성_테스트() {
    // 분산 0 그리드에서도 C1, C2 덕분에 유한한 값
    let flat_a = GrayscaleGrid::filled(8, 8, 0.0).unwrap();
    let flat_b = GrayscaleGrid::filled(8, 8, 200.0).unwrap();
    let zero_vs_zero = simplified_similarity(&flat_a, &flat_a).unwrap();
    let zero_vs_flat = simplified_similarity(&flat_a, &flat_b).unwrap();

    assert!(zero_vs_zero.is_finite() && zero_vs_flat.is_finite());
    assert_abs_diff_eq!(zero_vs_zero, 1.0, epsilon = 1e-12);
    assert!(zero_vs_flat < 0.01);
}

#[test]
fn 단순_SSIM_공식_테스트() {
    let a = GrayscaleGrid::new(1, 4, vec![10.0, 20.0, 30.0, 40.0]).unwrap();
    let b = GrayscaleGrid::new(1, 4, vec![12.0, 18.0, 33.0, 39.0]).unwrap();

    let (mu_a, mu_b) = (25.0, 25.5);
    let var_a = (225.0 + 25.0 + 25.0 + 225.0) / 4.0;
    let var_b = (182.25 + 56.25 + 56.25 + 182.25) / 4.0;
    let cov = ((-15.0 * -13.5) + (-5.0 * -7.5) + (5.0 * 7.5) + (15.0 * 13.5)) / 4.0;
    let c1 = (0.01f64 * 255.0).powi(2);
    let c2 = (0.03f64 * 255.0).powi(2);
    let expected = ((2.0 * mu_a * mu_b + c1) * (2.0 * cov + c2))
        / ((mu_a * mu_a + mu_b * mu_b + c1) * (var_a + var_b + c2));

    assert_abs_diff_eq!(simplified_similarity(&a, &b).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn 스펙트럼_에너지_보존율_테스트() {
    let grid = 랜덤_그리드(32, 32, 5);
    assert_abs_diff_eq!(spectral_energy_retained(&grid, &grid).unwrap(), 100.0, epsilon = 1e-9);

    let (smoothed, _) = filter_grid(&grid, &FilterParams::gaussian(3.0, Band::LowPass).unwrap()).unwrap();
    let energy = frequency_energy(&grid, &smoothed).unwrap();
    assert!(energy.retained_percent < 100.0);
    assert!(energy.retained_percent > 0.0);
    assert_abs_diff_eq!(energy.retained_percent, energy.derived / energy.original * 100.0, epsilon = 1e-9);
    println!("✅ 가우시안 저역 통과 후 에너지 보존율 {:.2}%", energy.retained_percent);
}

#[test]
fn 영_에너지_기준_테스트() {
    let zeros = GrayscaleGrid::filled(4, 4, 0.0).unwrap();
    let ones = GrayscaleGrid::filled(4, 4, 1.0).unwrap();
    assert_eq!(spectral_energy_retained(&zeros, &zeros).unwrap(), 100.0);
    assert_eq!(spectral_energy_retained(&zeros, &ones).unwrap(), f64::INFINITY);
}

#[test]
fn 차이_지도_테스트() {
    let a = GrayscaleGrid::new(1, 3, vec![10.0, 50.0, 0.0]).unwrap();
    let b = GrayscaleGrid::new(1, 3, vec![15.0, 20.0, 0.0]).unwrap();
    assert_eq!(difference_map(&a, &b).unwrap().to_vec(), vec![5.0, 30.0, 0.0]);
}
