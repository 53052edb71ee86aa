use super::super::{CompressionStats, PsnrGrade, QualityReport, SsimGrade};
use crate::core::codec::BlockTransformCodec;
use crate::core::types::GrayscaleGrid;
use approx::assert_abs_diff_eq;

fn 패턴_그리드() -> GrayscaleGrid {
    GrayscaleGrid::from_fn(32, 32, |(r, c)| ((r * 8 + c * 5) % 256) as f64).unwrap()
}

#[test]
fn 등급_경계_테스트() {
    assert_eq!(PsnrGrade::from_psnr(f64::INFINITY), PsnrGrade::Excellent);
    assert_eq!(PsnrGrade::from_psnr(40.5), PsnrGrade::Excellent);
    assert_eq!(PsnrGrade::from_psnr(40.0), PsnrGrade::Good);
    assert_eq!(PsnrGrade::from_psnr(25.0), PsnrGrade::Acceptable);
    assert_eq!(PsnrGrade::from_psnr(20.0), PsnrGrade::Poor);

    assert_eq!(SsimGrade::from_ssim(0.99), SsimGrade::VerySimilar);
    assert_eq!(SsimGrade::from_ssim(0.9), SsimGrade::Similar);
    assert_eq!(SsimGrade::from_ssim(0.75), SsimGrade::ModeratelySimilar);
    assert_eq!(SsimGrade::from_ssim(0.70), SsimGrade::Different);
}

#[test]
fn 동일_그리드_보고서_테스트() {
    let grid = 패턴_그리드();
    let report = QualityReport::build(&grid, &grid).unwrap();

    assert_eq!(report.mse, 0.0);
    assert_eq!(report.psnr, f64::INFINITY);
    assert_abs_diff_eq!(report.ssim, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(report.frequency.retained_percent, 100.0, epsilon = 1e-9);
    assert_eq!(report.psnr_grade, PsnrGrade::Excellent);
    assert_eq!(report.ssim_grade, SsimGrade::VerySimilar);
    assert_eq!(report.original, report.derived);
}

#[test]
fn 보고서_텍스트_테스트() {
    let grid = 패턴_그리드();
    let derived = grid.map(|v| (v + 4.0).min(255.0));
    let report = QualityReport::build(&grid, &derived).unwrap();
    let text = report.to_string();

    assert!(text.contains("SIMILARITY METRICS"));
    assert!(text.contains("PSNR:"));
    assert!(text.contains("Retained energy"));
    assert!(text.contains(report.psnr_grade.description()));
    println!("{}", text);
}

#[test]
fn 보고서_직렬화_테스트() {
    let grid = 패턴_그리드();
    let derived = grid.map(|v| v * 0.9);
    let report = QualityReport::build(&grid, &derived).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["mse"].as_f64().unwrap() > 0.0);
    assert_eq!(json["psnr_grade"], serde_json::json!(format!("{:?}", report.psnr_grade)));
    assert!(json["original"]["median"].is_number());
}

#[test]
fn 압축_통계_테스트() {
    let grid = 패턴_그리드();
    let codec = BlockTransformCodec::new(8).unwrap();

    let lossless = codec.compress_frequency(&grid, 64).unwrap();
    let stats = CompressionStats::measure(&grid, &lossless).unwrap();
    assert!(stats.mse < 1e-12);
    assert!(stats.psnr > 100.0);
    assert_eq!(stats.compression_ratio, 0.0);

    let lossy = codec.compress_frequency(&grid, 6).unwrap();
    let stats = CompressionStats::measure(&grid, &lossy).unwrap();
    assert!(stats.mse > 0.0);
    assert!(stats.psnr.is_finite());
    println!("✅ N=6: MSE={:.3}, PSNR={:.2} dB, ratio={:.2}%", stats.mse, stats.psnr, stats.compression_ratio);
}
