mod common;

use approx::assert_abs_diff_eq;

use lumen_core::consts::PSNR_IDENTICAL_DB;
use lumen_core::error::LumenError;
use lumen_core::quality::psnr::{mean_squared_error, psnr, psnr_from_mse};
use lumen_core::quality::ssim::ssim;
use lumen_core::quality::{measure, Metrics};

use common::{add_checker_noise, box_blur, gray_frame, textured_frame};

// ---------------------------------------------------------------------------
// PSNR
// ---------------------------------------------------------------------------

#[test]
fn test_psnr_identical_returns_sentinel() {
    let frame = textured_frame(32, 24);
    assert_eq!(psnr(&frame, &frame.clone()).unwrap(), PSNR_IDENTICAL_DB);
}

#[test]
fn test_psnr_known_value() {
    // Uniform difference of 10 -> MSE 100 -> 20*log10(25.5) = 28.13 dB
    let a = gray_frame(8, 8, 100);
    let b = gray_frame(8, 8, 110);
    assert_abs_diff_eq!(mean_squared_error(&a, &b), 100.0);
    assert_abs_diff_eq!(psnr(&a, &b).unwrap(), 28.1308, epsilon = 1e-3);
}

#[test]
fn test_psnr_does_not_wrap_around() {
    // 0 vs 255 must be the worst case, not a small unsigned difference.
    let a = gray_frame(4, 4, 0);
    let b = gray_frame(4, 4, 255);
    assert_abs_diff_eq!(psnr(&a, &b).unwrap(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_psnr_decreases_with_noise() {
    let base = gray_frame(32, 32, 128);
    let scores: Vec<f64> = [1u8, 2, 5, 10, 20, 40]
        .iter()
        .map(|&amp| psnr(&base, &add_checker_noise(&base, amp)).unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[1] < pair[0], "PSNR not decreasing: {scores:?}");
    }
}

#[test]
fn test_psnr_from_mse_zero() {
    assert_eq!(psnr_from_mse(0.0), PSNR_IDENTICAL_DB);
    assert!(psnr_from_mse(1.0) < PSNR_IDENTICAL_DB);
}

#[test]
fn test_psnr_size_mismatch() {
    let a = gray_frame(8, 8, 0);
    let b = gray_frame(8, 9, 0);
    assert!(matches!(
        psnr(&a, &b),
        Err(LumenError::DimensionMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// SSIM
// ---------------------------------------------------------------------------

#[test]
fn test_ssim_identical_is_one() {
    let frame = textured_frame(32, 32);
    assert_abs_diff_eq!(ssim(&frame, &frame.clone()).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_ssim_decreases_with_blur() {
    let frame = textured_frame(32, 32);
    let scores: Vec<f64> = [0usize, 1, 2, 3]
        .iter()
        .map(|&r| ssim(&frame, &box_blur(&frame, r)).unwrap())
        .collect();
    assert_abs_diff_eq!(scores[0], 1.0, epsilon = 1e-12);
    for pair in scores.windows(2) {
        assert!(pair[1] < pair[0], "SSIM not decreasing: {scores:?}");
    }
}

#[test]
fn test_ssim_is_symmetric() {
    let a = textured_frame(24, 24);
    let b = box_blur(&a, 1);
    assert_abs_diff_eq!(
        ssim(&a, &b).unwrap(),
        ssim(&b, &a).unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn test_ssim_rejects_images_smaller_than_window() {
    let a = gray_frame(6, 20, 10);
    assert!(matches!(
        ssim(&a, &a.clone()),
        Err(LumenError::WindowTooLarge { window: 7, .. })
    ));
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[test]
fn test_overlay_text_format() {
    let metrics = Metrics {
        psnr: 15.6712,
        ssim: 0.98765,
    };
    assert_eq!(metrics.overlay_text(), "PSNR: 15.67 dB | SSIM: 0.988");
}

#[test]
fn test_measure_identical() {
    let frame = textured_frame(16, 16);
    let metrics = measure(&frame, &frame.clone()).unwrap();
    assert_eq!(metrics.psnr, PSNR_IDENTICAL_DB);
    assert_abs_diff_eq!(metrics.ssim, 1.0, epsilon = 1e-12);
    assert_eq!(metrics.overlay_text(), "PSNR: 100.00 dB | SSIM: 1.000");
}
