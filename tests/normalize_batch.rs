use std::path::PathBuf;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use storeshots::normalize::{fit_within, normalize_batch, NormalizeConfig};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storeshots-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

const BG: [u8; 3] = [30, 136, 229];

#[test]
fn batch_letterboxes_and_survives_missing_files() {
    let dir = scratch_dir("batch");
    let out = dir.join("out");

    RgbImage::from_pixel(400, 200, Rgb([200, 10, 10])).save(dir.join("wide.png")).unwrap();
    RgbImage::from_pixel(129, 280, Rgb([10, 200, 10])).save(dir.join("tall.png")).unwrap();
    RgbImage::from_pixel(512, 683, Rgb([10, 10, 200])).save(dir.join("exact.png")).unwrap();
    RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 0])).save(dir.join("clear.png")).unwrap();

    let config = NormalizeConfig {
        input_dir: dir.clone(),
        output_dir: out.clone(),
        files: ["wide.png", "missing.png", "tall.png", "exact.png", "clear.png"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ..NormalizeConfig::default()
    };

    let report = normalize_batch(&config).expect("batch");
    assert_eq!(report.written.len(), 4);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].0.ends_with("missing.png"));
    assert!(!report.is_success());

    for path in &report.written {
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("ipad_"));
        let img = image::open(path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2048, 2732));
    }

    let wide = image::open(out.join("ipad_wide.png")).unwrap().to_rgb8();
    assert_eq!(wide.get_pixel(1024, 5).0, BG);
    assert_eq!(wide.get_pixel(1024, 1366).0, [200, 10, 10]);

    let tall = image::open(out.join("ipad_tall.png")).unwrap().to_rgb8();
    assert_eq!(tall.get_pixel(5, 1366).0, BG);
    assert_eq!(tall.get_pixel(1024, 5).0, [10, 200, 10]);

    let exact = image::open(out.join("ipad_exact.png")).unwrap().to_rgb8();
    for (x, y) in [(0, 0), (2047, 0), (0, 2731), (2047, 2731)] {
        assert_eq!(exact.get_pixel(x, y).0, [10, 10, 200]);
    }

    let clear = image::open(out.join("ipad_clear.png")).unwrap().to_rgb8();
    assert_eq!(clear.get_pixel(1024, 1366).0, BG);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn resized_content_keeps_aspect_ratio() {
    for (w, h) in [(1290, 2796), (1920, 1080), (750, 1334), (3000, 3000), (2048, 2732)] {
        let place = fit_within(w, h, 2048, 2732).unwrap();
        let ratio = w as f64 / h as f64;
        // the side that was not pinned to the target is floored, so it is off by less than a pixel
        if place.height == 2732 {
            let exact = place.height as f64 * ratio;
            assert!((place.width as f64 - exact).abs() < 1.0, "{w}x{h}: width {} vs {exact}", place.width);
        } else {
            assert_eq!(place.width, 2048);
            let exact = place.width as f64 / ratio;
            assert!((place.height as f64 - exact).abs() < 1.0, "{w}x{h}: height {} vs {exact}", place.height);
        }
        assert_eq!(place.x * 2 + place.width + (2048 - place.width) % 2, 2048);
    }
}

#[test]
fn unusable_output_dir_fails_the_batch() {
    let dir = scratch_dir("blocked");
    let blocker = dir.join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let config = NormalizeConfig {
        input_dir: dir.clone(),
        output_dir: blocker.join("out"),
        ..NormalizeConfig::default()
    };
    assert!(normalize_batch(&config).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
