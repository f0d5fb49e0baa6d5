use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use storeshots::rendering::raster::rasterize;
use storeshots::rendering::{Color, DisplayList, PaintCommand, Rect, TextStyle};
use storeshots::{render_screen, DeviceProfile, FontBook, Screen};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn update_goldens() -> bool {
    std::env::var("UPDATE_GOLDENS").is_ok()
}

fn write_golden(path: &PathBuf, contents: &str) {
    fs::create_dir_all("tests/goldens/expected").ok();
    fs::write(path, contents).expect("write golden");
    println!("Updated golden: {:?}", path);
}

/// Pixel-aligned shapes and bitmap text, so every pixel is fully covered or untouched
fn primitives() -> DisplayList {
    let mut list = DisplayList::new(24, 12, Color::rgb(242, 242, 247));
    list.push(PaintCommand::SolidRect { rect: Rect::new(0, 0, 4, 4), color: Color::rgb(255, 59, 48) });
    list.push(PaintCommand::SolidRect { rect: Rect::new(16, 2, 6, 5), color: Color::rgb(0, 122, 255) });
    list.push(PaintCommand::HLine { x0: 0, x1: 24, y: 11, width: 1, color: Color::rgb(200, 200, 200) });
    list.push(PaintCommand::Text {
        x: 6,
        y: 2,
        text: "H".into(),
        style: TextStyle::regular(8),
        color: Color::rgb(28, 28, 30),
        extent: Rect::new(6, 2, 6, 8),
    });
    list
}

#[test]
fn golden_primitives_match_digest() {
    let img = rasterize(&primitives(), &FontBook::builtin()).expect("rasterize");
    let digest = hex::encode(Sha256::digest(img.as_raw()));

    let expected_path = golden_path("primitives_24x12.sha256");
    if update_goldens() {
        write_golden(&expected_path, &format!("{}\n", digest));
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
    assert_eq!(hex::decode(&digest).expect("digest is hex"), exp_bytes);
}

#[test]
fn golden_settings_text_layout() {
    let device = DeviceProfile::new(430, 932, 1.0, "logical");
    let list = Screen::Settings.layout(&device, &FontBook::builtin());
    let got: String = list
        .texts()
        .map(|(text, r)| format!("{} {} {} {} {}\n", r.x, r.y, r.width, r.height, text))
        .collect();

    let expected_path = golden_path("settings_430x932.texts");
    if update_goldens() {
        write_golden(&expected_path, &got);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    for (line, (g, e)) in got.lines().zip(exp.lines()).enumerate() {
        assert_eq!(g, e, "line {}", line + 1);
    }
    assert_eq!(got.lines().count(), exp.lines().count());
}

#[test]
fn golden_screens_match_digests() {
    // PNG digests also depend on anti-aliasing and the encoder, so they are recorded per toolchain
    let device = DeviceProfile::new(430, 932, 1.0, "logical");
    let fonts = FontBook::builtin();

    for screen in Screen::ALL {
        let shot = render_screen(&device, screen, &fonts).expect("render");
        let expected_path = golden_path(&format!("{}.sha256", screen));

        if update_goldens() {
            write_golden(&expected_path, &shot.digest());
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
        let got = hex::decode(shot.digest()).expect("digest is hex");
        assert_eq!(got, exp_bytes, "{} drifted from its golden", screen);
    }
}

#[test]
fn rendering_is_deterministic() {
    let device = DeviceProfile::new(430, 932, 1.0, "logical");
    let fonts = FontBook::builtin();
    let a = render_screen(&device, Screen::Settings, &fonts).expect("render");
    let b = render_screen(&device, Screen::Settings, &fonts).expect("render");
    assert_eq!(a.digest(), b.digest());
}
