use std::path::PathBuf;

use storeshots::platform::{
    ConfiguredFontResolver, FontResolver, FontStyle, NoFontResolver, SystemFontResolver,
};
use storeshots::rendering::TextStyle;
use storeshots::{FontBook, GeneratorConfig};

#[test]
fn unresolvable_fonts_fall_back_to_bitmap() {
    let book = FontBook::load(&NoFontResolver);
    assert!(book.is_builtin());
    let m = book.measure("9:41", TextStyle::bold(42));
    assert!(m.width > 0 && m.height > 0);
}

#[test]
fn missing_configured_paths_defer_to_the_inner_resolver() {
    let resolver = ConfiguredFontResolver::new(
        Some(PathBuf::from("/definitely/not/here.ttf")),
        None,
        NoFontResolver,
    );
    assert!(resolver.resolve(FontStyle::Regular).is_none());
    assert!(resolver.resolve(FontStyle::Bold).is_none());
}

#[test]
fn system_fonts_load_when_present() {
    let Some(location) = SystemFontResolver::new().resolve(FontStyle::Regular) else {
        println!("no system font found; skipping");
        return;
    };
    assert!(location.path.exists());

    let book = FontBook::load(&GeneratorConfig::default().font_resolver());
    let m = book.measure("Status", TextStyle::bold(102));
    assert!(m.width > 0);
    assert!(m.ink_height() > 0);
}
