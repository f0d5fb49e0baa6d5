/// Font file resolution
///
/// Rendering never hardcodes font paths. It asks a `FontResolver` for a
/// readable file for a style; a resolver that finds nothing makes the text
/// layer fall back to the embedded bitmap font.

use std::path::{Path, PathBuf};

/// Weight requested by the layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// A font file plus the face index inside it (non-zero only for collections)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLocation {
    pub path: PathBuf,
    pub index: u32,
}

impl FontLocation {
    pub fn new(path: impl Into<PathBuf>, index: u32) -> Self {
        Self { path: path.into(), index }
    }
}

pub trait FontResolver {
    /// Return a readable font file for `style`, if any
    fn resolve(&self, style: FontStyle) -> Option<FontLocation>;
}

fn is_readable(path: &Path) -> bool {
    std::fs::File::open(path).map(|_| path.is_file()).unwrap_or(false)
}

#[cfg(target_os = "windows")]
const REGULAR_CANDIDATES: &[(&str, u32)] = &[
    ("C:/Windows/Fonts/segoeui.ttf", 0),
    ("C:/Windows/Fonts/arial.ttf", 0),
];
#[cfg(target_os = "windows")]
const BOLD_CANDIDATES: &[(&str, u32)] = &[
    ("C:/Windows/Fonts/segoeuib.ttf", 0),
    ("C:/Windows/Fonts/arialbd.ttf", 0),
];

#[cfg(target_os = "macos")]
const REGULAR_CANDIDATES: &[(&str, u32)] = &[
    ("/System/Library/Fonts/Helvetica.ttc", 0),
    ("/System/Library/Fonts/SFPro.ttf", 0),
    ("/Library/Fonts/Arial.ttf", 0),
];
#[cfg(target_os = "macos")]
const BOLD_CANDIDATES: &[(&str, u32)] = &[
    ("/System/Library/Fonts/Helvetica.ttc", 1),
    ("/Library/Fonts/Arial Bold.ttf", 0),
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const REGULAR_CANDIDATES: &[(&str, u32)] = &[
    ("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", 0),
    ("/usr/share/fonts/TTF/DejaVuSans.ttf", 0),
    ("/usr/share/fonts/dejavu/DejaVuSans.ttf", 0),
    ("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf", 0),
    ("/usr/share/fonts/liberation/LiberationSans-Regular.ttf", 0),
    ("/usr/share/fonts/noto/NotoSans-Regular.ttf", 0),
];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const BOLD_CANDIDATES: &[(&str, u32)] = &[
    ("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", 0),
    ("/usr/share/fonts/TTF/DejaVuSans-Bold.ttf", 0),
    ("/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf", 0),
    ("/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf", 0),
    ("/usr/share/fonts/liberation/LiberationSans-Bold.ttf", 0),
    ("/usr/share/fonts/noto/NotoSans-Bold.ttf", 0),
];

/// Searches the usual system font locations of the host platform.
///
/// Bold lookups fall back to the regular candidates so a host with a single
/// sans face still renders outline text everywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFontResolver;

impl SystemFontResolver {
    pub fn new() -> Self {
        SystemFontResolver
    }

    fn candidates(style: FontStyle) -> impl Iterator<Item = &'static (&'static str, u32)> {
        let bold: &'static [(&'static str, u32)] = match style {
            FontStyle::Bold => BOLD_CANDIDATES,
            FontStyle::Regular => &[],
        };
        bold.iter().chain(REGULAR_CANDIDATES.iter())
    }
}

impl FontResolver for SystemFontResolver {
    fn resolve(&self, style: FontStyle) -> Option<FontLocation> {
        Self::candidates(style)
            .find(|(path, _)| is_readable(Path::new(path)))
            .map(|(path, index)| FontLocation::new(*path, *index))
    }
}

/// Explicit files from configuration, consulted before an inner resolver
pub struct ConfiguredFontResolver<R> {
    regular: Option<PathBuf>,
    bold: Option<PathBuf>,
    inner: R,
}

impl<R: FontResolver> ConfiguredFontResolver<R> {
    pub fn new(regular: Option<PathBuf>, bold: Option<PathBuf>, inner: R) -> Self {
        Self { regular, bold, inner }
    }
}

impl<R: FontResolver> FontResolver for ConfiguredFontResolver<R> {
    fn resolve(&self, style: FontStyle) -> Option<FontLocation> {
        let explicit = match style {
            FontStyle::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontStyle::Regular => self.regular.as_ref(),
        };
        if let Some(path) = explicit {
            if is_readable(path) {
                return Some(FontLocation::new(path.clone(), 0));
            }
            log::warn!("configured font {} is not readable, searching system fonts", path.display());
        }
        self.inner.resolve(style)
    }
}

/// Never resolves anything; forces the embedded bitmap font
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFontResolver;

impl FontResolver for NoFontResolver {
    fn resolve(&self, _style: FontStyle) -> Option<FontLocation> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_resolver_never_finds_fonts() {
        assert_eq!(NoFontResolver.resolve(FontStyle::Regular), None);
        assert_eq!(NoFontResolver.resolve(FontStyle::Bold), None);
    }

    #[test]
    fn bold_candidates_fall_back_to_regular() {
        let bold: Vec<_> = SystemFontResolver::candidates(FontStyle::Bold).collect();
        let regular: Vec<_> = SystemFontResolver::candidates(FontStyle::Regular).collect();
        assert!(bold.len() > regular.len());
        assert_eq!(&bold[bold.len() - regular.len()..], &regular[..]);
    }

    #[test]
    fn configured_path_wins_when_readable() {
        let dir = std::env::temp_dir().join(format!("storeshots-fonts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("fake.ttf");
        std::fs::write(&file, b"not really a font").unwrap();

        let r = ConfiguredFontResolver::new(Some(file.clone()), None, NoFontResolver);
        assert_eq!(r.resolve(FontStyle::Regular), Some(FontLocation::new(file.clone(), 0)));
        // bold borrows the regular file when no bold file is configured
        assert_eq!(r.resolve(FontStyle::Bold), Some(FontLocation::new(file, 0)));

        let missing = ConfiguredFontResolver::new(Some(dir.join("missing.ttf")), None, NoFontResolver);
        assert_eq!(missing.resolve(FontStyle::Regular), None);

        std::fs::remove_dir_all(&dir).ok();
    }
}
