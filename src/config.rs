//! Alacritty font autoscaling for peek.
//!
//! When a listing needs more rows than the terminal has, peek temporarily
//! shrinks the Alacritty font size so everything fits, and restores the
//! original when the process finishes ([FontScale] drop guard).
//!
//! The config file is edited textually with a targeted regex, so user
//! formatting and comments survive the round-trip. Every failure on this
//! path degrades to a no-op; the listing still prints, just clipped.

use once_cell::sync::Lazy;
use regex::Regex;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Smallest font size the autoscaler will go down to.
pub const MIN_FONT_SIZE: f64 = 7.0;

static FONT_SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^size\s*=\s*([0-9.]+)").expect("valid font size pattern"));

/// Path of the Alacritty config under the platform config directory, if one
/// exists on this machine.
pub fn alacritty_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("alacritty").join("alacritty.toml");
    path.is_file().then_some(path)
}

/// First `size = <n>` value in the config text, if any.
pub fn read_font_size(path: &Path) -> Option<f64> {
    let data = fs::read_to_string(path).ok()?;
    let caps = FONT_SIZE_RE.captures(&data)?;
    caps[1].parse().ok()
}

/// Rewrites the `size = <n>` lines in place, leaving the rest of the file
/// untouched.
pub fn write_font_size(path: &Path, size: f64) -> io::Result<()> {
    let data = fs::read_to_string(path)?;
    let updated = FONT_SIZE_RE.replace_all(&data, format!("size = {:.1}", size));
    fs::write(path, updated.as_bytes())
}

/// Shrunken size for a listing needing `needed` rows on a `height`-row
/// terminal. Scales proportionally, floored at [MIN_FONT_SIZE].
pub fn scaled_size(original: f64, height: usize, needed: usize) -> f64 {
    let scaled = original * height as f64 / needed as f64;
    scaled.max(MIN_FONT_SIZE)
}

/// Drop guard holding the shrunken font size for the lifetime of the render.
/// The original size is written back when the guard drops.
pub struct FontScale {
    path: PathBuf,
    original: f64,
}

impl FontScale {
    /// Shrinks the Alacritty font when `needed` rows exceed the terminal
    /// height. Returns None when the listing already fits, no config exists,
    /// the size cannot be read, or shrinking would not gain anything.
    pub fn engage(needed: usize, height: usize) -> Option<FontScale> {
        if needed <= height {
            return None;
        }
        let path = alacritty_config_path()?;
        Self::engage_at(&path, needed, height)
    }

    /// [FontScale::engage] against an explicit config path. Does not check
    /// whether the listing fits; the caller already has.
    pub fn engage_at(path: &Path, needed: usize, height: usize) -> Option<FontScale> {
        let original = read_font_size(path)?;
        if original <= 0.0 {
            return None;
        }
        let scaled = scaled_size(original, height, needed);
        if scaled >= original {
            return None;
        }
        write_font_size(path, scaled).ok()?;
        Some(FontScale {
            path: path.to_path_buf(),
            original,
        })
    }
}

impl Drop for FontScale {
    fn drop(&mut self) {
        let _ = write_font_size(&self.path, self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
# my terminal setup
[window]
opacity = 0.9

[font]
size = 14.0
normal = { family = \"JetBrainsMono\" }
";

    fn sample_config(tmp: &TempDir) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = tmp.path().join("alacritty.toml");
        fs::write(&path, SAMPLE)?;
        Ok(path)
    }

    #[test]
    fn font_size_round_trip_preserves_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let cfg = sample_config(&tmp)?;

        assert_eq!(read_font_size(&cfg), Some(14.0));

        write_font_size(&cfg, 8.5)?;
        let data = fs::read_to_string(&cfg)?;
        assert!(data.contains("size = 8.5"));
        assert!(data.contains("# my terminal setup"));
        assert!(data.contains("opacity = 0.9"));
        assert!(data.contains("JetBrainsMono"));
        Ok(())
    }

    #[test]
    fn read_missing_size_is_none() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let cfg = tmp.path().join("alacritty.toml");
        fs::write(&cfg, "[window]\nopacity = 0.9\n")?;
        assert_eq!(read_font_size(&cfg), None);
        Ok(())
    }

    #[test]
    fn scaled_size_floors_at_minimum() {
        assert_eq!(scaled_size(14.0, 10, 100), MIN_FONT_SIZE);
        assert_eq!(scaled_size(12.0, 30, 40), 9.0);
    }

    #[test]
    fn engage_shrinks_and_restores_on_drop() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let cfg = sample_config(&tmp)?;

        let guard = FontScale::engage_at(&cfg, 100, 50).ok_or("guard not engaged")?;
        assert_eq!(read_font_size(&cfg), Some(7.0));

        drop(guard);
        assert_eq!(read_font_size(&cfg), Some(14.0));
        Ok(())
    }

    #[test]
    fn engage_skips_when_shrinking_gains_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let cfg = tmp.path().join("alacritty.toml");
        // Already at the floor, scaling would only go up
        fs::write(&cfg, "[font]\nsize = 7.0\n")?;

        assert!(FontScale::engage_at(&cfg, 100, 50).is_none());
        assert_eq!(read_font_size(&cfg), Some(7.0));
        Ok(())
    }

    #[test]
    fn engage_without_config_is_none() {
        assert!(FontScale::engage_at(Path::new("/no/such/alacritty.toml"), 100, 50).is_none());
    }
}
