//! Directory scanning logic for peek.
//!
//! Provides the [Entry] struct which is used throughout peek.
//! [scan_dir] reads a single directory level, classifies each entry and,
//! for directories, counts their immediate children.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Represents a single entry in a directory listing.
/// Holds the name, type flags, byte size, extension, and for directories the
/// immediate child counts shown in the subtitle line.
/// Created and populated by the [scan_dir] function.
#[derive(Debug, Clone)]
pub struct Entry {
    name: Box<OsStr>,
    flags: u8,
    size: u64,
    ext: Option<Box<str>>,
    sub_dirs: usize,
    sub_files: usize,
}

impl Entry {
    // Flag bit definitions
    // These are used to set and check attributes in the flags field
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_HIDDEN: u8 = 1 << 1;
    pub const IS_SYMLINK: u8 = 1 << 2;

    pub fn new(name: OsString, flags: u8, size: u64, ext: Option<String>) -> Self {
        Entry {
            name: name.into_boxed_os_str(),
            flags,
            size,
            ext: ext.map(String::into_boxed_str),
            sub_dirs: 0,
            sub_files: 0,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn sub_dirs(&self) -> usize {
        self.sub_dirs
    }

    #[inline]
    pub fn sub_files(&self) -> usize {
        self.sub_files
    }
}

#[inline]
fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Reads the contents of the provided directory and returns them as a vector
/// of [Entry].
///
/// Hidden entries (leading dot) are skipped unless `show_hidden`. Symlinks
/// are followed to decide the dir/file classification; a broken symlink stays
/// classified as a file. Entries whose metadata cannot be read are skipped
/// silently. Child counts are only collected when `count_children` is set,
/// since the files-only view never shows them.
///
/// # Returns
/// A Result containing a vector of [Entry] structs, or the std::io::Error
/// from opening the target directory itself.
pub fn scan_dir(path: &Path, show_hidden: bool, count_children: bool) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(256);

    for dirent in fs::read_dir(path)? {
        let dirent = match dirent {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = dirent.file_name();
        let hidden = is_hidden_name(&name);
        if hidden && !show_hidden {
            continue;
        }

        let ft = match dirent.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };
        // No-follow metadata, so a symlink's size is the link's own.
        let md = match dirent.metadata() {
            Ok(md) => md,
            Err(_) => continue,
        };

        let mut flags = 0u8;
        if hidden {
            flags |= Entry::IS_HIDDEN;
        }
        if ft.is_dir() {
            flags |= Entry::IS_DIR;
        }
        if ft.is_symlink() {
            flags |= Entry::IS_SYMLINK;
            if let Ok(target_md) = fs::metadata(dirent.path())
                && target_md.is_dir()
            {
                flags |= Entry::IS_DIR;
            }
        }

        let is_dir = flags & Entry::IS_DIR != 0;
        let ext = if is_dir {
            None
        } else {
            Path::new(&name)
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
        };

        let mut entry = Entry::new(name, flags, md.len(), ext);
        if is_dir && count_children {
            count_sub_entries(&dirent.path(), show_hidden, &mut entry);
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Counts the immediate children of a directory, honoring the hidden filter.
/// An unreadable directory keeps zero counts and renders as "empty".
fn count_sub_entries(path: &Path, show_hidden: bool, entry: &mut Entry) {
    let Ok(read) = fs::read_dir(path) else {
        return;
    };
    for sub in read.flatten() {
        if !show_hidden && is_hidden_name(&sub.file_name()) {
            continue;
        }
        match sub.file_type() {
            Ok(ft) if ft.is_dir() => entry.sub_dirs += 1,
            Ok(_) => entry.sub_files += 1,
            Err(_) => {}
        }
    }
}
