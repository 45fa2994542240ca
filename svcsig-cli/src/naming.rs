//! Правила имён выходных файлов.
//!
//! Имя строится из ячеек памяти сканов:
//! `[<base>__]<target>[_<reference>].sig`, либо `<reference>.sig` при
//! выборе только опорного скана.

use std::path::{Path, PathBuf};

use svcsig_core::SIG_EXTENSION;

use crate::config::SlotSelection;

/// Расширение фотографии, сопровождающей скан.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Имя без каталога: `[<base>__]<target>[_<reference>].sig`.
pub fn rename_file_name(
    base_name: Option<&str>,
    (reference, target): (u32, u32),
    slots: SlotSelection,
) -> String {
    let mut name = String::new();

    if let Some(base) = base_name {
        name.push_str(base);
        name.push_str("__");
    }

    match slots {
        SlotSelection::Both => name.push_str(&format!("{target}_{reference}")),
        SlotSelection::TargetOnly => name.push_str(&target.to_string()),
        SlotSelection::ReferenceOnly => name.push_str(&reference.to_string()),
    }

    name.push('.');
    name.push_str(SIG_EXTENSION);
    name
}

/// Путь нового имени рядом с исходным файлом.
pub fn rename_destination(
    input: &Path,
    slots_of_record: (u32, u32),
    slots: SlotSelection,
    append_base_name: bool,
) -> PathBuf {
    let base = if append_base_name {
        Some(base_name(input))
    } else {
        None
    };

    let file_name = rename_file_name(base.as_deref(), slots_of_record, slots);
    input.with_file_name(file_name)
}

/// Имя пересохранённого файла: `<reference>_<target>.sig`.
pub fn copy_file_name((reference, target): (u32, u32)) -> String {
    format!("{reference}_{target}.{SIG_EXTENSION}")
}

/// Имя файла без последнего расширения.
pub fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Путь фотографии: `<path>.jpg` (расширение добавляется, не заменяется).
pub fn image_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".");
    s.push(IMAGE_EXTENSION);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOTS: (u32, u32) = (10, 11);

    #[test]
    fn test_rename_file_name_all_flags() {
        assert_eq!(rename_file_name(None, SLOTS, SlotSelection::Both), "11_10.sig");
        assert_eq!(rename_file_name(None, SLOTS, SlotSelection::TargetOnly), "11.sig");
        assert_eq!(rename_file_name(None, SLOTS, SlotSelection::ReferenceOnly), "10.sig");

        let base = Some("gr062113_000");
        assert_eq!(
            rename_file_name(base, SLOTS, SlotSelection::Both),
            "gr062113_000__11_10.sig"
        );
        assert_eq!(
            rename_file_name(base, SLOTS, SlotSelection::TargetOnly),
            "gr062113_000__11.sig"
        );
        assert_eq!(
            rename_file_name(base, SLOTS, SlotSelection::ReferenceOnly),
            "gr062113_000__10.sig"
        );
    }

    #[test]
    fn test_rename_destination_keeps_directory() {
        let input = Path::new("/data/2013/gr062113_000.sig");

        assert_eq!(
            rename_destination(input, SLOTS, SlotSelection::Both, false),
            PathBuf::from("/data/2013/11_10.sig")
        );
        assert_eq!(
            rename_destination(input, SLOTS, SlotSelection::Both, true),
            PathBuf::from("/data/2013/gr062113_000__11_10.sig")
        );
        assert_eq!(
            rename_destination(Path::new("scan.sig"), SLOTS, SlotSelection::TargetOnly, false),
            PathBuf::from("11.sig")
        );
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("dir/a.b.sig")), "a.b");
        assert_eq!(base_name(Path::new("noext")), "noext");
    }

    #[test]
    fn test_copy_file_name() {
        assert_eq!(copy_file_name(SLOTS), "10_11.sig");
    }

    #[test]
    fn test_image_path_appends() {
        assert_eq!(
            image_path(Path::new("/data/11_10.sig")),
            PathBuf::from("/data/11_10.sig.jpg")
        );
    }
}
