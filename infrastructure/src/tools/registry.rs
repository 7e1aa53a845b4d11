//! Built-in tool registry
//!
//! | Key | Executable | Package |
//! |-----|------------|---------|
//! | `exiftool` | `exiftool` | `exiftool` |
//! | `file` | `file` | `file` |
//! | `strings` | `strings` | `binutils` |
//! | `xxd` | `xxd` | `xxd` |
//! | `binwalk` | `binwalk` | `binwalk` |
//! | `bulk_extractor` | `bulk_extractor` | `bulk-extractor` |
//! | `pdfinfo` | `pdfinfo` | `poppler-utils` |
//! | `identify` | `identify` | `imagemagick` |

use launcher_domain::{ToolEntry, ToolRegistry};

/// Create the default registry of forensic inspection tools
pub fn default_tool_registry() -> ToolRegistry {
    ToolRegistry::new()
        .register(
            ToolEntry::new("exiftool", "Read and write file metadata.")
                .with_help_args(["-h"])
                .with_example("forensic-launcher -t exiftool photo.jpg -- -gps:all -n")
                .with_example("forensic-launcher -t exiftool document.pdf -- -a -u"),
        )
        .register(
            ToolEntry::new("file", "Quick file type identification.")
                .with_example("forensic-launcher -t file sample.bin"),
        )
        .register(
            ToolEntry::new("strings", "Extract printable strings.")
                .with_package("binutils")
                .with_example("forensic-launcher -t strings malware.bin -- -n 8"),
        )
        .register(
            ToolEntry::new("xxd", "Hexadecimal dump.")
                .with_example("forensic-launcher -t xxd sample.bin -- -c 32 -p")
                .with_example("forensic-launcher -t xxd image.bin -- -g 4"),
        )
        .register(
            ToolEntry::new("binwalk", "Firmware and binary image analysis.")
                .with_example("forensic-launcher -t binwalk firmware.bin -- -e"),
        )
        .register(
            ToolEntry::new("bulk_extractor", "Bulk extraction of forensic artifacts.")
                .with_package("bulk-extractor")
                .with_example("forensic-launcher -t bulk_extractor disk.dd"),
        )
        .register(
            ToolEntry::new("pdfinfo", "PDF document information.")
                .with_package("poppler-utils")
                .with_help_args(["-h"])
                .with_example("forensic-launcher -t pdfinfo report.pdf"),
        )
        .register(
            ToolEntry::new("identify", "Image identification (ImageMagick).")
                .with_package("imagemagick")
                .with_example("forensic-launcher -t identify photo.png"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = default_tool_registry();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(
            keys,
            vec![
                "exiftool",
                "file",
                "strings",
                "xxd",
                "binwalk",
                "bulk_extractor",
                "pdfinfo",
                "identify"
            ]
        );
    }

    #[test]
    fn test_packages_differ_from_commands_where_needed() {
        let registry = default_tool_registry();
        assert_eq!(registry.get("strings").unwrap().package, "binutils");
        assert_eq!(registry.get("pdfinfo").unwrap().package, "poppler-utils");
        assert_eq!(registry.get("bulk_extractor").unwrap().package, "bulk-extractor");
        assert_eq!(registry.get("identify").unwrap().command, "identify");
    }

    #[test]
    fn test_every_tool_has_description_and_example() {
        for entry in default_tool_registry().entries() {
            assert!(!entry.description.is_empty(), "{}", entry.key);
            assert!(!entry.examples.is_empty(), "{}", entry.key);
            assert!(!entry.help_args.is_empty(), "{}", entry.key);
        }
    }
}
