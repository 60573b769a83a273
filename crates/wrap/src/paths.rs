//! Output path derivation.
//!
//! Pure string functions; nothing here touches the build graph.

use serde::Serialize;

/// Files derived from one `.fl` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPair {
    /// `<output_dir>/<stem>`, shared prefix of both outputs.
    pub base_name: String,
    /// Generated header, `<base_name>.h`.
    pub header_path: String,
    /// Generated implementation, `<base_name>.cxx`.
    pub impl_path: String,
    /// The input file, `<source_dir>/<source>`.
    pub original_path: String,
}

impl GeneratedPair {
    /// Derive every path for `source` (as given by the caller, relative to `source_dir`).
    #[must_use]
    pub fn for_source(output_dir: &str, source_dir: &str, source: &str) -> Self {
        let (base_name, header_path, impl_path) =
            derive_output_paths(output_dir, filename_without_extension(source));
        Self {
            base_name,
            header_path,
            impl_path,
            original_path: format!("{source_dir}/{source}"),
        }
    }

    /// Both outputs, implementation first.
    #[must_use]
    pub fn outputs(&self) -> [&str; 2] {
        [&self.impl_path, &self.header_path]
    }
}

/// Return `(base_name, header, implementation)` for a stem in `output_dir`.
#[must_use]
pub fn derive_output_paths(output_dir: &str, stem: &str) -> (String, String, String) {
    let base_name = format!("{output_dir}/{stem}");
    let header = format!("{base_name}.h");
    let implementation = format!("{base_name}.cxx");
    (base_name, header, implementation)
}

/// File name without directory and without any extension.
///
/// Everything from the first `.` of the file name is dropped, so
/// `forms/main.ui.fl` yields `main`.
#[must_use]
pub fn filename_without_extension(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    name.find('.').map_or(name, |dot| &name[..dot])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_without_extension() {
        assert_eq!(filename_without_extension("win.fl"), "win");
        assert_eq!(filename_without_extension("forms/dlg.fl"), "dlg");
        assert_eq!(filename_without_extension("forms\\dlg.fl"), "dlg");
        assert_eq!(filename_without_extension("a/b/main.ui.fl"), "main");
        assert_eq!(filename_without_extension("noext"), "noext");
        assert_eq!(filename_without_extension(".hidden"), "");
    }

    #[test]
    fn test_derive_output_paths() {
        let (base, header, implementation) = derive_output_paths("/build/gui", "win");
        assert_eq!(base, "/build/gui/win");
        assert_eq!(header, "/build/gui/win.h");
        assert_eq!(implementation, "/build/gui/win.cxx");
    }

    #[test]
    fn test_generated_pair_for_nested_source() {
        let pair = GeneratedPair::for_source("/build/gui", "/src", "forms/dlg.fl");
        assert_eq!(pair.base_name, "/build/gui/dlg");
        assert_eq!(pair.header_path, "/build/gui/dlg.h");
        assert_eq!(pair.impl_path, "/build/gui/dlg.cxx");
        assert_eq!(pair.original_path, "/src/forms/dlg.fl");
        assert_eq!(pair.outputs(), ["/build/gui/dlg.cxx", "/build/gui/dlg.h"]);
    }
}
