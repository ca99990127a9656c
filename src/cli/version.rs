//! # Version Command
//!
//! Prints the plugin version and the build information embedded by `build.rs`.

use std::io::Write;

use crate::printers::PrefixWriter;

/// Print version, build date and git revision
pub fn version_command(out: &mut dyn Write) -> std::io::Result<()> {
    let mut dw = PrefixWriter::new(out);
    dw.write_attribute("Version", env!("CARGO_PKG_VERSION"));
    dw.write_attribute("Build Date", env!("BUILD_DATETIME"));
    dw.write_attribute("Git Revision", env!("BUILD_GIT_HASH"));
    dw.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output_lists_build_info() {
        let mut out = Vec::new();
        version_command(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&format!("Version:       {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("Build Date:"));
        assert!(text.contains("Git Revision:"));
    }
}
