//! Rendering of generated TypeScript modules.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A generated module exporting a single JSON constant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedModule {
    /// Name of the exported constant.
    pub export_name: String,

    /// Compact JSON text of the exported value.
    pub json: String,
}

impl GeneratedModule {
    /// Serializes a value into a module exporting it as `export_name`.
    pub fn new(export_name: impl Into<String>, value: &impl Serialize) -> serde_json::Result<Self> {
        Ok(GeneratedModule {
            export_name: export_name.into(),
            json: serde_json::to_string(value)?,
        })
    }

    /// Returns the module source: `export const <name> = <json>`.
    pub fn source(&self) -> String {
        render_export(&self.export_name, &self.json)
    }

    /// Writes the module source to a given `Write`.
    pub fn write(&self, mut w: impl Write) -> io::Result<()> {
        w.write_all(self.source().as_bytes())?;
        w.flush()
    }

    /// Writes the module source to the specified file, replacing it if it
    /// exists and creating missing parent directories.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }
}

/// Renders a TypeScript statement exporting JSON text under a name.
pub fn render_export(export_name: &str, json: &str) -> String {
    format!("export const {} = {}", export_name, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_compact_json() {
        let module = GeneratedModule::new("abis", &json!({ "Foo": [] })).unwrap();
        assert_eq!(module.source(), r#"export const abis = {"Foo":[]}"#);
    }

    #[test]
    fn empty_mapping() {
        let module = GeneratedModule::new(
            "deployments",
            &indexmap::IndexMap::<String, Vec<String>>::new(),
        )
        .unwrap();
        assert_eq!(module.source(), "export const deployments = {}");
    }

    #[test]
    fn writes_into_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated").join("abi.ts");

        let module = GeneratedModule::new("abis", &json!({})).unwrap();
        module.write_to_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export const abis = {}");

        // later runs overwrite
        let module = GeneratedModule::new("abis", &json!({ "A": null })).unwrap();
        module.write_to_file(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"export const abis = {"A":null}"#,
        );
    }
}
