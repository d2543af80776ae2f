use std::{fs, path::Path};

use crate::{error::InstallError, services::fs::write_atomic};

/// File name of the read-only UI template inside the asset directory.
const TEMPLATE_FILE: &str = "template.html";
/// File name of the rendered UI entry point.
pub(crate) const ENTRY_FILE: &str = "index.html";
/// Placeholder token replaced with the description endpoint path.
const PLACEHOLDER: &str = "{{openapi}}";

/// Render the UI entry file from the bundled template.
///
/// Every occurrence of the placeholder token in `template.html` is replaced
/// with `description_path` and the result overwrites `index.html` in the same
/// directory. The substitution is plain text, a single token with no escaping
/// of the injected path. The entry file is rewritten on every call; readers
/// never observe a partial write.
pub(crate) fn render_entry(assets_dir: &Path, description_path: &str) -> Result<(), InstallError> {
    let template_path = assets_dir.join(TEMPLATE_FILE);
    let template =
        fs::read_to_string(&template_path).map_err(|source| InstallError::TemplateRead {
            path: template_path,
            source,
        })?;

    let rendered = template.replace(PLACEHOLDER, description_path);

    let entry_path = assets_dir.join(ENTRY_FILE);
    write_atomic(&entry_path, &rendered).map_err(|source| InstallError::EntryWrite {
        path: entry_path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn assets_with_template(template: &str) -> TempDir {
        let dir = TempDir::new().expect("create temp assets dir");
        fs::write(dir.path().join(TEMPLATE_FILE), template).expect("write template");
        dir
    }

    #[test]
    fn replaces_every_placeholder_occurrence() {
        let dir = assets_with_template("url: {{openapi}}; again: {{openapi}}");

        render_entry(dir.path(), "/spec").unwrap();

        let rendered = fs::read_to_string(dir.path().join(ENTRY_FILE)).unwrap();
        assert_eq!(rendered, "url: /spec; again: /spec");
        assert!(!rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn overwrites_previous_entry_file() {
        let dir = assets_with_template("{{openapi}}");

        render_entry(dir.path(), "/first").unwrap();
        render_entry(dir.path(), "/second").unwrap();

        let rendered = fs::read_to_string(dir.path().join(ENTRY_FILE)).unwrap();
        assert_eq!(rendered, "/second");
    }

    #[test]
    fn missing_template_is_a_read_error() {
        let dir = TempDir::new().unwrap();

        let err = render_entry(dir.path(), "/spec").unwrap_err();
        assert!(matches!(err, InstallError::TemplateRead { .. }));
    }

    #[test]
    fn template_without_placeholder_is_copied_verbatim() {
        let dir = assets_with_template("<html>static</html>");

        render_entry(dir.path(), "/spec").unwrap();

        let rendered = fs::read_to_string(dir.path().join(ENTRY_FILE)).unwrap();
        assert_eq!(rendered, "<html>static</html>");
    }
}
