use anyhow::{Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use super::resolve_backend;
use crate::api::{ApiClient, UploadOutcome};
use crate::auth::SessionStore;
use crate::ui::{Spinner, Style};

/// Message shown when the upload request itself fails.
pub const UPLOAD_FALLBACK: &str = "Error uploading file.";

/// Extensions the backend can ingest (the web client's file picker
/// accepted the same two).
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

const MAX_UPLOAD_SIZE: u64 = 20 * 1024 * 1024; // 20MB

pub struct UploadOptions {
    pub endpoint: Option<String>,
    pub file: PathBuf,
}

/// Uploads a document from the command line. Requires an admin session.
pub async fn run_upload(options: UploadOptions) -> Result<()> {
    let store = SessionStore::new();
    let Some(identity) = store.load()? else {
        bail!(
            "Not logged in.\n\n\
             Run 'chatbox login' first."
        );
    };

    if !identity.is_admin() {
        bail!("Document upload requires the admin role.");
    }

    let config = resolve_backend(options.endpoint)?;
    let client = ApiClient::new(config.backend_url);

    upload_document(&client, &options.file).await
}

/// Validates the file, sends it, and prints the server's verdict.
///
/// Returns an error only for client-side problems (missing file, wrong
/// extension, oversized). Server rejections and transport failures are
/// printed, matching the web client's alert behavior.
pub async fn upload_document(client: &ApiClient, path: &Path) -> Result<()> {
    check_upload_file(path)?;

    let spinner = Spinner::new("Uploading...");
    let outcome = client.upload(path).await;
    spinner.stop();

    match outcome {
        Ok(UploadOutcome::Accepted(message)) => {
            println!("{}", Style::success(&message));
        }
        Ok(UploadOutcome::Rejected(error)) => {
            println!("{}", Style::error(&error));
        }
        Err(_) => {
            println!("{}", Style::error(UPLOAD_FALLBACK));
        }
    }

    Ok(())
}

fn check_upload_file(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(_) => bail!("File not found: {}", path.display()),
    };

    if !metadata.is_file() {
        bail!("Not a file: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if !extension
        .as_deref()
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e))
    {
        bail!(
            "Unsupported file type: {}\n\n\
             Supported types: .pdf, .docx",
            path.display()
        );
    }

    if metadata.len() > MAX_UPLOAD_SIZE {
        bail!(
            "File size ({:.1} MB) exceeds maximum allowed size (20 MB).",
            metadata.len() as f64 / 1024.0 / 1024.0
        );
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_missing_file() {
        let result = check_upload_file(Path::new("/nonexistent/manual.pdf"));
        assert!(result.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_check_rejects_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let result = check_upload_file(&path);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unsupported file type")
        );
    }

    #[test]
    fn test_check_accepts_pdf_and_docx() {
        let temp_dir = TempDir::new().unwrap();

        for name in ["manual.pdf", "manual.docx", "MANUAL.PDF"] {
            let path = temp_dir.path().join(name);
            fs::write(&path, "content").unwrap();
            assert!(check_upload_file(&path).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn test_check_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs.pdf");
        fs::create_dir(&path).unwrap();

        assert!(check_upload_file(&path).is_err());
    }

    #[test]
    fn test_check_rejects_oversized_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.pdf");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_SIZE + 1).unwrap();

        let result = check_upload_file(&path);
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }
}
