#![no_main]

use std::path::{Path, PathBuf};

use assetbake::domain::ports::{FileSystem, FsError, FsResult, ManifestRepository};
use assetbake::infrastructure::JsonManifestRepository;
use libfuzzer_sys::fuzz_target;

/// Serves one fixed document as the manifest file
struct OneFile(String);

impl FileSystem for OneFile {
    fn read_bytes(&self, _path: &Path) -> FsResult<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }

    fn read(&self, _path: &Path) -> FsResult<String> {
        Ok(self.0.clone())
    }

    fn write(&self, _path: &Path, _content: &str) -> FsResult<()> {
        Err(FsError::Other("read-only".to_string()))
    }

    fn exists(&self, _path: &Path) -> bool {
        true
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn list_files(&self, _dir: &Path) -> FsResult<Vec<PathBuf>> {
        Ok(vec![PathBuf::from("hashes.json")])
    }

    fn remove(&self, _path: &Path) -> FsResult<()> {
        Err(FsError::Other("read-only".to_string()))
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Corrupt manifests must surface as errors, never panics
        let repo = JsonManifestRepository::with_fs(OneFile(content.to_string()));
        let _ = repo.load(Path::new("hashes.json"));
    }
});
