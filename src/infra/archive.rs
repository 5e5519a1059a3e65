// ============================================================
// Layer 6 — Archive Extraction
// ============================================================
// Unpacks a downloaded corpus archive into the data directory.
//
// Supported formats (picked from the file name):
//   .tar.gz / .tgz  → gzip-decoded, then untarred
//   .tar            → untarred directly
//
// Entries are unpacked relative to the target directory, so
// aclImdb_v1.tar.gz extracted into data/ produces data/aclImdb/.
// tar::Archive::unpack refuses entries that would escape the
// target directory ("../" paths).

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::infra::error::{FetchError, FetchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    Tar,
}

impl ArchiveKind {
    /// Detect the archive type from the file name, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else if name.ends_with(".tar") {
            Some(ArchiveKind::Tar)
        } else {
            None
        }
    }
}

/// Extract `archive` into `into`.
pub fn extract(archive: &Path, into: &Path) -> FetchResult<()> {
    let kind = ArchiveKind::from_path(archive).ok_or_else(|| FetchError::UnsupportedArchive {
        path: archive.to_path_buf(),
    })?;

    let file = File::open(archive).map_err(|source| FetchError::Io {
        path: archive.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    tracing::info!("Extracting '{}' into '{}'", archive.display(), into.display());

    match kind {
        ArchiveKind::TarGz => unpack(GzDecoder::new(reader), archive, into),
        ArchiveKind::Tar   => unpack(reader, archive, into),
    }
}

fn unpack<R: Read>(reader: R, archive: &Path, into: &Path) -> FetchResult<()> {
    Archive::new(reader)
        .unpack(into)
        .map_err(|source| FetchError::Extract {
            archive: archive.to_path_buf(),
            source,
        })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::fs;
    use tempfile::TempDir;

    /// Build a .tar.gz holding `files` (path, content) in memory.
    fn tar_gz(files: &[(&str, &str)]) -> Vec<u8> {
        let enc         = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(enc);
        for (path, content) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, content.as_bytes()).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_detects_kind() {
        assert_eq!(ArchiveKind::from_path(Path::new("a/aclImdb_v1.tar.gz")), Some(ArchiveKind::TarGz));
        assert_eq!(ArchiveKind::from_path(Path::new("x.TGZ")), Some(ArchiveKind::TarGz));
        assert_eq!(ArchiveKind::from_path(Path::new("x.tar")), Some(ArchiveKind::Tar));
        assert_eq!(ArchiveKind::from_path(Path::new("x.zip")), None);
    }

    #[test]
    fn test_extracts_tar_gz() {
        let tmp     = TempDir::new().unwrap();
        let archive = tmp.path().join("corpus.tar.gz");
        fs::write(
            &archive,
            tar_gz(&[("aclImdb/README", "readme"), ("aclImdb/train/pos/0.txt", "great movie\n")]),
        )
        .unwrap();

        extract(&archive, tmp.path()).unwrap();

        assert!(tmp.path().join("aclImdb/README").exists());
        let text = fs::read_to_string(tmp.path().join("aclImdb/train/pos/0.txt")).unwrap();
        assert_eq!(text, "great movie\n");
    }

    #[test]
    fn test_corrupt_archive_is_extract_error() {
        let tmp     = TempDir::new().unwrap();
        let archive = tmp.path().join("broken.tar.gz");
        fs::write(&archive, b"definitely not gzip").unwrap();

        let err = extract(&archive, tmp.path()).unwrap_err();
        assert!(matches!(err, FetchError::Extract { .. }));
    }

    #[test]
    fn test_unsupported_archive() {
        let tmp = TempDir::new().unwrap();
        let err = extract(&tmp.path().join("data.zip"), tmp.path()).unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedArchive { .. }));
    }
}
