//! Streaming content hashing.
//! MD5 is enough here: the digest is a file-identity proxy for exact-content
//! comparison, not a security boundary.

use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Fixed read size; whole files are never loaded into memory at once.
const CHUNK_SIZE: usize = 4096;

/// Hex digest of the full byte stream of `path`.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn known_vectors() {
        let td = tempdir().unwrap();
        let empty = td.path().join("empty.bin");
        fs::write(&empty, b"").unwrap();
        assert_eq!(hash_file(&empty).unwrap(), "d41d8cd98f00b204e9800998ecf8427e");

        let abc = td.path().join("abc.txt");
        fs::write(&abc, b"abc").unwrap();
        assert_eq!(hash_file(&abc).unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn equal_content_hashes_equal_across_chunk_boundary() {
        let td = tempdir().unwrap();
        // Larger than one read so the loop runs several times.
        let payload = vec![0xA5u8; CHUNK_SIZE * 3 + 17];
        let a = td.path().join("a.bin");
        let b = td.path().join("b.bin");
        fs::write(&a, &payload).unwrap();
        fs::write(&b, &payload).unwrap();
        assert_eq!(hash_file(&a).unwrap(), hash_file(&b).unwrap());

        let c = td.path().join("c.bin");
        let mut other = payload.clone();
        other[CHUNK_SIZE] ^= 0xFF;
        fs::write(&c, &other).unwrap();
        assert_ne!(hash_file(&a).unwrap(), hash_file(&c).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let td = tempdir().unwrap();
        assert!(hash_file(&td.path().join("nope.jpg")).is_err());
    }
}
