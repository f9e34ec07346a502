//! Secure random byte sources.
//!
//! Generation never reaches for a process-wide RNG; callers hand a
//! [`ByteSource`] to [`generate_password`](crate::generate_password) so tests
//! can replay a fixed byte sequence.

use crate::error::Result;
use rand_core::{OsRng, RngCore};

pub trait ByteSource {
    /// Fills `buf` completely or fails; a partial fill is never reported as success.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl ByteSource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf)?;
        Ok(())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut buf = [0u8; 64];
        OsEntropy.fill_bytes(&mut buf).unwrap();

        // 64 zero bytes from a working CSPRNG is a 2^-512 event.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_os_entropy_empty_buffer() {
        let mut buf = [0u8; 0];
        assert!(OsEntropy.fill_bytes(&mut buf).is_ok());
    }

    #[test]
    fn test_os_entropy_distinct_draws() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        OsEntropy.fill_bytes(&mut first).unwrap();
        OsEntropy.fill_bytes(&mut second).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<S: ByteSource>(mut source: S) -> Result<[u8; 16]> {
            let mut buf = [0u8; 16];
            source.fill_bytes(&mut buf)?;
            Ok(buf)
        }

        let mut source = OsEntropy;
        assert!(draw(&mut source).is_ok());
    }
}
