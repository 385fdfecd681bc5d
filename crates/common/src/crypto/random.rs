//! Randomness sources for nonces and key material
//!
//! Every seal draws its nonce from a caller supplied source rather than a
//! hidden global RNG. Any `rand` crypto RNG works out of the box
//! (`rand::rngs::OsRng`, `rand::rng()`), and [`ReaderSource`] adapts any
//! [`std::io::Read`] such as `/dev/urandom` or a fixed buffer in tests.

use std::io::Read;

use rand::TryCryptoRng;

use super::CryptoError;

/// A capability to fill a buffer with random bytes
///
/// Implementations either fill the whole buffer or fail. Partial reads are
/// never reported as success and nothing retries on the caller's behalf.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

impl<R> RandomSource for R
where
    R: TryCryptoRng + ?Sized,
{
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let wanted = dest.len();
        self.try_fill_bytes(dest)
            .map_err(|e| CryptoError::RandomReadFailed {
                wanted,
                source: anyhow::anyhow!("{}", e),
            })
    }
}

/// Random source backed by a byte reader
///
/// Reads exactly as many bytes as requested. A reader that runs dry before
/// the buffer is full fails with [`CryptoError::RandomReadFailed`].
#[derive(Debug)]
pub struct ReaderSource<R>(R);

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self(reader)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Read> RandomSource for ReaderSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let wanted = dest.len();
        self.0
            .read_exact(dest)
            .map_err(|e| CryptoError::RandomReadFailed {
                wanted,
                source: e.into(),
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_os_rng_fills_buffer() {
        let mut buff = [0u8; 64];
        let mut rng = rand::rngs::OsRng;
        RandomSource::fill(&mut rng, &mut buff).unwrap();
        // 64 zero bytes from the OS RNG is not going to happen
        assert!(buff.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_reader_source_reads_exactly() {
        let mut source = ReaderSource::new(Cursor::new(vec![7u8; 10]));
        let mut buff = [0u8; 4];
        source.fill(&mut buff).unwrap();
        assert_eq!(buff, [7u8; 4]);
        assert_eq!(source.into_inner().position(), 4);
    }

    #[test]
    fn test_reader_source_exhausted() {
        let mut source = ReaderSource::new(Cursor::new(vec![1u8; 3]));
        let mut buff = [0u8; 8];
        let result = source.fill(&mut buff);
        assert!(matches!(
            result,
            Err(CryptoError::RandomReadFailed { wanted: 8, .. })
        ));
    }
}
