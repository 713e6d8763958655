//! File type sniffing for loaded blobs.
//!
//! Container signatures are checked first; a blob that matches none of them
//! is classified by its size. Only cartridges (raw or in a `CART` container)
//! can actually be opened by this machine.

use thiserror::Error;

pub const CART_HEADER_SIZE: usize = 16;
pub const MAX_CART_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Tokenized BASIC program
    Basic,
    /// BASIC listing (text starting with a line number)
    Listing,
    /// Emulator state file
    State,
    /// `CART` container with a 16-byte header
    Cart,
    /// `FUJI` cassette image
    Cassette,
    Atr,
    Dcm,
    /// Binary load executable
    Xex,
    /// Raw cartridge dump
    Rom,
    BootTape,
    Xfd,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("File too small to identify: {size} bytes")]
    TooSmall { size: usize },
    #[error("Unrecognized file format ({size} bytes)")]
    Unrecognized { size: usize },
    #[error("Unsupported file type: {0:?}")]
    Unsupported(FileType),
    #[error("Truncated CART header")]
    TruncatedHeader,
    #[error("CART checksum mismatch: header says {expected:#010x}, data sums to {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

pub fn detect(data: &[u8]) -> Result<FileType, FormatError> {
    let size = data.len();
    if size < 4 {
        return Err(FormatError::TooSmall { size });
    }
    let header = [data[0], data[1], data[2], data[3]];

    let by_signature = match header {
        [0, 0, b2, b3] if b2 != 0 || b3 != 0 => Some(FileType::Basic),
        [b'0'..=b'9', b'0'..=b'9' | b' ', _, _] => Some(FileType::Listing),
        [b'A', b'T', b'A', b'R'] => Some(FileType::State),
        [b'C', b'A', b'R', b'T'] => Some(FileType::Cart),
        [b'F', b'U', b'J', b'I'] => Some(FileType::Cassette),
        [0x96, 0x02, _, _] => Some(FileType::Atr),
        [0xF9 | 0xFA, _, _, _] => Some(FileType::Dcm),
        [0xFF, 0xFF, b2, b3] if b2 != 0xFF || b3 != 0xFF => Some(FileType::Xex),
        _ => None,
    };
    if let Some(file_type) = by_signature {
        return Ok(file_type);
    }

    if (4 * 1024..=MAX_CART_SIZE).contains(&size)
        && (size.is_power_of_two() || size == 40 * 1024)
    {
        return Ok(FileType::Rom);
    }
    if (header[1] as usize) << 7 == size {
        return Ok(FileType::BootTape);
    }
    if size & 0x7F == 0 {
        return Ok(FileType::Xfd);
    }
    Err(FormatError::Unrecognized { size })
}

/// A parsed `CART` container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartContainer<'a> {
    pub type_code: u32,
    pub checksum: u32,
    pub payload: &'a [u8],
}

/// Byte sum used by `CART` containers
pub fn cart_checksum(payload: &[u8]) -> u32 {
    payload
        .iter()
        .fold(0u32, |sum, &b| sum.wrapping_add(b as u32))
}

/// Split a `CART` container into header fields and payload, verifying the
/// payload checksum.
pub fn parse_cart_container(data: &[u8]) -> Result<CartContainer<'_>, FormatError> {
    if data.len() < CART_HEADER_SIZE || &data[..4] != b"CART" {
        return Err(FormatError::TruncatedHeader);
    }
    let type_code = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    let checksum = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
    let payload = &data[CART_HEADER_SIZE..];

    let actual = cart_checksum(payload);
    if actual != checksum {
        return Err(FormatError::ChecksumMismatch {
            expected: checksum,
            actual,
        });
    }
    Ok(CartContainer {
        type_code,
        checksum,
        payload,
    })
}

/// Wrap `payload` in a `CART` container.
pub fn build_cart_container(type_code: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(CART_HEADER_SIZE + payload.len());
    out.extend_from_slice(b"CART");
    out.extend_from_slice(&type_code.to_be_bytes());
    out.extend_from_slice(&cart_checksum(payload).to_be_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(prefix: &[u8], size: usize) -> Vec<u8> {
        let mut data = vec![0x11; size];
        data[..prefix.len()].copy_from_slice(prefix);
        data
    }

    #[test]
    fn test_signatures() {
        assert_eq!(detect(&blob(&[0, 0, 1, 0], 100)), Ok(FileType::Basic));
        assert_eq!(detect(b"10 PRINT"), Ok(FileType::Listing));
        assert_eq!(detect(b"5 GOTO 5"), Ok(FileType::Listing));
        assert_eq!(detect(&blob(b"ATARI800", 64)), Ok(FileType::State));
        assert_eq!(detect(&blob(b"CART", 64)), Ok(FileType::Cart));
        assert_eq!(detect(&blob(b"FUJI", 64)), Ok(FileType::Cassette));
        assert_eq!(detect(&blob(&[0x96, 0x02], 64)), Ok(FileType::Atr));
        assert_eq!(detect(&blob(&[0xFA], 64)), Ok(FileType::Dcm));
        assert_eq!(detect(&blob(&[0xFF, 0xFF, 0x00, 0x20], 64)), Ok(FileType::Xex));
    }

    #[test]
    fn test_signature_beats_size() {
        // 8 KiB but starts with a CART stamp
        assert_eq!(detect(&blob(b"CART", 0x2000)), Ok(FileType::Cart));
    }

    #[test]
    fn test_rom_sizes() {
        for kib in [4, 8, 16, 32, 40, 64, 128, 256, 512, 1024] {
            assert_eq!(detect(&blob(&[], kib * 1024)), Ok(FileType::Rom), "{} KiB", kib);
        }
        // 24 KiB is not a cartridge size but is a multiple of 128
        assert_eq!(detect(&blob(&[], 24 * 1024)), Ok(FileType::Xfd));
        assert_eq!(detect(&blob(&[], 2048 * 1024)), Ok(FileType::Xfd));
    }

    #[test]
    fn test_boot_tape_and_errors() {
        assert_eq!(detect(&blob(&[0x11, 0x02], 0x100)), Ok(FileType::BootTape));
        assert_eq!(detect(&blob(&[], 1000)), Err(FormatError::Unrecognized { size: 1000 }));
        assert_eq!(detect(&[1, 2, 3]), Err(FormatError::TooSmall { size: 3 }));
    }

    #[test]
    fn test_cart_container() {
        let payload = vec![0x80; 0x1000];
        let data = build_cart_container(20, &payload);
        assert_eq!(detect(&data), Ok(FileType::Cart));

        let parsed = parse_cart_container(&data).expect("valid container");
        assert_eq!(parsed.type_code, 20);
        assert_eq!(parsed.checksum, 0x80 * 0x1000);
        assert_eq!(parsed.payload, &payload[..]);
    }

    #[test]
    fn test_cart_container_checksum_mismatch() {
        let mut data = build_cart_container(4, &[1, 2, 3, 4]);
        let last = data.len() - 1;
        data[last] = 5;
        assert_eq!(
            parse_cart_container(&data),
            Err(FormatError::ChecksumMismatch {
                expected: 10,
                actual: 11
            })
        );
        assert_eq!(parse_cart_container(b"CART"), Err(FormatError::TruncatedHeader));
    }
}
