//! This module provides shared, low-level helpers for moving identifiers in
//! and out of flat byte buffers.
//!
//! Two buffer shapes are supported:
//! 1.  Canonical buffers: concatenated wire-order identifiers, as read from a
//!     file or a socket. Decoding copies.
//! 2.  Native buffers: the in-memory image of an `[Identifier]`. Viewing one is
//!     zero-copy through `bytemuck`, and fails if the buffer is misaligned or
//!     not a whole number of identifiers.

use crate::error::GuidOrderError;
use crate::layout::{Identifier, IDENTIFIER_LEN};

//==================================================================================
// 1. Canonical buffers
//==================================================================================

/// Decodes a buffer of concatenated canonical identifiers.
pub fn identifiers_from_canonical_bytes(bytes: &[u8]) -> Result<Vec<Identifier>, GuidOrderError> {
    if bytes.len() % IDENTIFIER_LEN != 0 {
        return Err(GuidOrderError::InvalidLength {
            expected: (bytes.len() / IDENTIFIER_LEN + 1) * IDENTIFIER_LEN,
            actual: bytes.len(),
        });
    }
    bytes
        .chunks_exact(IDENTIFIER_LEN)
        .map(Identifier::try_from_slice)
        .collect()
}

/// Encodes identifiers as concatenated canonical bytes.
pub fn identifiers_to_canonical_bytes(ids: &[Identifier]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ids.len() * IDENTIFIER_LEN);
    for id in ids {
        out.extend_from_slice(&id.to_canonical_bytes());
    }
    out
}

//==================================================================================
// 2. Native buffers
//==================================================================================

/// Safely reinterprets a native byte buffer as a slice of identifiers.
///
/// # Errors
/// Returns `GuidOrderError::PodCast` if the buffer length is not a multiple of
/// 16 or its start is not 4-byte aligned.
pub fn native_bytes_to_identifiers(bytes: &[u8]) -> Result<&[Identifier], GuidOrderError> {
    Ok(bytemuck::try_cast_slice(bytes)?)
}

/// The in-memory bytes of a slice of identifiers. Zero-copy.
pub fn identifiers_to_native_bytes(ids: &[Identifier]) -> &[u8] {
    bytemuck::cast_slice(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::corpus::*;

    #[test]
    fn test_canonical_buffer_decodes_in_order() {
        let ids = [BASE_A, BASE_B6, Identifier::MAX];
        let bytes = identifiers_to_canonical_bytes(&ids);
        assert_eq!(bytes.len(), 48);
        assert_eq!(&bytes[16..32], &BASE_B6.to_canonical_bytes());
        assert_eq!(identifiers_from_canonical_bytes(&bytes).unwrap(), ids.to_vec());
        assert!(identifiers_from_canonical_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_canonical_buffer_rejects_partial_identifier() {
        let result = identifiers_from_canonical_bytes(&[0u8; 20]);
        assert!(matches!(
            result,
            Err(GuidOrderError::InvalidLength {
                expected: 32,
                actual: 20
            })
        ));
    }

    #[test]
    fn test_native_view_is_zero_copy() {
        let ids = REFERENCE_IDENTIFIERS.to_vec();
        let bytes = identifiers_to_native_bytes(&ids);
        assert_eq!(bytes.as_ptr(), ids.as_ptr() as *const u8);

        let view = native_bytes_to_identifiers(bytes).unwrap();
        assert_eq!(view, &ids[..]);
    }

    #[test]
    fn test_native_view_rejects_bad_length() {
        let ids = [BASE_A, BASE_B];
        let bytes = identifiers_to_native_bytes(&ids);
        assert!(matches!(
            native_bytes_to_identifiers(&bytes[..20]),
            Err(GuidOrderError::PodCast(_))
        ));
    }
}
