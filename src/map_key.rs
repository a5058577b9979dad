//! Key schema descriptors and field decoding for aggregation map keys.
//!
//! A map key is a fixed-width concatenation of integer and null-padded
//! text fields. The schema travels with the batch; every field width is
//! schema data carried per descriptor, nothing is inferred from the bytes
//! themselves and no delimiter scanning happens.

/// Semantic kind of one key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned integer in native byte order, compared numerically.
    Integer,
    /// Fixed-width, null-padded character buffer, compared as a bounded
    /// byte string.
    Text,
}

/// Descriptor for one key field: its kind and its exact byte width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyField {
    pub kind: FieldKind,
    pub size: usize,
}

impl KeyField {
    pub fn integer(size: usize) -> Self {
        KeyField {
            kind: FieldKind::Integer,
            size,
        }
    }

    pub fn text(size: usize) -> Self {
        KeyField {
            kind: FieldKind::Text,
            size,
        }
    }
}

/// Total byte width of a key described by `fields`. Every key buffer in a
/// batch sharing this schema must be exactly this long.
pub fn total_size(fields: &[KeyField]) -> usize {
    fields.iter().map(|f| f.size).sum()
}

/// Decode an unsigned integer field in native byte order.
///
/// Map keys only carry 1, 2, 4 or 8 byte integers; any other width means
/// the schema itself is malformed and decoding panics rather than guess.
pub fn decode_integer(buf: &[u8], offset: usize, size: usize) -> u64 {
    let bytes = &buf[offset..offset + size];
    match size {
        1 => bytes[0] as u64,
        2 => u16::from_ne_bytes(bytes.try_into().unwrap()) as u64,
        4 => u32::from_ne_bytes(bytes.try_into().unwrap()) as u64,
        8 => u64::from_ne_bytes(bytes.try_into().unwrap()),
        _ => panic!("unsupported integer key width: {}", size),
    }
}

/// Raw bytes of a null-padded text field. Padding zeros compare before any
/// printable byte, so a string that is a prefix of another orders first.
pub fn text_field(buf: &[u8], offset: usize, size: usize) -> &[u8] {
    &buf[offset..offset + size]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_size_sums_widths() {
        let schema = [KeyField::integer(8), KeyField::text(64), KeyField::integer(4)];
        assert_eq!(total_size(&schema), 76);
        assert_eq!(total_size(&[]), 0);
    }

    #[test]
    fn test_decode_integer_widths() {
        let mut buf = Vec::new();
        buf.push(0x7f_u8);
        buf.extend_from_slice(&0xbeef_u16.to_ne_bytes());
        buf.extend_from_slice(&0xdead_beef_u32.to_ne_bytes());
        buf.extend_from_slice(&0x0123_4567_89ab_cdef_u64.to_ne_bytes());

        assert_eq!(decode_integer(&buf, 0, 1), 0x7f);
        assert_eq!(decode_integer(&buf, 1, 2), 0xbeef);
        assert_eq!(decode_integer(&buf, 3, 4), 0xdead_beef);
        assert_eq!(decode_integer(&buf, 7, 8), 0x0123_4567_89ab_cdef);
    }

    #[test]
    #[should_panic(expected = "unsupported integer key width")]
    fn test_decode_integer_rejects_odd_width() {
        let buf = [0u8; 8];
        decode_integer(&buf, 0, 3);
    }

    #[test]
    fn test_text_field_keeps_padding() {
        let mut buf = vec![0u8; 8];
        buf[..3].copy_from_slice(b"abc");
        assert_eq!(text_field(&buf, 0, 8), b"abc\0\0\0\0\0");
    }
}
