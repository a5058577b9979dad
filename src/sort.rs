//! Stable composite ordering over raw aggregation map entries.
//!
//! The sorter never looks at value buffers and never rewrites bytes, it
//! only reorders entries. Comparison walks the key schema's fields at
//! their declared offsets; the first field whose decoded values differ
//! decides, and entries with fully equal keys keep their input order.

use std::cmp::Ordering;

use crate::map_key::{self, FieldKind, KeyField};

/// One raw aggregation map entry: (key bytes, value bytes).
pub type MapEntry = (Vec<u8>, Vec<u8>);

/// Reorder `entries` ascending by composite key.
///
/// Caller contract: every key buffer is exactly as long as the schema's
/// total width. A mismatch is an integration bug upstream and panics
/// rather than misreading bytes.
pub fn sort_by_key(key_fields: &[KeyField], entries: &mut [MapEntry]) {
    let total = map_key::total_size(key_fields);
    for (key, _) in entries.iter() {
        assert_eq!(
            key.len(),
            total,
            "map key length {} does not match schema width {}",
            key.len(),
            total
        );
    }

    // sort_by is stable, so equal keys retain their relative input order.
    entries.sort_by(|(a, _), (b, _)| compare_keys(key_fields, a, b));
}

fn compare_keys(key_fields: &[KeyField], a: &[u8], b: &[u8]) -> Ordering {
    let mut offset = 0;
    for field in key_fields {
        let ord = match field.kind {
            FieldKind::Integer => {
                let x = map_key::decode_integer(a, offset, field.size);
                let y = map_key::decode_integer(b, offset, field.size);
                x.cmp(&y)
            }
            FieldKind::Text => {
                map_key::text_field(a, offset, field.size)
                    .cmp(map_key::text_field(b, offset, field.size))
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
        offset += field.size;
    }
    Ordering::Equal
}
