//! Stride-based interleaving.

use tracing::debug;

use super::options::MAX_STRIDE;
use crate::error::ZechtabError;
use crate::Result;

/// Split `items` into exactly `stride` groups.
///
/// Group `i` holds `items[i], items[i + stride], items[i + 2 * stride], ...`
/// in input order. When there are fewer items than groups, the trailing
/// groups are empty. Strides of 0 or above [`MAX_STRIDE`] are rejected.
pub fn interleave<T: Clone>(items: &[T], stride: usize) -> Result<Vec<Vec<T>>> {
    if stride == 0 || stride > MAX_STRIDE {
        return Err(ZechtabError::InvalidStride(stride));
    }

    let groups: Vec<Vec<T>> = (0..stride)
        .map(|offset| items.iter().skip(offset).step_by(stride).cloned().collect())
        .collect();

    debug!(items = items.len(), stride, "interleaved entries");
    Ok(groups)
}
