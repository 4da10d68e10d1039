//! Repair of trailing padding lost in transport.
//!
//! Some transports drop the padding sentinel at the end of the alphabet text and leave the
//! first alphabet character (`A`) in its place. The grid itself does this too, since it has no
//! color for the sentinel. On a failed decode the trailing `A`s are turned back into padding one
//! at a time, last character first, and the decode is retried.
//!
//! A genuine trailing `A` that got corrupted looks the same as a dropped sentinel. Without a
//! checksum there is no way to tell them apart, so such input may decode to a different
//! payload instead of failing.

use tracing::{debug, trace};

use super::{
    codec::{symbol_to_char, PADDING},
    utils::{CodecError, CodecResult},
};

// Padding never exceeds 2 characters; the 3rd attempt is a safety margin
pub const MAX_REPAIR_ATTEMPTS: usize = 3;

/// Runs `decode` on `text`, repairing trailing padding on failure.
///
/// Fails with [`CodecError::MalformedPayload`] once the character to reinterpret is not the
/// first alphabet character, or after [`MAX_REPAIR_ATTEMPTS`] failed retries.
pub fn decode_with_recovery<T, F>(text: &str, mut decode: F) -> CodecResult<T>
where
    F: FnMut(&str) -> CodecResult<T>,
{
    let err = match decode(text) {
        Ok(res) => return Ok(res),
        Err(e) => e,
    };
    trace!("Decode failed on unrepaired text: {err}");

    let filler = symbol_to_char(0);
    let mut chars = text.chars().collect::<Vec<_>>();
    for k in 1..=MAX_REPAIR_ATTEMPTS {
        let Some(idx) = chars.len().checked_sub(k) else {
            return Err(CodecError::MalformedPayload);
        };
        if chars[idx] != filler {
            trace!("Trailing character {:?} at {idx} is not a dropped sentinel", chars[idx]);
            return Err(CodecError::MalformedPayload);
        }
        chars[idx] = PADDING;

        let repaired = chars.iter().collect::<String>();
        match decode(&repaired) {
            Ok(res) => {
                debug!("Recovered payload with {k} padding character(s)");
                return Ok(res);
            }
            Err(e) => trace!("Repair attempt {k} failed: {e}"),
        }
    }

    Err(CodecError::MalformedPayload)
}
