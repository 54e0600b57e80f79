use crate::consts::{C, RC};

/// Whirlpool compression function.
///
/// Encrypts `block` with the dedicated `W` cipher keyed by the current hash
/// value and folds the result back into `state` (Miyaguchi-Preneel).
pub fn compress(block: &[u8; 64], state: &mut [u64; 8]) {
    compress_block(state, block);
}

/// Same as [`compress`] for a block handed over as a slice by the block buffer.
#[inline(always)]
pub(crate) fn compress_block(state: &mut [u64; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), 64);

    let mut b = [0u64; 8];
    for (w, chunk) in b.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *w = u64::from_be_bytes(bytes);
    }

    let mut k = *state;
    let mut s = [0u64; 8];
    for i in 0..8 {
        s[i] = b[i] ^ k[i];
    }

    for rc in RC.iter() {
        k = round(&k);
        k[0] ^= rc;

        s = round(&s);
        for (s, k) in s.iter_mut().zip(k.iter()) {
            *s ^= k;
        }
    }

    for i in 0..8 {
        state[i] ^= s[i] ^ b[i];
    }
}

/// Combined `SubBytes`, `ShiftColumns` and `MixRows` step: byte `k` of the
/// output word `j` is looked up in `C[k]` using byte `k` of input word `j - k`.
#[inline(always)]
fn round(src: &[u64; 8]) -> [u64; 8] {
    let mut dst = [0u64; 8];
    for (j, d) in dst.iter_mut().enumerate() {
        let mut acc = 0;
        for (k, table) in C.iter().enumerate() {
            let byte = (src[(j + 8 - k) % 8] >> (56 - 8 * k)) as u8;
            acc ^= table[byte as usize];
        }
        *d = acc;
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn to_bytes(state: &[u64; 8]) -> [u8; 64] {
        let mut out = [0u8; 64];
        for (chunk, v) in out.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        out
    }

    #[test]
    fn padded_empty_message() {
        // "" after padding: the marker bit followed by zeros and a zero length
        let mut block = [0u8; 64];
        block[0] = 0x80;

        let mut state = [0u64; 8];
        compress(&block, &mut state);

        assert_eq!(
            to_bytes(&state)[..],
            hex!(
                "19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a7"
                "3e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3"
            )[..]
        );
    }

    #[test]
    fn depends_on_prior_state() {
        let block = [0u8; 64];

        let mut zero = [0u64; 8];
        compress(&block, &mut zero);

        let mut other = [0u64; 8];
        other[7] = 1;
        compress(&block, &mut other);

        assert_ne!(zero, other);
        assert_ne!(zero, [0u64; 8]);
    }
}
