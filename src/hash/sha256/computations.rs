use super::padding::Block;
use super::{K256, SCHEDULE_LEN};

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands one block into the 64-word message schedule.
///
/// Words 0..16 are the block read as big-endian `u32`s; each later word
/// mixes four earlier ones, so the expansion is strictly sequential.
pub fn expand_schedule(block: &Block) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for j in 16..SCHEDULE_LEN {
        w[j] = w[j - 16]
            .wrapping_add(small_sigma0(w[j - 15]))
            .wrapping_add(w[j - 7])
            .wrapping_add(small_sigma1(w[j - 2]));
    }

    w
}

/// Runs the 64 compression rounds over `w` and folds the working
/// registers back into `state`.
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; SCHEDULE_LEN]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (&wi, &ki) in w.iter().zip(K256.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, reg) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(reg);
    }
}
