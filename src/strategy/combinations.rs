//! k-of-n index combinations for replacement draws (k ≤ 5, n ≤ 52).

/// Largest draw size: replacing the whole hand.
pub const MAX_K: usize = 5;
const MAX_N: usize = 52;

/// Pascal's triangle for n ≤ 52, k ≤ 5.
const fn make_binomials() -> [[u32; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u32; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;
    while n <= MAX_N {
        t[n][0] = 1;
        let mut k = 1;
        while k <= MAX_K && k <= n {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    t
}

const BINOMIALS: [[u32; MAX_K + 1]; MAX_N + 1] = make_binomials();

/// n choose k, zero when k > n. Panics only if n > 52 or k > 5.
#[inline]
pub fn binomial(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N && k <= MAX_K, "binomial({n}, {k}) out of table range");
    BINOMIALS[n][k] as usize
}

/// One k-combination of indices in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    indices: [usize; MAX_K],
    len: usize,
}

impl Combination {
    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    /// The `rank`-th k-combination of 0..n in lexicographic order,
    /// or `None` if `rank >= binomial(n, k)`.
    pub fn unrank(n: usize, k: usize, mut rank: usize) -> Option<Self> {
        if k > MAX_K || n > MAX_N || rank >= binomial(n, k) {
            return None;
        }
        let mut indices = [0usize; MAX_K];
        let mut next = 0;
        for (slot, out) in indices.iter_mut().enumerate().take(k) {
            let remaining = k - slot - 1;
            // Skip over every block of combinations that starts with a smaller index.
            loop {
                let block = binomial(n - next - 1, remaining);
                if rank < block {
                    break;
                }
                rank -= block;
                next += 1;
            }
            *out = next;
            next += 1;
        }
        Some(Self { indices, len: k })
    }
}

/// Iterator over every k-combination of 0..n in lexicographic order.
///
/// Choosing 0 yields a single empty combination; choosing more than n yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Combination,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let k = k.min(MAX_K);
        let mut indices = [0usize; MAX_K];
        for (i, slot) in indices.iter_mut().enumerate().take(k) {
            *slot = i;
        }
        Self { n, current: Combination { indices, len: k }, done: k > n }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        let k = self.current.len;
        let idx = &mut self.current.indices;

        // Find the rightmost index that can be incremented
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if idx[i] < self.n - (k - i) {
                idx[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..k {
                    idx[j] = idx[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}
