//! Lexicographic stepping and unranking of combinations.

use super::binomial::binomial;

/// A `k`-combination of `{0..n-1}`, held as a strictly increasing index
/// sequence positioned in the lexicographic order over all `C(n, k)`
/// combinations.
///
/// The strictly increasing sequence is both the canonical representation
/// and the enumeration key: combinations are ordered by comparing their
/// index sequences element by element, left to right. Rank 0 is
/// `{0, 1, …, k-1}`; the last combination is `{n-k, …, n-1}`.
///
/// [`CombinationCursor::unrank`] jumps to an arbitrary rank in O(n)
/// without stepping through predecessors, which is what lets a search
/// worker start in the middle of the combination space.
///
/// # Examples
///
/// ```
/// use u_pmedian::combinatorics::CombinationCursor;
///
/// let mut c = CombinationCursor::first(4, 2);
/// assert_eq!(c.indices(), &[0, 1]);
/// assert!(c.advance());
/// assert_eq!(c.indices(), &[0, 2]);
///
/// // Jump straight to the last of the C(4, 2) = 6 combinations.
/// let last = CombinationCursor::unrank(5, 4, 2);
/// assert_eq!(last.indices(), &[2, 3]);
/// assert_eq!(last.rank(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationCursor {
    indices: Vec<usize>,
    n: usize,
}

impl CombinationCursor {
    /// The rank-0 combination `{0, 1, …, k-1}`.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0` or `k > n`.
    pub fn first(n: usize, k: usize) -> Self {
        assert!(k >= 1 && k <= n, "need 1 <= k <= n, got k={k}, n={n}");
        Self {
            indices: (0..k).collect(),
            n,
        }
    }

    /// Builds the combination at `rank` directly (combinatorial
    /// unranking).
    ///
    /// Fixes each position greedily: a combination starting with value
    /// `v` at position `pos` is followed by one of `C(n-v-1, k-pos-1)`
    /// suffixes, so values are skipped until the remaining rank falls
    /// inside the current block.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`, `k > n`, or `rank >= C(n, k)`.
    pub fn unrank(rank: u64, n: usize, k: usize) -> Self {
        assert!(k >= 1 && k <= n, "need 1 <= k <= n, got k={k}, n={n}");
        assert!(
            rank < binomial(n as u64, k as u64),
            "rank {rank} out of range for C({n}, {k})"
        );
        let mut indices = Vec::with_capacity(k);
        let mut remaining = rank;
        let mut v = 0usize;
        for pos in 0..k {
            loop {
                let block = binomial((n - v - 1) as u64, (k - pos - 1) as u64);
                if remaining < block {
                    indices.push(v);
                    v += 1;
                    break;
                }
                remaining -= block;
                v += 1;
            }
        }
        Self { indices, n }
    }

    /// The current combination, strictly increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Arity `k` of the combination.
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// Position of the current combination in lexicographic order
    /// (inverse of [`CombinationCursor::unrank`]).
    pub fn rank(&self) -> u64 {
        let k = self.indices.len();
        let mut rank = 0u64;
        let mut next = 0usize;
        for (pos, &v) in self.indices.iter().enumerate() {
            // Every value skipped at this position leads a full block of
            // combinations that precede the current one.
            for skipped in next..v {
                rank += binomial((self.n - skipped - 1) as u64, (k - pos - 1) as u64);
            }
            next = v + 1;
        }
        rank
    }

    /// Advances to the lexicographic successor in place.
    ///
    /// Finds the rightmost position that can still grow, increments it,
    /// and resets the suffix to the minimal strictly increasing run.
    /// Returns `false` and leaves the combination unchanged when it is
    /// already the last one.
    pub fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let n = self.n;
        let mut i = k;
        while i > 0 && self.indices[i - 1] == n - k + i - 1 {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        let i = i - 1;
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}
