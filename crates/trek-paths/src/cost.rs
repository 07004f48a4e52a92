use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// Numeric type usable as an edge cost, g-score or heuristic estimate.
///
/// Implemented for the primitive integer and float types. Costs must be
/// non-negative for the search to return optimal paths; this is not checked.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// The additive identity, used as the g-score of the start node.
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_cost!(0 => i32, i64, u32, u64, usize);
impl_cost!(0.0 => f32, f64);

/// Total order over a partially ordered value; incomparable pairs (NaN)
/// compare equal.
#[inline]
pub(crate) fn order<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
