use std::fmt::Debug;
use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Edge weight usable by the route search
///
/// Integer weights can overflow when summed along a path, so accumulation goes
/// through `checked_sum`, which returns `None` instead of wrapping or panicking.
pub trait Weight: Zero + Copy + PartialOrd + Debug {
    /// Sum of two weights, or `None` if it is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

// Floats saturate to infinity rather than failing
macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }

            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);
