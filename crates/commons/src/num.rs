/**
 * @file num.rs
 * @author Krisna Pranav
 * @brief commons[num]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

/// Primitive integers that can be stepped forward.
///
/// Stepping wraps on overflow, so every helper here is total.
pub trait Integer: Copy + Ord {
    const ZERO: Self;
    const ONE: Self;

    fn increment_by(self, by: Self) -> Self;

    #[inline]
    fn increment(self) -> Self {
        self.increment_by(Self::ONE)
    }
}

macro_rules! impl_integer_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn increment_by(self, by: Self) -> Self {
                    self.wrapping_add(by)
                }
            }
        )*
    };
}

impl_integer_for!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[inline]
pub fn increment<T: Integer>(x: T) -> T {
    x.increment()
}

pub fn increment_by<T: Integer>(by: T) -> impl Fn(T) -> T {
    move |x: T| x.increment_by(by)
}
