/**
 * @file utils.rs
 * @author Krisna Pranav
 * @brief commons[utils]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

/// The smaller of the two, `left` on ties.
#[inline]
pub fn min<T: Ord>(left: T, right: T) -> T {
    if right < left {
        right
    } else {
        left
    }
}

/// The larger of the two, `left` on ties.
#[inline]
pub fn max<T: Ord>(left: T, right: T) -> T {
    if right > left {
        right
    } else {
        left
    }
}
