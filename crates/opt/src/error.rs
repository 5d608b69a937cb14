/**
 * @file error.rs
 * @author Krisna Pranav
 * @brief opt[error]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("called `{operation}()` on an `Absent` value")]
    UnwrapAbsent { operation: &'static str },

    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_operation() {
        let err = Error::UnwrapAbsent {
            operation: "Opt::unwrap",
        };
        assert_eq!(err.to_string(), "called `Opt::unwrap()` on an `Absent` value");

        let err = Error::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "index out of bounds: the len is 2 but the index is 4"
        );
    }
}
