use crate::utils::error::Result;

/// Somewhere a score can be read from.
pub trait MarksSource {
    /// Reads the next score. Fails with `EvalError::InputFormat` when the
    /// token is not an integer.
    fn read_marks(&mut self) -> Result<i32>;
}

impl<T: MarksSource + ?Sized> MarksSource for &mut T {
    fn read_marks(&mut self) -> Result<i32> {
        (**self).read_marks()
    }
}
