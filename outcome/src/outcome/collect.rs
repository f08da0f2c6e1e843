//! Collecting an iterator of outcomes.

use super::Outcome;

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    /// Collects every success value into `C`.
    ///
    /// Iteration stops at the first `Error` or `Loading`, which becomes the
    /// result.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let all: Outcome<Vec<u8>> = vec![Outcome::success(1), Outcome::success(2)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(all, Outcome::success(vec![1, 2]));
    ///
    /// let halted: Outcome<Vec<u8>> = vec![Outcome::success(1), Outcome::loading()]
    ///     .into_iter()
    ///     .collect();
    /// assert!(halted.is_loading());
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut residual = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item.into_residual() {
                Ok(value) => Some(value),
                Err(stop) => {
                    residual = Some(stop);
                    None
                }
            })
            .collect();
        residual.unwrap_or(Self::Success(collected))
    }
}
