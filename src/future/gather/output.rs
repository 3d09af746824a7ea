use std::vec::Vec;

/// The outcome of a [`Gather`][super::Gather].
///
/// Each group has one slot per input operation, in input order. A slot is
/// `Some(value)` if its operation resolved to `Ok(value)` before the group's
/// race was decided, and `None` if it failed or was still pending. A group
/// which had no operations is `None` as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatherOutput<T1, T2> {
    /// Slots for the required group.
    pub required: Option<Vec<Option<T1>>>,
    /// Slots for the optional group.
    pub optional: Option<Vec<Option<T2>>>,
}

impl<T1, T2> GatherOutput<T1, T2> {
    /// Whether each required operation completed successfully in time.
    ///
    /// This is the natural view for operations which resolve to `Result<(), E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_gather::gather::GatherOutput;
    ///
    /// let output: GatherOutput<(), ()> = GatherOutput {
    ///     required: Some(vec![Some(()), None]),
    ///     optional: None,
    /// };
    /// assert_eq!(output.required_flags(), Some(vec![true, false]));
    /// assert_eq!(output.optional_flags(), None);
    /// ```
    pub fn required_flags(&self) -> Option<Vec<bool>> {
        self.required.as_deref().map(flags)
    }

    /// Whether each optional operation completed successfully in time.
    pub fn optional_flags(&self) -> Option<Vec<bool>> {
        self.optional.as_deref().map(flags)
    }

    /// Split the output into its required and optional slots.
    pub fn into_parts(self) -> (Option<Vec<Option<T1>>>, Option<Vec<Option<T2>>>) {
        (self.required, self.optional)
    }
}

fn flags<T>(slots: &[Option<T>]) -> Vec<bool> {
    slots.iter().map(Option::is_some).collect()
}
