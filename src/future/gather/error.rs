use super::Group;

use core::fmt;
use std::error::Error;

/// An operation was missing from one of the groups handed to a fallible
/// gather.
///
/// Raised before any deadline starts counting.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    group: Group,
}

impl InvalidArgument {
    pub(crate) fn new(group: Group) -> Self {
        Self { group }
    }

    /// The group which contained the missing operation.
    pub fn group(&self) -> Group {
        self.group
    }
}

impl fmt::Debug for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidArgument")
            .field("group", &self.group)
            .finish()
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation in the {} group is missing", self.group)
    }
}

impl Error for InvalidArgument {}
