use super::{Group, InvalidArgument};

use std::vec::Vec;

/// Collect a group of operations into a fixed-size, ordered `Vec`.
///
/// An absent group stays absent: `None` in gives `Ok(None)` out, while an
/// empty sequence gives `Ok(Some(vec![]))`. Every entry must be present; the
/// first `None` entry fails the whole group with an [`InvalidArgument`] naming
/// `group`.
///
/// # Examples
///
/// ```
/// use futures_gather::gather::{materialize, Group};
///
/// let ops = Some(vec![Some(1), Some(2)]);
/// assert_eq!(materialize(ops, Group::Required), Ok(Some(vec![1, 2])));
///
/// let ops = Some(vec![Some(1), None]);
/// let err = materialize(ops, Group::Optional).unwrap_err();
/// assert_eq!(err.to_string(), "operation in the optional group is missing");
///
/// let absent: Option<Vec<Option<u8>>> = None;
/// assert_eq!(materialize(absent, Group::Required), Ok(None));
/// ```
pub fn materialize<I, F>(group: Option<I>, kind: Group) -> Result<Option<Vec<F>>, InvalidArgument>
where
    I: IntoIterator<Item = Option<F>>,
{
    let Some(group) = group else {
        return Ok(None);
    };

    group
        .into_iter()
        .map(|op| op.ok_or(InvalidArgument::new(kind)))
        .collect::<Result<Vec<F>, _>>()
        .map(Some)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preserves_order() {
        let ops = Some([Some("c"), Some("a"), Some("b")]);
        assert_eq!(
            materialize(ops, Group::Required),
            Ok(Some(vec!["c", "a", "b"]))
        );
    }

    #[test]
    fn empty_is_not_absent() {
        let ops: Option<Vec<Option<u8>>> = Some(vec![]);
        assert_eq!(materialize(ops, Group::Optional), Ok(Some(vec![])));
    }

    #[test]
    fn names_the_offending_group() {
        let ops = Some(vec![None, Some(1)]);
        let err = materialize(ops, Group::Required).unwrap_err();
        assert_eq!(err.group(), Group::Required);
        assert_eq!(err.to_string(), "operation in the required group is missing");
        assert_eq!(
            format!("{err:?}"),
            "InvalidArgument { group: Required }"
        );
    }
}
