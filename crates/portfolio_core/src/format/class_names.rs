//! Conditional class-name joining.

use std::borrow::Cow;

/// One argument to [`cn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// Absent or falsy input; contributes nothing.
    Skip,
    Class(Cow<'a, str>),
    /// Keys are included when their flag is `true`, in the given order.
    Toggles(Vec<(&'a str, bool)>),
    /// Nested values, flattened in order.
    List(Vec<ClassValue<'a>>),
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Class(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Class(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(value: String) -> Self {
        Self::Class(Cow::Owned(value))
    }
}

/// Booleans never name a class; `false` is the usual `cond && "class"` miss.
impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        Self::Skip
    }
}

impl From<()> for ClassValue<'_> {
    fn from(_: ()) -> Self {
        Self::Skip
    }
}

impl<'a, T> From<Option<T>> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Skip, Into::into)
    }
}

impl<'a> From<&'a [(&'a str, bool)]> for ClassValue<'a> {
    fn from(value: &'a [(&'a str, bool)]) -> Self {
        Self::Toggles(value.to_vec())
    }
}

impl<'a, const N: usize> From<[(&'a str, bool); N]> for ClassValue<'a> {
    fn from(value: [(&'a str, bool); N]) -> Self {
        Self::Toggles(value.to_vec())
    }
}

impl<'a> From<Vec<ClassValue<'a>>> for ClassValue<'a> {
    fn from(value: Vec<ClassValue<'a>>) -> Self {
        Self::List(value)
    }
}

/// Joins class values into one space-separated string.
///
/// Each class is trimmed at both ends but keeps its inner spacing, so
/// `cn(["  a  b "])` is `"a  b"`. Blank strings and falsy values are dropped;
/// the result is `""` when nothing remains.
pub fn cn<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    let values: Vec<ClassValue<'a>> = inputs.into_iter().map(Into::into).collect();
    let mut classes = Vec::new();
    for value in &values {
        collect(value, &mut classes);
    }
    classes.join(" ")
}

fn collect<'v>(value: &'v ClassValue<'_>, out: &mut Vec<&'v str>) {
    match value {
        ClassValue::Skip => {}
        ClassValue::Class(class) => {
            let class = class.trim();
            if !class.is_empty() {
                out.push(class);
            }
        }
        ClassValue::Toggles(toggles) => out.extend(
            toggles
                .iter()
                .filter(|(class, enabled)| *enabled && !class.trim().is_empty())
                .map(|(class, _)| class.trim()),
        ),
        ClassValue::List(values) => values.iter().for_each(|value| collect(value, out)),
    }
}

/// Variadic form of [`cn`]: `cn!("base", active.then_some("active"))`.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::format::cn([$($crate::format::ClassValue::from($value)),+])
    };
}
