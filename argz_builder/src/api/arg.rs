use crate::api::Var;
use crate::model::Ids;

/// A flag declaration: its identifiers, the variable it writes to, and its help message.
///
/// ### Example
/// ```
/// # use argz_builder as argz;
/// use argz::{Arg, Ids};
///
/// let mut count: i32 = 0;
/// let arg = Arg::new(Ids::new("count").alias('c'), &mut count, "how many times");
/// assert_eq!(arg.ids().id(), "count");
/// assert_eq!(arg.help(), "how many times");
/// ```
#[derive(Debug)]
pub struct Arg<'a> {
    ids: Ids,
    var: Var<'a>,
    help: String,
}

impl<'a> Arg<'a> {
    /// Declare a flag bound to `var`.
    pub fn new(ids: Ids, var: impl Into<Var<'a>>, help: impl Into<String>) -> Self {
        Self {
            ids,
            var: var.into(),
            help: help.into(),
        }
    }

    /// The identifiers of this flag.
    pub fn ids(&self) -> &Ids {
        &self.ids
    }

    /// The bound variable.
    pub fn var(&self) -> &Var<'a> {
        &self.var
    }

    /// The help message.
    pub fn help(&self) -> &str {
        &self.help
    }

    pub(crate) fn var_mut(&mut self) -> &mut Var<'a> {
        &mut self.var
    }
}

/// The full set of declared flags.
/// The order is the order of the help listing.
pub type Options<'a> = Vec<Arg<'a>>;

/// Find the long name of the first flag declared with `alias`.
pub fn resolve_alias<'o>(options: &'o [Arg<'_>], alias: char) -> Option<&'o str> {
    options
        .iter()
        .find(|arg| arg.ids.short() == Some(alias))
        .map(|arg| arg.ids.id())
}

/// Find the first flag whose long name is exactly `id`.
pub fn find<'o, 'a>(options: &'o mut [Arg<'a>], id: &str) -> Option<&'o mut Arg<'a>> {
    options.iter_mut().find(|arg| arg.ids.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('a', Some("apple"))]
    #[case('b', Some("banana"))]
    #[case('c', None)]
    #[case('h', None)]
    fn resolve(#[case] alias: char, #[case] expected: Option<&str>) {
        let mut apple: i32 = 0;
        let mut banana: bool = false;
        let mut carrot: String = String::default();
        let options = vec![
            Arg::new(Ids::new("apple").alias('a'), &mut apple, ""),
            Arg::new(Ids::new("banana").alias('b'), &mut banana, ""),
            Arg::new(Ids::new("carrot"), &mut carrot, ""),
        ];

        assert_eq!(resolve_alias(&options, alias), expected);
    }

    #[test]
    fn resolve_first_wins() {
        let mut first: i32 = 0;
        let mut second: i32 = 0;
        let options = vec![
            Arg::new(Ids::new("first").alias('x'), &mut first, ""),
            Arg::new(Ids::new("second").alias('x'), &mut second, ""),
        ];

        assert_eq!(resolve_alias(&options, 'x'), Some("first"));
    }

    #[test]
    fn find_exact() {
        let mut count: i32 = 0;
        let mut counter: i32 = 0;
        let mut options = vec![
            Arg::new(Ids::new("counter"), &mut counter, "second"),
            Arg::new(Ids::new("count"), &mut count, "first"),
        ];

        assert_eq!(find(&mut options, "count").unwrap().help(), "first");
        assert_eq!(find(&mut options, "counter").unwrap().help(), "second");
        assert!(find(&mut options, "coun").is_none());
        assert!(find(&mut options, "counters").is_none());
        assert!(find(&mut options, "").is_none());
    }

    #[test]
    fn find_first_wins() {
        let mut first: i32 = 0;
        let mut second: i32 = 0;
        let mut options = vec![
            Arg::new(Ids::new("twin"), &mut first, "first"),
            Arg::new(Ids::new("twin"), &mut second, "second"),
        ];

        let arg = find(&mut options, "twin").unwrap();
        arg.var_mut().capture(Some("3")).unwrap();
        drop(options);
        assert_eq!(first, 3);
        assert_eq!(second, 0);
    }
}
