/// Builds a rope from a literal tree shape.
///
/// A node is written `text => [left, right]`. A child is either a string
/// literal (a leaf), a parenthesized node, or `_` when it is absent.
///
/// ```
/// use ropetree::rope;
///
/// let tree = rope!("3" => ["a", ("5" => ["b", _])]);
/// assert_eq!(tree.to_string(), "a3b5");
/// assert_eq!(tree.depth(), 3);
/// ```
#[macro_export]
macro_rules! rope {
    (@child _) => {
        ::std::option::Option::None
    };

    (@child ($($node:tt)+)) => {
        ::std::option::Option::Some($crate::rope!($($node)+))
    };

    (@child $text:literal) => {
        ::std::option::Option::Some($crate::Rope::new($text))
    };

    ($text:literal => [$left:tt, $right:tt]) => {
        $crate::Rope::with_children(
            $text,
            $crate::rope!(@child $left),
            $crate::rope!(@child $right),
        )
    };

    ($text:expr) => {
        $crate::Rope::new($text)
    };
}
