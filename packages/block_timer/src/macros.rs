/// Records a function call, labelled with the name of the called function.
///
/// `timed!(timer, path::to::function(args...))` expands to a
/// [`record_as()`](crate::Session::record_as) call whose label is the function path
/// as written, and evaluates to the return value of the function. The first argument
/// may be a [`Session`](crate::Session), a [`Timer`](crate::Timer) or a reference to
/// either.
///
/// # Examples
///
/// ```
/// use block_timer::{Session, timed};
///
/// fn add(a: u32, b: u32) -> u32 {
///     a + b
/// }
///
/// let mut session = Session::new();
///
/// let sum = timed!(session, add(2, 3));
/// let text = timed!(session, String::from("block"));
/// session.pack("math");
///
/// assert_eq!(sum, 5);
/// assert_eq!(text, "block");
///
/// let block = session.block("math").unwrap();
/// assert_eq!(block.calls()[0].name(), "add");
/// assert_eq!(block.calls()[1].name(), "String::from");
/// ```
#[macro_export]
macro_rules! timed {
    ($timer:expr, $($function:ident)::+ ( $($argument:expr),* $(,)? )) => {
        $timer.record_as(
            $crate::__private::compact_label(::core::stringify!($($function)::+)),
            || $($function)::+($($argument),*),
        )
    };
}

#[doc(hidden)]
pub mod __private {
    /// Removes the whitespace `stringify!` may put between path segments.
    #[must_use]
    pub fn compact_label(source: &str) -> String {
        source.split_whitespace().collect()
    }
}
