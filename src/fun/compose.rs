// SPDX-License-Identifier: MIT

//! Argument reordering and function composition

/// Returns the value unchanged. The unit of `compose` and `pipe`.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swap the arguments of a binary function: `flip(f)(a, b) == f(b, a)`
#[inline]
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Left-to-right composition, Unix style: `pipe(f, g)(x) == g(f(x))`
#[inline]
pub fn pipe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// A boxed function from `T` to `T`
pub type Endo<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Compose any number of same-typed functions, applying the last one first.
/// An empty list is the identity.
pub fn compose_all<'a, T: 'a>(fns: Vec<Endo<'a, T>>) -> Endo<'a, T> {
    let init: Endo<'a, T> = Box::new(identity::<T>);
    crate::iter::reduce_right(
        |f: Endo<'a, T>, acc: Endo<'a, T>| -> Endo<'a, T> { Box::new(move |x| f(acc(x))) },
        fns,
        init,
    )
}

/// Chain any number of same-typed functions, applying the first one first.
/// An empty list is the identity.
pub fn pipe_all<'a, T: 'a>(fns: Vec<Endo<'a, T>>) -> Endo<'a, T> {
    let init: Endo<'a, T> = Box::new(identity::<T>);
    fns.into_iter()
        .fold(init, |acc, f| -> Endo<'a, T> { Box::new(move |x| f(acc(x))) })
}

/// Variadic `compose` for functions of differing types
///
/// ```
/// use exos_rs::compose;
///
/// let shout = compose!(
///     |s: String| s + "!",
///     |s: String| s.to_uppercase(),
///     |s: &str| s.trim().to_string()
/// );
/// assert_eq!(shout("  hey "), "HEY!");
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr) => { $f };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::fun::compose($f, $crate::compose!($($rest),+))
    };
}

/// Variadic `pipe` for functions of differing types
///
/// ```
/// use exos_rs::pipe;
///
/// let f = pipe!(|x: i32| x + 1, |x: i32| x * 10, |x: i32| x.to_string());
/// assert_eq!(f(4), "50");
/// ```
#[macro_export]
macro_rules! pipe {
    ($f:expr) => { $f };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::fun::pipe($f, $crate::pipe!($($rest),+))
    };
}
