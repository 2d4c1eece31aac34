// SPDX-License-Identifier: MIT

//! Currying for two- and three-argument functions

use std::rc::Rc;

/// A boxed one-argument function
pub type Curried<'a, A, B> = Box<dyn Fn(A) -> B + 'a>;

/// Split a binary function into a chain of unary ones.
///
/// ```
/// use exos_rs::fun::curry;
///
/// let add = curry(|x: i32, y: i32| x + y);
/// let add3 = add(3);
/// assert_eq!(add3(5), 8);
/// ```
pub fn curry<'a, A, B, C, F>(f: F) -> impl Fn(A) -> Curried<'a, B, C>
where
    A: Clone + 'a,
    F: Fn(A, B) -> C + 'a,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<'a, B, C> {
        let f = Rc::clone(&f);
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Three-argument version of `curry`
pub fn curry3<'a, A, B, C, D, F>(f: F) -> impl Fn(A) -> Curried<'a, B, Curried<'a, C, D>>
where
    A: Clone + 'a,
    B: Clone + 'a,
    F: Fn(A, B, C) -> D + 'a,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<'a, B, Curried<'a, C, D>> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| -> Curried<'a, C, D> {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c| f(a.clone(), b.clone(), c))
        })
    }
}

/// Undo `curry`: turn a chain of unary functions back into a binary one
pub fn uncurry<A, B, C, G, F>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |a, b| f(a)(b)
}
