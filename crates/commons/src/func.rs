/**
 * @file func.rs
 * @author Krisna Pranav
 * @brief commons[func]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

/// Turns a two argument function into a chain of one argument functions.
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> C> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// `f1` then `f2`.
pub fn pipe2<T1, T2, T3, F1, F2>(f1: F1, f2: F2) -> impl Fn(T1) -> T3
where
    F1: Fn(T1) -> T2,
    F2: Fn(T2) -> T3,
{
    move |t1: T1| f2(f1(t1))
}

pub fn pipe3<T1, T2, T3, T4, F1, F2, F3>(f1: F1, f2: F2, f3: F3) -> impl Fn(T1) -> T4
where
    F1: Fn(T1) -> T2,
    F2: Fn(T2) -> T3,
    F3: Fn(T3) -> T4,
{
    move |t1: T1| f3(f2(f1(t1)))
}

/// `f` after `g`, i.e. `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    pipe2(g, f)
}

#[inline]
pub fn identity<T>(x: T) -> T {
    x
}

/// Moves `x` to the heap.
#[inline]
pub fn boxed<T>(x: T) -> Box<T> {
    Box::new(x)
}
