// SPDX-License-Identifier: MIT

//! Iteration helpers
//!
//! `each`, `ueach` and `print_each` run for their side effects; `flatten`,
//! `zip_with_map` and `reduce_right` build new values.

use std::fmt::Display;
use std::io::{self, Write};

/// Apply `accept` to every item
pub fn each<I, F>(mut accept: F, items: I)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    for item in items {
        accept(item);
    }
}

/// Unpack each pair before applying `accept`
pub fn ueach<A, B, I, F>(mut accept: F, items: I)
where
    I: IntoIterator<Item = (A, B)>,
    F: FnMut(A, B),
{
    for (a, b) in items {
        accept(a, b);
    }
}

/// Write each item on its own line after `prefix`.
///
/// `{i}` in the prefix is replaced with the item's zero-based index.
pub fn write_each<W, I>(out: &mut W, items: I, prefix: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let indexed = prefix.contains("{i}");
    for (i, item) in items.into_iter().enumerate() {
        if indexed {
            writeln!(out, "{}{}", prefix.replace("{i}", &i.to_string()), item)?;
        } else {
            writeln!(out, "{}{}", prefix, item)?;
        }
    }
    Ok(())
}

/// `write_each` to stdout
pub fn print_each<I>(items: I, prefix: &str) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_each(&mut out, items, prefix)
}

/// Flatten one level of nesting, keeping order
pub fn flatten<T, I>(xss: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    xss.into_iter().flatten().collect()
}

/// Pair each item with its image under `mapper`
pub fn zip_with_map<T, U, I, F>(mut mapper: F, items: I) -> Vec<(T, U)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> U,
{
    items
        .into_iter()
        .map(|item| {
            let mapped = mapper(&item);
            (item, mapped)
        })
        .collect()
}

/// Right-associative fold: `fold(x1, fold(x2, ... fold(xn, init)))`
pub fn reduce_right<T, A, I, F>(mut fold: F, items: I, init: A) -> A
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(T, A) -> A,
{
    items.into_iter().rev().fold(init, |acc, item| fold(item, acc))
}
