use std::iter::FusedIterator;
use std::ops::Range;

use super::expr::Expression;

/// Iterator over the lazily evaluated elements of an expression
///
/// Produced by [Expression::iter]. Each element is computed on demand by
/// [Expression::at]; no values are buffered.
///
#[derive(Debug, Clone)]
pub struct Elements<'e, E> {
    expr: &'e E,
    indices: Range<usize>,
}

impl<'e, E: Expression> Elements<'e, E> {
    pub(crate) fn new(expr: &'e E) -> Self {
        Elements {
            expr,
            indices: 0..expr.size(),
        }
    }
}

impl<'e, E: Expression> Iterator for Elements<'e, E> {
    type Item = E::Elem;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|i| self.expr.at(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.indices.nth(n).map(|i| self.expr.at(i))
    }
}

impl<'e, E: Expression> DoubleEndedIterator for Elements<'e, E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(|i| self.expr.at(i))
    }
}

impl<'e, E: Expression> ExactSizeIterator for Elements<'e, E> {}

impl<'e, E: Expression> FusedIterator for Elements<'e, E> {}
