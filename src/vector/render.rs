use std::fmt;

use super::expr::Expression;
use crate::error::Error;

/// Render an Expression
///
/// Writes each element of the expression to `sink`, separated by a single
/// space, using the [fmt::Display] formatting of the promoted element type.
/// Nothing is written before the first or after the last element.
///
/// An expression with mismatched operand sizes is reported as
/// [Error::DimensionMismatch] before anything is written. A failing sink is
/// reported as [Error::WriteFailure].
///
/// ```
/// use exprvec::{vector, Vector};
/// use exprvec::vector::render;
///
/// let a: Vector<i32> = vector![1, 2, 3];
/// let mut out = String::new();
/// render(&(&a * 0.5_f64), &mut out)?;
/// assert_eq!(out, "0.5 1 1.5");
/// # Ok::<(), exprvec::Error>(())
/// ```
///
pub fn render<E, W>(expr: &E, sink: &mut W) -> Result<(), Error>
where
    E: Expression,
    W: fmt::Write + ?Sized,
{
    if let Err(e) = expr.validate() {
        log::debug!("unable to render expression: {e}");
        return Err(e);
    }

    write_elements(expr, sink).map_err(|_| Error::WriteFailure)
}

/// Render an expression into a new [String]
pub fn to_text<E: Expression>(expr: &E) -> Result<String, Error> {
    let mut out = String::new();
    render(expr, &mut out)?;
    Ok(out)
}

/// Display an expression, writing the error in place of the elements when
/// its operand sizes disagree
pub(crate) fn display<E: Expression>(expr: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr.validate() {
        Ok(()) => write_elements(expr, f),
        Err(e) => write!(f, "{e}"),
    }
}

fn write_elements<E, W>(expr: &E, sink: &mut W) -> fmt::Result
where
    E: Expression,
    W: fmt::Write + ?Sized,
{
    for i in 0..expr.size() {
        if i > 0 {
            sink.write_char(' ')?;
        }
        write!(sink, "{}", expr.at(i))?;
    }

    Ok(())
}
