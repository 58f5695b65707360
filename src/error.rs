use core::fmt;

#[macro_export]
macro_rules! dimension_err {
    ( $l:expr, $r:expr ) => {
        $crate::error::Error::DimensionMismatch($l, $r).into()
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    // shape errors
    DimensionMismatch(usize, usize),

    // storage errors
    AllocationFailure(usize),
    IndexOutOfRange(usize, usize),

    // random fill
    InvalidDistribution(String),

    // rendering
    WriteFailure,
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::DimensionMismatch(l, r) => {
                format!("dimension mismatch, left operand has length {l} but right has length {r}")
            }
            Error::AllocationFailure(n) => {
                format!("unable to allocate storage for {n} elements")
            }
            Error::IndexOutOfRange(i, n) => {
                format!("index {i} is out of range for a vector of length {n}")
            }
            Error::InvalidDistribution(s) => format!("invalid distribution parameters: {s}"),
            Error::WriteFailure => "unable to write rendered elements".to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl std::error::Error for Error {}

impl<T> From<Error> for Result<T, Error> {
    fn from(val: Error) -> Self {
        Err(val)
    }
}
