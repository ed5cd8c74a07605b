use strum::EnumIs;
use thiserror::Error;

use crate::value::Shape;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum Error {
    /// A value was unwrapped through the entry point of another role.
    ///
    /// Encodings are not self-describing: the caller must know whether it holds a selector or a
    /// numeral before choosing the payload to apply it to.
    #[error(
        "Cannot recover a {expected} from a value of shape {found}. Apply the value with the payload matching its role instead."
    )]
    ShapeMismatch { expected: Shape, found: Shape },
}

pub type Result<T> = std::result::Result<T, Error>;
