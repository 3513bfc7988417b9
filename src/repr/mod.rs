/*!
# Graph Representations

Currently the only representation is the dense [`MatrixGraph`]. All algorithms access it through
the traits in [`crate::ops`].
*/

use crate::{error::*, ops::*, *};

mod matrix;

pub use matrix::*;
