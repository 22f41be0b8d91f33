//! fieldgen-wire - Wire tag arithmetic and reference scalar codecs
//!
//! This crate provides:
//! - [`Tag`] and the varint helpers the generator uses to render tag literals
//! - [`ScalarEncoding`] implementations for every scalar wire representation
//! - [`FieldCodec`], a repeated-field codec with the same packed/unpacked
//!   behavior as the runtime the generated code calls into

mod codec;
mod wire;

pub use codec::{FieldCodec, ScalarEncoding, scalar};
pub use wire::{
    Tag, WireError, decode_tag, decode_varint, encode_varint, skip_field, varint_bytes,
    varint_size, zigzag_decode32, zigzag_decode64, zigzag_encode32, zigzag_encode64,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{FieldCodec, ScalarEncoding, Tag, WireError, scalar};
}
