//! Reference scalar codecs
//!
//! [`FieldCodec`] mirrors the runtime's `FieldCodec<T>` for repeated scalar
//! fields: it is built from a tag, writes packed when the tag's wire type is
//! length-delimited, and reads both packed and unpacked occurrences so values
//! accumulate across every segment of the same field.

use crate::wire::{Tag, WireError, decode_tag, decode_varint, encode_varint, skip_field};
use bytes::{Buf, BufMut};
use fieldgen_core::{FieldType, WireType};
use std::marker::PhantomData;

/// One scalar wire representation
pub trait ScalarEncoding {
    /// Rust value type carried by this encoding
    type Value: Clone + PartialEq + std::fmt::Debug;

    /// Declared type this encoding implements
    const FIELD_TYPE: FieldType;

    fn encode(value: &Self::Value, buf: &mut impl BufMut);

    fn decode(buf: &mut impl Buf) -> Result<Self::Value, WireError>;

    fn encoded_len(value: &Self::Value) -> usize;

    /// Wire class of one unpacked value
    fn wire_type() -> WireType {
        Self::FIELD_TYPE.wire_type()
    }
}

/// Marker types, one per scalar declared type
pub mod scalar {
    use super::*;
    use crate::wire::{
        varint_size, zigzag_decode32, zigzag_decode64, zigzag_encode32, zigzag_encode64,
    };

    macro_rules! varint_encoding {
        ($name:ident, $ty:ty, $field_type:expr, $to:expr, $from:expr) => {
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ScalarEncoding for $name {
                type Value = $ty;
                const FIELD_TYPE: FieldType = $field_type;

                fn encode(value: &$ty, buf: &mut impl BufMut) {
                    encode_varint($to(*value), buf);
                }

                fn decode(buf: &mut impl Buf) -> Result<$ty, WireError> {
                    let raw = decode_varint(buf)?;
                    Ok($from(raw))
                }

                fn encoded_len(value: &$ty) -> usize {
                    varint_size($to(*value))
                }
            }
        };
    }

    macro_rules! fixed_encoding {
        ($name:ident, $ty:ty, $field_type:expr, $put:ident, $get:ident, $len:expr) => {
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ScalarEncoding for $name {
                type Value = $ty;
                const FIELD_TYPE: FieldType = $field_type;

                fn encode(value: &$ty, buf: &mut impl BufMut) {
                    buf.$put(*value);
                }

                fn decode(buf: &mut impl Buf) -> Result<$ty, WireError> {
                    if buf.remaining() < $len {
                        return Err(WireError::Truncated);
                    }
                    Ok(buf.$get())
                }

                fn encoded_len(_value: &$ty) -> usize {
                    $len
                }
            }
        };
    }

    // Negative int32 values are sign-extended to ten bytes, like the runtime does.
    varint_encoding!(Int32, i32, FieldType::Int32, |v: i32| i64::from(v) as u64, |raw: u64| raw as i32);
    varint_encoding!(Int64, i64, FieldType::Int64, |v: i64| v as u64, |raw: u64| raw as i64);
    varint_encoding!(UInt32, u32, FieldType::UInt32, u64::from, |raw: u64| raw as u32);
    varint_encoding!(UInt64, u64, FieldType::UInt64, |v: u64| v, |raw: u64| raw);
    varint_encoding!(
        SInt32,
        i32,
        FieldType::SInt32,
        |v: i32| u64::from(zigzag_encode32(v)),
        |raw: u64| zigzag_decode32(raw as u32)
    );
    varint_encoding!(SInt64, i64, FieldType::SInt64, zigzag_encode64, zigzag_decode64);
    varint_encoding!(Bool, bool, FieldType::Bool, u64::from, |raw: u64| raw != 0);
    varint_encoding!(Enum, i32, FieldType::Enum, |v: i32| i64::from(v) as u64, |raw: u64| raw as i32);

    fixed_encoding!(Fixed32, u32, FieldType::Fixed32, put_u32_le, get_u32_le, 4);
    fixed_encoding!(Fixed64, u64, FieldType::Fixed64, put_u64_le, get_u64_le, 8);
    fixed_encoding!(SFixed32, i32, FieldType::SFixed32, put_i32_le, get_i32_le, 4);
    fixed_encoding!(SFixed64, i64, FieldType::SFixed64, put_i64_le, get_i64_le, 8);
    fixed_encoding!(Float, f32, FieldType::Float, put_f32_le, get_f32_le, 4);
    fixed_encoding!(Double, f64, FieldType::Double, put_f64_le, get_f64_le, 8);
}

/// Codec for one repeated scalar field, keyed by its tag
#[derive(Debug, Clone, Copy)]
pub struct FieldCodec<E: ScalarEncoding> {
    tag: Tag,
    _encoding: PhantomData<E>,
}

impl<E: ScalarEncoding> FieldCodec<E> {
    /// Build a codec; a length-delimited tag on a packable type means packed
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            _encoding: PhantomData,
        }
    }

    /// Codec for field `number`, packed or not
    pub fn for_field(number: u32, packed: bool) -> Result<Self, WireError> {
        let wire_type = if packed && E::FIELD_TYPE.is_packable() {
            WireType::LengthDelimited
        } else {
            E::wire_type()
        };
        Ok(Self::new(Tag::new(number, wire_type)?))
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_packed(&self) -> bool {
        self.tag.wire_type() == WireType::LengthDelimited && E::FIELD_TYPE.is_packable()
    }

    fn payload_len(values: &[E::Value]) -> usize {
        values.iter().map(E::encoded_len).sum()
    }

    /// Write every value; nothing at all for an empty sequence
    pub fn write_to(&self, values: &[E::Value], buf: &mut impl BufMut) {
        if values.is_empty() {
            return;
        }
        if self.is_packed() {
            self.tag.encode(buf);
            encode_varint(Self::payload_len(values) as u64, buf);
            for value in values {
                E::encode(value, buf);
            }
        } else {
            for value in values {
                self.tag.encode(buf);
                E::encode(value, buf);
            }
        }
    }

    /// Exact number of bytes [`FieldCodec::write_to`] produces
    pub fn calculate_size(&self, values: &[E::Value]) -> usize {
        if values.is_empty() {
            return 0;
        }
        let payload = Self::payload_len(values);
        if self.is_packed() {
            self.tag.size() + crate::wire::varint_size(payload as u64) + payload
        } else {
            self.tag.size() * values.len() + payload
        }
    }

    /// Append the value(s) of one occurrence whose tag has already been read.
    ///
    /// Packed and unpacked occurrences are both accepted regardless of how
    /// this codec writes.
    pub fn add_entries_from(
        &self,
        values: &mut Vec<E::Value>,
        wire_type: WireType,
        buf: &mut impl Buf,
    ) -> Result<(), WireError> {
        if wire_type == WireType::LengthDelimited && E::FIELD_TYPE.is_packable() {
            let len = usize::try_from(decode_varint(buf)?).map_err(|_| WireError::Truncated)?;
            if buf.remaining() < len {
                return Err(WireError::Truncated);
            }
            let mut payload = buf.copy_to_bytes(len);
            while payload.has_remaining() {
                values.push(E::decode(&mut payload)?);
            }
            return Ok(());
        }
        if wire_type != E::wire_type() {
            return Err(WireError::UnexpectedWireType {
                number: self.tag.number(),
                actual: wire_type,
            });
        }
        values.push(E::decode(buf)?);
        Ok(())
    }

    /// Read a whole message body, collecting this field and skipping others
    pub fn read_all(&self, mut input: &[u8]) -> Result<Vec<E::Value>, WireError> {
        let mut values = Vec::new();
        while input.has_remaining() {
            let tag = decode_tag(&mut input)?;
            if tag.number() == self.tag.number() {
                self.add_entries_from(&mut values, tag.wire_type(), &mut input)?;
            } else {
                skip_field(tag, &mut input)?;
            }
        }
        Ok(values)
    }

    /// Encode one value with its own tag, as an unpacked occurrence
    pub fn write_single(&self, value: &E::Value, buf: &mut impl BufMut) -> Result<(), WireError> {
        let tag = Tag::new(self.tag.number(), E::wire_type())?;
        tag.encode(buf);
        E::encode(value, buf);
        Ok(())
    }
}
