//! Tags, varints and zigzag encoding

use bytes::{Buf, BufMut};
use fieldgen_core::{FieldSchema, MAX_FIELD_NUMBER, WireType};
use thiserror::Error;

/// Errors raised while reading wire data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("input ended inside a value")]
    Truncated,

    #[error("varint longer than 10 bytes")]
    VarintOverflow,

    #[error("invalid wire type {0}")]
    InvalidWireType(u32),

    #[error("invalid field number {0}")]
    InvalidFieldNumber(i64),

    #[error("unexpected wire type {actual:?} for field {number}")]
    UnexpectedWireType { number: u32, actual: WireType },

    #[error("end group tag for field {0} without matching start")]
    UnmatchedEndGroup(u32),
}

/// A field number paired with a wire type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    number: u32,
    wire_type: WireType,
}

impl Tag {
    pub fn new(number: u32, wire_type: WireType) -> Result<Self, WireError> {
        if number == 0 || number > MAX_FIELD_NUMBER as u32 {
            return Err(WireError::InvalidFieldNumber(i64::from(number)));
        }
        Ok(Self { number, wire_type })
    }

    /// Tag written before each occurrence of `field` on the wire
    pub fn for_field(field: &FieldSchema) -> Result<Self, WireError> {
        let number = u32::try_from(field.number)
            .map_err(|_| WireError::InvalidFieldNumber(field.number.into()))?;
        Self::new(number, field.wire_type())
    }

    /// Decode a tag from its integer form
    pub fn from_value(value: u32) -> Result<Self, WireError> {
        let wire_type =
            WireType::from_code(value & 0x7).ok_or(WireError::InvalidWireType(value & 0x7))?;
        Self::new(value >> 3, wire_type)
    }

    pub fn number(self) -> u32 {
        self.number
    }

    pub fn wire_type(self) -> WireType {
        self.wire_type
    }

    /// `(number << 3) | wire_type`
    pub fn value(self) -> u32 {
        (self.number << 3) | self.wire_type.code()
    }

    /// Varint encoding of [`Tag::value`]
    pub fn bytes(self) -> Vec<u8> {
        varint_bytes(u64::from(self.value()))
    }

    /// Encoded length in bytes; independent of the wire type
    pub fn size(self) -> usize {
        varint_size(u64::from(self.value()))
    }

    /// The matching end-group tag
    pub fn end_group(self) -> Tag {
        Tag {
            number: self.number,
            wire_type: WireType::EndGroup,
        }
    }

    pub fn encode(self, buf: &mut impl BufMut) {
        encode_varint(u64::from(self.value()), buf);
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Write `value` as a base-128 varint
pub fn encode_varint(mut value: u64, buf: &mut impl BufMut) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Varint encoding of `value` as a byte vector
pub fn varint_bytes(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(varint_size(value));
    encode_varint(value, &mut out);
    out
}

/// Number of bytes [`encode_varint`] writes for `value`
pub fn varint_size(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Read a base-128 varint
pub fn decode_varint(buf: &mut impl Buf) -> Result<u64, WireError> {
    let mut value = 0u64;
    for shift in (0..70).step_by(7) {
        if !buf.has_remaining() {
            return Err(WireError::Truncated);
        }
        let byte = buf.get_u8();
        if shift == 63 && byte > 1 {
            return Err(WireError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(WireError::VarintOverflow)
}

/// Read the next tag
pub fn decode_tag(buf: &mut impl Buf) -> Result<Tag, WireError> {
    let raw = decode_varint(buf)?;
    let value = u32::try_from(raw).map_err(|_| WireError::InvalidFieldNumber(raw as i64))?;
    Tag::from_value(value)
}

/// Skip the value that follows `tag`
pub fn skip_field(tag: Tag, buf: &mut impl Buf) -> Result<(), WireError> {
    match tag.wire_type() {
        WireType::Varint => decode_varint(buf).map(|_| ()),
        WireType::Fixed64 => advance(buf, 8),
        WireType::Fixed32 => advance(buf, 4),
        WireType::LengthDelimited => {
            let len = decode_varint(buf)?;
            advance(buf, usize::try_from(len).map_err(|_| WireError::Truncated)?)
        }
        WireType::StartGroup => loop {
            let inner = decode_tag(buf)?;
            if inner.wire_type() == WireType::EndGroup {
                if inner.number() == tag.number() {
                    return Ok(());
                }
                return Err(WireError::UnmatchedEndGroup(inner.number()));
            }
            skip_field(inner, buf)?;
        },
        WireType::EndGroup => Err(WireError::UnmatchedEndGroup(tag.number())),
    }
}

pub(crate) fn advance(buf: &mut impl Buf, len: usize) -> Result<(), WireError> {
    if buf.remaining() < len {
        return Err(WireError::Truncated);
    }
    buf.advance(len);
    Ok(())
}

pub fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

pub fn zigzag_decode32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

pub fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
