use std::borrow::Cow;
use std::fmt;

use crate::frame::ColumnKind;

/// Storage type a decoder declares for a variable and stamps on every cell
/// it emits for that variable.
///
/// The seven decoder types collapse onto three column kinds: the three text
/// shapes become [`ColumnKind::Text`], the two integer widths become
/// [`ColumnKind::Integer`], and the two float widths become
/// [`ColumnKind::Real`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Text stored out of line by the decoder (shared string storage).
    LongText,
    /// Inline text.
    Text,
    /// Single character.
    Char,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 32-bit floating point number.
    Float,
    /// 64-bit floating point number.
    Double,
}

impl ElementType {
    /// Column kind a variable of this element type is stored as.
    #[must_use]
    pub const fn column_kind(self) -> ColumnKind {
        match self {
            Self::LongText | Self::Text | Self::Char => ColumnKind::Text,
            Self::Int16 | Self::Int32 => ColumnKind::Integer,
            Self::Float | Self::Double => ColumnKind::Real,
        }
    }
}

/// A single cell datum pushed by a decoder.
///
/// Text borrows from the decoder's buffers where possible; [`Value::into_owned`]
/// detaches a value from those buffers. Missing cells carry the element type
/// of their variable so the receiver can still route them to the right column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// UTF-8 text, inline or decoder-interned.
    Str(Cow<'a, str>),
    /// Single character.
    Char(char),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 32-bit floating point number.
    Float(f32),
    /// 64-bit floating point number.
    Double(f64),
    /// Missing value for a variable of the given element type.
    Missing(ElementType),
}

impl Value<'_> {
    #[must_use]
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::Char(c) => Value::Char(c),
            Value::Int16(v) => Value::Int16(v),
            Value::Int32(v) => Value::Int32(v),
            Value::Float(v) => Value::Float(v),
            Value::Double(v) => Value::Double(v),
            Value::Missing(element_type) => Value::Missing(element_type),
        }
    }

    /// Whether the cell is missing.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// Element type of the cell as stamped by the decoder.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Str(_) => ElementType::Text,
            Self::Char(_) => ElementType::Char,
            Self::Int16(_) => ElementType::Int16,
            Self::Int32(_) => ElementType::Int32,
            Self::Float(_) => ElementType::Float,
            Self::Double(_) => ElementType::Double,
            Self::Missing(element_type) => *element_type,
        }
    }

    /// Column kind this cell belongs in.
    #[must_use]
    pub const fn column_kind(&self) -> ColumnKind {
        self.element_type().column_kind()
    }

    /// Borrows the text payload when the cell is textual.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int16(&self) -> Option<i16> {
        match self {
            Self::Int16(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer payload widened to `i32`, when the cell is integral.
    #[must_use]
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Self::Int16(v) => Some(i32::from(*v)),
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Float payload widened to `f64`, when the cell is floating point.
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    /// Stringification used when a value keys a label dictionary.
    ///
    /// Integral doubles render without a fractional part (`1.0` is `1`),
    /// matching how the label sources write their keys. Missing renders
    /// as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Missing(_) => Ok(()),
        }
    }
}
