pub mod builder;
pub mod decoder;
pub mod driver;
pub mod error;
pub mod events;
pub mod frame;
pub mod interrupt;
pub mod logger;
pub mod value;

pub use crate::error::{Error, Result};
pub use builder::FrameBuilder;
pub use decoder::{DecodeError, DecodeResult, Decoder, DecoderLibrary};
pub use driver::{
    ParseOptions, parse_dta, parse_dta_with, parse_por, parse_por_with, parse_sas, parse_sas_with,
    parse_sav, parse_sav_with, parse_with, parse_with_options,
};
pub use events::{EventSink, Variable};
pub use frame::{
    ATTR_CLASS, ATTR_LABEL, ATTR_LABELS, ATTR_NAMES, ATTR_ROW_NAMES, AttrValue, Attributes, Cells,
    Column, ColumnKind, FRAME_CLASS, Frame, LabelRegistry, LabelSet, MISSING_INT, ValueLabel,
};
pub use interrupt::Interrupt;
pub use value::{ElementType, Value};
