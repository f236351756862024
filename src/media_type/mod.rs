pub mod attr_source;
pub mod attr_value;
pub mod consts;
pub mod dump;
pub mod media_type_error;
pub mod names;
pub mod pack;
pub use attr_source::{AttributeSource, MediaTypeDesc};
pub use attr_value::AttrValue;
pub use media_type_error::DumpError;
