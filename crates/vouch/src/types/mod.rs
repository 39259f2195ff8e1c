mod calendar;
mod describe;
mod parameter;
mod tag;
mod value;

pub use calendar::CalendarField;
pub(crate) use calendar::Shift;
pub use describe::{Describe, TypeName};
pub use parameter::Parameter;
pub use tag::TypeTag;
pub use value::{Temporal, Value};
