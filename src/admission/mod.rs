//! What an API server does to a pod on create: defaulting, conversion to the
//! internal version, and validation.

pub mod convert;
pub mod defaults;
pub mod naming;
pub mod validation;

pub use self::convert::convert_pod;
pub use self::defaults::set_defaults;
pub use self::validation::validate_pod_create;
