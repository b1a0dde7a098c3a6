pub(crate) mod inputs;
pub(crate) mod number;
pub(crate) mod rules;
pub(crate) mod validate;
