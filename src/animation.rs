pub(crate) mod ease;
pub(crate) mod track;
pub(crate) mod unit;
pub(crate) mod value;
