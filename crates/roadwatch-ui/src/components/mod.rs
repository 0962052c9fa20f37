pub(crate) mod atoms;
pub(crate) mod connectivity;
pub(crate) mod toast;
