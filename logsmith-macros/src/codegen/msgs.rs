// Centralized compile-time diagnostic strings for the #[loggable] codegen layer.

pub(super) const ERR_LOGGABLE_TARGET: &str =
    "#[loggable] can only be applied to structs, enums, unions, or inherent impl blocks of a named type";

pub(super) const DOC_STATIC_LOGGER: &str =
    "Shared logger of this type, built once on first use.";
pub(super) const DOC_INSTANCE_ACCESSOR: &str =
    "Instance access to the shared logger generated by #[loggable].";
