//! Tracing utilities for entity registration observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event for an accepted entity with its column and path counts.
///
/// ```ignore
/// ormshape_trace_register!(entity.name(), entity.columns.len(), shapes.all_paths.len());
/// ```
#[macro_export]
macro_rules! ormshape_trace_register {
    ($entity:expr, $columns:expr, $paths:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            entity = %$entity,
            columns = $columns,
            paths = $paths,
            "ormshape.register"
        );
    };
}

/// Emit a warn-level tracing event for a rejected descriptor.
///
/// ```ignore
/// ormshape_trace_reject!(entity.name(), &err);
/// ```
#[macro_export]
macro_rules! ormshape_trace_reject {
    ($entity:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(entity = %$entity, error = %$error, "ormshape.reject");
    };
}
