//! Internal diagnostic logging for boxtree.
//!
//! Disabled by default. Set `DEBUG_BOXTREE` to a truthy value to enable a
//! `tracing_subscriber::fmt` subscriber at `DEBUG` level. This is purely
//! diagnostic: nothing in the public contract depends on it.

#[cfg(feature = "setup_tracing")]
#[ctor::ctor]
fn set_debug_level() {
    use tracing::Level;

    if std::env::var("DEBUG_BOXTREE").map_or(true, |v| v == "0" || v == "false" || v.is_empty()) {
        // Disable logging.
    } else {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }
}
