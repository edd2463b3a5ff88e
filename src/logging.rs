/// ==============================================================================================
/// ========================================= Logging =============================================
/// ==============================================================================================

use once_cell::sync::OnceCell;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Install the process-wide logger backend. Safe to call repeatedly (from multiple
/// `#[test]`s or example entry points); only the first call takes effect.
pub fn init_logging() {
    LOGGER_INIT.get_or_init(|| {
        logger_bro::init();
    });
}
