// Warning behaviour of the orientation mapping. Kept in its own test binary
// because it installs a global logger.

use level_core::{screen_tilt, OrientationSample, ScreenOrientation};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicUsize, Ordering};

struct WarnCounter;

static WARNINGS: AtomicUsize = AtomicUsize::new(0);
static LOGGER: WarnCounter = WarnCounter;

impl Log for WarnCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn {
            WARNINGS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

#[test]
fn unknown_orientation_warns_once() {
    log::set_logger(&LOGGER).expect("logger installed once");
    log::set_max_level(LevelFilter::Warn);

    let s = OrientationSample::new(0.0, 10.0, 20.0);
    for _ in 0..30 {
        assert_eq!(screen_tilt(&s, ScreenOrientation::Unknown), (-20.0, 10.0));
    }
    assert_eq!(screen_tilt(&s, ScreenOrientation::LandscapePrimary), (-10.0, -20.0));
    assert_eq!(WARNINGS.load(Ordering::SeqCst), 1);
}
