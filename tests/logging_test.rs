use recently_viewed::component::{CarouselState, RecentlyViewedCarousel};
use recently_viewed::config::CarouselConfig;
use recently_viewed::mock::{MockProductSource, MockSliderFactory};
use recently_viewed::model::Product;
use recently_viewed::storage::MemoryStore;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

/// Formatted log output shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's events into a buffer until the guard is dropped.
fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn carousel(store: MemoryStore, products: &MockProductSource) -> RecentlyViewedCarousel {
    RecentlyViewedCarousel::new(CarouselConfig::default(), Arc::new(store), products.source())
}

#[tokio::test]
async fn test_missing_slider_library_logs_warning() {
    let (logs, _guard) = capture_logs();
    let mut products = MockProductSource::new();
    products.expect_fetch("a").return_product(Product::new("a", "A"));

    let activation = carousel(MemoryStore::with_handles(["a"]), &products)
        .activate()
        .await;

    assert_eq!(activation.state(), CarouselState::Populated { slides: 1 });
    assert!(activation.slider().is_none());
    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("Slider library is not loaded."), "{output}");
}

#[tokio::test]
async fn test_injected_slider_library_logs_no_warning() {
    let (logs, _guard) = capture_logs();
    let mut products = MockProductSource::new();
    products.expect_fetch("a").return_product(Product::new("a", "A"));

    let activation = carousel(MemoryStore::with_handles(["a"]), &products)
        .with_slider_factory(Arc::new(MockSliderFactory::new()))
        .activate()
        .await;

    assert!(activation.slider().is_some());
    assert!(!logs.contents().contains("Slider library is not loaded."));
}

#[tokio::test]
async fn test_failed_fan_out_logs_error() {
    let (logs, _guard) = capture_logs();
    let mut products = MockProductSource::new();
    products.expect_fetch("a").return_product(Product::new("a", "A"));
    products.expect_fetch("b").panic();

    let activation = carousel(MemoryStore::with_handles(["a", "b"]), &products)
        .activate()
        .await;

    assert_eq!(activation.state(), CarouselState::Error);
    let output = logs.contents();
    assert!(output.contains("ERROR"), "{output}");
    assert!(output.contains("Error fetching recently viewed products"), "{output}");
}

#[tokio::test]
async fn test_single_failed_fetch_is_not_an_error() {
    let (logs, _guard) = capture_logs();
    let mut products = MockProductSource::new();
    products.expect_fetch("a").return_product(Product::new("a", "A"));
    products.expect_fetch("b").return_absent();

    let activation = carousel(MemoryStore::with_handles(["a", "b"]), &products)
        .activate()
        .await;

    assert_eq!(activation.state(), CarouselState::Populated { slides: 1 });
    assert!(!logs.contents().contains("ERROR"));
}
