//! Common test utilities and helpers

/// Test data utilities
pub mod test_data {
    use harvest_flow::models::{Grade, Product};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// PNG signature followed by a few filler bytes
    pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    /// Create a test product
    pub fn create_test_product(id: u32, name: &str, category: &str, seller: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: 1.0,
            unit: "lb".to_string(),
            seller: seller.to_string(),
            location: "Testville".to_string(),
            rating: 4.5,
            stock: 10,
            grade: Grade::A,
            trending: false,
        }
    }

    /// Write `bytes` to a temporary file that lives as long as the handle
    pub fn create_temp_image(bytes: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("Failed to create temp image");
        file.write_all(bytes).expect("Failed to write temp image");
        file
    }

    /// Names of `products`, in order
    pub fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Terminal rendering helpers
pub mod render {
    use harvest_flow::ui::HarvestApp;
    use ratatui::{backend::TestBackend, Terminal};

    /// Draw `app` on a test terminal and return the screen as text lines
    pub fn render_app(app: &HarvestApp, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
        terminal.draw(|f| app.draw(f)).expect("Failed to draw");

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    /// True if any line of the screen contains `needle`
    pub fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}

/// Logging utilities for tests
pub mod logging {
    use std::sync::Once;
    use tracing::{debug, info};

    static INIT: Once = Once::new();

    /// Initialize test logging
    pub fn init_test_logging() {
        INIT.call_once(|| {
            // Only initialize if not already initialized
            let _ = tracing::subscriber::set_global_default(
                tracing_subscriber::fmt()
                    .with_env_filter("harvest_flow=debug,main=debug")
                    .with_test_writer()
                    .finish(),
            );
        });
    }

    /// Log test step
    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }

    /// Log test data
    pub fn log_test_data<T: std::fmt::Debug>(label: &str, data: &T) {
        debug!("📊 {}: {:?}", label, data);
    }
}
