// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod html;
pub mod navigation;
pub mod submission;

pub use clock::{FixedClock, SystemClock};
pub use html::{render_page, HtmlFieldRenderer};
pub use navigation::{LoggingNavigator, RecordingNavigator};
pub use submission::{DryRunSink, GoogleFormsSink};
