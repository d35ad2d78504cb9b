//! Renderer trait shared by the chart types.

use async_trait::async_trait;
use std::path::Path;
use steamstats_common::Result;

/// A chart type that can draw its data to an image file.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// The chart data this renderer draws.
    type Data: Send + Sync;

    /// Draws `data` to `path`.
    async fn render_to_file(&self, data: &Self::Data, path: &Path) -> Result<()>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}
