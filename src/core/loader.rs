use crate::core::{parser, Course, DatasetSource, Result};

/// Runs the load sequence: fetch the raw text, parse it into the model,
/// sort the sections. Any failure aborts the whole load.
pub struct DatasetLoader<S: DatasetSource> {
    source: S,
}

impl<S: DatasetSource> DatasetLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> Result<Course> {
        tracing::info!("Fetching attendance dataset...");
        let raw = self.source.fetch_raw().await?;
        tracing::info!("Fetched {} bytes", raw.len());

        tracing::info!("Parsing dataset...");
        let mut course = parser::parse(&raw)?;

        // 解析完成後排序一次，之後不再變動
        course.sort_sections();
        tracing::info!(
            "Loaded {} sections, {} students",
            course.sections.len(),
            course.student_count()
        );

        Ok(course)
    }
}
