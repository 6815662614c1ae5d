use crate::domain::model::{RestaurantRecord, TransformResult};
use crate::domain::store::SeedReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// HTTP(S) URL or local path of the restaurant JSON feed.
    fn source(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Keep restaurants whose opening hours fail to parse (closed every day)
    /// instead of aborting the whole load.
    fn skip_invalid_hours(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RestaurantRecord>>;
    async fn transform(&self, data: Vec<RestaurantRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<SeedReport>;
}
